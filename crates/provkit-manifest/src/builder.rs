//! # Manifest Builder
//!
//! A per-session accumulator for manifest fields. Configuration methods
//! consume and return the builder and never fail; validation is deferred
//! to the strict parsing boundary or to the engine at sign time.
//!
//! ## Assembly
//!
//! [`ManifestBuilder::build_document`] lays the document out in the fixed
//! key order. If any action was added, a single `c2pa.actions` assertion
//! is synthesized first; user assertions follow in insertion order.

use provkit_core::{AssertionPayload, PayloadMap};
use serde_json::{Map, Value};

use crate::model::{
    Action, ClaimGenerator, Ingredient, ManifestAssertion, ManifestDocument, Thumbnail,
    ACTIONS_LABEL, CLAIM_VERSION,
};

/// Fluent accumulator for a [`ManifestDocument`].
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    claim_generator: Option<ClaimGenerator>,
    format: Option<String>,
    title: Option<String>,
    document_id: Option<String>,
    producer: Option<String>,
    ta_url: Option<String>,
    thumbnail: Option<Thumbnail>,
    ingredients: Vec<Ingredient>,
    actions: Vec<Action>,
    assertions: PayloadMap,
}

impl ManifestBuilder {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the claim generator from name and version.
    pub fn claim_generator(self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.claim_generator_info(ClaimGenerator::new(name, version))
    }

    /// Set the claim generator record, including optional icon and OS.
    pub fn claim_generator_info(mut self, generator: ClaimGenerator) -> Self {
        self.claim_generator = Some(generator);
        self
    }

    /// Set the asset MIME type.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the asset title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document identifier.
    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    /// Set the producer.
    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self
    }

    /// Set the timestamp authority URL.
    pub fn timestamp_authority_url(mut self, ta_url: impl Into<String>) -> Self {
        self.ta_url = Some(ta_url.into());
        self
    }

    /// Set the asset thumbnail, replacing any earlier one.
    pub fn thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Append an ingredient.
    pub fn add_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Append several ingredients.
    pub fn add_ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Append an action to the synthesized actions assertion.
    pub fn add_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Attach an assertion payload under `label`. A repeated label replaces
    /// the earlier payload and keeps its position.
    pub fn add_assertion(
        mut self,
        label: impl Into<String>,
        data: impl Into<AssertionPayload>,
    ) -> Self {
        let label = label.into();
        if self.assertions.insert(label.clone(), data).is_some() {
            tracing::debug!(%label, "assertion label replaced");
        }
        self
    }

    /// Actions added so far.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Ingredients added so far.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// User assertions added so far.
    pub fn assertions(&self) -> &PayloadMap {
        &self.assertions
    }

    /// Assemble the document.
    pub fn build_document(&self) -> ManifestDocument {
        let mut assertions = Vec::with_capacity(self.assertions.len() + 1);
        if !self.actions.is_empty() {
            let mut data = Map::new();
            data.insert(
                "actions".into(),
                Value::Array(self.actions.iter().map(Action::to_json).collect()),
            );
            assertions.push(ManifestAssertion {
                label: ACTIONS_LABEL.to_string(),
                data: Value::Object(data),
            });
        }
        assertions.extend(self.assertions.iter().map(|(label, payload)| ManifestAssertion {
            label: label.to_string(),
            data: payload.to_json(),
        }));

        tracing::debug!(
            ingredients = self.ingredients.len(),
            actions = self.actions.len(),
            assertions = assertions.len(),
            "manifest assembled"
        );

        ManifestDocument {
            claim_version: CLAIM_VERSION,
            ta_url: self.ta_url.clone(),
            format: self.format.clone(),
            title: self.title.clone(),
            document_id: self.document_id.clone(),
            producer: self.producer.clone(),
            claim_generator_info: self.claim_generator.clone(),
            thumbnail: self.thumbnail.clone(),
            ingredients: self.ingredients.clone(),
            assertions,
        }
    }

    /// Assemble the document as a JSON value.
    pub fn build(&self) -> Value {
        self.build_document().to_json()
    }

    /// Assemble the document as indented JSON text.
    pub fn build_json(&self) -> String {
        self.build_document().to_json_pretty()
    }
}
