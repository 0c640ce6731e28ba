//! # Manifest Presets
//!
//! Ready-made manifests for common authoring scenarios. Each preset starts
//! from the same base (title, format, claim generator) and composes the
//! manifest and attestation builders. The returned builder is still open,
//! so callers can add ingredients, assertions or a thumbnail before
//! building.
//!
//! All timestamps a preset stamps come from one clock: the current UTC
//! second by default, or a fixed instant set with [`Presets::at`].

use provkit_attest::{
    AssertionMetadataAttestation, AttestationBuilder, CawgIdentityAttestation, VerifiedIdentity,
};
use provkit_core::Timestamp;
use provkit_manifest::vocab::{actions, relationships};
use provkit_manifest::{Action, ClaimGenerator, Ingredient, ManifestBuilder};
use serde_json::{Map, Value};

/// Claim generator name used when none is configured.
pub const DEFAULT_GENERATOR_NAME: &str = "provkit";

/// Claim generator version used when none is configured.
pub const DEFAULT_GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A prior asset an edit, share or filter starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub format: String,
}

impl Source {
    pub fn new(title: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            format: format.into(),
        }
    }

    /// The source as a `parentOf` ingredient.
    fn ingredient(&self) -> Ingredient {
        Ingredient::new(self.format.clone())
            .with_title(self.title.clone())
            .with_relationship(relationships::PARENT_OF)
    }
}

/// Who and where a capture happened. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capture {
    /// Photographer or creator name.
    pub author: Option<String>,
    /// Capture device.
    pub device: Option<String>,
    /// Structured place, see [`crate::location`].
    pub location: Option<Map<String, Value>>,
}

impl Capture {
    fn is_empty(&self) -> bool {
        self.author.is_none() && self.device.is_none() && self.location.is_none()
    }
}

/// Preset factory bound to one claim generator and one clock.
#[derive(Debug, Clone)]
pub struct Presets {
    generator: ClaimGenerator,
    clock: Option<Timestamp>,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            generator: ClaimGenerator::new(DEFAULT_GENERATOR_NAME, DEFAULT_GENERATOR_VERSION),
            clock: None,
        }
    }
}

impl Presets {
    /// Default generator and the live clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different claim generator name and version.
    pub fn with_generator(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            generator: ClaimGenerator::new(name, version),
            clock: None,
        }
    }

    /// Stamp every timestamp with `instant` instead of the current time.
    pub fn at(mut self, instant: Timestamp) -> Self {
        self.clock = Some(instant);
        self
    }

    /// The claim generator stamped on every preset.
    pub fn generator(&self) -> &ClaimGenerator {
        &self.generator
    }

    fn now(&self) -> Timestamp {
        self.clock.unwrap_or_else(Timestamp::now)
    }

    fn base(&self, preset: &'static str, title: &str, format: &str) -> ManifestBuilder {
        tracing::debug!(preset, title, format, "starting preset manifest");
        ManifestBuilder::new()
            .title(title)
            .format(format)
            .claim_generator_info(self.generator.clone())
    }

    fn action(&self, label: &str, agent: Option<&str>) -> Action {
        let action = Action::new(label).when(self.now().to_iso8601());
        match agent {
            Some(agent) => action.software_agent(agent),
            None => action,
        }
    }

    /// Title, format and claim generator, plus an optional timestamp
    /// authority.
    pub fn basic_image(&self, title: &str, format: &str, ta_url: Option<&str>) -> ManifestBuilder {
        let builder = self.base("basic_image", title, format);
        match ta_url {
            Some(url) => builder.timestamp_authority_url(url),
            None => builder,
        }
    }

    /// An edit of `original`: one parent ingredient and an edited action.
    pub fn image_edit(
        &self,
        title: &str,
        original: &Source,
        format: &str,
        software_agent: Option<&str>,
    ) -> ManifestBuilder {
        self.base("image_edit", title, format)
            .add_ingredient(original.ingredient())
            .add_action(self.action(actions::EDITED, software_agent))
    }

    /// A fresh capture. The device, when known, is the created action's
    /// agent. Authorship and capture metadata are attached when any
    /// capture detail is present.
    pub fn photo(&self, title: &str, format: &str, capture: &Capture) -> ManifestBuilder {
        let builder = self
            .base("photo", title, format)
            .add_action(self.action(actions::CREATED, capture.device.as_deref()));
        if capture.is_empty() {
            return builder;
        }

        let mut attestations = AttestationBuilder::new();
        if let Some(author) = &capture.author {
            let now = self.now();
            attestations = attestations.add_creative_work(|cw| cw.add_author(author).date_created(now));
        }
        attestations = attestations.add_assertion_metadata(|m| self.capture_metadata(m, capture));
        attestations.build_for_manifest(builder)
    }

    fn capture_metadata(
        &self,
        metadata: AssertionMetadataAttestation,
        capture: &Capture,
    ) -> AssertionMetadataAttestation {
        let mut metadata = metadata.date_time(self.now().to_iso8601());
        if let Some(device) = &capture.device {
            metadata = metadata.device(device);
        }
        if let Some(location) = &capture.location {
            metadata = metadata.location(location.clone());
        }
        metadata
    }

    /// A video edit: opened, then each of `edit_actions` in order, all
    /// stamped with the same instant.
    pub fn video_edit(
        &self,
        title: &str,
        original: &Source,
        format: &str,
        editing_software: Option<&str>,
        edit_actions: &[&str],
    ) -> ManifestBuilder {
        let when = self.now().to_iso8601();
        let stamped = |label: &str| {
            let action = Action::new(label).when(when.clone());
            match editing_software {
                Some(agent) => action.software_agent(agent),
                None => action,
            }
        };
        let builder = self
            .base("video_edit", title, format)
            .add_ingredient(original.ingredient())
            .add_action(stamped(actions::OPENED));
        edit_actions
            .iter()
            .fold(builder, |builder, label| builder.add_action(stamped(*label)))
    }

    /// A composite: created, then one placed action per ingredient.
    pub fn composite(
        &self,
        title: &str,
        format: &str,
        ingredients: Vec<Ingredient>,
        compositing_software: Option<&str>,
    ) -> ManifestBuilder {
        let builder = self
            .base("composite", title, format)
            .add_action(self.action(actions::CREATED, compositing_software));
        ingredients.into_iter().fold(builder, |builder, ingredient| {
            builder
                .add_ingredient(ingredient)
                .add_action(self.action(actions::PLACED, compositing_software))
        })
    }

    /// A screenshot taken on `device`, optionally of `app_name`.
    pub fn screenshot(&self, device: &str, app_name: Option<&str>, format: &str) -> ManifestBuilder {
        let builder = self
            .base("screenshot", "Screenshot", format)
            .producer(device)
            .add_action(self.action(actions::CREATED, Some(app_name.unwrap_or("Screenshot"))));
        AttestationBuilder::new()
            .add_assertion_metadata(|m| {
                let m = m
                    .device(device)
                    .date_time(self.now().to_iso8601())
                    .add_metadata("capture_method", "screenshot");
                match app_name {
                    Some(app) => m.add_metadata("source_application", app),
                    None => m,
                }
            })
            .build_for_manifest(builder)
    }

    /// A re-share on `platform`: recompressed for the platform, then
    /// published.
    pub fn social_share(&self, original: &Source, platform: &str, format: &str) -> ManifestBuilder {
        self.base("social_share", &format!("Shared on {platform}"), format)
            .add_ingredient(original.ingredient())
            .add_action(
                self.action(actions::RECOMPRESSED, Some(platform))
                    .reason("Social media optimization"),
            )
            .add_action(self.action(actions::PUBLISHED, Some(platform)))
    }

    /// A filtered copy of `original`.
    pub fn filtered(
        &self,
        original: &Source,
        filter_name: &str,
        format: &str,
        app_name: Option<&str>,
    ) -> ManifestBuilder {
        self.base("filtered", &format!("{} (Filtered)", original.title), format)
            .add_ingredient(original.ingredient())
            .add_action(
                self.action(actions::FILTERED, app_name)
                    .parameter("filter_name", filter_name)
                    .parameter("filter_type", "digital_filter"),
            )
    }

    /// A capture with verified creator identities. Identities, when given,
    /// become one identity credential valid from now.
    pub fn creator_verified(
        &self,
        title: &str,
        format: &str,
        capture: &Capture,
        identities: &[VerifiedIdentity],
    ) -> ManifestBuilder {
        let builder = self
            .base("creator_verified", title, format)
            .add_action(self.action(actions::CREATED, capture.device.as_deref()));

        let mut attestations = AttestationBuilder::new();
        if let Some(author) = &capture.author {
            let now = self.now();
            attestations = attestations.add_creative_work(|cw| cw.add_author(author).date_created(now));
        }
        if !identities.is_empty() {
            let valid_from = self.now().to_iso8601();
            attestations = attestations.add_cawg_identity(|cawg| {
                identities.iter().fold(cawg.valid_from(valid_from), |cawg, id| {
                    cawg.add_verified_identity(
                        id.identity_type.clone(),
                        id.username.clone(),
                        id.uri.clone(),
                        id.verified_at.clone(),
                        id.provider.id.clone(),
                        id.provider.name.clone(),
                    )
                })
            });
        }
        if capture.device.is_some() || capture.location.is_some() {
            attestations = attestations.add_assertion_metadata(|m| self.capture_metadata(m, capture));
        }
        attestations.build_for_manifest(builder)
    }

    /// Content created on `platform` by `username`. Known platforms use
    /// their identity templates; any other platform is assumed to live at
    /// `https://<platform>.com`.
    pub fn social_creator(
        &self,
        title: &str,
        format: &str,
        platform: &str,
        username: &str,
        verified_at: Option<&str>,
    ) -> ManifestBuilder {
        let builder = self
            .base("social_creator", title, format)
            .add_action(self.action(actions::CREATED, Some(platform)));
        let now = self.now().to_iso8601();
        let verified_at = verified_at.map(str::to_string).unwrap_or_else(|| now.clone());

        AttestationBuilder::new()
            .add_cawg_identity(|cawg| add_platform_identity(cawg.valid_from(now), platform, username, verified_at))
            .build_for_manifest(builder)
    }

    /// Verified identities for `(platform, username)` accounts, built with
    /// the same templates as [`Presets::social_creator`]. `verified_at`
    /// defaults to the preset clock.
    pub fn platform_identities<'a>(
        &self,
        accounts: impl IntoIterator<Item = (&'a str, &'a str)>,
        verified_at: Option<&str>,
    ) -> Vec<VerifiedIdentity> {
        let verified_at = verified_at.map(str::to_string).unwrap_or_else(|| self.now().to_iso8601());
        accounts
            .into_iter()
            .fold(CawgIdentityAttestation::new(), |cawg, (platform, username)| {
                add_platform_identity(cawg, platform, username, verified_at.clone())
            })
            .verified_identities()
            .to_vec()
    }
}

fn add_platform_identity(
    cawg: CawgIdentityAttestation,
    platform: &str,
    username: &str,
    verified_at: String,
) -> CawgIdentityAttestation {
    let key = platform.to_lowercase();
    match key.as_str() {
        "instagram" => cawg.add_instagram_identity(username, verified_at),
        "twitter" | "x" => cawg.add_twitter_identity(username, verified_at),
        "behance" => cawg.add_behance_identity(username, verified_at),
        "github" => cawg.add_github_identity(username, verified_at),
        _ => cawg.add_social_media_identity(
            username,
            format!("https://{platform}.com/{username}"),
            verified_at,
            format!("https://{platform}.com"),
            key.clone(),
        ),
    }
}
