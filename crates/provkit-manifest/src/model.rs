//! # Manifest Wire Model
//!
//! Typed records for everything that appears in a manifest document:
//! claim generator, thumbnail, ingredients, actions, and labelled
//! assertions.
//!
//! ## Rendering
//!
//! Each record renders itself through `to_json()`, which inserts keys in
//! the order external validators expect and leaves out every optional
//! field that was never set. There are no `null` placeholders and no
//! empty arrays. `Deserialize` is derived so the same records can be read
//! back from that output.

use provkit_core::ProvError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::vocab::relationships;

/// The claim version stamped on every manifest.
pub const CLAIM_VERSION: u32 = 1;

/// Label of the synthesized actions assertion.
pub const ACTIONS_LABEL: &str = "c2pa.actions";

/// Identifies the software that produced the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimGenerator {
    /// Product name.
    pub name: String,
    /// Product version.
    pub version: String,
    /// Optional icon reference.
    #[serde(default)]
    pub icon: Option<String>,
    /// Optional operating system description.
    #[serde(default)]
    pub operating_system: Option<String>,
}

impl ClaimGenerator {
    /// A claim generator with only name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            icon: None,
            operating_system: None,
        }
    }

    /// Render as `{name, version, icon?, operating_system?}`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".into(), self.name.clone().into());
        obj.insert("version".into(), self.version.clone().into());
        insert_opt(&mut obj, "icon", &self.icon);
        insert_opt(&mut obj, "operating_system", &self.operating_system);
        Value::Object(obj)
    }
}

/// A thumbnail reference: format plus resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    /// MIME type of the thumbnail.
    pub format: String,
    /// Resource identifier the engine resolves.
    pub identifier: String,
}

impl Thumbnail {
    /// Create a thumbnail reference.
    pub fn new(format: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            identifier: identifier.into(),
        }
    }

    /// Render as `{format, identifier}`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("format".into(), self.format.clone().into());
        obj.insert("identifier".into(), self.identifier.clone().into());
        Value::Object(obj)
    }
}

fn default_relationship() -> String {
    relationships::PARENT_OF.to_string()
}

/// Prior or component content consumed in producing the asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ingredient {
    /// Human-readable title.
    #[serde(default)]
    pub title: Option<String>,
    /// MIME type of the ingredient.
    pub format: String,
    /// Document identifier.
    #[serde(default, rename = "documentID")]
    pub document_id: Option<String>,
    /// Provenance reference.
    #[serde(default)]
    pub provenance: Option<String>,
    /// Content hash.
    #[serde(default)]
    pub hash: Option<String>,
    /// Link between the ingredient and the asset. Defaults to `parentOf`.
    #[serde(default = "default_relationship")]
    pub relationship: String,
    /// Validation status codes reported for the ingredient.
    #[serde(default, rename = "validationStatus")]
    pub validation_status: Vec<String>,
    /// Optional ingredient thumbnail.
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

impl Ingredient {
    /// An ingredient of the given format with a `parentOf` relationship.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            title: None,
            format: format.into(),
            document_id: None,
            provenance: None,
            hash: None,
            relationship: default_relationship(),
            validation_status: Vec::new(),
            thumbnail: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document identifier.
    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    /// Set the provenance reference.
    pub fn with_provenance(mut self, provenance: impl Into<String>) -> Self {
        self.provenance = Some(provenance.into());
        self
    }

    /// Set the content hash.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Set the relationship.
    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = relationship.into();
        self
    }

    /// Append a validation status code.
    pub fn with_validation_status(mut self, code: impl Into<String>) -> Self {
        self.validation_status.push(code.into());
        self
    }

    /// Set the thumbnail.
    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Render in manifest key order.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        insert_opt(&mut obj, "title", &self.title);
        obj.insert("format".into(), self.format.clone().into());
        insert_opt(&mut obj, "documentID", &self.document_id);
        insert_opt(&mut obj, "provenance", &self.provenance);
        insert_opt(&mut obj, "hash", &self.hash);
        obj.insert("relationship".into(), self.relationship.clone().into());
        if !self.validation_status.is_empty() {
            obj.insert(
                "validationStatus".into(),
                Value::Array(self.validation_status.iter().cloned().map(Value::from).collect()),
            );
        }
        if let Some(thumb) = &self.thumbnail {
            obj.insert("thumbnail".into(), thumb.to_json());
        }
        Value::Object(obj)
    }
}

/// The software that performed an action: either a bare name or a
/// structured record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SoftwareAgent {
    /// A free-form name.
    Name(String),
    /// Name, version and operating system.
    Structured {
        /// Product name.
        name: String,
        /// Product version.
        version: String,
        /// Operating system description.
        operating_system: String,
    },
}

impl SoftwareAgent {
    /// A structured agent record.
    pub fn structured(
        name: impl Into<String>,
        version: impl Into<String>,
        operating_system: impl Into<String>,
    ) -> Self {
        Self::Structured {
            name: name.into(),
            version: version.into(),
            operating_system: operating_system.into(),
        }
    }

    /// Render as a string or as `{name, version, operating_system}`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Name(name) => Value::String(name.clone()),
            Self::Structured {
                name,
                version,
                operating_system,
            } => {
                let mut obj = Map::new();
                obj.insert("name".into(), name.clone().into());
                obj.insert("version".into(), version.clone().into());
                obj.insert("operating_system".into(), operating_system.clone().into());
                Value::Object(obj)
            }
        }
    }
}

impl From<&str> for SoftwareAgent {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SoftwareAgent {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A single described change within an action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionChange {
    /// The field or region that changed.
    pub field: String,
    /// What happened to it.
    pub description: String,
}

impl ActionChange {
    /// Create a change record.
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("field".into(), self.field.clone().into());
        obj.insert("description".into(), self.description.clone().into());
        Value::Object(obj)
    }
}

/// An entry in the edit history of an asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Action {
    /// Action label, e.g. `c2pa.edited`.
    pub action: String,
    /// When the action happened. Passed through verbatim.
    #[serde(default)]
    pub when: Option<String>,
    /// Software that performed the action.
    #[serde(default, rename = "softwareAgent")]
    pub software_agent: Option<SoftwareAgent>,
    /// Why the action was taken.
    #[serde(default)]
    pub reason: Option<String>,
    /// IPTC digital source type URI.
    #[serde(default, rename = "digitalSourceType")]
    pub digital_source_type: Option<String>,
    /// Described changes.
    #[serde(default)]
    pub changes: Vec<ActionChange>,
    /// Free-form scalar parameters.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl Action {
    /// An action with only its label set.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            when: None,
            software_agent: None,
            reason: None,
            digital_source_type: None,
            changes: Vec::new(),
            parameters: Map::new(),
        }
    }

    /// Set the `when` timestamp string.
    pub fn when(mut self, when: impl Into<String>) -> Self {
        self.when = Some(when.into());
        self
    }

    /// Set the software agent.
    pub fn software_agent(mut self, agent: impl Into<SoftwareAgent>) -> Self {
        self.software_agent = Some(agent.into());
        self
    }

    /// Set the reason.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the digital source type URI.
    pub fn digital_source_type(mut self, uri: impl Into<String>) -> Self {
        self.digital_source_type = Some(uri.into());
        self
    }

    /// Append a change.
    pub fn change(mut self, field: impl Into<String>, description: impl Into<String>) -> Self {
        self.changes.push(ActionChange::new(field, description));
        self
    }

    /// Set a parameter, replacing any earlier value under the same key.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Render with optional members only when set and non-empty.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("action".into(), self.action.clone().into());
        insert_opt(&mut obj, "when", &self.when);
        if let Some(agent) = &self.software_agent {
            obj.insert("softwareAgent".into(), agent.to_json());
        }
        insert_opt(&mut obj, "reason", &self.reason);
        insert_opt(&mut obj, "digitalSourceType", &self.digital_source_type);
        if !self.changes.is_empty() {
            obj.insert(
                "changes".into(),
                Value::Array(self.changes.iter().map(ActionChange::to_json).collect()),
            );
        }
        if !self.parameters.is_empty() {
            obj.insert("parameters".into(), Value::Object(self.parameters.clone()));
        }
        Value::Object(obj)
    }
}

/// A labelled assertion as it appears in the `assertions` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestAssertion {
    /// Assertion label.
    pub label: String,
    /// Assertion payload.
    pub data: Value,
}

impl ManifestAssertion {
    /// Render as `{label, data}`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("label".into(), self.label.clone().into());
        obj.insert("data".into(), self.data.clone());
        Value::Object(obj)
    }
}

fn default_claim_version() -> u32 {
    CLAIM_VERSION
}

/// A complete manifest document, ready to hand to the signing engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestDocument {
    /// Always [`CLAIM_VERSION`] for documents built here.
    #[serde(default = "default_claim_version")]
    pub claim_version: u32,
    /// Timestamp authority URL.
    #[serde(default)]
    pub ta_url: Option<String>,
    /// MIME type of the asset.
    #[serde(default)]
    pub format: Option<String>,
    /// Asset title.
    #[serde(default)]
    pub title: Option<String>,
    /// Document identifier.
    #[serde(default, rename = "documentID")]
    pub document_id: Option<String>,
    /// Producer of the asset.
    #[serde(default)]
    pub producer: Option<String>,
    /// Software that produced the manifest.
    #[serde(default)]
    pub claim_generator_info: Option<ClaimGenerator>,
    /// Asset thumbnail.
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    /// Ingredients in insertion order.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Assertions in output order.
    #[serde(default)]
    pub assertions: Vec<ManifestAssertion>,
}

impl Default for ManifestDocument {
    fn default() -> Self {
        Self {
            claim_version: CLAIM_VERSION,
            ta_url: None,
            format: None,
            title: None,
            document_id: None,
            producer: None,
            claim_generator_info: None,
            thumbnail: None,
            ingredients: Vec::new(),
            assertions: Vec::new(),
        }
    }
}

impl ManifestDocument {
    /// Look up an assertion by label.
    pub fn assertion(&self, label: &str) -> Option<&ManifestAssertion> {
        self.assertions.iter().find(|a| a.label == label)
    }

    /// Render in the fixed key order: `claim_version`, `ta_url`, `format`,
    /// `title`, `documentID`, `producer`, `claim_generator_info`,
    /// `thumbnail`, `ingredients`, `assertions`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("claim_version".into(), self.claim_version.into());
        insert_opt(&mut obj, "ta_url", &self.ta_url);
        insert_opt(&mut obj, "format", &self.format);
        insert_opt(&mut obj, "title", &self.title);
        insert_opt(&mut obj, "documentID", &self.document_id);
        insert_opt(&mut obj, "producer", &self.producer);
        if let Some(generator) = &self.claim_generator_info {
            obj.insert("claim_generator_info".into(), generator.to_json());
        }
        if let Some(thumb) = &self.thumbnail {
            obj.insert("thumbnail".into(), thumb.to_json());
        }
        if !self.ingredients.is_empty() {
            obj.insert(
                "ingredients".into(),
                Value::Array(self.ingredients.iter().map(Ingredient::to_json).collect()),
            );
        }
        if !self.assertions.is_empty() {
            obj.insert(
                "assertions".into(),
                Value::Array(self.assertions.iter().map(ManifestAssertion::to_json).collect()),
            );
        }
        Value::Object(obj)
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Indented JSON text for debugging and persistence.
    pub fn to_json_pretty(&self) -> String {
        // Serializing a Value into a String cannot fail.
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }

    /// Stream the rendering into `writer`, indented when `pretty` is set.
    /// A failing writer surfaces as [`ProvError::Json`].
    pub fn write_json<W: std::io::Write>(&self, writer: W, pretty: bool) -> Result<(), ProvError> {
        let value = self.to_json();
        if pretty {
            serde_json::to_writer_pretty(writer, &value)?;
        } else {
            serde_json::to_writer(writer, &value)?;
        }
        Ok(())
    }
}

impl Serialize for ManifestDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn insert_opt(obj: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        obj.insert(key.to_string(), Value::String(v.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ingredient_defaults_to_parent_of() {
        let ing = Ingredient::new("image/jpeg");
        assert_eq!(ing.relationship, "parentOf");
        assert_eq!(
            ing.to_json(),
            json!({"format": "image/jpeg", "relationship": "parentOf"})
        );
    }

    #[test]
    fn ingredient_full_key_order() {
        let ing = Ingredient::new("image/png")
            .with_title("orig.png")
            .with_document_id("xmp:did:1")
            .with_provenance("self#jumbf=c2pa")
            .with_hash("abc")
            .with_relationship("componentOf")
            .with_validation_status("claimSignature.validated")
            .with_thumbnail(Thumbnail::new("image/jpeg", "thumb.jpg"));
        let s = ing.to_json().to_string();
        assert_eq!(
            s,
            r#"{"title":"orig.png","format":"image/png","documentID":"xmp:did:1","provenance":"self#jumbf=c2pa","hash":"abc","relationship":"componentOf","validationStatus":["claimSignature.validated"],"thumbnail":{"format":"image/jpeg","identifier":"thumb.jpg"}}"#
        );
    }

    #[test]
    fn claim_generator_optional_fields() {
        let cg = ClaimGenerator::new("app", "1.0");
        assert_eq!(cg.to_json(), json!({"name": "app", "version": "1.0"}));
        let cg = ClaimGenerator {
            icon: Some("icon.png".into()),
            operating_system: Some("Linux".into()),
            ..cg
        };
        assert_eq!(
            cg.to_json(),
            json!({"name": "app", "version": "1.0", "icon": "icon.png", "operating_system": "Linux"})
        );
    }

    #[test]
    fn action_omits_unset_members() {
        let a = Action::new("c2pa.created");
        assert_eq!(a.to_json(), json!({"action": "c2pa.created"}));
    }

    #[test]
    fn action_renders_all_members() {
        let a = Action::new("c2pa.filtered")
            .when("2026-01-15T12:00:00Z")
            .software_agent(SoftwareAgent::structured("Editor", "2.1", "Android"))
            .reason("look")
            .digital_source_type("http://cv.iptc.org/newscodes/digitalsourcetype/digitalCapture")
            .change("exposure", "raised")
            .parameter("filter_name", "sepia")
            .parameter("strength", 3);
        assert_eq!(
            a.to_json(),
            json!({
                "action": "c2pa.filtered",
                "when": "2026-01-15T12:00:00Z",
                "softwareAgent": {"name": "Editor", "version": "2.1", "operating_system": "Android"},
                "reason": "look",
                "digitalSourceType": "http://cv.iptc.org/newscodes/digitalsourcetype/digitalCapture",
                "changes": [{"field": "exposure", "description": "raised"}],
                "parameters": {"filter_name": "sepia", "strength": 3}
            })
        );
    }

    #[test]
    fn software_agent_string_form() {
        let a = Action::new("c2pa.placed").software_agent("Compositor");
        assert_eq!(a.to_json()["softwareAgent"], json!("Compositor"));
    }

    #[test]
    fn software_agent_deserializes_both_shapes() {
        let name: SoftwareAgent = serde_json::from_value(json!("Tool")).unwrap();
        assert_eq!(name, SoftwareAgent::Name("Tool".into()));
        let structured: SoftwareAgent = serde_json::from_value(
            json!({"name": "Tool", "version": "1", "operating_system": "iOS"}),
        )
        .unwrap();
        assert_eq!(structured, SoftwareAgent::structured("Tool", "1", "iOS"));
    }

    #[test]
    fn default_document_is_claim_version_only() {
        let doc = ManifestDocument::default();
        assert_eq!(doc.to_json_string(), r#"{"claim_version":1}"#);
    }

    #[test]
    fn write_json_matches_string_renderings() {
        let doc = ManifestDocument {
            title: Some("T".into()),
            ..ManifestDocument::default()
        };
        let mut compact = Vec::new();
        doc.write_json(&mut compact, false).unwrap();
        assert_eq!(String::from_utf8(compact).unwrap(), doc.to_json_string());
        let mut pretty = Vec::new();
        doc.write_json(&mut pretty, true).unwrap();
        assert_eq!(String::from_utf8(pretty).unwrap(), doc.to_json_pretty());
    }

    struct ClosedPipe;

    impl std::io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_json_failure_is_a_json_error() {
        let err = ManifestDocument::default().write_json(ClosedPipe, true).unwrap_err();
        assert!(matches!(err, ProvError::Json(ref e) if e.is_io()));
        assert!(err.to_string().contains("reader went away"));
    }

    #[test]
    fn document_serialize_matches_to_json() {
        let doc = ManifestDocument {
            title: Some("T".into()),
            ..ManifestDocument::default()
        };
        assert_eq!(serde_json::to_value(&doc).unwrap(), doc.to_json());
    }
}
