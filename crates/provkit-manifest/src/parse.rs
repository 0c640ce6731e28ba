//! # Manifest Parsing
//!
//! Two entry points read manifest JSON back into a [`ManifestDocument`]:
//!
//! - [`ManifestDocument::parse`] is structural. It accepts anything the
//!   builder can emit, including documents without a claim generator, so
//!   `build` followed by `parse` always round-trips.
//! - [`ManifestDocument::from_json`] is the strict boundary used before a
//!   document is handed to the signing engine. It rejects empty input,
//!   non-object roots, explicit `null` top-level fields, and documents
//!   without a usable `claim_generator_info`.

use provkit_core::ParseError;
use serde_json::{Map, Value};

use crate::model::ManifestDocument;

impl ManifestDocument {
    /// Structural parse of manifest JSON text.
    pub fn parse(json: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(json).map_err(ParseError::Syntax)?;
        Self::from_value(value)
    }

    /// Structural conversion from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        if !value.is_object() {
            return Err(ParseError::NotAnObject);
        }
        serde_json::from_value(value).map_err(|e| ParseError::InvalidField {
            field: "manifest".into(),
            reason: e.to_string(),
        })
    }

    /// Strict parse of manifest JSON text.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        if json.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let value: Value = serde_json::from_str(json).map_err(ParseError::Syntax)?;
        let Value::Object(root) = &value else {
            return Err(ParseError::NotAnObject);
        };
        if let Some((key, _)) = root.iter().find(|(_, v)| v.is_null()) {
            return Err(ParseError::NullField(key.clone()));
        }
        check_claim_generator(root)?;
        Self::from_value(value)
    }
}

fn check_claim_generator(root: &Map<String, Value>) -> Result<(), ParseError> {
    let generator = root
        .get("claim_generator_info")
        .ok_or(ParseError::MissingField("claim_generator_info"))?;
    let Value::Object(generator) = generator else {
        return Err(ParseError::InvalidField {
            field: "claim_generator_info".into(),
            reason: "expected an object".into(),
        });
    };
    for key in ["name", "version"] {
        match generator.get(key).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => {}
            _ => {
                return Err(ParseError::InvalidField {
                    field: format!("claim_generator_info.{key}"),
                    reason: "expected a non-empty string".into(),
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ManifestBuilder;
    use crate::model::{Action, Ingredient};

    #[test]
    fn strict_accepts_minimal_document() {
        let doc = ManifestDocument::from_json(
            r#"{"claim_generator_info":{"name":"app","version":"1.0"},"title":"T"}"#,
        )
        .unwrap();
        assert_eq!(doc.title.as_deref(), Some("T"));
        assert_eq!(doc.claim_version, 1);
        assert_eq!(doc.claim_generator_info.unwrap().name, "app");
    }

    #[test]
    fn strict_rejects_empty_input() {
        assert!(matches!(ManifestDocument::from_json(""), Err(ParseError::Empty)));
        assert!(matches!(ManifestDocument::from_json("  \n"), Err(ParseError::Empty)));
    }

    #[test]
    fn strict_rejects_bad_syntax() {
        assert!(matches!(ManifestDocument::from_json("{"), Err(ParseError::Syntax(_))));
        assert!(matches!(
            ManifestDocument::from_json("not json at all"),
            Err(ParseError::Syntax(_))
        ));
    }

    #[test]
    fn strict_rejects_non_object_root() {
        assert!(matches!(
            ManifestDocument::from_json("[1,2]"),
            Err(ParseError::NotAnObject)
        ));
    }

    #[test]
    fn strict_requires_claim_generator() {
        assert!(matches!(
            ManifestDocument::from_json(r#"{"title":"test"}"#),
            Err(ParseError::MissingField("claim_generator_info"))
        ));
    }

    #[test]
    fn strict_rejects_null_fields() {
        let err =
            ManifestDocument::from_json(r#"{"title": null, "claim_generator_info": []}"#)
                .unwrap_err();
        assert!(matches!(err, ParseError::NullField(ref f) if f == "title"));
    }

    #[test]
    fn strict_rejects_malformed_claim_generator() {
        let err = ManifestDocument::from_json(r#"{"claim_generator_info": []}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { ref field, .. } if field == "claim_generator_info"));
        let err = ManifestDocument::from_json(r#"{"claim_generator_info": {"name": "app"}}"#)
            .unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidField { ref field, .. } if field == "claim_generator_info.version")
        );
    }

    #[test]
    fn strict_reports_shape_errors() {
        let err = ManifestDocument::from_json(
            r#"{"claim_generator_info":{"name":"a","version":"1"},"ingredients":"nope"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { ref field, .. } if field == "manifest"));
    }

    #[test]
    fn structural_parse_round_trips_builder_output() {
        let builder = ManifestBuilder::new()
            .title("Round")
            .format("image/png")
            .add_ingredient(Ingredient::new("image/jpeg").with_title("in.jpg"))
            .add_action(Action::new("c2pa.edited").when("2026-01-01T00:00:00Z"))
            .add_assertion("x", 5i64);
        let doc = builder.build_document();
        let parsed = ManifestDocument::parse(&builder.build_json()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn structural_parse_accepts_missing_generator() {
        let doc = ManifestDocument::parse(r#"{"claim_version":1}"#).unwrap();
        assert_eq!(doc, ManifestDocument::default());
    }
}
