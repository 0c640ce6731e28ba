//! # Location and Thumbnail Helpers
//!
//! Small constructors for the structured values presets attach: a
//! schema.org `Place`, a `GeoCoordinates` record, and the standard
//! thumbnail reference.

use provkit_core::AssertionPayload;
use provkit_manifest::vocab::formats;
use provkit_manifest::{ManifestBuilder, Thumbnail};
use serde_json::{Map, Value};

/// Identifier used by [`add_standard_thumbnail`] when none is given.
pub const DEFAULT_THUMBNAIL_ID: &str = "thumbnail.jpg";

// Non-finite coordinates have no JSON number form; they take the payload
// fallback and are carried as text.
fn coordinate(value: f64) -> Value {
    AssertionPayload::from(value).into_json()
}

/// A schema.org `Place`: `{"@type": "Place", latitude, longitude, name?}`.
pub fn location(latitude: f64, longitude: f64, name: Option<&str>) -> Map<String, Value> {
    let mut place = Map::new();
    place.insert("@type".into(), "Place".into());
    place.insert("latitude".into(), coordinate(latitude));
    place.insert("longitude".into(), coordinate(longitude));
    if let Some(name) = name {
        place.insert("name".into(), name.into());
    }
    place
}

/// A schema.org `GeoCoordinates` record with optional elevation and accuracy.
pub fn geo_location(
    latitude: f64,
    longitude: f64,
    elevation: Option<f64>,
    accuracy: Option<f64>,
) -> Map<String, Value> {
    let mut geo = Map::new();
    geo.insert("@type".into(), "GeoCoordinates".into());
    geo.insert("latitude".into(), coordinate(latitude));
    geo.insert("longitude".into(), coordinate(longitude));
    if let Some(elevation) = elevation {
        geo.insert("elevation".into(), coordinate(elevation));
    }
    if let Some(accuracy) = accuracy {
        geo.insert("accuracy".into(), coordinate(accuracy));
    }
    geo
}

/// Attach the standard thumbnail reference. Defaults to `thumbnail.jpg`
/// in JPEG.
pub fn add_standard_thumbnail(
    builder: ManifestBuilder,
    identifier: Option<&str>,
    format: Option<&str>,
) -> ManifestBuilder {
    builder.thumbnail(Thumbnail::new(
        format.unwrap_or(formats::JPEG),
        identifier.unwrap_or(DEFAULT_THUMBNAIL_ID),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn place_without_name() {
        assert_eq!(
            Value::Object(location(52.5, 13.4, None)),
            json!({"@type": "Place", "latitude": 52.5, "longitude": 13.4})
        );
    }

    #[test]
    fn place_with_name_keeps_order() {
        let s = Value::Object(location(1.5, -2.25, Some("Pier"))).to_string();
        assert_eq!(s, r#"{"@type":"Place","latitude":1.5,"longitude":-2.25,"name":"Pier"}"#);
    }

    #[test]
    fn geo_location_optional_members() {
        assert_eq!(
            Value::Object(geo_location(10.0, 20.0, None, None)),
            json!({"@type": "GeoCoordinates", "latitude": 10.0, "longitude": 20.0})
        );
        assert_eq!(
            Value::Object(geo_location(10.0, 20.0, Some(35.5), Some(4.0))),
            json!({"@type": "GeoCoordinates", "latitude": 10.0, "longitude": 20.0, "elevation": 35.5, "accuracy": 4.0})
        );
    }

    #[test]
    fn non_finite_coordinate_is_text() {
        assert_eq!(location(f64::NAN, 0.0, None)["latitude"], json!("NaN"));
    }

    #[test]
    fn standard_thumbnail_defaults() {
        let v = add_standard_thumbnail(ManifestBuilder::new(), None, None).build();
        assert_eq!(v["thumbnail"], json!({"format": "image/jpeg", "identifier": "thumbnail.jpg"}));
        let v = add_standard_thumbnail(ManifestBuilder::new(), Some("t.png"), Some("image/png")).build();
        assert_eq!(v["thumbnail"], json!({"format": "image/png", "identifier": "t.png"}));
    }
}
