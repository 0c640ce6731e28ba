//! Every preset emits a manifest the strict parser accepts, with the
//! actions assertion first.

use provkit_core::Timestamp;
use provkit_manifest::vocab::formats;
use provkit_manifest::{Ingredient, ManifestBuilder, ManifestDocument};
use provkit_presets::{add_standard_thumbnail, geo_location, Capture, Presets, Source};

fn all_presets() -> Vec<(&'static str, ManifestBuilder)> {
    let p = Presets::new().at(Timestamp::parse("2026-07-04T00:00:00Z").unwrap());
    let src = Source::new("orig.jpg", formats::JPEG);
    let capture = Capture {
        author: Some("Ada".into()),
        device: Some("Pixel".into()),
        location: Some(geo_location(47.0, 8.0, Some(400.0), None)),
    };
    vec![
        ("basic_image", p.basic_image("a.jpg", formats::JPEG, None)),
        ("image_edit", p.image_edit("b.jpg", &src, formats::JPEG, None)),
        ("photo", p.photo("c.jpg", formats::JPEG, &capture)),
        ("video_edit", p.video_edit("d.mp4", &Source::new("raw.mp4", formats::MP4), formats::MP4, None, &[])),
        ("composite", p.composite("e.jpg", formats::JPEG, vec![Ingredient::new(formats::PNG)], None)),
        ("screenshot", p.screenshot("Pixel", Some("Browser"), formats::PNG)),
        ("social_share", p.social_share(&src, "Pixelfed", formats::JPEG)),
        ("filtered", p.filtered(&src, "mono", formats::JPEG, Some("FilterApp"))),
        ("creator_verified", p.creator_verified("f.jpg", formats::JPEG, &capture, &[])),
        ("social_creator", p.social_creator("g.jpg", formats::JPEG, "instagram", "ada", None)),
    ]
}

#[test]
fn presets_pass_strict_parse() {
    for (name, builder) in all_presets() {
        let json = add_standard_thumbnail(builder, None, None).build_json();
        let doc = ManifestDocument::from_json(&json)
            .unwrap_or_else(|e| panic!("{name} rejected: {e}"));
        let generator = doc.claim_generator_info.as_ref().unwrap();
        assert_eq!(generator.name, "provkit", "{name}");
        assert_eq!(doc.thumbnail.as_ref().unwrap().identifier, "thumbnail.jpg", "{name}");
        if let Some(first) = doc.assertions.first() {
            if name != "basic_image" {
                assert_eq!(first.label, "c2pa.actions", "{name}");
            }
        }
    }
}

#[test]
fn basic_image_has_no_assertions() {
    let doc = Presets::new().basic_image("a.jpg", formats::JPEG, None).build_document();
    assert!(doc.assertions.is_empty());
    assert!(doc.ingredients.is_empty());
}
