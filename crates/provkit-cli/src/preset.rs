//! # Preset Subcommand
//!
//! Builds a manifest from one of the preset factories and emits its JSON.
//! Every preset accepts the shared options: output format, claim
//! generator, a fixed clock for reproducible output, and the standard
//! thumbnail reference.
//!
//! ```bash
//! provkit preset image-edit --title out.jpg --source-title in.jpg --agent "Photo Editor 2.1"
//! provkit preset composite --title collage.png --format image/png \
//!     --ingredient a.jpg=image/jpeg --ingredient b.png=image/png
//! provkit preset creator-verified --title c.jpg --author Ada --identity github=ada
//! provkit preset social-creator --title clip.mp4 --format video/mp4 \
//!     --platform github --username octocat --at 2026-01-01T00:00:00Z
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use provkit_core::Timestamp;
use provkit_manifest::vocab::{formats, relationships};
use provkit_manifest::{Ingredient, ManifestBuilder};
use provkit_presets::{add_standard_thumbnail, location, Capture, Presets, Source};

/// Arguments for `provkit preset`.
#[derive(Args, Debug)]
pub struct PresetArgs {
    #[command(subcommand)]
    pub kind: PresetKind,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options every preset shares.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// MIME type of the produced asset. Defaults to video/mp4 for
    /// video-edit and image/jpeg otherwise.
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Claim generator name.
    #[arg(long, global = true)]
    pub generator: Option<String>,

    /// Claim generator version. Used only with --generator.
    #[arg(long, global = true, requires = "generator")]
    pub generator_version: Option<String>,

    /// Stamp every action with this instant (YYYY-MM-DDTHH:MM:SSZ).
    #[arg(long, global = true)]
    pub at: Option<String>,

    /// Attach the standard thumbnail reference.
    #[arg(long, global = true)]
    pub thumbnail: bool,

    /// Write the manifest here instead of stdout.
    #[arg(long, short, global = true)]
    pub out: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed JSON.
    #[arg(long, global = true)]
    pub compact: bool,
}

/// The available presets.
#[derive(Subcommand, Debug, Clone)]
pub enum PresetKind {
    /// Title, format and claim generator only.
    BasicImage {
        #[arg(long)]
        title: String,
        /// Timestamp authority URL.
        #[arg(long)]
        ta_url: Option<String>,
    },
    /// An edit of an existing asset.
    ImageEdit {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Editing application.
        #[arg(long)]
        agent: Option<String>,
    },
    /// A camera capture.
    Photo {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        capture: CaptureArgs,
    },
    /// A video edit with an ordered list of edit actions.
    VideoEdit {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Editing application.
        #[arg(long)]
        agent: Option<String>,
        /// Action label to record after opening, repeatable.
        #[arg(long = "action")]
        actions: Vec<String>,
    },
    /// A composite of several ingredients.
    Composite {
        #[arg(long)]
        title: String,
        /// Ingredient as TITLE=FORMAT, repeatable.
        #[arg(long = "ingredient", value_parser = parse_ingredient)]
        ingredients: Vec<Ingredient>,
        /// Compositing application.
        #[arg(long)]
        agent: Option<String>,
    },
    /// A screenshot taken on a device.
    Screenshot {
        #[arg(long)]
        device: String,
        /// Application shown in the screenshot.
        #[arg(long)]
        app: Option<String>,
    },
    /// A re-share of an existing asset on a social platform.
    SocialShare {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        platform: String,
    },
    /// A filtered copy of an existing asset.
    Filtered {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        filter: String,
        /// Filtering application.
        #[arg(long)]
        app: Option<String>,
    },
    /// A capture attributed to verified creator accounts.
    CreatorVerified {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        capture: CaptureArgs,
        /// Verified account as PLATFORM=USERNAME, repeatable.
        #[arg(long = "identity", value_parser = parse_account)]
        identities: Vec<(String, String)>,
        /// When the accounts were verified. Defaults to the preset clock.
        #[arg(long)]
        verified_at: Option<String>,
    },
    /// Content created by a verified social-media account.
    SocialCreator {
        #[arg(long)]
        title: String,
        #[arg(long)]
        platform: String,
        #[arg(long)]
        username: String,
        /// When the account was verified. Defaults to the preset clock.
        #[arg(long)]
        verified_at: Option<String>,
    },
}

impl PresetKind {
    /// Asset format used when `--format` or `--source-format` is absent.
    pub fn default_format(&self) -> &'static str {
        match self {
            Self::VideoEdit { .. } => formats::MP4,
            _ => formats::JPEG,
        }
    }
}

/// The asset a derived preset starts from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(long)]
    pub source_title: String,
    /// Defaults to the preset's own default format.
    #[arg(long)]
    pub source_format: Option<String>,
}

impl SourceArgs {
    fn source(&self, default_format: &str) -> Source {
        Source::new(&self.source_title, self.source_format.as_deref().unwrap_or(default_format))
    }
}

/// Capture details for the photo preset.
#[derive(Args, Debug, Clone, Default)]
pub struct CaptureArgs {
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub device: Option<String>,
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,
    /// Place name attached to the coordinates.
    #[arg(long, requires = "lat")]
    pub place: Option<String>,
}

impl CaptureArgs {
    fn capture(&self) -> Capture {
        let location = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(location(lat, lon, self.place.as_deref())),
            _ => None,
        };
        Capture {
            author: self.author.clone(),
            device: self.device.clone(),
            location,
        }
    }
}

/// Parse `TITLE=FORMAT` into a component ingredient.
pub fn parse_ingredient(raw: &str) -> Result<Ingredient, String> {
    match raw.rsplit_once('=') {
        Some((title, format)) if !title.is_empty() && !format.is_empty() => Ok(Ingredient::new(format)
            .with_title(title)
            .with_relationship(relationships::COMPONENT_OF)),
        _ => Err(format!("expected TITLE=FORMAT, got '{raw}'")),
    }
}

/// Parse `PLATFORM=USERNAME` into a verified account.
pub fn parse_account(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((platform, username)) if !platform.is_empty() && !username.is_empty() => {
            Ok((platform.to_string(), username.to_string()))
        }
        _ => Err(format!("expected PLATFORM=USERNAME, got '{raw}'")),
    }
}

fn presets(common: &CommonArgs) -> Result<Presets> {
    let presets = match &common.generator {
        Some(name) => Presets::with_generator(
            name.as_str(),
            common.generator_version.as_deref().unwrap_or("1.0.0"),
        ),
        None => Presets::new(),
    };
    Ok(match &common.at {
        Some(raw) => {
            let instant = Timestamp::parse(raw).with_context(|| format!("parsing --at '{raw}'"))?;
            presets.at(instant)
        }
        None => presets,
    })
}

/// Build the manifest described by `args`.
pub fn build_preset(args: &PresetArgs) -> Result<ManifestBuilder> {
    let common = &args.common;
    let presets = presets(common)?;
    let default_format = args.kind.default_format();
    let format = common.format.as_deref().unwrap_or(default_format);

    let builder = match &args.kind {
        PresetKind::BasicImage { title, ta_url } => presets.basic_image(title, format, ta_url.as_deref()),
        PresetKind::ImageEdit { title, source, agent } => {
            presets.image_edit(title, &source.source(default_format), format, agent.as_deref())
        }
        PresetKind::Photo { title, capture } => presets.photo(title, format, &capture.capture()),
        PresetKind::VideoEdit {
            title,
            source,
            agent,
            actions,
        } => {
            let labels: Vec<&str> = actions.iter().map(String::as_str).collect();
            presets.video_edit(title, &source.source(default_format), format, agent.as_deref(), &labels)
        }
        PresetKind::Composite {
            title,
            ingredients,
            agent,
        } => {
            if ingredients.is_empty() {
                bail!("composite needs at least one --ingredient");
            }
            presets.composite(title, format, ingredients.clone(), agent.as_deref())
        }
        PresetKind::Screenshot { device, app } => presets.screenshot(device, app.as_deref(), format),
        PresetKind::SocialShare { source, platform } => {
            presets.social_share(&source.source(default_format), platform, format)
        }
        PresetKind::Filtered { source, filter, app } => {
            presets.filtered(&source.source(default_format), filter, format, app.as_deref())
        }
        PresetKind::CreatorVerified {
            title,
            capture,
            identities,
            verified_at,
        } => {
            let accounts = identities.iter().map(|(p, u)| (p.as_str(), u.as_str()));
            let identities = presets.platform_identities(accounts, verified_at.as_deref());
            presets.creator_verified(title, format, &capture.capture(), &identities)
        }
        PresetKind::SocialCreator {
            title,
            platform,
            username,
            verified_at,
        } => presets.social_creator(title, format, platform, username, verified_at.as_deref()),
    };

    Ok(if common.thumbnail {
        add_standard_thumbnail(builder, None, None)
    } else {
        builder
    })
}

/// Execute `provkit preset`.
pub fn run_preset(args: &PresetArgs) -> Result<u8> {
    let builder = build_preset(args)?;
    let document = builder.build_document();
    tracing::debug!(
        assertions = document.assertions.len(),
        ingredients = document.ingredients.len(),
        "preset manifest built"
    );
    let path = args.common.out.as_deref();
    let mut out = crate::open_output(path)?;
    document
        .write_json(&mut out, !args.common.compact)
        .context("writing manifest")?;
    if path.is_none() {
        writeln!(out)?;
    }
    out.flush()?;
    if let Some(path) = path {
        tracing::info!(path = %path.display(), "wrote manifest");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::Value;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        preset: PresetArgs,
    }

    fn args(argv: &[&str]) -> PresetArgs {
        let mut full = vec!["preset"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().preset
    }

    fn json(argv: &[&str]) -> Value {
        build_preset(&args(argv)).unwrap().build()
    }

    #[test]
    fn ingredient_parser_splits_on_last_equals() {
        let ingredient = parse_ingredient("a=b.jpg=image/jpeg").unwrap();
        assert_eq!(ingredient.title.as_deref(), Some("a=b.jpg"));
        assert_eq!(ingredient.format, "image/jpeg");
        assert_eq!(ingredient.relationship, "componentOf");
    }

    #[test]
    fn ingredient_parser_rejects_missing_parts() {
        assert!(parse_ingredient("photo.jpg").is_err());
        assert!(parse_ingredient("=image/jpeg").is_err());
        assert!(parse_ingredient("photo.jpg=").is_err());
    }

    #[test]
    fn basic_image_with_generator_and_ta() {
        let value = json(&[
            "basic-image",
            "--title",
            "a.jpg",
            "--ta-url",
            "http://timestamp.digicert.com",
            "--generator",
            "camera-app",
            "--generator-version",
            "3.0",
        ]);
        assert_eq!(value["title"], "a.jpg");
        assert_eq!(value["format"], "image/jpeg");
        assert_eq!(value["claim_generator_info"]["name"], "camera-app");
        assert_eq!(value["claim_generator_info"]["version"], "3.0");
        assert_eq!(value["ta_url"], "http://timestamp.digicert.com");
    }

    #[test]
    fn fixed_clock_stamps_actions() {
        let value = json(&[
            "image-edit",
            "--title",
            "out.jpg",
            "--source-title",
            "in.jpg",
            "--at",
            "2026-02-03T04:05:06Z",
        ]);
        let actions = &value["assertions"][0]["data"]["actions"];
        assert_eq!(actions[0]["action"], "c2pa.edited");
        assert_eq!(actions[0]["when"], "2026-02-03T04:05:06Z");
        assert_eq!(value["ingredients"][0]["title"], "in.jpg");
    }

    #[test]
    fn bad_clock_is_an_error() {
        let err = build_preset(&args(&["basic-image", "--title", "a", "--at", "yesterday"])).unwrap_err();
        assert!(format!("{err:#}").contains("--at"));
    }

    #[test]
    fn photo_with_location() {
        let value = json(&[
            "photo",
            "--title",
            "p.jpg",
            "--device",
            "Pixel 9",
            "--lat",
            "-33.9",
            "--lon",
            "18.4",
            "--place",
            "Cape Town",
        ]);
        let metadata = value["assertions"]
            .as_array()
            .unwrap()
            .iter()
            .find(|a| a["label"] == "c2pa.assertion.metadata")
            .unwrap();
        assert_eq!(metadata["data"]["location"]["name"], "Cape Town");
        assert_eq!(metadata["data"]["location"]["latitude"], -33.9);
    }

    #[test]
    fn composite_requires_ingredients() {
        assert!(build_preset(&args(&["composite", "--title", "c.png"])).is_err());
        let value = json(&[
            "composite",
            "--title",
            "c.png",
            "--format",
            "image/png",
            "--ingredient",
            "a.jpg=image/jpeg",
            "--ingredient",
            "b.png=image/png",
        ]);
        assert_eq!(value["ingredients"].as_array().unwrap().len(), 2);
        assert_eq!(value["format"], "image/png");
    }

    #[test]
    fn video_edit_defaults_to_mp4() {
        let value = json(&["video-edit", "--title", "cut.mp4", "--source-title", "raw.mp4"]);
        assert_eq!(value["format"], "video/mp4");
        assert_eq!(value["ingredients"][0]["format"], "video/mp4");
    }

    #[test]
    fn image_edit_defaults_to_jpeg() {
        let value = json(&["image-edit", "--title", "out.jpg", "--source-title", "in.jpg"]);
        assert_eq!(value["format"], "image/jpeg");
        assert_eq!(value["ingredients"][0]["format"], "image/jpeg");
    }

    #[test]
    fn account_parser_requires_both_parts() {
        assert_eq!(
            parse_account("github=octocat").unwrap(),
            ("github".to_string(), "octocat".to_string())
        );
        assert!(parse_account("octocat").is_err());
        assert!(parse_account("=octocat").is_err());
        assert!(parse_account("github=").is_err());
    }

    #[test]
    fn creator_verified_with_identities() {
        let value = json(&[
            "creator-verified",
            "--title",
            "c.jpg",
            "--author",
            "Ada",
            "--identity",
            "github=ada",
            "--identity",
            "instagram=ada.pics",
            "--at",
            "2026-03-01T00:00:00Z",
        ]);
        let labels: Vec<&str> = value["assertions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, ["c2pa.actions", "c2pa.creative_work", "cawg.identity"]);
        let cawg = &value["assertions"][2]["data"];
        assert_eq!(cawg["validFrom"], "2026-03-01T00:00:00Z");
        let identities = cawg["verifiedIdentities"].as_array().unwrap();
        assert_eq!(identities.len(), 2);
        assert_eq!(identities[0]["uri"], "https://github.com/ada");
        assert_eq!(identities[0]["verifiedAt"], "2026-03-01T00:00:00Z");
        assert_eq!(identities[1]["uri"], "https://www.instagram.com/ada.pics");
    }

    #[test]
    fn creator_verified_without_identities_has_no_credential() {
        let value = json(&["creator-verified", "--title", "c.jpg"]);
        assert_eq!(value["assertions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn video_edit_keeps_action_order() {
        let value = json(&[
            "video-edit",
            "--title",
            "v.mp4",
            "--format",
            "video/mp4",
            "--source-title",
            "raw.mov",
            "--source-format",
            "video/quicktime",
            "--action",
            "c2pa.cropped",
            "--action",
            "c2pa.transcoded",
        ]);
        let labels: Vec<&str> = value["assertions"][0]["data"]["actions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["action"].as_str().unwrap())
            .collect();
        assert_eq!(labels, ["c2pa.opened", "c2pa.cropped", "c2pa.transcoded"]);
    }

    #[test]
    fn thumbnail_flag_attaches_reference() {
        let value = json(&["screenshot", "--device", "Laptop", "--thumbnail"]);
        assert_eq!(value["thumbnail"]["identifier"], "thumbnail.jpg");
    }

    #[test]
    fn run_preset_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("m.json");
        let out_str = out.to_str().unwrap();
        let preset = args(&[
            "social-creator",
            "--title",
            "clip",
            "--platform",
            "github",
            "--username",
            "octocat",
            "--out",
            out_str,
            "--compact",
        ]);
        assert_eq!(run_preset(&preset).unwrap(), 0);
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(!text.contains('\n'));
        assert!(provkit_manifest::ManifestDocument::from_json(&text).is_ok());
    }
}
