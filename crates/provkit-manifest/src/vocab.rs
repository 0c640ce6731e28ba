//! # Vocabulary
//!
//! Controlled labels used in manifests: action names, assertion labels,
//! identity types and providers, MIME formats, ingredient relationships,
//! well-known timestamp authorities, and IPTC digital source types.

/// Standard action labels.
pub mod actions {
    /// New content was created.
    pub const CREATED: &str = "c2pa.created";
    /// Content was edited.
    pub const EDITED: &str = "c2pa.edited";
    /// An existing asset was opened.
    pub const OPENED: &str = "c2pa.opened";
    /// An ingredient was placed into the asset.
    pub const PLACED: &str = "c2pa.placed";
    /// Drawing or painting tools were used.
    pub const DRAWING: &str = "c2pa.drawing";
    /// Color or tone was adjusted.
    pub const COLOR_ADJUSTMENTS: &str = "c2pa.color_adjustments";
    /// Dimensions were changed.
    pub const RESIZED: &str = "c2pa.resized";
    /// Content was cropped.
    pub const CROPPED: &str = "c2pa.cropped";
    /// A filter was applied.
    pub const FILTERED: &str = "c2pa.filtered";
    /// Orientation was changed.
    pub const ORIENTATION: &str = "c2pa.orientation";
    /// Encoding changed without changing content.
    pub const TRANSCODED: &str = "c2pa.transcoded";
    /// Content was recompressed.
    pub const RECOMPRESSED: &str = "c2pa.recompressed";
    /// A new version was created.
    pub const VERSION_CREATED: &str = "c2pa.version_created";
    /// Format was converted.
    pub const CONVERTED: &str = "c2pa.converted";
    /// Content was produced.
    pub const PRODUCED: &str = "c2pa.produced";
    /// Content was published.
    pub const PUBLISHED: &str = "c2pa.published";
    /// Content was removed.
    pub const REDACTED: &str = "c2pa.redacted";

    /// Vendor-specific edit actions.
    pub mod adobe {
        /// Edited in Photoshop.
        pub const PHOTOSHOP_EDITED: &str = "adobe.photoshop.edited";
        /// Edited in Illustrator.
        pub const ILLUSTRATOR_EDITED: &str = "adobe.illustrator.edited";
        /// Edited in InDesign.
        pub const INDESIGN_EDITED: &str = "adobe.indesign.edited";
        /// Edited in Lightroom.
        pub const LIGHTROOM_EDITED: &str = "adobe.lightroom.edited";
        /// Edited in Premiere.
        pub const PREMIERE_EDITED: &str = "adobe.premiere.edited";
        /// Edited in After Effects.
        pub const AFTER_EFFECTS_EDITED: &str = "adobe.after_effects.edited";
    }
}

/// Assertion labels.
pub mod assertions {
    /// Creative work attestation.
    pub const CREATIVE_WORK: &str = "c2pa.creative_work";
    /// Action history.
    pub const ACTIONS: &str = "c2pa.actions";
    /// Assertion metadata.
    pub const ASSERTION_METADATA: &str = "c2pa.assertion.metadata";
    /// Thumbnail attestation.
    pub const THUMBNAIL: &str = "c2pa.thumbnail";
    /// Data hash attestation.
    pub const DATA_HASH: &str = "c2pa.data_hash";
    /// Hard binding over asset bytes.
    pub const HASH_DATA: &str = "c2pa.hash.data";
    /// Hard binding for BMFF containers.
    pub const BMFF_HASH: &str = "c2pa.hash.bmff";
    /// EXIF metadata.
    pub const EXIF: &str = "stds.exif";
    /// IPTC metadata.
    pub const IPTC: &str = "stds.iptc";
    /// XMP metadata.
    pub const XMP: &str = "stds.xmp";
    /// schema.org CreativeWork.
    pub const SCHEMA_ORG_CREATIVE_WORK: &str = "stds.schema-org.CreativeWork";
    /// Ingredient assertion.
    pub const INGREDIENT: &str = "c2pa.ingredient";
    /// CAWG identity credential.
    pub const CAWG_IDENTITY: &str = "cawg.identity";
}

/// Kinds of verified identity.
pub mod identity_types {
    /// A social-media account.
    pub const SOCIAL_MEDIA: &str = "cawg.social_media";
    /// An email address.
    pub const EMAIL: &str = "cawg.email";
    /// A phone number.
    pub const PHONE: &str = "cawg.phone";
    /// A website.
    pub const WEBSITE: &str = "cawg.website";
    /// A professional profile.
    pub const PROFESSIONAL: &str = "cawg.professional";
}

/// Identity provider identifiers.
pub mod providers {
    /// Instagram.
    pub const INSTAGRAM: &str = "https://instagram.com";
    /// Behance.
    pub const BEHANCE: &str = "https://behance.net";
    /// LinkedIn.
    pub const LINKEDIN: &str = "https://linkedin.com";
    /// Twitter/X.
    pub const TWITTER: &str = "https://twitter.com";
    /// Facebook.
    pub const FACEBOOK: &str = "https://facebook.com";
    /// YouTube.
    pub const YOUTUBE: &str = "https://youtube.com";
    /// TikTok.
    pub const TIKTOK: &str = "https://tiktok.com";
    /// Snapchat.
    pub const SNAPCHAT: &str = "https://snapchat.com";
    /// Pinterest.
    pub const PINTEREST: &str = "https://pinterest.com";
    /// GitHub.
    pub const GITHUB: &str = "https://github.com";
    /// Dribbble.
    pub const DRIBBBLE: &str = "https://dribbble.com";
    /// ArtStation.
    pub const ARTSTATION: &str = "https://artstation.com";
}

/// MIME types accepted by the engine.
pub mod formats {
    /// JPEG image.
    pub const JPEG: &str = "image/jpeg";
    /// PNG image.
    pub const PNG: &str = "image/png";
    /// WebP image.
    pub const WEBP: &str = "image/webp";
    /// TIFF image.
    pub const TIFF: &str = "image/tiff";
    /// HEIF image.
    pub const HEIF: &str = "image/heif";
    /// AVIF image.
    pub const AVIF: &str = "image/avif";
    /// MPEG-4 video.
    pub const MP4: &str = "video/mp4";
    /// QuickTime video.
    pub const MOV: &str = "video/quicktime";
    /// AVI video.
    pub const AVI: &str = "video/x-msvideo";
    /// PDF document.
    pub const PDF: &str = "application/pdf";
    /// SVG image.
    pub const SVG: &str = "image/svg+xml";
    /// GIF image.
    pub const GIF: &str = "image/gif";
    /// BMP image.
    pub const BMP: &str = "image/bmp";
    /// WebM video.
    pub const WEBM: &str = "video/webm";
    /// Ogg video.
    pub const OGG: &str = "video/ogg";
    /// Matroska video.
    pub const MKV: &str = "video/x-matroska";
}

/// Ingredient relationships.
pub mod relationships {
    /// The asset was derived from this ingredient.
    pub const PARENT_OF: &str = "parentOf";
    /// The ingredient is one part of the asset.
    pub const COMPONENT_OF: &str = "componentOf";
    /// The ingredient contributed to the asset.
    pub const INGREDIENT_OF: &str = "ingredientOf";
    /// An alternate rendition of the asset.
    pub const ALTERNATE_OF: &str = "alternateOf";
}

/// RFC 3161 timestamp authorities.
pub mod timestamp_authorities {
    /// DigiCert.
    pub const DIGICERT: &str = "http://timestamp.digicert.com";
    /// Sectigo.
    pub const SECTIGO: &str = "http://timestamp.sectigo.com";
    /// GlobalSign.
    pub const GLOBALSIGN: &str = "http://timestamp.globalsign.com/tsa/r6advanced1";
    /// Entrust.
    pub const ENTRUST: &str = "http://timestamp.entrust.net/TSS/RFC3161sha2TS";
}

const IPTC_DIGITAL_SOURCE_TYPE: &str = "http://cv.iptc.org/newscodes/digitalsourcetype/";

/// IPTC digital source type: how the content originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitalSourceType {
    /// No source type recorded.
    Empty,
    /// Data used to train a model.
    TrainedAlgorithmicData,
    /// Captured by a digital camera or recorder.
    DigitalCapture,
    /// Captured with computational processing.
    ComputationalCapture,
    /// Scanned from negative film.
    NegativeFilm,
    /// Scanned from positive film.
    PositiveFilm,
    /// Scanned from a print.
    Print,
    /// Edited by a person.
    HumanEdits,
    /// Composite including generated media.
    CompositeWithTrainedAlgorithmicMedia,
    /// Enhanced by an algorithm.
    AlgorithmicallyEnhanced,
    /// Created with digital tools.
    DigitalCreation,
    /// Rendered from data.
    DataDrivenMedia,
    /// Generated by a trained model.
    TrainedAlgorithmicMedia,
    /// Generated by a non-learned algorithm.
    AlgorithmicMedia,
    /// A screen capture.
    ScreenCapture,
    /// Recorded in a virtual environment.
    VirtualRecording,
    /// Combined from several sources.
    Composite,
    /// Combined from several captures.
    CompositeCapture,
    /// Combined from captured and synthetic parts.
    CompositeSynthetic,
}

impl DigitalSourceType {
    /// Every variant, in declaration order.
    pub const ALL: [DigitalSourceType; 19] = [
        Self::Empty,
        Self::TrainedAlgorithmicData,
        Self::DigitalCapture,
        Self::ComputationalCapture,
        Self::NegativeFilm,
        Self::PositiveFilm,
        Self::Print,
        Self::HumanEdits,
        Self::CompositeWithTrainedAlgorithmicMedia,
        Self::AlgorithmicallyEnhanced,
        Self::DigitalCreation,
        Self::DataDrivenMedia,
        Self::TrainedAlgorithmicMedia,
        Self::AlgorithmicMedia,
        Self::ScreenCapture,
        Self::VirtualRecording,
        Self::Composite,
        Self::CompositeCapture,
        Self::CompositeSynthetic,
    ];

    /// The IPTC code, e.g. `digitalCapture`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TrainedAlgorithmicData => "trainedAlgorithmicData",
            Self::DigitalCapture => "digitalCapture",
            Self::ComputationalCapture => "computationalCapture",
            Self::NegativeFilm => "negativeFilm",
            Self::PositiveFilm => "positiveFilm",
            Self::Print => "print",
            Self::HumanEdits => "humanEdits",
            Self::CompositeWithTrainedAlgorithmicMedia => "compositeWithTrainedAlgorithmicMedia",
            Self::AlgorithmicallyEnhanced => "algorithmicallyEnhanced",
            Self::DigitalCreation => "digitalCreation",
            Self::DataDrivenMedia => "dataDrivenMedia",
            Self::TrainedAlgorithmicMedia => "trainedAlgorithmicMedia",
            Self::AlgorithmicMedia => "algorithmicMedia",
            Self::ScreenCapture => "screenCapture",
            Self::VirtualRecording => "virtualRecording",
            Self::Composite => "composite",
            Self::CompositeCapture => "compositeCapture",
            Self::CompositeSynthetic => "compositeSynthetic",
        }
    }

    /// The full controlled-vocabulary URI.
    pub fn uri(&self) -> String {
        format!("{IPTC_DIGITAL_SOURCE_TYPE}{}", self.code())
    }

    /// Look a type up by its full URI.
    pub fn from_uri(uri: &str) -> Option<Self> {
        let code = uri.strip_prefix(IPTC_DIGITAL_SOURCE_TYPE)?;
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for DigitalSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri())
    }
}
