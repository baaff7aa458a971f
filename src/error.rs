use thiserror::Error;

use super::palette::MAX_COLORS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexParseError {
    #[error("expected 6 hex digits, found {0}")]
    Length(usize),
    #[error("invalid hex digit")]
    Digit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown harmony rule '{0}' (must be monochromatic, analogous, complementary or triadic)")]
pub struct RuleParseError(pub String);

#[derive(Error, Debug)]
pub enum HarmonyError {
    #[error("could not parse palette request\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse palette request\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not write palette\n{0}")]
    RonWriteError(#[from] ron::Error),
    #[error("could not parse palette request\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("file access failed\n{0}")]
    IoError(#[from] std::io::Error),
    #[error("file does not have valid extension (must be .json, .ron or .yaml for requests; \
             .json, .ron, .yaml, .css, .txt, .png or .jpg for exports)")]
    ExtensionError,
    #[error("swatch image too large ({count} swatches of {width}x{height} pixels)")]
    SwatchTooLarge { width: u32, height: u32, count: usize },
    #[error("palette request asks for {0} colors (must be between 1 and {max})", max = MAX_COLORS)]
    CountOutOfRange(usize),
    #[error("failed to save swatch image\n{0}")]
    ImageSaveError(#[from] image::ImageError),
}
