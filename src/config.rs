//! Run configuration.

use std::env;
use std::path::{Path, PathBuf};

use genpdf::{PaperSize, Size};
use log::warn;

use crate::flow::{AssetResolver, FlowProfile};
use crate::fonts::FontLocations;
use crate::image_fit::{ImageFitter, DEFAULT_MAX_IMAGE_HEIGHT_MM};

/// Overrides the output directory.
pub const OUTPUT_DIR_ENV: &str = "MANUAL_PDF_OUTPUT_DIR";
/// Overrides the image asset root.
pub const ASSETS_DIR_ENV: &str = "MANUAL_PDF_ASSETS_DIR";
/// Overrides the image height ceiling, in millimetres.
pub const MAX_IMAGE_HEIGHT_ENV: &str = "MANUAL_PDF_MAX_IMAGE_HEIGHT_MM";

/// Settings shared by every language build of one run.
#[derive(Clone, Debug)]
pub struct ManualConfig {
    output_dir: PathBuf,
    assets_dir: PathBuf,
    fonts: FontLocations,
    paper_size: Size,
    margin_mm: f64,
    max_image_height_mm: f64,
    line_spacing: f64,
    profile: FlowProfile,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            assets_dir: PathBuf::from("images"),
            fonts: FontLocations::default(),
            paper_size: PaperSize::A4.into(),
            margin_mm: 20.0,
            max_image_height_mm: DEFAULT_MAX_IMAGE_HEIGHT_MM,
            line_spacing: 1.25,
            profile: FlowProfile::rich(),
        }
    }
}

impl ManualConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the `MANUAL_PDF_*` environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env_path(OUTPUT_DIR_ENV) {
            config.output_dir = dir;
        }
        if let Some(dir) = env_path(ASSETS_DIR_ENV) {
            config.assets_dir = dir;
        }
        if let Ok(value) = env::var(MAX_IMAGE_HEIGHT_ENV) {
            match parse_positive_mm(&value) {
                Some(height) => config.max_image_height_mm = height,
                None => warn!(
                    "Ignoring {}={:?}: expected a positive number of millimetres",
                    MAX_IMAGE_HEIGHT_ENV, value
                ),
            }
        }
        config
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Searches `dir` for fonts before the default locations.
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts = self.fonts.with_fonts_dir(dir);
        self
    }

    pub fn with_font_locations(mut self, fonts: FontLocations) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = paper_size.into();
        self
    }

    /// Uniform page margin in millimetres.
    pub fn with_margin_mm(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    pub fn with_max_image_height_mm(mut self, height_mm: f64) -> Self {
        self.max_image_height_mm = height_mm;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_profile(mut self, profile: FlowProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn font_locations(&self) -> FontLocations {
        self.fonts.clone()
    }

    pub fn paper_size(&self) -> Size {
        self.paper_size
    }

    pub fn margin_mm(&self) -> f64 {
        self.margin_mm
    }

    pub fn max_image_height_mm(&self) -> f64 {
        self.max_image_height_mm
    }

    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    pub fn profile(&self) -> &FlowProfile {
        &self.profile
    }

    pub fn image_fitter(&self) -> ImageFitter {
        ImageFitter::new(self.max_image_height_mm)
    }

    pub fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new(self.assets_dir.clone())
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
}

/// Parses a strictly positive, finite length in millimetres.
pub fn parse_positive_mm(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|mm| mm.is_finite() && *mm > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_manual_layout() {
        let config = ManualConfig::default();
        assert_eq!(config.output_dir(), Path::new("."));
        assert_eq!(config.assets_dir(), Path::new("images"));
        assert_eq!(config.max_image_height_mm(), 180.0);
        assert_eq!(config.margin_mm(), 20.0);
        assert!(config.profile().inline_markup());
    }

    #[test]
    fn setters_chain() {
        let config = ManualConfig::new()
            .with_output_dir("out")
            .with_assets_dir("docs/images")
            .with_max_image_height_mm(150.0)
            .with_profile(FlowProfile::plain());
        assert_eq!(config.output_dir(), Path::new("out"));
        assert_eq!(
            config.asset_resolver().resolve(crate::model::Language::Italian, "main.png"),
            PathBuf::from("docs/images/it/main.png")
        );
        assert_eq!(config.image_fitter().max_height_mm(), 150.0);
        assert!(!config.profile().inline_markup());
    }

    #[test]
    fn parses_positive_lengths_only() {
        assert_eq!(parse_positive_mm(" 150 "), Some(150.0));
        assert_eq!(parse_positive_mm("0"), None);
        assert_eq!(parse_positive_mm("-3"), None);
        assert_eq!(parse_positive_mm("tall"), None);
        assert_eq!(parse_positive_mm("inf"), None);
    }
}
