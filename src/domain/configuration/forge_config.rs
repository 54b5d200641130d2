//! Forge configuration domain models.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::intro::{FlagEntry, PhaseTable, SequenceTiming, VignetteEntry};

const SUPPORTED_ASPECT_RATIOS: [&str; 5] = ["1:1", "3:4", "4:3", "9:16", "16:9"];
const SUPPORTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Configuration loaded from `memforge.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    /// Image generation API configuration.
    #[serde(default)]
    pub imagen: ImagenApiConfig,
    /// Prompt synthesis configuration.
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    /// Presentation sequence configuration.
    #[serde(default)]
    pub intro: IntroConfig,
}

impl ForgeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.imagen.validate()?;
        self.synthesis.validate()?;
        self.intro.validate()?;
        Ok(())
    }
}

/// Image generation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImagenApiConfig {
    /// Base URL of the models collection.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Output aspect ratio.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    /// Output raster encoding.
    #[serde(default = "default_output_mime_type")]
    pub output_mime_type: String,
}

impl Default for ImagenApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            aspect_ratio: default_aspect_ratio(),
            output_mime_type: default_output_mime_type(),
        }
    }
}

impl ImagenApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("imagen.timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("imagen.model must not be empty"));
        }
        if !SUPPORTED_ASPECT_RATIOS.contains(&self.aspect_ratio.as_str()) {
            return Err(AppError::config_error(format!(
                "imagen.aspect_ratio '{}' is not supported (expected one of {})",
                self.aspect_ratio,
                SUPPORTED_ASPECT_RATIOS.join(", ")
            )));
        }
        if !SUPPORTED_MIME_TYPES.contains(&self.output_mime_type.as_str()) {
            return Err(AppError::config_error(format!(
                "imagen.output_mime_type '{}' is not supported (expected one of {})",
                self.output_mime_type,
                SUPPORTED_MIME_TYPES.join(", ")
            )));
        }
        Ok(())
    }

    /// Prediction endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let mut base = self.api_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        // The "./" prefix keeps the model id from being parsed as a URL scheme.
        base.join(&format!("./{}:predict", self.model)).map_err(|err| {
            AppError::config_error(format!("Invalid imagen endpoint for '{}': {}", self.model, err))
        })
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/models/")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

fn default_output_mime_type() -> String {
    "image/jpeg".to_string()
}

/// Template used for the stamp category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampTemplateMode {
    /// Fixed vintage stamp scene with substituted values.
    #[default]
    Scene,
    /// Gated clauses with the postage stamp style clause.
    Descriptive,
}

/// Prompt synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    #[serde(default)]
    pub stamp_template: StampTemplateMode,
    /// Country printed on a stamp when the form leaves it empty.
    #[serde(default = "default_country")]
    pub default_country: String,
    /// Denomination printed on a stamp when no jersey number is given.
    #[serde(default = "default_denomination")]
    pub default_denomination: String,
    /// Replacement minijinja source for the stamp scene.
    #[serde(default)]
    pub stamp_scene_template: Option<String>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            stamp_template: StampTemplateMode::default(),
            default_country: default_country(),
            default_denomination: default_denomination(),
            stamp_scene_template: None,
        }
    }
}

impl SynthesisConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_country.trim().is_empty() {
            return Err(AppError::config_error("synthesis.default_country must not be empty"));
        }
        if self.default_denomination.trim().is_empty() {
            return Err(AppError::config_error("synthesis.default_denomination must not be empty"));
        }
        Ok(())
    }
}

fn default_country() -> String {
    "Canada".to_string()
}

fn default_denomination() -> String {
    "15".to_string()
}

/// Presentation sequence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntroConfig {
    #[serde(default = "default_lead_in_ms")]
    pub lead_in_ms: u64,
    #[serde(default = "default_vignette_hold_ms")]
    pub vignette_hold_ms: u64,
    #[serde(default = "default_flag_hold_ms")]
    pub flag_hold_ms: u64,
    /// Blank hold before completion when no flags are configured; 0 completes immediately.
    #[serde(default = "default_empty_flag_hold_ms")]
    pub empty_flag_hold_ms: u64,
    /// Vignette entries; the embedded reference table is used when absent.
    #[serde(default)]
    pub vignettes: Option<Vec<VignetteEntry>>,
    #[serde(default)]
    pub flags: Vec<FlagEntry>,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            lead_in_ms: default_lead_in_ms(),
            vignette_hold_ms: default_vignette_hold_ms(),
            flag_hold_ms: default_flag_hold_ms(),
            empty_flag_hold_ms: default_empty_flag_hold_ms(),
            vignettes: None,
            flags: Vec::new(),
        }
    }
}

impl IntroConfig {
    /// Upper bound for every `*_ms` hold.
    pub const MAX_HOLD_MS: u64 = 60_000;

    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("lead_in_ms", self.lead_in_ms),
            ("vignette_hold_ms", self.vignette_hold_ms),
            ("flag_hold_ms", self.flag_hold_ms),
            ("empty_flag_hold_ms", self.empty_flag_hold_ms),
        ] {
            if value > Self::MAX_HOLD_MS {
                return Err(AppError::config_error(format!(
                    "intro.{} must be at most {}, got {}",
                    key,
                    Self::MAX_HOLD_MS,
                    value
                )));
            }
        }
        if self.vignette_hold_ms == 0 {
            return Err(AppError::config_error("intro.vignette_hold_ms must be greater than 0"));
        }
        if self.flag_hold_ms == 0 {
            return Err(AppError::config_error("intro.flag_hold_ms must be greater than 0"));
        }
        for (index, entry) in self.vignettes.iter().flatten().enumerate() {
            if entry.icon.trim().is_empty() || entry.caption.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "intro.vignettes[{}] must have a non-empty icon and caption",
                    index
                )));
            }
        }
        for (index, entry) in self.flags.iter().enumerate() {
            if entry.image_key.trim().is_empty() || entry.label.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "intro.flags[{}] must have a non-empty image_key and label",
                    index
                )));
            }
        }
        Ok(())
    }

    pub fn timing(&self) -> SequenceTiming {
        SequenceTiming {
            lead_in: Duration::from_millis(self.lead_in_ms),
            vignette_hold: Duration::from_millis(self.vignette_hold_ms),
            flag_hold: Duration::from_millis(self.flag_hold_ms),
            empty_flag_hold: Duration::from_millis(self.empty_flag_hold_ms),
        }
    }

    /// Build the phase table, filling vignettes from `reference` when unset.
    pub fn table(&self, reference: &PhaseTable) -> PhaseTable {
        let vignettes = self.vignettes.clone().unwrap_or_else(|| reference.vignettes.clone());
        PhaseTable::new(vignettes, self.flags.clone())
    }
}

fn default_lead_in_ms() -> u64 {
    500
}

fn default_vignette_hold_ms() -> u64 {
    1000
}

fn default_flag_hold_ms() -> u64 {
    100
}

fn default_empty_flag_hold_ms() -> u64 {
    500
}
