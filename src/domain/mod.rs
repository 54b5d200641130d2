pub mod attributes;
pub mod configuration;
pub mod error;
pub mod intro;
pub mod prompt_synthesis;

pub use attributes::{FormAttributes, ItemType, JerseyNumber};
pub use configuration::{ForgeConfig, ImagenApiConfig, IntroConfig, SynthesisConfig};
pub use error::AppError;
pub use prompt_synthesis::{PromptText, Synthesizer};
