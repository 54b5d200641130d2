//! Prompt Synthesis Engine.
//!
//! Maps `FormAttributes` to prompt text through a per-category template:
//! gated descriptive clauses for badges, cards and gear, and a fixed scene for
//! stamps.

pub mod clauses;
pub mod stamp_scene;
mod synthesizer;

pub use clauses::StyleClause;
pub use stamp_scene::{SceneDefaults, StampScene};
pub use synthesizer::{CategoryTemplate, PromptText, Synthesizer};
