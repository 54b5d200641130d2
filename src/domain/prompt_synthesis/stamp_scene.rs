//! Fixed-scene template family for stamps.
//!
//! The scene text is a minijinja template with three variables: `country`,
//! `denomination` and `text_description`. The embedded reference scene can be
//! replaced from configuration; replacements are probe-rendered when the scene
//! is built so syntax errors and unknown variables surface at load time.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::assets;
use crate::domain::AppError;
use crate::domain::attributes::FormAttributes;

/// Caption lines beyond this count are dropped.
pub const MAX_CAPTION_LINES: usize = 3;

const PLACEHOLDER_CAPTION: [&str; 2] = ["Geography", "Géographie"];

/// Values substituted when the form leaves a field empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDefaults {
    pub country: String,
    pub denomination: String,
}

#[derive(Debug, Clone)]
pub struct StampScene {
    name: String,
    source: String,
    defaults: SceneDefaults,
}

#[derive(Serialize)]
struct SceneContext<'a> {
    country: &'a str,
    denomination: String,
    text_description: String,
}

impl StampScene {
    /// Build the scene from the template embedded in the binary.
    pub fn reference(defaults: SceneDefaults) -> Result<Self, AppError> {
        let source = assets::text(assets::STAMP_SCENE_TEMPLATE).ok_or_else(|| {
            AppError::config_error(format!(
                "Embedded asset missing: {}",
                assets::STAMP_SCENE_TEMPLATE
            ))
        })?;
        Self::new(assets::STAMP_SCENE_TEMPLATE, source, defaults)
    }

    /// Build the scene from template source, validating it up front.
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        defaults: SceneDefaults,
    ) -> Result<Self, AppError> {
        let scene = Self { name: name.into(), source: source.into(), defaults };

        scene.render(&FormAttributes::default())?;

        Ok(scene)
    }

    pub fn render(&self, attrs: &FormAttributes) -> Result<String, AppError> {
        let context = SceneContext {
            country: attrs.country().unwrap_or(&self.defaults.country),
            denomination: attrs
                .jersey_number
                .map(|number| number.to_string())
                .unwrap_or_else(|| self.defaults.denomination.clone()),
            text_description: text_description(&caption_lines(attrs)),
        };

        env().render_str(&self.source, &context).map_err(|err| self.template_error(err))
    }

    fn template_error(&self, err: impl std::fmt::Display) -> AppError {
        AppError::PromptTemplate { template: self.name.clone(), reason: err.to_string() }
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn env() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

/// Present caption sources in order: name, favorite player, quote.
pub fn caption_lines(attrs: &FormAttributes) -> Vec<&str> {
    [attrs.name(), attrs.favorite_player(), attrs.quotes()]
        .into_iter()
        .flatten()
        .take(MAX_CAPTION_LINES)
        .collect()
}

/// Phrase caption lines for the scene; only the first three lines are used.
pub fn text_description(lines: &[&str]) -> String {
    match lines {
        [] => two_lines(PLACEHOLDER_CAPTION[0], PLACEHOLDER_CAPTION[1]),
        [only] => quoted(only),
        [first, second] => two_lines(first, second),
        [first, second, third, ..] => format!(
            "{} on the first line, {} on the second line and {} on the third line",
            quoted(first),
            quoted(second),
            quoted(third)
        ),
    }
}

fn two_lines(first: &str, second: &str) -> String {
    format!("{} on the first line and {} on the second line", quoted(first), quoted(second))
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}
