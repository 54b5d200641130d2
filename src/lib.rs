//! memforge: synthesize World Cup memorabilia prompts and forge them into images.

pub mod adapters;
pub mod app;
pub mod assets;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::io;
use std::path::Path;

use adapters::{HttpImagenClient, TerminalPhaseRenderer};
use app::AppContext;
use app::commands::generate::{GenerateService, image_request};
use app::commands::{intro, prompt};
use ports::ImageRequest;

pub use app::commands::generate::{GenerateRequest, GenerateResponse};
pub use app::commands::intro::{IntroOptions, IntroOutcome};
pub use domain::{AppError, FormAttributes, ItemType, JerseyNumber, PromptText};

fn load_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let cwd = std::env::current_dir()?;
    AppContext::load(config_path, &cwd)
}

// =============================================================================
// Prompt Synthesis API
// =============================================================================

/// Synthesize the image prompt for `attrs`.
pub fn prompt(config_path: Option<&Path>, attrs: &FormAttributes) -> Result<PromptText, AppError> {
    let ctx = load_context(config_path)?;
    Ok(prompt::execute(&ctx, attrs))
}

// =============================================================================
// Generate API
// =============================================================================

/// Build the request that `generate` would send, without calling the API.
pub fn generate_preview(
    config_path: Option<&Path>,
    attrs: &FormAttributes,
) -> Result<ImageRequest, AppError> {
    let ctx = load_context(config_path)?;
    Ok(image_request(ctx.synthesizer(), &ctx.config().imagen, attrs))
}

/// Synthesize a prompt and forge it into one image.
///
/// Only configuration loading fails with `Err`. Generation failures, including a
/// missing `GEMINI_API_KEY`, are reported as `GenerateResponse::Error`.
pub fn generate(
    config_path: Option<&Path>,
    request: &GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let ctx = load_context(config_path)?;
    let imagen = &ctx.config().imagen;

    let client = match HttpImagenClient::from_env_with_config(imagen) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "image client unavailable");
            return Ok(GenerateResponse::error(&err));
        }
    };

    Ok(GenerateService::new(ctx.synthesizer(), imagen, client).handle(request))
}

// =============================================================================
// Intro API
// =============================================================================

/// Play the presentation sequence on stdout.
pub fn intro(config_path: Option<&Path>, options: IntroOptions) -> Result<IntroOutcome, AppError> {
    let ctx = load_context(config_path)?;
    intro::execute(&ctx, options, TerminalPhaseRenderer::new(io::stdout()))
}
