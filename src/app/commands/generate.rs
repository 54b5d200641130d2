//! Generate command: synthesize a prompt and forge it into one image.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, FormAttributes, ImagenApiConfig, Synthesizer};
use crate::ports::{GeneratedImage, ImageGenerator, ImageRequest};

pub const SUCCESS_MESSAGE: &str = "Memorabilia successfully forged.";

/// Request body posted by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt_data: FormAttributes,
}

impl GenerateRequest {
    pub fn new(prompt_data: FormAttributes) -> Self {
        Self { prompt_data }
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|err| AppError::InvalidAttributes(err.to_string()))
    }
}

/// Outcome returned to the caller. Every failure is reported as `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerateResponse {
    Success { image: String, message: String },
    Error { message: String },
}

impl GenerateResponse {
    pub fn success(image: &GeneratedImage) -> Self {
        GenerateResponse::Success { image: image.data_uri(), message: SUCCESS_MESSAGE.to_string() }
    }

    pub fn error(err: &AppError) -> Self {
        GenerateResponse::Error { message: err.to_string() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerateResponse::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            GenerateResponse::Success { message, .. } | GenerateResponse::Error { message } => {
                message
            }
        }
    }

    /// The `data:` URI of a successful response.
    pub fn image(&self) -> Option<&str> {
        match self {
            GenerateResponse::Success { image, .. } => Some(image),
            GenerateResponse::Error { .. } => None,
        }
    }
}

/// Split a `data:<mime>;base64,<payload>` URI into its MIME type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), AppError> {
    let (mime_type, payload) = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .ok_or_else(|| AppError::image_api("Image is not a base64 data URI", None))?;
    let bytes = STANDARD.decode(payload).map_err(|e| {
        AppError::image_api(format!("Image payload is not valid base64: {}", e), None)
    })?;
    Ok((mime_type.to_string(), bytes))
}

/// Build the generation request for `attrs` without sending it.
pub fn image_request(
    synthesizer: &Synthesizer,
    imagen: &ImagenApiConfig,
    attrs: &FormAttributes,
) -> ImageRequest {
    ImageRequest {
        prompt: synthesizer.synthesize(attrs).into_string(),
        aspect_ratio: imagen.aspect_ratio.clone(),
        output_mime_type: imagen.output_mime_type.clone(),
    }
}

/// Runs synthesis and a single image generation call per request.
pub struct GenerateService<'a, G: ImageGenerator> {
    synthesizer: &'a Synthesizer,
    imagen: &'a ImagenApiConfig,
    generator: G,
}

impl<'a, G: ImageGenerator> GenerateService<'a, G> {
    pub fn new(synthesizer: &'a Synthesizer, imagen: &'a ImagenApiConfig, generator: G) -> Self {
        Self { synthesizer, imagen, generator }
    }

    pub fn try_generate(&self, attrs: &FormAttributes) -> Result<GeneratedImage, AppError> {
        self.generator.generate(&image_request(self.synthesizer, self.imagen, attrs))
    }

    pub fn handle(&self, request: &GenerateRequest) -> GenerateResponse {
        match self.try_generate(&request.prompt_data) {
            Ok(image) => GenerateResponse::success(&image),
            Err(err) => {
                tracing::warn!(error = %err, "image generation failed");
                GenerateResponse::error(&err)
            }
        }
    }

    /// Parse a raw request body and handle it; malformed bodies become error responses.
    pub fn handle_json(&self, body: &str) -> GenerateResponse {
        match GenerateRequest::from_json(body) {
            Ok(request) => self.handle(&request),
            Err(err) => {
                tracing::warn!(error = %err, "rejected generate request");
                GenerateResponse::error(&err)
            }
        }
    }
}
