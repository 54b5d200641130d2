//! Image generation port definition.

use crate::domain::AppError;

/// Request for a single generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Finalized prompt text.
    pub prompt: String,
    /// Aspect ratio, e.g. "1:1".
    pub aspect_ratio: String,
    /// Raster encoding of the output, e.g. "image/jpeg".
    pub output_mime_type: String,
}

/// One encoded image returned by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// MIME type of the encoded bytes.
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub base64_data: String,
}

impl GeneratedImage {
    /// Render as a `data:` URI suitable for direct display.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

/// Port for the external image generation call.
pub trait ImageGenerator {
    /// Generate exactly one image for the request. Performs a single attempt.
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError>;
}
