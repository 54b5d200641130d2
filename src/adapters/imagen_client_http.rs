//! Imagen prediction client implementation using reqwest.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ImagenApiConfig};
use crate::ports::{GeneratedImage, ImageGenerator, ImageRequest};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Image generation request failed";

/// HTTP transport for the Imagen `:predict` endpoint.
///
/// One request per call, always for a single sample. Failures are not retried.
#[derive(Clone)]
pub struct HttpImagenClient {
    api_key: String,
    endpoint: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpImagenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImagenClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpImagenClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ImagenApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::image_api(format!("Failed to create HTTP client: {}", e), None)
            })?;

        Ok(Self { api_key, endpoint: config.endpoint()?, model: config.model.clone(), client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env_with_config(config: &ImagenApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &PredictRequest<'_>) -> Result<PredictResponse, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::image_api(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| {
                AppError::image_api(
                    format!("Failed to parse response: {}", e),
                    Some(status.as_u16()),
                )
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::image_api(message, Some(status.as_u16())))
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [Instance<'a>; 1],
    parameters: Parameters<'a>,
}

#[derive(Debug, Serialize)]
struct Instance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters<'a> {
    sample_count: u32,
    aspect_ratio: &'a str,
    output_options: OutputOptions<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions<'a> {
    mime_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    rai_filtered_reason: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ImageGenerator for HttpImagenClient {
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError> {
        tracing::info!(
            model = %self.model,
            prompt_len = request.prompt.len(),
            prompt = %request.prompt,
            "sending prompt to image model"
        );

        let api_request = PredictRequest {
            instances: [Instance { prompt: &request.prompt }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: &request.aspect_ratio,
                output_options: OutputOptions { mime_type: &request.output_mime_type },
            },
        };

        let response = self.send_request(&api_request)?;
        let prediction = response.predictions.into_iter().next();

        let (payload, mime_type) = match prediction {
            Some(Prediction { bytes_base64_encoded: Some(data), mime_type, .. })
                if !data.is_empty() =>
            {
                (data, mime_type)
            }
            Some(Prediction { rai_filtered_reason: Some(reason), .. }) => {
                return Err(AppError::image_api(format!("Image was filtered: {}", reason), None));
            }
            _ => return Err(AppError::image_api("No image data received from the API", None)),
        };

        STANDARD.decode(payload.as_bytes()).map_err(|e| {
            AppError::image_api(format!("Image payload is not valid base64: {}", e), None)
        })?;

        Ok(GeneratedImage {
            mime_type: mime_type.unwrap_or_else(|| request.output_mime_type.clone()),
            base64_data: payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serial_test::serial;

    const PATH: &str = "/v1beta/models/imagen-test:predict";

    fn config(server: &mockito::Server) -> ImagenApiConfig {
        ImagenApiConfig {
            api_url: Url::parse(&format!("{}/v1beta/models/", server.url())).unwrap(),
            model: "imagen-test".to_string(),
            timeout_secs: 1,
            ..Default::default()
        }
    }

    fn request() -> ImageRequest {
        ImageRequest {
            prompt: "A visually stunning FIFA World Cup badge. ".to_string(),
            aspect_ratio: "1:1".to_string(),
            output_mime_type: "image/jpeg".to_string(),
        }
    }

    #[test]
    fn generate_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "fake-key")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "instances": [{"prompt": "A visually stunning FIFA World Cup badge. "}],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "1:1",
                    "outputOptions": {"mimeType": "image/jpeg"}
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"predictions":[{"bytesBase64Encoded":"AAEC","mimeType":"image/jpeg"}]}"#)
            .expect(1)
            .create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();
        let image = client.generate(&request()).unwrap();

        assert_eq!(image.data_uri(), "data:image/jpeg;base64,AAEC");
        mock.assert();
    }

    #[test]
    fn missing_mime_type_falls_back_to_requested() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"predictions":[{"bytesBase64Encoded":"AAEC"}]}"#)
            .create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();
        let request = ImageRequest { output_mime_type: "image/png".to_string(), ..request() };

        assert_eq!(client.generate(&request).unwrap().mime_type, "image/png");
    }

    #[test]
    fn generate_returns_server_error_on_500() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", PATH).with_status(500).expect(1).create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();
        let err = client.generate(&request()).unwrap_err();

        assert!(matches!(err, AppError::ImageApi { status: Some(500), .. }));
        assert_eq!(err.to_string(), "Server error");
        mock.assert();
    }

    #[test]
    fn generate_fails_fast_on_400() {
        let mut server = mockito::Server::new();
        let mock =
            server.mock("POST", PATH).with_status(400).with_body("Bad Request").expect(1).create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();
        let err = client.generate(&request()).unwrap_err();

        assert_eq!(err.to_string(), "Bad Request");
        mock.assert();
    }

    #[test]
    fn parses_nested_error_message() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"code":403,"message":"API key not valid"}}"#)
            .expect(1)
            .create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();

        match client.generate(&request()).unwrap_err() {
            AppError::ImageApi { message, status } => {
                assert_eq!(status, Some(403));
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn empty_predictions_is_an_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", PATH).with_status(200).with_body("{}").create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();
        let err = client.generate(&request()).unwrap_err();

        assert_eq!(err.to_string(), "No image data received from the API");
    }

    #[test]
    fn filtered_prediction_reports_reason() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"predictions":[{"raiFilteredReason":"safety"}]}"#)
            .create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();
        let err = client.generate(&request()).unwrap_err();

        assert_eq!(err.to_string(), "Image was filtered: safety");
    }

    #[test]
    fn invalid_base64_payload_is_rejected() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"predictions":[{"bytesBase64Encoded":"not base64!"}]}"#)
            .create();

        let client = HttpImagenClient::new("fake-key".to_string(), &config(&server)).unwrap();
        assert!(client.generate(&request()).is_err());
    }

    #[test]
    #[serial]
    fn from_env_requires_api_key() {
        let saved = std::env::var(API_KEY_ENV).ok();
        unsafe { std::env::remove_var(API_KEY_ENV) };

        let err = HttpImagenClient::from_env_with_config(&ImagenApiConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::EnvironmentVariableMissing(ref name) if name == API_KEY_ENV
        ));

        if let Some(value) = saved {
            unsafe { std::env::set_var(API_KEY_ENV, value) };
        }
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client =
            HttpImagenClient::new("secret-key".to_string(), &ImagenApiConfig::default()).unwrap();
        let debug = format!("{:?}", client);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-key"));
    }
}
