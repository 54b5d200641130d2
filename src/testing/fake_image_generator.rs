use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{GeneratedImage, ImageGenerator, ImageRequest};

/// Image generator that records requests and replays a canned outcome.
#[derive(Clone)]
pub struct FakeImageGenerator {
    pub requests: Arc<Mutex<Vec<ImageRequest>>>,
    pub failure: Option<(String, Option<u16>)>,
    pub base64_data: String,
}

impl FakeImageGenerator {
    pub fn new(base64_data: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            failure: None,
            base64_data: base64_data.into(),
        }
    }

    pub fn failing(message: impl Into<String>, status: Option<u16>) -> Self {
        Self { failure: Some((message.into(), status)), ..Self::new("") }
    }

    pub fn get_requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ImageGenerator for FakeImageGenerator {
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.failure {
            Some((message, status)) => Err(AppError::image_api(message.clone(), *status)),
            None => Ok(GeneratedImage {
                mime_type: request.output_mime_type.clone(),
                base64_data: self.base64_data.clone(),
            }),
        }
    }
}
