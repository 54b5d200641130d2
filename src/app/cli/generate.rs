//! Generate command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::attributes::AttributeArgs;
use crate::app::commands::generate::decode_data_uri;
use crate::domain::AppError;
use crate::{GenerateRequest, GenerateResponse};

pub struct GenerateArgs {
    pub input: AttributeArgs,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub dry_run: bool,
}

pub fn run_generate(config: Option<&Path>, args: GenerateArgs) -> Result<i32, AppError> {
    let attrs = args.input.into_attributes()?;

    if args.dry_run {
        let request = crate::generate_preview(config, &attrs)?;
        println!("{}", request.prompt);
        return Ok(0);
    }

    let response = crate::generate(config, &GenerateRequest::new(attrs))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(if response.is_success() { 0 } else { 1 });
    }

    let image = match &response {
        GenerateResponse::Success { image, .. } => image,
        GenerateResponse::Error { message } => return Err(AppError::image_api(message, None)),
    };

    let (mime_type, bytes) = decode_data_uri(image)?;
    let path = args.output.unwrap_or_else(|| default_output_path(&mime_type));
    fs::write(&path, bytes)?;

    println!("✅ {} Saved to {}", response.message(), path.display());
    Ok(0)
}

fn default_output_path(mime_type: &str) -> PathBuf {
    let extension = match mime_type {
        "image/png" => "png",
        _ => "jpg",
    };
    PathBuf::from(format!("memorabilia-{}.{}", Local::now().format("%Y%m%d-%H%M%S"), extension))
}
