//! Form attribute flags shared by `prompt` and `generate`.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::app::commands::generate::GenerateRequest;
use crate::domain::{AppError, FormAttributes, ItemType, JerseyNumber};

#[derive(Args, Debug, Default)]
pub struct AttributeArgs {
    /// Item type: badge, stamp, player_card or memorabilia
    #[arg(short, long)]
    pub item: Option<String>,
    /// Country whose colors and motifs to feature
    #[arg(short, long)]
    pub country: Option<String>,
    /// Name to print on the item
    #[arg(short, long)]
    pub name: Option<String>,
    /// Jersey number (0-99)
    #[arg(long, value_parser = parse_jersey_number)]
    pub number: Option<JerseyNumber>,
    /// Favorite player
    #[arg(short, long)]
    pub player: Option<String>,
    /// Inspirational quote
    #[arg(short, long)]
    pub quote: Option<String>,
    /// Read attributes from a JSON file instead of flags
    #[arg(
        short,
        long,
        conflicts_with_all = ["item", "country", "name", "number", "player", "quote"]
    )]
    pub request: Option<PathBuf>,
}

impl AttributeArgs {
    pub fn into_attributes(self) -> Result<FormAttributes, AppError> {
        if let Some(path) = self.request {
            return read_request_file(&fs::read_to_string(&path)?);
        }

        let item_type = self.item.map(ItemType::from).unwrap_or_default();
        let mut attrs = FormAttributes::new(item_type);
        if let Some(country) = self.country {
            attrs = attrs.with_country(country);
        }
        if let Some(name) = self.name {
            attrs = attrs.with_name(name);
        }
        if let Some(number) = self.number {
            attrs = attrs.with_jersey_number(number);
        }
        if let Some(player) = self.player {
            attrs = attrs.with_favorite_player(player);
        }
        if let Some(quote) = self.quote {
            attrs = attrs.with_quotes(quote);
        }
        Ok(attrs)
    }
}

/// Accept either a full `{"prompt_data": {...}}` body or a bare attribute object.
fn read_request_file(content: &str) -> Result<FormAttributes, AppError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.get("prompt_data").is_some() {
        Ok(GenerateRequest::from_json(content)?.prompt_data)
    } else {
        FormAttributes::from_json(content)
    }
}

fn parse_jersey_number(raw: &str) -> Result<JerseyNumber, String> {
    raw.parse::<JerseyNumber>().map_err(|err| err.to_string())
}
