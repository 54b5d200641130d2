//! Structured form attributes collected from the host UI.
//!
//! A `FormAttributes` value is constructed fresh per submission. Optional text
//! fields treat empty or whitespace-only input as absent, so the synthesis
//! engine only ever sees meaningful values.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::AppError;

/// Category of memorabilia to forge.
///
/// Unknown identifiers are preserved as `Other` so the prompt can still name
/// the category; they share the memorabilia style branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    #[default]
    Badge,
    Stamp,
    PlayerCard,
    Memorabilia,
    Other(String),
}

impl ItemType {
    /// Categories offered by the form, in display order.
    pub const KNOWN_IDS: [&'static str; 4] = ["badge", "stamp", "player_card", "memorabilia"];

    /// Wire identifier, as posted by the form.
    pub fn id(&self) -> &str {
        match self {
            ItemType::Badge => "badge",
            ItemType::Stamp => "stamp",
            ItemType::PlayerCard => "player_card",
            ItemType::Memorabilia => "memorabilia",
            ItemType::Other(raw) => raw,
        }
    }
}

impl From<String> for ItemType {
    fn from(value: String) -> Self {
        match value.trim() {
            "" | "badge" => ItemType::Badge,
            "stamp" => ItemType::Stamp,
            "player_card" => ItemType::PlayerCard,
            "memorabilia" => ItemType::Memorabilia,
            other => ItemType::Other(other.to_string()),
        }
    }
}

impl From<ItemType> for String {
    fn from(value: ItemType) -> Self {
        value.id().to_string()
    }
}

impl FromStr for ItemType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ItemType::from(s.to_string()))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Jersey number in the inclusive range 0–99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct JerseyNumber(u8);

impl JerseyNumber {
    pub const MAX: u8 = 99;

    pub fn new(value: u8) -> Result<Self, AppError> {
        if value > Self::MAX {
            return Err(AppError::InvalidAttributes(format!(
                "jerseyNumber must be between 0 and {}, got {}",
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<JerseyNumber> for u8 {
    fn from(value: JerseyNumber) -> Self {
        value.0
    }
}

impl FromStr for JerseyNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<i64>().map_err(|_| {
            AppError::InvalidAttributes(format!("jerseyNumber '{}' is not a whole number", trimmed))
        })?;
        Self::try_from(value)
    }
}

impl TryFrom<i64> for JerseyNumber {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let narrowed = u8::try_from(value).map_err(|_| {
            AppError::InvalidAttributes(format!(
                "jerseyNumber must be between 0 and {}, got {}",
                Self::MAX,
                value
            ))
        })?;
        Self::new(narrowed)
    }
}

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attributes submitted by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAttributes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_type: ItemType,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "jersey_number_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub jersey_number: Option<JerseyNumber>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub favorite_player: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub quotes: Option<String>,
}

impl FormAttributes {
    pub fn new(item_type: ItemType) -> Self {
        Self { item_type, ..Self::default() }
    }

    /// Parse the JSON object posted by the form.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|err| AppError::InvalidAttributes(err.to_string()))
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = non_blank(country.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_blank(name.into());
        self
    }

    pub fn with_jersey_number(mut self, number: JerseyNumber) -> Self {
        self.jersey_number = Some(number);
        self
    }

    pub fn with_favorite_player(mut self, player: impl Into<String>) -> Self {
        self.favorite_player = non_blank(player.into());
        self
    }

    pub fn with_quotes(mut self, quotes: impl Into<String>) -> Self {
        self.quotes = non_blank(quotes.into());
        self
    }

    pub fn country(&self) -> Option<&str> {
        present(&self.country)
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn favorite_player(&self) -> Option<&str> {
        present(&self.favorite_player)
    }

    pub fn quotes(&self) -> Option<&str> {
        present(&self.quotes)
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

// Struct literals can bypass the builders, so accessors re-check blankness.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(non_blank))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawJerseyNumber {
    Number(i64),
    Text(String),
}

fn jersey_number_field<'de, D>(deserializer: D) -> Result<Option<JerseyNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawJerseyNumber>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawJerseyNumber::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawJerseyNumber::Text(text)) => {
            text.parse::<JerseyNumber>().map(Some).map_err(serde::de::Error::custom)
        }
        Some(RawJerseyNumber::Number(value)) => {
            JerseyNumber::try_from(value).map(Some).map_err(serde::de::Error::custom)
        }
    }
}
