use std::fmt;

use serde::Serialize;

use super::clauses::{self, StyleClause};
use super::stamp_scene::{SceneDefaults, StampScene};
use crate::domain::attributes::{FormAttributes, ItemType};
use crate::domain::configuration::{StampTemplateMode, SynthesisConfig};
use crate::domain::AppError;

/// Prompt text ready to be forwarded to the image generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PromptText(String);

impl PromptText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PromptText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Template selected for one item category.
#[derive(Debug, Clone, Copy)]
pub enum CategoryTemplate<'a> {
    /// Gated clauses followed by a category style clause.
    Descriptive(StyleClause),
    /// Fixed stamp scene with substituted values.
    Scene(&'a StampScene),
}

impl CategoryTemplate<'_> {
    pub fn render(&self, attrs: &FormAttributes) -> String {
        match self {
            CategoryTemplate::Descriptive(style) => clauses::compose(attrs, *style),
            CategoryTemplate::Scene(scene) => scene.render(attrs).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stamp scene render failed, using descriptive stamp");
                clauses::compose(attrs, StyleClause::PostageStamp)
            }),
        }
    }
}

/// Maps form attributes to prompt text.
///
/// Synthesis is total and deterministic: missing optional fields drop their
/// clause or fall back to scene defaults, and identical input always produces
/// identical text.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    stamp_scene: Option<StampScene>,
}

impl Synthesizer {
    pub fn new(config: &SynthesisConfig) -> Result<Self, AppError> {
        let stamp_scene = match config.stamp_template {
            StampTemplateMode::Descriptive => None,
            StampTemplateMode::Scene => {
                let defaults = SceneDefaults {
                    country: config.default_country.clone(),
                    denomination: config.default_denomination.clone(),
                };
                let scene = match &config.stamp_scene_template {
                    Some(source) => {
                        StampScene::new("synthesis.stamp_scene_template", source, defaults)?
                    }
                    None => StampScene::reference(defaults)?,
                };
                Some(scene)
            }
        };

        Ok(Self { stamp_scene })
    }

    /// Synthesizer with the built-in reference configuration.
    pub fn reference() -> Result<Self, AppError> {
        Self::new(&SynthesisConfig::default())
    }

    pub fn template_for(&self, item_type: &ItemType) -> CategoryTemplate<'_> {
        match item_type {
            ItemType::Badge => CategoryTemplate::Descriptive(StyleClause::MetallicCrest),
            ItemType::PlayerCard => CategoryTemplate::Descriptive(StyleClause::HolographicCard),
            ItemType::Stamp => match &self.stamp_scene {
                Some(scene) => CategoryTemplate::Scene(scene),
                None => CategoryTemplate::Descriptive(StyleClause::PostageStamp),
            },
            ItemType::Memorabilia | ItemType::Other(_) => {
                CategoryTemplate::Descriptive(StyleClause::Apparel)
            }
        }
    }

    pub fn synthesize(&self, attrs: &FormAttributes) -> PromptText {
        PromptText(self.template_for(&attrs.item_type).render(attrs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attributes::JerseyNumber;

    fn reference() -> Synthesizer {
        Synthesizer::reference().unwrap()
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack.find(needle).unwrap_or_else(|| panic!("'{}' not found in '{}'", needle, haystack))
    }

    #[test]
    fn france_badge_clauses_in_order() {
        let attrs = FormAttributes::new(ItemType::Badge)
            .with_country("France")
            .with_jersey_number(JerseyNumber::new(10).unwrap())
            .with_favorite_player("Zidane")
            .with_quotes("Allez les Bleus");
        let prompt = reference().synthesize(&attrs);
        let text = prompt.as_str();

        let base = position(text, "A visually stunning FIFA World Cup badge. ");
        let country = position(text, "cultural motifs of France. ");
        let number = position(text, "The number 10 is prominently");
        let names = position(text, "displays the text: \"Zidane\". ");
        let quote = position(text, "inspirational quote: \"Allez les Bleus\". ");
        let style = position(text, "metallic, highly-detailed crest");

        assert!(base < country && country < number && number < names);
        assert!(names < quote && quote < style);
        assert!(text.ends_with("isolated on a clean background."));
    }

    #[test]
    fn empty_optional_fields_yield_base_and_style() {
        let synthesizer = reference();
        for (item, style) in [
            (ItemType::Badge, StyleClause::MetallicCrest),
            (ItemType::PlayerCard, StyleClause::HolographicCard),
            (ItemType::Memorabilia, StyleClause::Apparel),
        ] {
            let text = synthesizer.synthesize(&FormAttributes::new(item.clone())).into_string();
            let expected = format!("A visually stunning FIFA World Cup {}. {}", item, style.text());
            assert_eq!(text, expected);
        }
    }

    #[test]
    fn unknown_item_type_uses_apparel_style() {
        let attrs = FormAttributes::new(ItemType::Other("scarf".to_string()));
        let text = reference().synthesize(&attrs).into_string();

        assert!(text.starts_with("A visually stunning FIFA World Cup scarf. "));
        assert!(text.ends_with(StyleClause::Apparel.text()));
    }

    #[test]
    fn padded_unknown_item_type_is_named_without_padding() {
        let attrs = FormAttributes::from_json(r#"{"itemType":" scarf "}"#).unwrap();
        let text = reference().synthesize(&attrs).into_string();

        assert!(text.starts_with("A visually stunning FIFA World Cup scarf. "));
    }

    #[test]
    fn stamp_with_single_name_uses_scene_defaults() {
        let attrs = FormAttributes::new(ItemType::Stamp)
            .with_name("Lee")
            .with_favorite_player("")
            .with_quotes("");
        let text = reference().synthesize(&attrs).into_string();

        assert!(text.contains("lettering reads \"Lee\"."));
        assert!(text.contains("the label \"Canada\""));
        assert!(text.contains("stylized outline of Canada"));
        assert!(text.contains("\"15\""));
        assert!(!text.contains("on the first line"));
    }

    #[test]
    fn descriptive_stamp_mode_uses_postage_style() {
        let config = SynthesisConfig {
            stamp_template: StampTemplateMode::Descriptive,
            ..SynthesisConfig::default()
        };
        let synthesizer = Synthesizer::new(&config).unwrap();
        let attrs = FormAttributes::new(ItemType::Stamp).with_country("Ghana");
        let text = synthesizer.synthesize(&attrs).into_string();

        assert!(text.starts_with("A visually stunning FIFA World Cup stamp. "));
        assert!(text.contains("cultural motifs of Ghana. "));
        assert!(text.ends_with(StyleClause::PostageStamp.text()));
    }

    #[test]
    fn configured_scene_defaults_are_used() {
        let config = SynthesisConfig {
            default_country: "Mexico".to_string(),
            default_denomination: "26".to_string(),
            ..SynthesisConfig::default()
        };
        let synthesizer = Synthesizer::new(&config).unwrap();
        let text = synthesizer.synthesize(&FormAttributes::new(ItemType::Stamp)).into_string();

        assert!(text.contains("the label \"Mexico\""));
        assert!(text.contains("The denomination \"26\""));
    }

    #[test]
    fn invalid_scene_override_fails_construction() {
        let config = SynthesisConfig {
            stamp_scene_template: Some("{{ missing_variable }}".to_string()),
            ..SynthesisConfig::default()
        };
        assert!(matches!(Synthesizer::new(&config), Err(AppError::PromptTemplate { .. })));
    }

    #[test]
    fn synthesis_is_repeatable() {
        let synthesizer = reference();
        let attrs = FormAttributes::new(ItemType::Stamp)
            .with_name("Lee")
            .with_favorite_player("Son")
            .with_quotes("Together");
        assert_eq!(synthesizer.synthesize(&attrs), synthesizer.synthesize(&attrs));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn field() -> impl Strategy<Value = Option<String>> {
            prop::option::of("[A-Za-z][A-Za-z ]{0,11}")
        }

        fn item_type() -> impl Strategy<Value = ItemType> {
            prop_oneof![
                Just(ItemType::Badge),
                Just(ItemType::Stamp),
                Just(ItemType::PlayerCard),
                Just(ItemType::Memorabilia),
                "[a-z]{3,8}".prop_map(ItemType::from),
            ]
        }

        fn attributes() -> impl Strategy<Value = FormAttributes> {
            (item_type(), field(), field(), prop::option::of(0u8..=99), field(), field()).prop_map(
                |(item_type, country, name, number, favorite_player, quotes)| FormAttributes {
                    item_type,
                    country,
                    name,
                    jersey_number: number.map(|n| JerseyNumber::new(n).unwrap()),
                    favorite_player,
                    quotes,
                },
            )
        }

        proptest! {
            #[test]
            fn synthesis_is_idempotent(attrs in attributes()) {
                let synthesizer = reference();
                prop_assert_eq!(synthesizer.synthesize(&attrs), synthesizer.synthesize(&attrs));
            }

            #[test]
            fn descriptive_clauses_are_gated_on_presence(
                attrs in attributes().prop_filter("descriptive", |a| a.item_type != ItemType::Stamp)
            ) {
                let text = reference().synthesize(&attrs).into_string();

                prop_assert!(text.starts_with("A visually stunning FIFA World Cup "));
                prop_assert_eq!(text.contains("cultural motifs of"), attrs.country().is_some());
                prop_assert_eq!(text.contains("The number "), attrs.jersey_number.is_some());
                prop_assert_eq!(
                    text.contains("The typography elegantly displays"),
                    attrs.name().is_some() || attrs.favorite_player().is_some()
                );
                prop_assert_eq!(
                    text.contains("Includes the inspirational quote"),
                    attrs.quotes().is_some()
                );
            }

            #[test]
            fn stamp_caption_phrasing_follows_field_count(
                name in field(),
                favorite_player in field(),
                quotes in field(),
            ) {
                let attrs = FormAttributes {
                    item_type: ItemType::Stamp,
                    name,
                    favorite_player,
                    quotes,
                    ..FormAttributes::default()
                };
                let text = reference().synthesize(&attrs).into_string();
                let populated = [attrs.name(), attrs.favorite_player(), attrs.quotes()]
                    .iter()
                    .flatten()
                    .count();

                prop_assert_eq!(text.contains("Geography"), populated == 0);
                prop_assert_eq!(text.contains("on the first line"), populated != 1);
                prop_assert_eq!(text.contains("on the third line"), populated == 3);
                prop_assert!(text.contains("\"15\""));
            }
        }
    }
}
