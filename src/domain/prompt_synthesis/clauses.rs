//! Clause builders for the descriptive-compositional template family.
//!
//! Each clause is gated on its source attribute and ends with a single trailing
//! space so clauses concatenate without extra joining logic. Clause order is
//! part of the output contract.

use crate::domain::attributes::FormAttributes;

/// Trailing style clause, selected by item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClause {
    MetallicCrest,
    PostageStamp,
    HolographicCard,
    Apparel,
}

impl StyleClause {
    pub fn text(self) -> &'static str {
        match self {
            StyleClause::MetallicCrest => {
                "The style is a metallic, highly-detailed crest, shiny enamel pin or embroidered patch. High quality, volumetric lighting, isolated on a clean background."
            }
            StyleClause::PostageStamp => {
                "The style is a vintage or modern postage stamp, with perforated edges, exact pricing marks, ink cancelations, and beautiful miniature illustration. High resolution, macro photography feel."
            }
            StyleClause::HolographicCard => {
                "The style is a premium holographic trading card, with stats framing, foil reflections, dramatic action poses, and dynamic borders. Collector's edition style."
            }
            StyleClause::Apparel => {
                "The style is high-end athletic apparel or premium sporting goods memorabilia, photorealistic, dramatic studio lighting."
            }
        }
    }
}

/// Assemble the full descriptive prompt for `attrs` with the given style.
pub fn compose(attrs: &FormAttributes, style: StyleClause) -> String {
    let mut prompt = base_clause(attrs);

    if let Some(clause) = country_clause(attrs) {
        prompt.push_str(&clause);
    }
    if let Some(clause) = number_clause(attrs) {
        prompt.push_str(&clause);
    }
    if let Some(clause) = typography_clause(attrs) {
        prompt.push_str(&clause);
    }
    if let Some(clause) = quote_clause(attrs) {
        prompt.push_str(&clause);
    }

    prompt.push_str(style.text());
    prompt
}

pub fn base_clause(attrs: &FormAttributes) -> String {
    format!("A visually stunning FIFA World Cup {}. ", attrs.item_type.id())
}

pub fn country_clause(attrs: &FormAttributes) -> Option<String> {
    attrs.country().map(|country| {
        format!(
            "The design perfectly incorporates the national colors, flag aesthetics, and cultural motifs of {}. ",
            country
        )
    })
}

pub fn number_clause(attrs: &FormAttributes) -> Option<String> {
    attrs.jersey_number.map(|number| {
        format!(
            "The number {} is prominently and stylistically featured in the composition. ",
            number
        )
    })
}

/// Favorite player first, then the submitter's own name.
pub fn typography_clause(attrs: &FormAttributes) -> Option<String> {
    let names: Vec<&str> = [attrs.favorite_player(), attrs.name()].into_iter().flatten().collect();
    if names.is_empty() {
        return None;
    }
    Some(format!("The typography elegantly displays the text: \"{}\". ", names.join(", ")))
}

pub fn quote_clause(attrs: &FormAttributes) -> Option<String> {
    attrs.quotes().map(|quote| format!("Includes the inspirational quote: \"{}\". ", quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attributes::{ItemType, JerseyNumber};

    #[test]
    fn typography_lists_player_before_name() {
        let attrs = FormAttributes::new(ItemType::Badge).with_name("Lee").with_favorite_player("Pelé");
        assert_eq!(
            typography_clause(&attrs).unwrap(),
            "The typography elegantly displays the text: \"Pelé, Lee\". "
        );
    }

    #[test]
    fn typography_with_only_name() {
        let attrs = FormAttributes::new(ItemType::Badge).with_name("Lee");
        assert_eq!(
            typography_clause(&attrs).unwrap(),
            "The typography elegantly displays the text: \"Lee\". "
        );
    }

    #[test]
    fn jersey_number_zero_is_still_featured() {
        let attrs =
            FormAttributes::new(ItemType::Badge).with_jersey_number(JerseyNumber::new(0).unwrap());
        assert!(number_clause(&attrs).unwrap().starts_with("The number 0 is prominently"));
    }

    #[test]
    fn bare_attributes_yield_base_and_style_only() {
        let attrs = FormAttributes::new(ItemType::PlayerCard);
        assert_eq!(
            compose(&attrs, StyleClause::HolographicCard),
            format!(
                "A visually stunning FIFA World Cup player_card. {}",
                StyleClause::HolographicCard.text()
            )
        );
    }
}
