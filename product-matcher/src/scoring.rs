//! Additive relevance scoring for a single product against the query
//! criteria. A product that matches nothing scores zero and is excluded
//! from the results entirely.

use crate::model::Product;

/// Exact canonical color match.
pub const COLOR_WEIGHT: u32 = 5;
/// Category appears as a substring of the title.
pub const CATEGORY_WEIGHT: u32 = 2;
/// Each keyword that appears as a substring of the title.
pub const KEYWORD_WEIGHT: u32 = 1;

/// Score one product.
///
/// `color` and `category` are expected in canonical/lowercased form, as
/// produced at ingestion and by the request mapping. Title matching is
/// case-insensitive via a single lowercase pass.
///
/// When `character_query` is set the category bonus is suppressed: a
/// message like "dress like Eleven from Stranger Things" names a persona,
/// and the generic category term would otherwise drown out the keywords
/// that actually describe the look.
pub fn score_product(
    product: &Product,
    color: Option<&str>,
    category: Option<&str>,
    keywords: &[String],
    character_query: bool,
) -> u32 {
    let title = product.title.to_lowercase();
    let mut score = 0;

    if let Some(color) = color {
        if product.color == color {
            score += COLOR_WEIGHT;
        }
    }

    if !character_query {
        if let Some(category) = category {
            if title.contains(category) {
                score += CATEGORY_WEIGHT;
            }
        }
    }

    for keyword in keywords {
        if title.contains(&keyword.to_lowercase()) {
            score += KEYWORD_WEIGHT;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, color: &str) -> Product {
        Product {
            title: title.to_string(),
            color: color.to_string(),
            image: Some("https://clotheme.ai/img/p.jpg".to_string()),
            link: "#".to_string(),
        }
    }

    #[test]
    fn color_match_is_exact_and_worth_five() {
        let p = product("Satin Slip Dress", "pink");
        assert_eq!(score_product(&p, Some("pink"), None, &[], false), 5);
        assert_eq!(score_product(&p, Some("black"), None, &[], false), 0);
    }

    #[test]
    fn category_matches_title_substring() {
        let p = product("Pleated Midi Dress", "white");
        assert_eq!(score_product(&p, None, Some("dress"), &[], false), 2);
        assert_eq!(score_product(&p, None, Some("skirt"), &[], false), 0);
    }

    #[test]
    fn category_suppressed_for_character_queries() {
        let p = product("Pleated Midi Dress", "white");
        assert_eq!(score_product(&p, None, Some("dress"), &[], true), 0);
    }

    #[test]
    fn keywords_add_one_each_case_insensitive() {
        let p = product("Oversized Denim Jacket", "blue");
        let kws = vec!["DENIM".to_string(), "jacket".to_string(), "satin".to_string()];
        assert_eq!(score_product(&p, None, None, &kws, false), 2);
    }

    #[test]
    fn criteria_stack() {
        let p = product("Pink Satin Slip Dress", "pink");
        let kws = vec!["satin".to_string(), "slip".to_string()];
        assert_eq!(
            score_product(&p, Some("pink"), Some("dress"), &kws, false),
            5 + 2 + 2
        );
    }

    #[test]
    fn no_criteria_scores_zero() {
        let p = product("Anything", "red");
        assert_eq!(score_product(&p, None, None, &[], false), 0);
    }
}
