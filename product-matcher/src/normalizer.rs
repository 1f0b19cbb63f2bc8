//! Ingestion-time normalization: canonical colors, absolute image URLs,
//! safe outbound links.
//!
//! Everything here runs once, when a catalog is uploaded, so the match path
//! never has to re-normalize. The same [`canonical_color`] is applied to the
//! query's color filter at match time, which makes color comparison an exact
//! match on canonical values.

use crate::model::{Product, RawProduct};

/// Collapse a free-form color string to the canonical vocabulary.
///
/// Substring families win in this order: the pink family (`pink`, `rose`,
/// `blush`), then `black`, then `white` (`off white` lands here). Anything
/// else comes back trimmed and lowercased, so the function is idempotent on
/// already-canonical input.
pub fn canonical_color(raw: &str) -> String {
    let color = raw.trim().to_lowercase();
    if color.contains("pink") || color.contains("rose") || color.contains("blush") {
        "pink".to_string()
    } else if color.contains("black") {
        "black".to_string()
    } else if color.contains("white") {
        "white".to_string()
    } else {
        color
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Prefix `base` onto a relative image URL. Absolute URLs pass through.
pub fn absolutize_image(base: &str, url: &str) -> String {
    if is_absolute(url) {
        return url.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
}

/// Outbound links must be absolute http(s) URLs or they collapse to `"#"`,
/// so the frontend never renders a broken or unsafe href.
pub fn safe_link(link: Option<&str>) -> String {
    match link.map(str::trim) {
        Some(l) if is_absolute(l) => l.to_string(),
        _ => "#".to_string(),
    }
}

/// Normalize one uploaded product into catalog form.
///
/// Titles are trimmed but otherwise kept verbatim; a product with no title
/// stays in the catalog and is dropped later, at the match sanitization
/// stage, exactly like one with no image.
pub fn normalize_product(raw: RawProduct, asset_base: &str) -> Product {
    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    let color = canonical_color(raw.color.as_deref().unwrap_or(""));
    let image = raw
        .image
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .map(|i| absolutize_image(asset_base, &i));
    let link = safe_link(raw.link.as_deref());

    Product {
        title,
        color,
        image,
        link,
    }
}

/// Normalize a whole uploaded tier.
pub fn normalize_all(raw: Vec<RawProduct>, asset_base: &str) -> Vec<Product> {
    raw.into_iter()
        .map(|p| normalize_product(p, asset_base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pink_family_collapses() {
        assert_eq!(canonical_color("Rose Pink"), "pink");
        assert_eq!(canonical_color("Blush"), "pink");
        assert_eq!(canonical_color("dusty rose"), "pink");
    }

    #[test]
    fn black_and_white_collapse() {
        assert_eq!(canonical_color("Jet Black"), "black");
        assert_eq!(canonical_color("Off White"), "white");
        assert_eq!(canonical_color("WHITE"), "white");
    }

    #[test]
    fn unknown_colors_pass_through_lowercased() {
        assert_eq!(canonical_color("  Navy Blue "), "navy blue");
        assert_eq!(canonical_color("olive"), "olive");
    }

    #[test]
    fn canonical_values_are_fixed_points() {
        for c in ["pink", "black", "white", "navy blue"] {
            assert_eq!(canonical_color(c), c);
        }
    }

    #[test]
    fn relative_images_get_the_base() {
        assert_eq!(
            absolutize_image("https://clotheme.ai", "/img/a.jpg"),
            "https://clotheme.ai/img/a.jpg"
        );
        assert_eq!(
            absolutize_image("https://clotheme.ai/", "img/a.jpg"),
            "https://clotheme.ai/img/a.jpg"
        );
    }

    #[test]
    fn absolute_images_pass_through() {
        let url = "https://cdn.example.com/p/1.jpg";
        assert_eq!(absolutize_image("https://clotheme.ai", url), url);
    }

    #[test]
    fn links_fall_back_to_hash() {
        assert_eq!(safe_link(None), "#");
        assert_eq!(safe_link(Some("")), "#");
        assert_eq!(safe_link(Some("/product/1")), "#");
        assert_eq!(safe_link(Some("javascript:alert(1)")), "#");
        assert_eq!(safe_link(Some("  https://shop.example.com/p/1 ")), "https://shop.example.com/p/1");
    }

    #[test]
    fn normalize_product_applies_all_rules() {
        let raw = RawProduct {
            title: Some("  Satin Slip Dress ".into()),
            color: Some("Rose Pink".into()),
            image: Some("/img/slip.jpg".into()),
            link: None,
        };
        let p = normalize_product(raw, "https://clotheme.ai");
        assert_eq!(p.title, "Satin Slip Dress");
        assert_eq!(p.color, "pink");
        assert_eq!(p.image.as_deref(), Some("https://clotheme.ai/img/slip.jpg"));
        assert_eq!(p.link, "#");
    }

    #[test]
    fn blank_image_becomes_none() {
        let raw = RawProduct {
            title: Some("Tee".into()),
            color: None,
            image: Some("   ".into()),
            link: Some("https://shop.example.com/tee".into()),
        };
        let p = normalize_product(raw, "https://clotheme.ai");
        assert!(p.image.is_none());
        assert_eq!(p.link, "https://shop.example.com/tee");
    }
}
