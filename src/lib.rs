//! Turn raw web page HTML into a normalized recipe record.
//!
//! Three extraction strategies run in decreasing order of confidence:
//! schema.org JSON-LD, microdata `itemprop` attributes, then generic page
//! chrome (`<h1>`, `<title>`, Open Graph tags). The first strategy that
//! recovers a title wins outright; missing fields are filled with
//! documented defaults. Extraction never fails, even on garbage input.

pub mod duration;
pub mod error;
pub mod extractors;
pub mod ingredient;
pub mod model;
pub mod text;

use log::debug;
use scraper::Html;

use crate::extractors::{BasicDataExtractor, Extractor, JsonLdExtractor, MicroDataExtractor};
use crate::model::{NormalizedRecipe, PartialRecipe};

/// Extract a recipe from an HTML document.
///
/// Always returns a well-formed record; a page with no extractable data
/// still yields the defaults (`"Imported Recipe"`, 4 servings, empty
/// ingredient and instruction lists). Pure function of the input string.
pub fn extract_recipe(html: &str) -> NormalizedRecipe {
    let document = Html::parse_document(html);

    let strategies: [(&str, &dyn Extractor); 3] = [
        ("json-ld", &JsonLdExtractor),
        ("microdata", &MicroDataExtractor),
        ("basic", &BasicDataExtractor),
    ];

    for (name, strategy) in strategies {
        // A strategy error means "found nothing here"; keep going
        let partial = match strategy.parse(&document) {
            Ok(partial) => partial,
            Err(e) => {
                debug!("{name} strategy found nothing: {e}");
                continue;
            }
        };

        // First strategy with a usable title wins wholesale; fields it
        // left blank get defaults, never another strategy's values.
        if partial.has_title() {
            debug!("adopting {name} strategy result");
            return partial.into_normalized();
        }
    }

    PartialRecipe::default().into_normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_ld_takes_priority_over_page_chrome() {
        let html = r#"
            <html>
            <head>
                <title>SEO Page Title</title>
                <script type="application/ld+json">
                    {"@type": "Recipe", "name": "Structured Recipe"}
                </script>
            </head>
            <body><h1>Visible Heading</h1></body>
            </html>
        "#;
        assert_eq!(extract_recipe(html).title, "Structured Recipe");
    }

    #[test]
    fn empty_page_gets_full_defaults() {
        let recipe = extract_recipe("<html><body><div>ad ad ad</div></body></html>");
        assert_eq!(recipe.title, "Imported Recipe");
        assert_eq!(recipe.servings, 4);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = r#"
            <html><head><script type="application/ld+json">
                {"@type": "Recipe", "name": "Same Every Time", "recipeYield": "6"}
            </script></head><body></body></html>
        "#;
        assert_eq!(extract_recipe(html), extract_recipe(html));
    }

    #[test]
    fn winning_strategy_is_not_merged_with_later_ones() {
        // JSON-LD hit with no image; the og:image below must NOT leak in
        let html = r#"
            <html>
            <head>
                <meta property="og:image" content="https://example.com/chrome.jpg">
                <script type="application/ld+json">
                    {"@type": "Recipe", "name": "No Image Recipe"}
                </script>
            </head>
            <body></body>
            </html>
        "#;
        let recipe = extract_recipe(html);
        assert_eq!(recipe.title, "No Image Recipe");
        assert_eq!(recipe.image, None);
    }
}
