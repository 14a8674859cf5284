use crate::error::ExtractError;
use crate::extractors::Extractor;
use crate::model::PartialRecipe;
use crate::text::{collapse_whitespace, decode};
use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("Invalid h1 selector"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("Invalid title selector"));
static OG_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("Invalid og:title selector")
});
static OG_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:image"]"#).expect("Invalid og:image selector")
});
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("Invalid meta description selector")
});

/// Last-resort strategy: page chrome. Tries `<h1>`, `<title>` and Open
/// Graph / meta-description tags; never produces ingredients or steps.
pub struct BasicDataExtractor;

impl BasicDataExtractor {
    fn element_text(&self, document: &Html, selector: &Selector) -> Option<String> {
        document
            .select(selector)
            .next()
            .map(|el| collapse_whitespace(&decode(&el.text().collect::<Vec<_>>().join(" "))))
            .filter(|text| !text.is_empty())
    }

    fn meta_content(&self, document: &Html, selector: &Selector) -> Option<String> {
        document
            .select(selector)
            .find_map(|el| el.value().attr("content"))
            .map(|content| collapse_whitespace(&decode(content)))
            .filter(|content| !content.is_empty())
    }
}

impl Extractor for BasicDataExtractor {
    fn parse(&self, document: &Html) -> Result<PartialRecipe, ExtractError> {
        debug!("attempting generic html extraction");

        let title = self
            .element_text(document, &H1_SELECTOR)
            .or_else(|| self.element_text(document, &TITLE_SELECTOR))
            .or_else(|| self.meta_content(document, &OG_TITLE_SELECTOR));

        Ok(PartialRecipe {
            title,
            description: self.meta_content(document, &META_DESCRIPTION_SELECTOR),
            image: self.meta_content(document, &OG_IMAGE_SELECTOR),
            ..Default::default()
        })
    }
}
