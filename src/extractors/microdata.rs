use crate::error::ExtractError;
use crate::extractors::Extractor;
use crate::model::PartialRecipe;
use crate::text::{collapse_whitespace, decode};
use log::debug;
use scraper::{Html, Selector};

/// Mid-confidence strategy: bare `itemprop` attributes left behind by
/// microdata markup. Recovers name, description and image only.
pub struct MicroDataExtractor;

impl MicroDataExtractor {
    fn itemprop_text(&self, document: &Html, prop: &str) -> Option<String> {
        let selector = Selector::parse(&format!("[itemprop='{prop}']")).unwrap();
        document
            .select(&selector)
            .next()
            .map(|el| collapse_whitespace(&decode(&el.text().collect::<Vec<_>>().join(" "))))
            .filter(|text| !text.is_empty())
    }

    fn itemprop_attr(&self, document: &Html, prop: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(&format!("[itemprop='{prop}']")).unwrap();
        document
            .select(&selector)
            .find_map(|el| el.value().attr(attr))
            .map(|value| decode(value.trim()))
            .filter(|value| !value.is_empty())
    }
}

impl Extractor for MicroDataExtractor {
    fn parse(&self, document: &Html) -> Result<PartialRecipe, ExtractError> {
        debug!("attempting microdata extraction");

        Ok(PartialRecipe {
            title: self.itemprop_text(document, "name"),
            description: self.itemprop_attr(document, "description", "content"),
            image: self.itemprop_attr(document, "image", "src"),
            ..Default::default()
        })
    }
}
