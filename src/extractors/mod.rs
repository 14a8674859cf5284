use crate::error::ExtractError;
use crate::model::PartialRecipe;
use scraper::Html;

mod fallback;
mod json_ld;
mod microdata;

pub use fallback::BasicDataExtractor;
pub use json_ld::JsonLdExtractor;
pub use microdata::MicroDataExtractor;

/// One extraction strategy in the priority chain.
///
/// A strategy reads the parsed document and returns whatever fields it
/// could recover. An `Err` means the same thing as an empty result: the
/// orchestrator moves on to the next strategy, nothing propagates further.
pub trait Extractor {
    fn parse(&self, document: &Html) -> Result<PartialRecipe, ExtractError>;
}
