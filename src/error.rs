use thiserror::Error;

/// Errors surfaced by individual extraction strategies.
///
/// None of these escape the orchestrator: a failing strategy is treated as
/// "found nothing" and the next strategy in the chain runs.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No JSON-LD block on the page contained a schema.org Recipe
    #[error("no Recipe object found in any JSON-LD script")]
    NoRecipeFound,
}
