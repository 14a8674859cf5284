use serde::{Deserialize, Serialize};

/// Fully-defaulted recipe record handed back to the caller.
///
/// Every extraction produces one of these; fields a strategy could not
/// recover are filled with documented defaults instead of being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecipe {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub total_time_minutes: u32,
    pub servings: u32,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
}

/// One parsed ingredient line. `amount`/`unit` are present only when the
/// line led with a recognizable quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub instruction: String,
}

/// Intermediate result produced by a single extraction strategy, before the
/// orchestrator applies defaults. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialRecipe {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub total_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<Vec<InstructionStep>>,
}

impl PartialRecipe {
    /// A strategy "hit" is a result carrying a non-blank title; anything
    /// else makes the orchestrator fall through to the next strategy.
    pub fn has_title(&self) -> bool {
        self.title
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn into_normalized(self) -> NormalizedRecipe {
        NormalizedRecipe {
            title: self
                .title
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: self.description.filter(|d| !d.is_empty()),
            image: self.image.filter(|i| !i.is_empty()),
            prep_time_minutes: self.prep_time_minutes.unwrap_or(0),
            cook_time_minutes: self.cook_time_minutes.unwrap_or(0),
            total_time_minutes: self.total_time_minutes.unwrap_or(0),
            servings: self.servings.filter(|&s| s > 0).unwrap_or(DEFAULT_SERVINGS),
            tags: self.tags.unwrap_or_default(),
            ingredients: self.ingredients.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
        }
    }
}

/// Title used when no strategy recovers one from the page.
pub const DEFAULT_TITLE: &str = "Imported Recipe";

/// Servings used when the page carries no usable yield.
pub const DEFAULT_SERVINGS: u32 = 4;
