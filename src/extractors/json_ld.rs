use crate::duration::parse_duration;
use crate::error::ExtractError;
use crate::extractors::Extractor;
use crate::ingredient::parse_ingredient_line;
use crate::model::{Ingredient, InstructionStep, PartialRecipe};
use crate::text::decode;
use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit-run regex"));

/// Highest-confidence strategy: schema.org Recipe objects embedded in
/// `application/ld+json` script blocks.
pub struct JsonLdExtractor;

impl Extractor for JsonLdExtractor {
    fn parse(&self, document: &Html) -> Result<PartialRecipe, ExtractError> {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();

        for (index, script) in document.select(&selector).enumerate() {
            let json = match parse_json_block(&script.text().collect::<String>()) {
                Some(json) => json,
                None => {
                    // A broken block never aborts the scan
                    debug!("skipping unparseable JSON-LD block {index}");
                    continue;
                }
            };

            // A block may hold a single object or an array of them
            let candidates = match &json {
                Value::Array(items) => items.as_slice(),
                other => std::slice::from_ref(other),
            };

            for candidate in candidates {
                if let Some(recipe) = find_recipe(candidate) {
                    debug!("found Recipe object in JSON-LD block {index}");
                    return Ok(map_recipe(recipe));
                }
            }
        }

        Err(ExtractError::NoRecipeFound)
    }
}

/// The element itself, or failing that the first qualifying entry of its
/// `@graph` array.
fn find_recipe(candidate: &Value) -> Option<&Value> {
    if is_recipe_type(candidate) {
        return Some(candidate);
    }
    candidate
        .get("@graph")?
        .as_array()?
        .iter()
        .find(|entry| is_recipe_type(entry))
}

/// `@type` may be a scalar or a list; sites disagree on capitalization.
fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(s)) => s.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .any(|t| t.as_str().is_some_and(|s| s.eq_ignore_ascii_case("recipe"))),
        _ => false,
    }
}

fn map_recipe(recipe: &Value) -> PartialRecipe {
    let title = recipe
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| recipe.get("headline").and_then(Value::as_str))
        .map(decode);

    let description = recipe
        .get("description")
        .and_then(Value::as_str)
        .map(decode)
        .filter(|d| !d.is_empty());

    let mut tags = Vec::new();
    collect_tags(recipe.get("recipeCategory"), &mut tags);
    collect_tags(recipe.get("recipeCuisine"), &mut tags);

    PartialRecipe {
        title,
        description,
        image: recipe.get("image").and_then(image_url),
        prep_time_minutes: duration_minutes(recipe.get("prepTime")),
        cook_time_minutes: duration_minutes(recipe.get("cookTime")),
        total_time_minutes: duration_minutes(recipe.get("totalTime")),
        servings: recipe.get("recipeYield").and_then(servings_from_yield),
        tags: (!tags.is_empty()).then_some(tags),
        ingredients: recipe.get("recipeIngredient").map(ingredient_list),
        instructions: recipe.get("recipeInstructions").map(instruction_steps),
    }
}

/// schema.org images come as a bare URL, an ImageObject, or a list of
/// either; lists contribute their first entry.
fn image_url(value: &Value) -> Option<String> {
    let url = match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => return items.first().and_then(image_url),
        Value::Object(_) => value
            .get("url")
            .and_then(Value::as_str)
            .or_else(|| value.get("@id").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    };
    url.filter(|u| !u.trim().is_empty())
}

fn duration_minutes(value: Option<&Value>) -> Option<u32> {
    value
        .and_then(Value::as_str)
        .map(|s| parse_duration(Some(s)))
}

/// First run of digits in the yield's string form; `["4 servings", "4"]`
/// style arrays contribute their first entry.
fn servings_from_yield(value: &Value) -> Option<u32> {
    let first = match value {
        Value::Array(items) => items.first()?,
        other => other,
    };
    let text = match first {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    DIGIT_RUN
        .find(&text)
        .and_then(|m| m.as_str().parse().ok())
        .filter(|&servings| servings > 0)
}

fn collect_tags(value: Option<&Value>, tags: &mut Vec<String>) {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => tags.push(decode(s)),
        Some(Value::Array(items)) => {
            for item in items {
                if let Some(s) = item.as_str() {
                    if !s.trim().is_empty() {
                        tags.push(decode(s));
                    }
                }
            }
        }
        _ => {}
    }
}

fn ingredient_list(value: &Value) -> Vec<Ingredient> {
    let entries = match value {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };
    entries
        .iter()
        .filter_map(Value::as_str)
        .filter(|line| !line.trim().is_empty())
        .map(parse_ingredient_line)
        .collect()
}

/// Instruction entries are free-text strings or HowToStep-style objects;
/// objects contribute `text`, falling back to `name`. Entries that trim to
/// nothing are dropped.
fn instruction_steps(value: &Value) -> Vec<InstructionStep> {
    let entries = match value {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };
    entries
        .iter()
        .filter_map(|entry| {
            let text = match entry {
                Value::String(s) => Some(s.as_str()),
                Value::Object(_) => entry
                    .get("text")
                    .and_then(Value::as_str)
                    .or_else(|| entry.get("name").and_then(Value::as_str)),
                _ => None,
            }?;
            let instruction = decode(text).trim().to_string();
            (!instruction.is_empty()).then_some(InstructionStep { instruction })
        })
        .collect()
}

/// Parse a script block, trying the raw payload first. Only blocks the
/// JSON parser rejects go through the sanitize pass, so well-formed data
/// is never rewritten.
fn parse_json_block(raw: &str) -> Option<Value> {
    serde_json::from_str(raw.trim())
        .ok()
        .or_else(|| serde_json::from_str(&sanitize_json(raw)).ok())
}

/// Strip the wrappers CMSes like to leave around script payloads and drop
/// trailing commas, tracking string state so string contents are never
/// touched.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim();
    for wrapper in ["<!--", "//<![CDATA[", "<![CDATA["] {
        cleaned = cleaned.strip_prefix(wrapper).unwrap_or(cleaned).trim_start();
    }
    for wrapper in ["-->", "//]]>", "]]>"] {
        cleaned = cleaned.strip_suffix(wrapper).unwrap_or(cleaned).trim_end();
    }

    let mut out = String::with_capacity(cleaned.len());
    let mut in_string = false;
    let mut escaped = false;
    for c in cleaned.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ']' | '}' => {
                // Trailing comma before a closer, whitespace tolerated
                let kept = out.trim_end().len();
                if out[..kept].ends_with(',') {
                    out.truncate(kept - 1);
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
