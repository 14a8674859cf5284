use crate::model::Ingredient;
use crate::text::decode;
use regex::Regex;
use std::sync::LazyLock;

// Leading quantity: a mixed number ("1 1/2"), a vulgar fraction ("3/4"),
// a decimal ("2.5") or a plain integer, then the rest of the line.
static QUANTITY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<qty>\d+\s+\d+/\d+|\d+/\d+|\d+\.\d+|\d+)\s+(?P<rest>\S.*)$")
        .expect("Invalid ingredient quantity regex")
});

/// Unit words worth splitting off the front of an ingredient name. Matched
/// case-insensitively, with a trailing "s" or "." tolerated ("cups", "tsp.").
const UNIT_WORDS: &[&str] = &[
    "cup",
    "tablespoon",
    "tbsp",
    "teaspoon",
    "tsp",
    "ounce",
    "oz",
    "pound",
    "lb",
    "gram",
    "g",
    "kilogram",
    "kg",
    "milliliter",
    "millilitre",
    "ml",
    "liter",
    "litre",
    "l",
    "quart",
    "qt",
    "pint",
    "gallon",
    "pinch",
    "dash",
    "clove",
    "can",
    "jar",
    "slice",
    "sheet",
    "stick",
    "bunch",
    "package",
    "pkg",
    "piece",
    "sprig",
    "stalk",
    "head",
];

/// Split a free-text ingredient line into quantity, unit and name.
///
/// Best-effort heuristic, not a grammar: lines that do not lead with a
/// quantity token come back whole as the name, and ambiguous lines such as
/// "2% milk" are allowed to mis-parse.
pub fn parse_ingredient_line(text: &str) -> Ingredient {
    let decoded = decode(text);
    let trimmed = decoded.trim();

    if let Some(caps) = QUANTITY_LINE.captures(trimmed) {
        let qty = &caps["qty"];
        let rest = caps["rest"].trim();

        if let Some(amount) = parse_quantity(qty).filter(|a| *a > 0.0) {
            let (unit, name) = split_unit(rest);
            if !name.is_empty() {
                return Ingredient {
                    name: name.to_string(),
                    amount: Some(amount),
                    unit: unit.map(str::to_string),
                };
            }
        }
    }

    Ingredient {
        name: trimmed.to_string(),
        amount: None,
        unit: None,
    }
}

/// Normalize the quantity token to a decimal value; vulgar fractions are
/// read as their numeric value ("1/2" -> 0.5, "1 1/2" -> 1.5).
fn parse_quantity(token: &str) -> Option<f64> {
    if let Some((whole, frac)) = token.split_once(char::is_whitespace) {
        let whole: f64 = whole.trim().parse().ok()?;
        return Some(whole + parse_fraction(frac.trim())?);
    }
    if token.contains('/') {
        return parse_fraction(token);
    }
    token.parse::<f64>().ok()
}

fn parse_fraction(token: &str) -> Option<f64> {
    let (num, den) = token.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

/// Peel a leading unit word off the remainder, when it is a plausible unit.
fn split_unit(rest: &str) -> (Option<&str>, &str) {
    let mut parts = rest.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("");
    let remainder = parts.next().unwrap_or("").trim();

    if !remainder.is_empty() && is_unit_word(first) {
        (Some(first), remainder)
    } else {
        (None, rest)
    }
}

fn is_unit_word(word: &str) -> bool {
    let lowered = word.to_ascii_lowercase();
    let bare = lowered.trim_end_matches('.');
    let singular = bare.strip_suffix('s').unwrap_or(bare);
    UNIT_WORDS.contains(&bare) || UNIT_WORDS.contains(&singular)
}
