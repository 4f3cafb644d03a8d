//! Tokenizer for a single ingredient line.
//!
//! A line reads as `[quantity][ws][unit ws]name`. Each clause has its own
//! matcher so the absent, unparseable and unitless cases stay distinct.

use crate::model::{Ingredient, DEFAULT_UNIT};

/// Units recognized in front of an ingredient name, matched ignoring case.
pub const UNIT_VOCABULARY: [&str; 11] = [
    "cup", "tbsp", "tsp", "oz", "g", "lb", "piece", "pieces", "clove", "cloves", "whole",
];

/// The leading quantity token of an ingredient line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity<'a> {
    /// The line does not start with a quantity
    Absent,
    /// The token read as a decimal number
    Amount(f64),
    /// The token is made of quantity characters but is not a number, e.g. `1/2`
    Unparseable(&'a str),
}

impl Quantity<'_> {
    /// Amount stored on the ingredient. A missing quantity counts as one; an
    /// unparseable one is `NaN`.
    pub fn amount(&self) -> f64 {
        match self {
            Quantity::Absent => 1.0,
            Quantity::Amount(value) => *value,
            Quantity::Unparseable(_) => f64::NAN,
        }
    }
}

fn is_quantity_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '/'
}

/// Splits a run of digits, `.` and `/` off the very start of `line`.
///
/// Only column zero counts: an indented line has no quantity.
pub fn take_quantity(line: &str) -> (Quantity<'_>, &str) {
    let end = line
        .find(|c: char| !is_quantity_char(c))
        .unwrap_or(line.len());

    if end == 0 {
        return (Quantity::Absent, line);
    }

    let (token, rest) = line.split_at(end);
    let quantity = match token.parse::<f64>() {
        Ok(value) => Quantity::Amount(value),
        Err(_) => Quantity::Unparseable(token),
    };

    (quantity, rest)
}

/// Looks up a word in the unit vocabulary, folding a trailing plural `s`.
pub fn canonical_unit(word: &str) -> Option<&'static str> {
    let lowered = word.to_lowercase();

    let lookup = |candidate: &str| UNIT_VOCABULARY.iter().copied().find(|u| *u == candidate);

    lookup(&lowered).or_else(|| lowered.strip_suffix('s').and_then(lookup))
}

/// Reads a unit word after optional leading whitespace.
///
/// The word has to be followed by whitespace and a non-empty remainder,
/// otherwise it is left for the name.
pub fn take_unit(rest: &str) -> Option<(&'static str, &str)> {
    let candidate = rest.trim_start();
    let word_end = candidate.find(char::is_whitespace)?;
    let (word, remainder) = candidate.split_at(word_end);

    if remainder.trim().is_empty() {
        return None;
    }

    canonical_unit(word).map(|unit| (unit, remainder))
}

/// Turns one ingredient line into an [`Ingredient`]. Always succeeds for a
/// non-blank line; the name is whatever remains after quantity and unit.
pub fn parse_ingredient_line(line: &str) -> Ingredient {
    let (quantity, rest) = match take_quantity(line) {
        // A bare quantity is the whole name
        (_, rest) if rest.trim().is_empty() => (Quantity::Absent, line),
        taken => taken,
    };

    let (unit, rest) = take_unit(rest).unwrap_or((DEFAULT_UNIT, rest));

    Ingredient::new(rest.trim(), quantity.amount(), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_quantity_absent() {
        assert_eq!(take_quantity("garlic"), (Quantity::Absent, "garlic"));
    }

    #[test]
    fn test_take_quantity_integer_and_decimal() {
        assert_eq!(take_quantity("2 cups"), (Quantity::Amount(2.0), " cups"));
        assert_eq!(take_quantity("1.5 lb beef"), (Quantity::Amount(1.5), " lb beef"));
        assert_eq!(take_quantity(".5 tsp salt"), (Quantity::Amount(0.5), " tsp salt"));
    }

    #[test]
    fn test_take_quantity_fraction_is_unparseable() {
        let (quantity, rest) = take_quantity("1/2 cup milk");
        assert_eq!(quantity, Quantity::Unparseable("1/2"));
        assert_eq!(rest, " cup milk");
        assert!(quantity.amount().is_nan());
    }

    #[test]
    fn test_take_quantity_ignores_indented_number() {
        assert_eq!(take_quantity("  2 eggs"), (Quantity::Absent, "  2 eggs"));
    }

    #[test]
    fn test_absent_quantity_defaults_to_one() {
        assert_eq!(Quantity::Absent.amount(), 1.0);
    }

    #[test]
    fn test_canonical_unit() {
        assert_eq!(canonical_unit("cup"), Some("cup"));
        assert_eq!(canonical_unit("CUPS"), Some("cup"));
        assert_eq!(canonical_unit("Tbsp"), Some("tbsp"));
        assert_eq!(canonical_unit("lbs"), Some("lb"));
        assert_eq!(canonical_unit("pieces"), Some("pieces"));
        assert_eq!(canonical_unit("cloves"), Some("cloves"));
        assert_eq!(canonical_unit("garlic"), None);
        assert_eq!(canonical_unit("s"), None);
    }

    #[test]
    fn test_take_unit_requires_following_name() {
        assert_eq!(take_unit(" cups flour"), Some(("cup", " flour")));
        assert_eq!(take_unit("g sugar"), Some(("g", " sugar")));
        assert_eq!(take_unit(" cups"), None);
        assert_eq!(take_unit(" cups   "), None);
        assert_eq!(take_unit("garlic clove"), None);
    }

    #[test]
    fn test_parse_full_line() {
        let ingredient = parse_ingredient_line("2 cups flour");
        assert_eq!(ingredient, Ingredient::new("flour", 2.0, "cup"));
    }

    #[test]
    fn test_parse_name_only() {
        assert_eq!(
            parse_ingredient_line("garlic"),
            Ingredient::new("garlic", 1.0, "piece")
        );
    }

    #[test]
    fn test_parse_quantity_without_unit() {
        assert_eq!(
            parse_ingredient_line("3 eggs"),
            Ingredient::new("eggs", 3.0, "piece")
        );
    }

    #[test]
    fn test_parse_unit_without_quantity() {
        assert_eq!(
            parse_ingredient_line("Whole chicken"),
            Ingredient::new("chicken", 1.0, "whole")
        );
    }

    #[test]
    fn test_parse_quantity_glued_to_unit() {
        assert_eq!(
            parse_ingredient_line("200g butter"),
            Ingredient::new("butter", 200.0, "g")
        );
    }

    #[test]
    fn test_parse_unparseable_quantity_keeps_unit_and_name() {
        let ingredient = parse_ingredient_line("1/2 cup milk");
        assert!(ingredient.amount.is_nan());
        assert_eq!(ingredient.unit, "cup");
        assert_eq!(ingredient.name, "milk");
    }

    #[test]
    fn test_parse_bare_quantity_becomes_name() {
        assert_eq!(parse_ingredient_line("12"), Ingredient::new("12", 1.0, "piece"));
    }

    #[test]
    fn test_parse_unit_word_alone_is_name() {
        assert_eq!(
            parse_ingredient_line("2 cloves"),
            Ingredient::new("cloves", 2.0, "piece")
        );
    }

    #[test]
    fn test_parse_word_starting_with_unit_letters() {
        assert_eq!(
            parse_ingredient_line("1 garlic bulb"),
            Ingredient::new("garlic bulb", 1.0, "piece")
        );
    }

    #[test]
    fn test_parse_trims_name() {
        assert_eq!(
            parse_ingredient_line("4 tbsp   olive oil   "),
            Ingredient::new("olive oil", 4.0, "tbsp")
        );
    }
}
