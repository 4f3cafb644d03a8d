//! Heuristic parser for pasted recipe text.
//!
//! The expected shape is a name line, then an ingredients header followed by
//! one ingredient per line, then an instructions (or directions) header
//! followed by one step per line. Anything else degrades into sparse output
//! instead of an error.

mod ingredient;
mod instruction;
mod section;

pub use ingredient::{
    canonical_unit, parse_ingredient_line, take_quantity, take_unit, Quantity, UNIT_VOCABULARY,
};
pub use instruction::{parse_instruction_line, strip_step_marker};
pub use section::{classify_header, Section, Step};

use log::{debug, trace};

use crate::model::ParsedRecipe;

/// Parses free-form recipe text into a partial recipe.
///
/// Blank lines are dropped. The first remaining line, trimmed, becomes the
/// name. Text without any non-blank line yields an empty record with no name.
/// This function never fails.
pub fn parse_recipe_text(text: &str) -> ParsedRecipe {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(first) = lines.next() else {
        debug!("No non-blank line in recipe text");
        return ParsedRecipe::default();
    };

    let seed = ParsedRecipe {
        name: Some(first.trim().to_string()),
        ..Default::default()
    };

    let (_, parsed) = lines.fold((Section::None, seed), |(section, mut parsed), line| {
        match section.advance(line) {
            Step::Header(next) => {
                trace!("Header {:?} -> {:?}: {:?}", section, next, line);
                (next, parsed)
            }
            Step::Data(Section::Ingredients) => {
                parsed.ingredients.push(parse_ingredient_line(line));
                (section, parsed)
            }
            Step::Data(Section::Instructions) => {
                match parse_instruction_line(line) {
                    Some(step) => parsed.instructions.push(step),
                    None => trace!("Dropping empty step: {:?}", line),
                }
                (section, parsed)
            }
            Step::Data(Section::None) => {
                trace!("Ignoring line outside any section: {:?}", line);
                (section, parsed)
            }
        }
    });

    debug!(
        "Parsed recipe {:?}: {} ingredients, {} instructions",
        parsed.name,
        parsed.ingredients.len(),
        parsed.instructions.len()
    );

    parsed
}
