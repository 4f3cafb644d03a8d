//! Turns pasted recipe text into structured recipe records, and keeps the
//! small in-memory collaborators that consume them: the recipe draft, the
//! recipe book and the grocery list.
//!
//! ```
//! use recipe_import::parse_recipe_text;
//!
//! let parsed = parse_recipe_text("Toast\nIngredients\n2 slices bread\nDirections\n1. Toast");
//! assert_eq!(parsed.name.as_deref(), Some("Toast"));
//! assert_eq!(parsed.instructions, vec!["Toast".to_string()]);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod error;
pub mod grocery;
pub mod model;
pub mod parser;
pub mod uniffi_bindings;

pub use builder::{ImportResult, InputSource, RecipeImporter, RecipeImporterBuilder};
pub use catalog::RecipeBook;
pub use config::{ImporterConfig, OutputFormat};
pub use draft::{ImportOutcome, RecipeDraft};
pub use error::{CatalogError, DraftError, ImportError};
pub use grocery::GroceryList;
pub use model::{GroceryItem, Ingredient, ParsedRecipe, Recipe};
pub use parser::parse_recipe_text;

/// Parses pasted text and applies the import acceptance rule: a name and at
/// least one ingredient.
///
/// Use [`parse_recipe_text`] directly to get the raw, possibly sparse, result.
pub fn import_text(text: &str) -> Result<ParsedRecipe, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let parsed = parse_recipe_text(text);
    if parsed.is_importable() {
        Ok(parsed)
    } else {
        Err(ImportError::Unrecognized)
    }
}
