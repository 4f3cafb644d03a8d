//! UniFFI bindings for recipe-import
//!
//! FFI-compatible records and functions for mobile hosts. The parser is
//! synchronous, so no runtime is involved.

use std::fmt;

use crate::{ImportError, Ingredient, ParsedRecipe};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    /// NaN when the quantity could not be read
    pub amount: f64,
    pub unit: String,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            name: ingredient.name,
            amount: ingredient.amount,
            unit: ingredient.unit,
        }
    }
}

/// FFI-compatible parse result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiParsedRecipe {
    /// None when the text had no non-blank line
    pub name: Option<String>,
    pub ingredients: Vec<FfiIngredient>,
    pub instructions: Vec<String>,
}

impl From<ParsedRecipe> for FfiParsedRecipe {
    fn from(parsed: ParsedRecipe) -> Self {
        FfiParsedRecipe {
            name: parsed.name,
            ingredients: parsed.ingredients.into_iter().map(Into::into).collect(),
            instructions: parsed.instructions,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiImportError {
    /// Blank text
    EmptyInput { message: String },
    /// No name and ingredients found
    Unrecognized { message: String },
    /// Anything else
    Other { message: String },
}

impl fmt::Display for FfiImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiImportError::EmptyInput { message } => write!(f, "Empty input: {}", message),
            FfiImportError::Unrecognized { message } => write!(f, "Unrecognized: {}", message),
            FfiImportError::Other { message } => write!(f, "Import error: {}", message),
        }
    }
}

impl std::error::Error for FfiImportError {}

impl From<ImportError> for FfiImportError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        match err {
            ImportError::EmptyInput => FfiImportError::EmptyInput { message },
            ImportError::Unrecognized => FfiImportError::Unrecognized { message },
            ImportError::BuilderError(_)
            | ImportError::Io(_)
            | ImportError::ConfigError(_)
            | ImportError::Json(_) => FfiImportError::Other { message },
        }
    }
}

/// Parse pasted recipe text without any acceptance check
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_text(text: String) -> FfiParsedRecipe {
    crate::parse_recipe_text(&text).into()
}

/// Parse pasted recipe text, failing when no name and ingredient were found
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn import_recipe_text(text: String) -> Result<FfiParsedRecipe, FfiImportError> {
    Ok(crate::import_text(&text)?.into())
}
