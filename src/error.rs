use thiserror::Error;

/// Errors that can occur during recipe import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// The pasted text had no non-blank line
    #[error("Recipe text is empty")]
    EmptyInput,

    /// The text parsed, but did not yield a name and at least one ingredient
    #[error("Could not parse recipe. Please check the format and try again.")]
    Unrecognized,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read the recipe source
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize the import result
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a draft cannot be turned into a recipe
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Recipe name is required")]
    MissingName,

    #[error("At least one ingredient is required")]
    NoIngredients,

    #[error("At least one instruction is required")]
    NoInstructions,
}

/// Errors raised by the in-memory recipe book
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No recipe with id {0}")]
    UnknownRecipe(String),
}
