use std::path::PathBuf;

use log::{debug, info, warn};
use tokio::fs;

use crate::{parse_recipe_text, ImportError, ImportOutcome, ParsedRecipe, RecipeDraft};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Pasted text
    Text(String),
    /// A text file to read first
    File(PathBuf),
}

/// Result of a recipe import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// The parsed partial record
    Parsed(ParsedRecipe),
    /// A draft with the parsed record merged in
    Draft(RecipeDraft),
}

/// Entry point for importing pasted recipe text
pub struct RecipeImporter;

impl RecipeImporter {
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}

/// Builder for configuring and executing recipe imports
#[derive(Debug, Default)]
pub struct RecipeImporterBuilder {
    source: Option<InputSource>,
    draft: Option<RecipeDraft>,
    require_instructions: bool,
}

impl RecipeImporterBuilder {
    /// Set the input source to pasted text
    ///
    /// # Example
    /// ```
    /// use recipe_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .text("Toast\nIngredients\n2 slices bread");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a text file
    ///
    /// # Example
    /// ```
    /// use recipe_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .file("/path/to/recipe.txt");
    /// ```
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Merge the import into an existing draft instead of returning the raw
    /// parsed record
    pub fn draft(mut self, draft: RecipeDraft) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Also fail when no instruction steps were found
    pub fn require_instructions(mut self, required: bool) -> Self {
        self.require_instructions = required;
        self
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - The input file cannot be read
    /// - The text is blank
    /// - No name and ingredient could be recovered from the text
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_import::{ImportResult, RecipeImporter};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeImporter::builder()
    ///     .file("soup.txt")
    ///     .build()
    ///     .await?;
    /// if let ImportResult::Parsed(parsed) = result {
    ///     println!("{:?}", parsed.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ImportResult, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .text() or .file()".to_string(),
            )
        })?;

        let text = match source {
            InputSource::Text(text) => text,
            InputSource::File(path) => {
                debug!("Reading recipe text from {}", path.display());
                fs::read_to_string(&path).await?
            }
        };

        if text.trim().is_empty() {
            warn!("Refusing to import blank text");
            return Err(ImportError::EmptyInput);
        }

        let parsed = parse_recipe_text(&text);
        if !parsed.is_importable() {
            warn!("Text did not yield a recipe name and ingredients");
            return Err(ImportError::Unrecognized);
        }
        if self.require_instructions && parsed.instructions.is_empty() {
            warn!("Text did not yield any instructions");
            return Err(ImportError::Unrecognized);
        }

        match self.draft {
            Some(mut draft) => match draft.apply_import(parsed) {
                ImportOutcome::Imported => Ok(ImportResult::Draft(draft)),
                ImportOutcome::Rejected => Err(ImportError::Unrecognized),
            },
            None => {
                info!("Imported recipe {:?}", parsed.name);
                Ok(ImportResult::Parsed(parsed))
            }
        }
    }
}
