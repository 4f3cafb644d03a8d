use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::model::{Ingredient, ParsedRecipe, Recipe};

/// Result of merging parsed text into a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Name and ingredients were taken from the text
    Imported,
    /// The text had no name or no ingredients; the draft is unchanged
    Rejected,
}

/// In-progress recipe being edited before it is added to the book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            ingredients: vec![Ingredient::blank()],
            instructions: vec![String::new()],
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            image_url: None,
            source: None,
        }
    }
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a parsed record into the draft.
    ///
    /// Only an importable record (name plus at least one ingredient) is
    /// applied. Instructions are replaced only when some were parsed, so
    /// steps typed by hand survive an ingredients-only paste.
    pub fn apply_import(&mut self, parsed: ParsedRecipe) -> ImportOutcome {
        if !parsed.is_importable() {
            debug!("Rejecting import without name or ingredients");
            return ImportOutcome::Rejected;
        }

        let ParsedRecipe {
            name,
            ingredients,
            instructions,
        } = parsed;

        if let Some(name) = name {
            self.name = name;
        }
        self.ingredients = ingredients;
        if !instructions.is_empty() {
            self.instructions = instructions;
        }

        info!(
            "Imported {:?} into draft ({} ingredients, {} instructions)",
            self.name,
            self.ingredients.len(),
            self.instructions.len()
        );
        ImportOutcome::Imported
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(Ingredient::blank());
    }

    /// Removes an ingredient row. The last remaining row is kept.
    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        if self.ingredients.len() <= 1 || index >= self.ingredients.len() {
            return false;
        }
        self.ingredients.remove(index);
        true
    }

    pub fn add_instruction(&mut self) {
        self.instructions.push(String::new());
    }

    /// Removes an instruction row. The last remaining row is kept.
    pub fn remove_instruction(&mut self, index: usize) -> bool {
        if self.instructions.len() <= 1 || index >= self.instructions.len() {
            return false;
        }
        self.instructions.remove(index);
        true
    }

    /// Checks the draft and turns it into a recipe with an empty id; the
    /// recipe book assigns one on insert. Blank rows are dropped first.
    pub fn into_recipe(self) -> Result<Recipe, DraftError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .into_iter()
            .filter(|ingredient| !ingredient.is_blank())
            .collect();
        if ingredients.is_empty() {
            return Err(DraftError::NoIngredients);
        }

        let instructions: Vec<String> = self
            .instructions
            .into_iter()
            .filter(|step| !step.trim().is_empty())
            .collect();
        if instructions.is_empty() {
            return Err(DraftError::NoInstructions);
        }

        Ok(Recipe {
            id: String::new(),
            name,
            description: self.description,
            ingredients,
            instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings.max(1),
            image_url: self.image_url,
            date_cooked: Vec::new(),
            source: self.source,
        })
    }
}
