use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use crate::error::CatalogError;
use crate::model::Recipe;

/// In-memory list of recipes, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a recipe under a freshly generated id and returns that id.
    pub fn add(&mut self, mut recipe: Recipe) -> String {
        recipe.id = Uuid::new_v4().to_string();
        debug!("Adding recipe {:?} as {}", recipe.name, recipe.id);
        let id = recipe.id.clone();
        self.recipes.push(recipe);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes whose name contains `query` (ignoring case) and that use
    /// every ingredient in `selected_ingredients`.
    pub fn search<'a>(&'a self, query: &str, selected_ingredients: &[String]) -> Vec<&'a Recipe> {
        let query = query.to_lowercase();

        self.recipes
            .iter()
            .filter(|recipe| recipe.name.to_lowercase().contains(&query))
            .filter(|recipe| {
                selected_ingredients
                    .iter()
                    .all(|ingredient| recipe.uses_ingredient(ingredient))
            })
            .collect()
    }

    /// Every ingredient name in the book, lower-cased, sorted and unique.
    pub fn ingredient_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|ingredient| ingredient.name.to_lowercase())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Records that the recipe was cooked on `day`.
    pub fn mark_cooked(&mut self, id: &str, day: NaiveDate) -> Result<(), CatalogError> {
        let recipe = self
            .recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| CatalogError::UnknownRecipe(id.to_string()))?;

        recipe.date_cooked.push(day);
        debug!("Marked {:?} cooked on {}", recipe.name, day);
        Ok(())
    }

    /// Recipes cooked on the given calendar day.
    pub fn cooked_on(&self, day: NaiveDate) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.cooked_on(day))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecipeBook {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
