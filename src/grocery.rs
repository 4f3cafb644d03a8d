use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use crate::model::{GroceryItem, Recipe};

/// Shopping list built from recently cooked recipes plus manual entries
#[derive(Debug, Clone, Default)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// One unchecked item per ingredient of every recipe cooked on or after
    /// `since`. The caller picks the cutoff day.
    pub fn from_recipes_cooked_since<'a, I>(recipes: I, since: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let items: Vec<GroceryItem> = recipes
            .into_iter()
            .filter(|recipe| recipe.date_cooked.iter().any(|day| *day >= since))
            .flat_map(|recipe| {
                recipe.ingredients.iter().map(move |ingredient| GroceryItem {
                    id: format!("{}-{}", recipe.id, ingredient.name),
                    name: ingredient.name.clone(),
                    amount: ingredient.amount,
                    unit: ingredient.unit.clone(),
                    checked: false,
                    recipe_id: Some(recipe.id.clone()),
                })
            })
            .collect();

        debug!("Grocery list built with {} items since {}", items.len(), since);
        Self { items }
    }

    /// Appends a manual entry. Blank names are ignored.
    pub fn add_item(&mut self, name: &str, amount: f64, unit: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = Uuid::new_v4().to_string();
        self.items.push(GroceryItem {
            id: id.clone(),
            name: name.to_string(),
            amount,
            unit: unit.trim().to_string(),
            checked: false,
            recipe_id: None,
        });
        Some(id)
    }

    /// Flips the checked flag. Returns false for an unknown id.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn unchecked(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.iter().filter(|item| !item.checked)
    }
}
