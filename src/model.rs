use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unit assigned to an ingredient line that carries no recognized unit.
pub const DEFAULT_UNIT: &str = "piece";

/// Amounts go out as `null` when not finite and come back as `NaN`.
mod amount {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    /// Steps in execution order
    pub instructions: Vec<String>,
    /// Minutes
    pub prep_time: u32,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_cooked: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Recipe {
    /// Whether the recipe was cooked on `day`.
    pub fn cooked_on(&self, day: NaiveDate) -> bool {
        self.date_cooked.contains(&day)
    }

    /// Whether an ingredient with this name (ignoring case) is part of the recipe.
    pub fn uses_ingredient(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase() == name)
    }
}

/// One component of a recipe.
///
/// `amount` is `NaN` when the text carried a quantity that could not be read
/// as a number (for example `1/2`). Consumers treat that as invalid rather
/// than as a default of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(with = "amount")]
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// An empty form row.
    pub fn blank() -> Self {
        Self::new("", 0.0, "")
    }

    /// False when the amount is the unparseable-quantity sentinel.
    pub fn has_valid_amount(&self) -> bool {
        self.amount.is_finite()
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// The partial record produced by the text parser.
///
/// `name` is `None` only when the input had no non-blank line. Empty
/// sequences mean nothing was found and must not overwrite existing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl ParsedRecipe {
    /// A non-empty name and at least one ingredient were recovered.
    pub fn is_importable(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty()) && !self.ingredients.is_empty()
    }
}

/// An entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    #[serde(with = "amount")]
    pub amount: f64,
    pub unit: String,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_amount_is_invalid() {
        let ingredient = Ingredient::new("milk", f64::NAN, "cup");
        assert!(!ingredient.has_valid_amount());
        assert!(Ingredient::new("milk", 0.5, "cup").has_valid_amount());
    }

    #[test]
    fn test_importable_requires_name_and_ingredient() {
        let mut parsed = ParsedRecipe {
            name: Some("Toast".to_string()),
            ..Default::default()
        };
        assert!(!parsed.is_importable());

        parsed.ingredients.push(Ingredient::new("bread", 1.0, DEFAULT_UNIT));
        assert!(parsed.is_importable());

        parsed.name = Some(String::new());
        assert!(!parsed.is_importable());
    }

    #[test]
    fn test_unparseable_amount_survives_json() {
        let parsed = crate::parse_recipe_text("Shake\nIngredients\n1/2 cup milk\n2 cups ice");
        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains(r#""amount":null"#));

        let back: ParsedRecipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name.as_deref(), Some("Shake"));
        assert!(back.ingredients[0].amount.is_nan());
        assert_eq!(back.ingredients[0].unit, "cup");
        assert_eq!(back.ingredients[1], Ingredient::new("ice", 2.0, "cup"));
    }

    #[test]
    fn test_grocery_item_null_amount() {
        let item: GroceryItem = serde_json::from_str(
            r#"{"id":"1","name":"milk","amount":null,"unit":"cup","checked":false}"#,
        )
        .unwrap();
        assert!(item.amount.is_nan());
        assert!(item.recipe_id.is_none());
    }

    #[test]
    fn test_uses_ingredient_ignores_unicode_case() {
        let recipe = Recipe {
            id: "1".to_string(),
            name: "Strudel".to_string(),
            description: String::new(),
            ingredients: vec![Ingredient::new("Äpfel", 3.0, "piece")],
            instructions: vec![],
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            image_url: None,
            date_cooked: vec![],
            source: None,
        };
        assert!(recipe.uses_ingredient("äpfel"));
        assert!(recipe.uses_ingredient("ÄPFEL"));
        assert!(!recipe.uses_ingredient("birnen"));
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe {
            id: "1".to_string(),
            name: "Toast".to_string(),
            description: String::new(),
            ingredients: vec![Ingredient::new("bread", 2.0, "piece")],
            instructions: vec!["Toast the bread".to_string()],
            prep_time: 1,
            cook_time: 3,
            servings: 1,
            image_url: None,
            date_cooked: vec![],
            source: Some("paste".to_string()),
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["prepTime"], 1);
        assert_eq!(json["cookTime"], 3);
        assert!(json.get("imageUrl").is_none());
        assert!(json.get("dateCooked").is_none());
        assert_eq!(json["source"], "paste");
    }
}
