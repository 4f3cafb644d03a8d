//! Import pasted text into a draft, save it, and build a grocery list
//!
//! Run with `cargo run --example import_text`.

use chrono::NaiveDate;
use recipe_import::{GroceryList, ImportResult, RecipeBook, RecipeDraft, RecipeImporter};

const PASTED: &str = "Chicken Soup
Ingredients:
2 cups chicken broth
1 carrot
Instructions:
1. Boil broth
2. Add carrot
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Parse only ===");
    let parsed = recipe_import::parse_recipe_text(PASTED);
    println!("{}", serde_json::to_string_pretty(&parsed)?);

    println!("\n=== Merge into a draft ===");
    let draft = RecipeDraft {
        description: "Typed before pasting".to_string(),
        ..Default::default()
    };
    let result = RecipeImporter::builder()
        .text(PASTED)
        .draft(draft)
        .build()
        .await?;
    let ImportResult::Draft(draft) = result else {
        return Err("expected a draft".into());
    };
    println!("{} ({})", draft.name, draft.description);

    println!("\n=== Save and shop ===");
    let mut book = RecipeBook::new();
    let id = book.add(draft.into_recipe()?);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("bad date")?;
    book.mark_cooked(&id, today)?;

    let groceries = GroceryList::from_recipes_cooked_since(&book, today);
    for item in groceries.items() {
        println!("[ ] {} {} {}", item.amount, item.unit, item.name);
    }

    Ok(())
}
