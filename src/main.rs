use std::env;
use std::process::ExitCode;

use env_logger::Env;
use log::{debug, error};
use recipe_import::{
    ImportError, ImportResult, ImporterConfig, OutputFormat, ParsedRecipe, RecipeImporter,
};
use tokio::io::{self, AsyncReadExt};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ImporterConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();
    debug!("{:?}", config);

    match run(&config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &ImporterConfig) -> Result<String, ImportError> {
    // Read from the file argument, or stdin when missing or "-"
    let builder = match env::args().nth(1) {
        Some(path) if path != "-" => RecipeImporter::builder().file(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).await?;
            RecipeImporter::builder().text(text)
        }
    };

    let result = builder
        .require_instructions(config.require_instructions)
        .build()
        .await?;

    // No draft is set, so the importer hands back the parsed record
    let ImportResult::Parsed(parsed) = result else {
        unreachable!("import without a draft returned a draft");
    };

    render(&parsed, config.output)
}

fn render(parsed: &ParsedRecipe, format: OutputFormat) -> Result<String, ImportError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(parsed)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(parsed)?,
        OutputFormat::Summary => summary(parsed),
    })
}

fn summary(parsed: &ParsedRecipe) -> String {
    let mut output = String::new();
    output.push_str(parsed.name.as_deref().unwrap_or_default());
    output.push_str("\n\nIngredients:\n");
    for ingredient in &parsed.ingredients {
        let amount = if ingredient.has_valid_amount() {
            ingredient.amount.to_string()
        } else {
            "?".to_string()
        };
        output.push_str(&format!("- {} {} {}\n", amount, ingredient.unit, ingredient.name));
    }
    if !parsed.instructions.is_empty() {
        output.push_str("\nInstructions:\n");
        for (index, step) in parsed.instructions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, step));
        }
    }
    output
}
