use clap::Parser;
use cookbook::recipe::{EntryDefinition, RequirementDefinition};
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::{Rng, rng};
use std::fs;

/// A CLI tool to generate random, acyclic cookbooks for the cookbook tools
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_cookbook.json")]
    output: String,

    /// Number of ingredients to generate
    #[arg(long, default_value_t = 20)]
    ingredients: usize,

    /// Number of recipe layers stacked on top of the ingredients
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// Number of recipes in each layer
    #[arg(long, default_value_t = 5)]
    recipes_per_layer: usize,

    /// The maximum number of required items per recipe
    #[arg(long, default_value_t = 4)]
    max_items: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.ingredients == 0 || cli.max_items == 0 {
        eprintln!("Error: --ingredients and --max-items must both be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating cookbook ({} ingredients, {} layers of {} recipes)...",
        cli.ingredients, cli.layers, cli.recipes_per_layer
    );

    let mut entries = generate_ingredients(&mut rng, cli.ingredients);
    let mut available: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

    // Recipes only reference entries from earlier layers, so the graph stays acyclic.
    for layer in 1..=cli.layers {
        let recipes = generate_layer(
            &mut rng,
            layer,
            cli.recipes_per_layer,
            cli.max_items,
            &available,
        );
        available.extend(recipes.iter().map(|e| e.name.clone()));
        println!("-> Generated layer {} with {} recipe(s).", layer, recipes.len());
        entries.extend(recipes);
    }

    let json_output = serde_json::to_string_pretty(&entries)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} entries and saved them to '{}'",
        entries.len(),
        cli.output
    );

    Ok(())
}

fn generate_ingredients(rng: &mut ThreadRng, count: usize) -> Vec<EntryDefinition> {
    let entries: Vec<EntryDefinition> = (0..count)
        .map(|i| {
            EntryDefinition::ingredient(format!("Ingredient {}", letters(i)), rng.random_range(0..=30))
        })
        .collect();
    println!("-> Generated {} ingredient(s).", entries.len());
    entries
}

fn generate_layer(
    rng: &mut ThreadRng,
    layer: usize,
    count: usize,
    max_items: usize,
    available: &[String],
) -> Vec<EntryDefinition> {
    (0..count)
        .map(|i| {
            let item_count = rng.random_range(1..=max_items.min(available.len()));
            let picked: Vec<&String> = available.choose_multiple(&mut *rng, item_count).collect();
            let required_items = picked
                .into_iter()
                .map(|name| RequirementDefinition::new(name.clone(), rng.random_range(1..=5)))
                .collect();
            EntryDefinition {
                name: format!("Recipe {} {}", letters(layer), letters(i)),
                kind: "recipe".to_string(),
                required_items: Some(required_items),
                cook_time: None,
            }
        })
        .collect()
}

/// Spells an index with letters only, so generated names survive normalization.
fn letters(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'a' + (index % 26) as u8);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}
