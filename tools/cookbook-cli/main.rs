use clap::{Parser, Subcommand};
use cookbook::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Inspect and summarize cookbook files from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log every insertion and summary (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean up a hand-written recipe name
    Normalize {
        /// The raw text to normalize
        text: String,
    },
    /// Print the flattened summary of a recipe as JSON
    Summary {
        /// Path to a JSON array of cookbook entries
        #[arg(short, long)]
        entries: String,
        /// Name of the recipe to summarize
        name: String,
        /// Nesting limit for recipes
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Load a cookbook file and report whether every entry is accepted
    Check {
        /// Path to a JSON array of cookbook entries
        #[arg(short, long)]
        entries: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Normalize { text } => match cookbook::normalize::normalize(&text) {
            Ok(name) => println!("{}", name),
            Err(e) => exit_with_error(&e.to_string()),
        },
        Command::Summary {
            entries,
            name,
            max_depth,
        } => run_summary(&entries, &name, max_depth),
        Command::Check { entries } => run_check(&entries),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_entries(path: &str) -> Vec<EntryDefinition> {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read entries file '{}': {}", path, e))
    });
    serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse entries JSON: {}", e)))
}

fn run_summary(path: &str, name: &str, max_depth: Option<usize>) {
    let entries = load_entries(path);

    let mut builder = Cookbook::builder().with_entries(entries);
    if let Some(limit) = max_depth {
        builder = builder.with_max_depth(limit);
    }
    let cookbook = builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Rejected entry ({}): {}", e.kind(), e)));

    let summary = cookbook
        .summarize(name)
        .unwrap_or_else(|e| exit_with_error(&format!("Summary failed ({}): {}", e.kind(), e)));

    let output = serde_json::to_string_pretty(&summary)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize summary: {}", e)));
    println!("{}", output);
}

fn run_check(path: &str) {
    let load_start = Instant::now();
    let entries = load_entries(path);
    let total = entries.len();

    let cookbook = Cookbook::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let name = entry.name.clone();
        if let Err(e) = cookbook.insert(entry) {
            exit_with_error(&format!(
                "Entry #{} '{}' rejected ({}): {}",
                index,
                name,
                e.kind(),
                e
            ));
        }
    }
    let load_duration = load_start.elapsed();

    let stored = cookbook.entries();
    let recipes: Vec<&str> = stored
        .iter()
        .filter_map(|entry| entry.as_recipe().map(|recipe| recipe.name.as_str()))
        .collect();

    let summarize_start = Instant::now();
    let failures: Vec<(String, SummaryError)> = recipes
        .iter()
        .filter_map(|name| cookbook.summarize(name).err().map(|e| (name.to_string(), e)))
        .collect();
    let summarize_duration = summarize_start.elapsed();

    println!("\n--- Cookbook Check ---");
    println!("Entries:      {}", total);
    println!("Ingredients:  {}", total - recipes.len());
    println!("Recipes:      {}", recipes.len());
    println!("Resolvable:   {}", recipes.len() - failures.len());
    for (name, e) in &failures {
        println!("  -> '{}' cannot be summarized ({}): {}", name, e.kind(), e);
    }

    println!("\n--- Performance Summary ---");
    println!("Loading:      {:?}", load_duration);
    println!("Summarizing:  {:?}", summarize_duration);

    if !failures.is_empty() {
        std::process::exit(1);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
