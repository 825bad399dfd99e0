use std::path::PathBuf;

use alacarta::config::AppConfig;
use alacarta::controllers::{
    PriceDbCache, RecipeFilter, SortOrder, detect_store, filter_recipes, find_price_match,
    find_recipe, load_recipes, scale_ingredient_line, scale_recipe, sort_recipes,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "alacarta", about = "Scale Ecuadorian recipes and look up ingredient prices")]
struct Cli {
    /// Path to a TOML config file (defaults to ./alacarta.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scale a single ingredient line
    Line {
        line: String,
        #[arg(long)]
        ratio: f64,
    },
    /// Scale a recipe from the catalog to a number of servings
    Scale {
        slug: String,
        #[arg(long)]
        servings: u32,
    },
    /// Look up the reference price for an ingredient
    Price { ingredient: String },
    /// Search and filter the recipe catalog
    Search {
        query: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum, default_value_t = SortArg::Default)]
        sort: SortArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Default,
    Alpha,
    Fast,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Default => SortOrder::Default,
            SortArg::Alpha => SortOrder::Alpha,
            SortArg::Fast => SortOrder::Fast,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Line { line, ratio } => {
            println!("{}", scale_ingredient_line(&line, ratio)?);
        }
        Command::Scale { slug, servings } => {
            let recipes = load_recipes(&config.recipes_path).await?;
            let recipe = find_recipe(&recipes, &slug)?;
            let price_db = PriceDbCache::new(&config.price_db_path).get().await;

            let servings = config.servings.clamp(servings);
            let scaled = scale_recipe(recipe, servings, &price_db)?;
            print!("{}", scaled);
        }
        Command::Price { ingredient } => {
            let price_db = PriceDbCache::new(&config.price_db_path).get().await;

            match find_price_match(&ingredient, &price_db) {
                Some(found) => {
                    println!("{} ({:?} match)", found.key, found.tier);
                    for quote in found.entry.quotes() {
                        println!("  {}", quote);
                    }
                }
                None => println!("No price data for \"{}\"", ingredient),
            }

            if let Some(store) = detect_store(&ingredient) {
                println!("Store: {}", store);
            }
        }
        Command::Search {
            query,
            region,
            difficulty,
            category,
            sort,
        } => {
            let recipes = load_recipes(&config.recipes_path).await?;
            let filter = RecipeFilter {
                query,
                region,
                difficulty,
                category,
            };

            let mut found = filter_recipes(&recipes, &filter);
            sort_recipes(&mut found, sort.into());

            let plural = if found.len() == 1 { "" } else { "s" };
            println!("{} receta{}", found.len(), plural);
            for recipe in found {
                let time = recipe.total_time.as_deref().unwrap_or("-");
                println!("  {:<24} {} [{}]", recipe.slug, recipe.title, time);
            }
        }
    }

    Ok(())
}
