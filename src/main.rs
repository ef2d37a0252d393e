use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mealbot::config::Config;
use mealbot::controllers::{
    build_shopping_list, export_shopping_list, extract_candidate_text, get_all_favorites,
    get_favorite, parse_meal_response, parse_support_response, remove_favorite, save_favorite,
    scale_meal,
};
use mealbot::models::{DietaryRestriction, EmotionalState, MealRequest, TimeConstraint};

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn generated meal suggestions into structured meals and shopping lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Favorites database URL (overrides MEALBOT_DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prompt for a meal suggestion
    Prompt {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Parse a model response into a meal
    Parse {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        request: RequestArgs,
        /// Rescale to this many servings
        #[arg(long)]
        servings: Option<u32>,
        /// Print the meal as JSON
        #[arg(long)]
        json: bool,
        /// Save the meal as a favorite
        #[arg(long)]
        save: bool,
    },
    /// Build and export a shopping list from a model response
    ShoppingList {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        request: RequestArgs,
        #[arg(long)]
        servings: Option<u32>,
        /// Directory for the exported list (overrides MEALBOT_EXPORT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage saved meals
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Build a support prompt, or parse a support response
    Support {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, default_value_t = 5)]
        intensity: u8,
        #[arg(long, default_value = "")]
        description: String,
        /// Print the prompt instead of parsing a response
        #[arg(long)]
        prompt: bool,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    List,
    Show { id: String },
    Remove { id: String },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// File holding the model response (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat the input as the service's JSON reply rather than plain text
    #[arg(long)]
    envelope: bool,
}

#[derive(Args, Debug)]
struct RequestArgs {
    /// 15min or 30min
    #[arg(long, default_value = "15min")]
    time: TimeConstraint,

    /// Dietary restriction; repeat for several
    #[arg(long)]
    diet: Vec<DietaryRestriction>,
}

impl RequestArgs {
    fn to_request(&self) -> MealRequest {
        MealRequest::new(self.time, self.diet.iter().copied())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    match cli.command {
        Command::Prompt { request } => {
            println!("{}", request.to_request().prompt());
        }
        Command::Parse {
            input,
            request,
            servings,
            json,
            save,
        } => {
            let raw = read_response(&input).await?;
            let mut meal = parse_meal_response(&raw, &request.to_request());
            if let Some(servings) = servings {
                meal = scale_meal(&meal, servings);
            }

            if save {
                let pool = connect(&config).await?;
                save_favorite(&pool, &meal).await?;
                meal.is_favorite = true;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&meal)?);
            } else {
                print!("{}", meal);
            }
        }
        Command::ShoppingList {
            input,
            request,
            servings,
            output,
        } => {
            let raw = read_response(&input).await?;
            let mut meal = parse_meal_response(&raw, &request.to_request());
            if let Some(servings) = servings {
                meal = scale_meal(&meal, servings);
            }

            let list = build_shopping_list(&meal);
            let dir = output.unwrap_or(config.export_dir);
            let path = export_shopping_list(&list, &dir).await?;

            print!("{}", list.export_text());
            info!(path = %path.display(), "shopping list written");
        }
        Command::Favorites { action } => {
            let pool = connect(&config).await?;
            match action {
                FavoritesAction::List => {
                    for meal in get_all_favorites(&pool).await? {
                        println!("{}  {}  ({} servings)", meal.id, meal.name, meal.current_servings);
                    }
                }
                FavoritesAction::Show { id } => {
                    print!("{}", get_favorite(&pool, &id).await?);
                }
                FavoritesAction::Remove { id } => {
                    remove_favorite(&pool, &id).await?;
                    println!("Removed favorite {}", id);
                }
            }
        }
        Command::Support {
            input,
            intensity,
            description,
            prompt,
        } => {
            if prompt {
                println!("{}", EmotionalState::new(intensity, description).prompt());
            } else {
                let raw = read_response(&input).await?;
                let response = parse_support_response(&raw);
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}

/// Read the model response from the input file or stdin
async fn read_response(input: &InputArgs) -> anyhow::Result<String> {
    let body = match &input.input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut body = String::new();
            tokio::io::stdin().read_to_string(&mut body).await?;
            body
        }
    };

    if !input.envelope {
        return Ok(body);
    }

    extract_candidate_text(&body).map_err(|e| {
        error!(kind = ?e.kind(), error = %e, "{}", e.user_message());
        anyhow::Error::from(e)
    })
}

async fn connect(config: &Config) -> anyhow::Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(&config.database_url).await? {
        info!(url = %config.database_url, "creating database");
        sqlx::Sqlite::create_database(&config.database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
