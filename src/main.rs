use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use pantry_recipes::backend::{self, Backend};
use pantry_recipes::model::NewUser;
use pantry_recipes::{
    add_to_pantry, highlight, load_pantry, remove_from_pantry, render_escaped, render_raw,
    ClientConfig, Recommendation, Recommender,
};

#[derive(Parser)]
#[command(name = "pantry-recipes")]
#[command(about = "Recipe recommendations with your pantry ingredients highlighted", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides pantry.toml and PANTRY__BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark the pantry ingredients in a comma-separated ingredient list
    Highlight {
        /// Ingredient list, e.g. "당근 2개, 밥 2공기"
        #[arg(long)]
        description: String,

        /// Pantry ingredient name (repeatable)
        #[arg(long = "pantry")]
        pantry: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Ask the backend for recipes
    Recommend {
        query: String,

        #[arg(long)]
        user_id: Option<i64>,

        #[arg(long)]
        top_k: Option<u32>,

        #[arg(long)]
        boost: Option<f64>,

        /// Use the built-in sample recipes instead of the backend
        #[arg(long)]
        offline: bool,
    },

    /// Manage pantry ingredients
    Pantry {
        #[command(subcommand)]
        action: PantryAction,

        #[arg(long, global = true)]
        user_id: Option<i64>,
    },

    /// Register or log in
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum PantryAction {
    List,
    Add {
        name: String,
        #[arg(long, default_value_t = 1.0)]
        quantity: f64,
    },
    Remove {
        name: String,
    },
}

#[derive(Subcommand)]
enum UserAction {
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Matches in [brackets]
    Text,
    /// Escaped HTML with <mark> around matches
    Html,
    /// <mark> markers around unescaped token text
    Raw,
}

fn print_recommendation(result: &Recommendation) {
    if !result.fridge.is_empty() {
        println!("냉장고: {}", result.fridge.join(", "));
    }
    if result.cards.is_empty() {
        println!("추천 레시피가 없습니다.");
        return;
    }
    for card in &result.cards {
        let recipe = &card.recipe;
        println!();
        println!("{} [{} / {}]", recipe.name, recipe.category, recipe.method);
        println!("  재료: {}", card.description_text());
        println!("  냉장고 재료 {}개 사용", card.used_count());
        if !recipe.reason.is_empty() {
            println!("  {}", recipe.reason);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ClientConfig::load()?;
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }
    debug!("{:?}", config);

    match cli.command {
        Commands::Highlight {
            description,
            pantry,
            format,
        } => {
            let segments = highlight(&description, &pantry);
            let output = match format {
                Format::Text => segments
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                Format::Html => render_escaped(&segments),
                Format::Raw => render_raw(&segments),
            };
            println!("{}", output);
        }

        Commands::Recommend {
            query,
            user_id,
            top_k,
            boost,
            offline,
        } => {
            let mut builder = Recommender::builder().query(query).config(config);
            if let Some(user_id) = user_id {
                builder = builder.user_id(user_id);
            }
            if let Some(top_k) = top_k {
                builder = builder.top_k(top_k);
            }
            if let Some(boost) = boost {
                builder = builder.boost(boost);
            }
            if offline {
                builder = builder.offline();
            }
            let result = builder.build().await?;
            print_recommendation(&result);
        }

        Commands::Pantry { action, user_id } => {
            let user_id = user_id.unwrap_or(config.user_id);
            let backend: Box<dyn Backend> = backend::from_config(&config)?;
            let mut pantry = load_pantry(backend.as_ref(), user_id).await?;

            match action {
                PantryAction::List => {}
                PantryAction::Add { name, quantity } => {
                    let stored =
                        add_to_pantry(backend.as_ref(), &mut pantry, user_id, &name, quantity)
                            .await?;
                    println!("추가됨: {}", stored.name);
                }
                PantryAction::Remove { name } => {
                    remove_from_pantry(backend.as_ref(), &mut pantry, user_id, &name).await?;
                    println!("삭제됨: {}", name);
                }
            }

            for item in pantry.items() {
                println!("{}\t{}", item.name, item.quantity);
            }
        }

        Commands::User { action } => {
            let backend = backend::from_config(&config)?;
            let user = match action {
                UserAction::Register { username, email } => {
                    backend.register(&NewUser { username, email }).await?
                }
                UserAction::Login { username, email } => {
                    backend.login(&NewUser { username, email }).await?
                }
            };
            println!("{}\t{}", user.id, user.username);
        }
    }

    Ok(())
}
