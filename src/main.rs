use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ozilly::api;
use ozilly::config::AppConfig;
use ozilly::controller::{Controller, HISTORY_DISPLAY_LIMIT, MSG_NO_HISTORY};
use ozilly::llm::{GroqClient, ImageClient};
use ozilly_core::history::HistoryStore;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8501;

#[derive(Parser)]
#[command(name = "ozilly")]
#[command(about = "AI-powered startup name and logo generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web interface
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port for the web interface
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Print the most recent suggestions
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = HISTORY_DISPLAY_LIMIT)]
        limit: usize,
    },
}

/// Initialize tracing with output to stderr (for CLI output) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "ozilly=debug,ozilly_core=debug,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Load `.env` from the working directory into the environment, if present.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}

fn build_controller(config: &AppConfig) -> Controller {
    let generator = GroqClient::new(
        config.groq_base_url.clone(),
        config.groq_api_key.clone(),
        &config.assistant_name,
    );
    let renderer = ImageClient::new(config.openai_base_url.clone(), config.openai_api_key.clone());

    Controller::new(
        HistoryStore::new(config.history_path.clone()),
        Arc::new(generator),
        Arc::new(renderer),
    )
}

async fn serve(config: &AppConfig, host: &str, port: u16) -> anyhow::Result<()> {
    if config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; name generation requests will be rejected");
    }

    let state = api::AppState::new(build_controller(config));
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Ozilly listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_history(config: &AppConfig, limit: usize) {
    let store = HistoryStore::new(config.history_path.clone());
    match store.recent(limit) {
        Ok(entries) if entries.is_empty() => println!("No suggestions yet."),
        Ok(entries) => {
            for entry in entries {
                println!("{} ({})", entry.startup_name, entry.timestamp);
                println!("  Idea: {}", entry.idea);
                println!("  Logo: {}", entry.logo_idea);
            }
        }
        Err(e) => {
            tracing::debug!("Could not read {}: {}", store.path().display(), e);
            println!("{}", MSG_NO_HISTORY);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::History { .. }));
    init_tracing(use_stderr);

    load_dotenv();
    let config = AppConfig::from_env();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(&config, &host, port).await?,
        Some(Commands::History { limit }) => print_history(&config, limit),
        None => serve(&config, DEFAULT_HOST, DEFAULT_PORT).await?,
    }

    Ok(())
}
