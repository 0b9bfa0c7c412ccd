//! reviewd CLI
//!
//! Local execution entry point for the review service.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reviewd::{
    classifier::SentimentClassifier,
    config,
    error::Result,
    server::{self, AppState},
    storage::SqliteReviewStore,
};

/// reviewd - Review Sentiment Service
#[derive(Parser, Debug)]
#[command(
    name = "reviewd",
    version,
    about = "Review submission service with rule-based sentiment classification"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Database file path (overrides config)
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Classify a single text and print the label
    Classify {
        /// Text to classify
        text: String,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("reviewd starting...");

    let mut config = config::load(&cli.config)?;

    match cli.command {
        Command::Serve { bind, database } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            if let Some(database) = database {
                config.storage.database_path = database;
            }

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            let addr = config.server.bind_addr.parse()?;
            let classifier = SentimentClassifier::from_lexicon(&config.lexicon);
            let store =
                SqliteReviewStore::open(&config.storage.database_path, classifier).await?;
            let state = AppState::new(store, config.server.max_review_length);

            server::serve(addr, state).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (server, storage, and lexicon sections)");

            log::info!("All validations passed!");
        }

        Command::Classify { text } => {
            let classifier = SentimentClassifier::from_lexicon(&config.lexicon);
            println!("{}", classifier.classify(&text));
        }
    }

    Ok(())
}
