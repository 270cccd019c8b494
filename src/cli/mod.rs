use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod ask;
pub mod chat;
pub mod show;

use show::Section;

use crate::core::config::AppConfig;
use crate::portfolio::Portfolio;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session with the portfolio assistant
    Chat {},
    /// Ask the portfolio assistant a single question and print the reply
    Ask {
        #[arg(long)]
        message: String,
    },
    /// Render portfolio sections to the terminal
    Show {
        /// Limit output to one section
        #[arg(long, value_enum)]
        section: Option<Section>,

        /// Color theme to render with
        #[arg(long)]
        theme: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let config = AppConfig::default();

    let portfolio = if let Some(path) = &config.profile_path {
        Portfolio::from_path(path)?
    } else {
        Portfolio::default()
    };

    // Handle each sub command
    match args.command {
        Some(Command::Chat {}) => {
            chat::run(&config, portfolio).await?;
        }
        Some(Command::Ask { message }) => {
            ask::run(&config, portfolio, &message).await?;
        }
        Some(Command::Show { section, theme }) => {
            show::run(&portfolio, section, theme.as_deref());
        }
        None => {}
    }

    Ok(())
}
