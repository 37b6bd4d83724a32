//! Tetrad CLI - render, preview and contact tooling for the Tetrad AI site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tetrad")]
#[command(about = "Render and preview the Tetrad AI landing page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold site.toml and sample content documents
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Render the landing page to a static file
    Render {
        /// Output file (defaults to <output>/index.html from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fetch content documents from this base URL
        #[arg(long)]
        remote: Option<String>,
    },

    /// Preview the page with live reload on content edits
    Serve {
        /// Port to listen on (defaults to config or 4000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Compose a contact-form mail link
    Mailto {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email
        #[arg(long)]
        email: String,

        /// Sender company
        #[arg(long)]
        company: Option<String>,

        /// Message text
        #[arg(short, long)]
        message: String,

        /// Recipient (defaults to the contact document's email)
        #[arg(long)]
        to: Option<String>,

        /// Open the link in the system mail client
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Render { output, remote } => {
            commands::render::run(&cli.config, output, remote).await?;
        }
        Commands::Serve { port, no_open } => {
            commands::serve::run(&cli.config, port, !no_open).await?;
        }
        Commands::Mailto {
            name,
            email,
            company,
            message,
            to,
            open,
        } => {
            let args = commands::mailto::MailtoArgs {
                name,
                email,
                company,
                message,
                to,
                open,
            };
            commands::mailto::run(&cli.config, args).await?;
        }
    }

    Ok(())
}
