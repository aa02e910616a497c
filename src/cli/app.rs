//! Main CLI application structure

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{paper, query, topic};
use crate::storage::{DefaultFormat, GlobalConfig, Tracker};

#[derive(Parser)]
#[command(name = "pyq")]
#[command(author, version, about = "Local-first study progress tracking")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (falls back to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Log verbosity (-v, -vv)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new tracker
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Manage papers (exam codes)
    #[command(subcommand)]
    Paper(paper::PaperCommands),

    /// Manage topics within a paper
    #[command(subcommand)]
    Topic(topic::TopicCommands),

    /// Show tracker overview
    Status,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let format = cli.format.unwrap_or_else(default_format);
    let output = Output::new(format, cli.verbose > 0);

    match cli.command {
        Commands::Init { path } => {
            let tracker = Tracker::init(&path)?;
            output.verbose(&format!(
                "created .pyq directory at {}",
                tracker.pyq_dir().display()
            ));
            output.success(&format!(
                "Initialized pyq tracker at {}",
                tracker.root().display()
            ));
        }

        Commands::Paper(cmd) => paper::run(cmd, &output)?,
        Commands::Topic(cmd) => topic::run(cmd, &output)?,
        Commands::Status => query::status(&output)?,
    }

    Ok(())
}

/// Resolves the format from the global config when no flag was given
fn default_format() -> OutputFormat {
    match GlobalConfig::load() {
        Ok(config) if config.default_format == DefaultFormat::Json => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
