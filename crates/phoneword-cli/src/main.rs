mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "phoneword")]
#[command(version, about = "Phoneword - spell telephone numbers as pairs of dictionary words", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "phoneword.toml")]
    config: PathBuf,

    /// Dictionary file (overrides the configured path)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert 10-digit numbers into dictionary word pairs
    Convert {
        /// Numbers to convert
        #[arg(required = true)]
        numbers: Vec<String>,

        /// Output format (overrides the configured format)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Check whether words are in the dictionary
    Lookup {
        /// Words to look up (case-insensitive)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show the letter combinations of a digit segment
    Expand {
        /// Digits 2-9
        digits: String,

        /// Maximum number of combinations to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = config::Config::load(&cli.config)?;
    if let Some(path) = cli.dictionary {
        config.dictionary.path = path;
    }

    match cli.command {
        Commands::Convert { numbers, format } => {
            let format = format.unwrap_or(config.output.format);
            commands::convert::execute(&config, &numbers, format)?;
        }
        Commands::Lookup { words } => {
            commands::lookup::execute(&config, &words)?;
        }
        Commands::Expand { digits, limit } => {
            commands::expand::execute(&digits, limit)?;
        }
    }

    Ok(())
}
