mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(version, about = "License plate and contact completeness validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more license plates
    Plate {
        /// License plates to validate (quote plates containing spaces)
        #[arg(required = true)]
        plates: Vec<String>,

        /// Country whose plate format applies: de
        #[arg(short, long, default_value = "de")]
        country: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a contact information record for missing fields
    Completeness {
        /// Record file (JSON, YAML or TOML)
        record: Option<PathBuf>,

        /// Email address (overrides the record file)
        #[arg(long)]
        email: Option<String>,

        /// Mobile number (overrides the record file)
        #[arg(long)]
        mobile: Option<String>,

        /// Completeness policy: internal-user, contact
        #[arg(short, long, default_value = "internal-user")]
        policy: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    match cli.command {
        Commands::Plate {
            plates,
            country,
            format,
        } => commands::plate::execute(&plates, &country, &format),

        Commands::Completeness {
            record,
            email,
            mobile,
            policy,
            format,
        } => commands::completeness::execute(
            record.as_deref(),
            email,
            mobile,
            &policy,
            &format,
        ),
    }
}
