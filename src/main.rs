#![forbid(unsafe_code)]
//! cmdcov command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmdcov::commands::{
    execute_check, execute_generate, execute_list, CheckOptions, GenerateOptions, ListOptions,
};
use cmdcov::Config;

#[derive(Parser)]
#[command(name = "cmdcov")]
#[command(about = "Cross-check command documentation coverage")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".cmdcov.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross-check the source artifacts against the overview document
    Check {
        /// Structured commands file
        #[arg(long)]
        commands: Option<PathBuf>,

        /// Reference manual
        #[arg(long)]
        manual: Option<PathBuf>,

        /// Overview document to reconcile against
        #[arg(long)]
        overview: Option<PathBuf>,
    },

    /// List every unique command found across the source artifacts
    List {
        /// Structured commands file
        #[arg(long)]
        commands: Option<PathBuf>,

        /// Reference manual
        #[arg(long)]
        manual: Option<PathBuf>,
    },

    /// Generate an overview skeleton from the commands file
    Generate {
        /// Structured commands file
        #[arg(long)]
        commands: Option<PathBuf>,

        /// Output path for the generated overview
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Check {
            commands,
            manual,
            overview,
        } => {
            let options = CheckOptions {
                commands: commands.unwrap_or_else(|| config.commands.clone()),
                manual: manual.unwrap_or_else(|| config.manual.clone()),
                overview: overview.unwrap_or_else(|| config.overview.clone()),
            };
            execute_check(options)?;
        }

        Commands::List { commands, manual } => {
            let options = ListOptions {
                commands: commands.unwrap_or_else(|| config.commands.clone()),
                manual: manual.unwrap_or_else(|| config.manual.clone()),
            };
            execute_list(options)?;
        }

        Commands::Generate { commands, output } => {
            let options = GenerateOptions {
                commands: commands.unwrap_or_else(|| config.commands.clone()),
                output: output.unwrap_or_else(|| config.generated_overview.clone()),
                ignored_keys: config.ignored_argument_keys.clone(),
            };
            execute_generate(options)?;
        }
    }

    Ok(())
}
