//! lintrc CLI
//!
//! Assembles the webapp ESLint configuration and emits it for the linter to
//! consume.

mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use lintrc_core::{MODE_VAR, Result, init_tracing};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "lintrc")]
#[command(about = "Assemble and emit the webapp ESLint configuration")]
#[command(version = lintrc_core::VERSION)]
#[command(
    long_about = "lintrc assembles the ESLint configuration for the webapp frontend from the\n\
build mode and emits it as JSON.\n\
\n\
Examples:\n  \
lintrc generate                       # Print config for the current NODE_ENV\n  \
lintrc generate --mode production     # Strict config, debugging aids are errors\n  \
lintrc generate -o .eslintrc.json     # Write the config file\n  \
lintrc check .eslintrc.json           # Fail if the file on disk drifted\n  \
lintrc schema                         # Print the config JSON Schema"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the configuration and print or write it
    #[command(alias = "gen")]
    Generate {
        /// Build mode; falls back to NODE_ENV, defaults to development
        #[arg(short, long, env = MODE_VAR, help = "Build mode ('production' is strict)")]
        mode: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long, help = "Output file path (default: stdout)")]
        output: Option<PathBuf>,
    },

    /// Compare a config file on disk against the assembled configuration
    Check {
        /// Path to the config file to compare
        #[arg(help = "Path to the serialized config (e.g. .eslintrc.json)")]
        path: PathBuf,

        /// Build mode; falls back to NODE_ENV, defaults to development
        #[arg(short, long, env = MODE_VAR, help = "Build mode ('production' is strict)")]
        mode: Option<String>,
    },

    /// Print the JSON Schema for the configuration shape
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "lintrc=warn",
        1 => "lintrc=info",
        2 => "lintrc=debug",
        _ => "lintrc=trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    match run_command(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("lintrc failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Generate { mode, output }) => commands::generate_command(mode, output),
        Some(Commands::Check { path, mode }) => commands::check_command(path, mode),
        Some(Commands::Schema) => commands::schema_command(),
        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
