//! wirekey CLI - Object parser generator
//!
//! Commands:
//! - `wirekey generate` - Write `object_parser.rs` for the models in a folder
//! - `wirekey print` - Write the same artifact to stdout

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod generate;
mod logging;

use config::{ConfigOverrides, GeneratorConfig};

const AFTER_HELP: &str = "\
Every struct deriving `Deserialize` under --input is mapped. Annotate a field
with a `/// @json <key>` doc line to choose its JSON key; fields without one
use their own name and produce a warning.

Settings are read from ./wirekey.toml when present (or from --config);
command-line flags take precedence. RUST_LOG overrides the log level.";

#[derive(Parser)]
#[command(name = "wirekey")]
#[command(author, version, about = "Generate wire-key mappings and object parsers", long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate object_parser.rs for the models in a folder
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Folder the artifact is written to (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Artifact file name (default: object_parser.rs)
        #[arg(long)]
        file_name: Option<String>,
    },

    /// Print the generated artifact to stdout
    Print {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Folder (or single file) containing the model types
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path prefix for generated `use` lines (default: crate)
    #[arg(long)]
    module_prefix: Option<String>,

    /// Path to wirekey.toml (default: ./wirekey.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let Cli {
        verbose,
        quiet,
        command,
    } = Cli::parse();

    match command {
        Commands::Generate {
            source,
            output,
            file_name,
        } => {
            let config = load_config(&source, verbose, quiet)?;
            let resolved = config
                .with_overrides(ConfigOverrides {
                    input: source.input,
                    output,
                    file_name,
                    module_prefix: source.module_prefix,
                })
                .resolve()?;

            let path = generate::run(&resolved)?;
            println!("Generated {}", path.display());
        }
        Commands::Print { source } => {
            let config = load_config(&source, verbose, quiet)?;
            let resolved = config
                .with_overrides(ConfigOverrides {
                    input: source.input,
                    module_prefix: source.module_prefix,
                    ..ConfigOverrides::default()
                })
                .resolve()?;

            generate::print(&resolved)?;
        }
    }

    Ok(())
}

/// Load the config file and install logging at its level
fn load_config(source: &SourceArgs, verbose: u8, quiet: bool) -> Result<GeneratorConfig> {
    let cwd = std::env::current_dir()?;
    let config = GeneratorConfig::discover(source.config.as_deref(), &cwd)?;

    logging::init(logging::effective_level(&config.log_level, verbose, quiet));

    Ok(config)
}
