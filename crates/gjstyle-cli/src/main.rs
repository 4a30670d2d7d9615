// Rust guideline compliant 2026-10-14

//! gjstyle CLI Application
//!
//! Command-line interface for rendering Google JSON Style responses.

use clap::Parser;
use gjstyle_cli::commands;
use gjstyle_cli::commands::render::RenderArgs;
use gjstyle_cli::init_tracing;
use gjstyle_core::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gjs",
    version,
    about = "gjstyle: Google JSON Style response envelopes",
    long_about = "Renders response envelope descriptions into the Google JSON Style shape, pruning unset fields and filling pagination defaults.",
    after_help = "Examples:\n  gjs render response.json --pretty\n  echo '{\"error\": {\"code\": 404}}' | gjs render\n  gjs id --count 3\n  gjs init-config gjstyle.toml\n"
)]
struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Render an envelope description from a file or stdin
    Render {
        /// Input file ('-' or omitted for stdin)
        input: Option<PathBuf>,

        /// Print the normalized document without pruning
        #[arg(long)]
        raw: bool,

        /// Pretty print the output
        #[arg(long)]
        pretty: bool,

        /// Keep data next to error instead of dropping it
        #[arg(long)]
        keep_data: bool,
    },

    /// Print fresh response ids
    Id {
        /// Number of ids to print
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Write the effective configuration to a TOML file
    InitConfig {
        /// Destination path
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(log_level)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Render {
            input,
            raw,
            pretty,
            keep_data,
        } => {
            let args = RenderArgs {
                input,
                raw,
                pretty,
                keep_data,
            };
            commands::render::execute(&args, &config, &mut out)?;
        }
        Commands::Id { count } => {
            commands::id::execute(count, &mut out)?;
        }
        Commands::InitConfig { path, force } => {
            commands::config::execute(&path, &config, force, &mut out)?;
        }
    }

    Ok(())
}
