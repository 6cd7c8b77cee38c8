use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordcomplete::{
    build_index, commands, create_editor, run_session, AppConfig, KeyReader, Renderer,
};

#[derive(Parser)]
#[command(name = "wordcomplete")]
#[command(about = "Interactive word completion over a dictionary word list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (whitespace-separated words)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive sentence editor (default)
    Repl,
    /// Print the first completion of a prefix
    Complete {
        prefix: String,
    },
    /// Print the words starting with a prefix, in alphabetical order
    Suggest {
        prefix: String,
        /// Maximum number of words to print
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print a JSON array instead of one word per line
        #[arg(long)]
        json: bool,
    },
    /// Print index statistics
    Stats,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(dict) = &cli.dict {
        config.dictionary = Some(dict.clone());
    }
    Ok(config)
}

fn run_repl(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let mut editor = create_editor(config).context("failed to load dictionary")?;

    let stdin = io::stdin();
    let mut keys = KeyReader::new(stdin.lock());
    let mut renderer = Renderer::new(io::stdout().lock());
    run_session(&mut editor, &mut keys, &mut renderer, &config.prompt)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(&cli)?;

    match &cli.command {
        None | Some(Commands::Repl) => run_repl(&config),
        Some(Commands::Complete { prefix }) => {
            let loaded = build_index(&config).context("failed to load dictionary")?;
            let found = commands::complete(&loaded.index, prefix, &mut io::stdout().lock())?;
            Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(Commands::Suggest {
            prefix,
            limit,
            json,
        }) => {
            let loaded = build_index(&config).context("failed to load dictionary")?;
            commands::suggest(&loaded.index, prefix, *limit, *json, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Stats) => {
            let loaded = build_index(&config).context("failed to load dictionary")?;
            commands::stats(&loaded, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
