mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, catalog, escape, handbook, init, new, render, tags, ApplyArgs, CatalogArgs, EscapeArgs,
    HandbookArgs, InitArgs, NewArgs, RenderArgs, TagsArgs,
};
use config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// JSON Workbench - pointer-driven JSON authoring and VTML preview
#[derive(Parser, Debug)]
#[command(name = "workbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a workbench.config.json
    Init(InitArgs),

    /// Apply a catalog option or an ad-hoc directive to a JSON document
    Apply(ApplyArgs),

    /// List the built-in options of a document kind
    Catalog(CatalogArgs),

    /// Render VTML markup as styled segments
    Render(RenderArgs),

    /// Escape markup for embedding in a JSON string
    Escape(EscapeArgs),

    /// Show the supported VTML tags
    Tags(TagsArgs),

    /// Print handbook JSON snippets
    Handbook(HandbookArgs),

    /// Print the starter document of a kind
    New(NewArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot get current directory")?;
    let config = Config::load(&cwd);

    let fallback = match (&config, cli.verbose) {
        (_, true) => "debug",
        (Ok(config), false) => config.log_level.as_str(),
        (Err(_), false) => "warn",
    };
    init_tracing(fallback, cli.verbose);

    // `init --force` has to work even when the existing file is broken
    let config = match (&cli.command, config) {
        (Command::Init(_), Err(err)) => {
            debug!(error = %err, "Ignoring unreadable config for init");
            Config::default()
        }
        (_, config) => config?,
    };

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Apply(args) => apply(args, &config),
        Command::Catalog(args) => catalog(args, &config),
        Command::Render(args) => render(args, &config),
        Command::Escape(args) => escape(args),
        Command::Tags(args) => tags(args, &config),
        Command::Handbook(args) => handbook(args),
        Command::New(args) => new(args, &config),
    }
}

/// RUST_LOG wins unless --verbose; otherwise the config's log level
fn init_tracing(fallback: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(fallback)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
