use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use workbench_catalog::DocumentKind;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Document kind (defaults to config)
    #[arg(short, long)]
    pub kind: Option<DocumentKind>,

    /// Write the starter document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, requires = "output")]
    pub force: bool,
}

pub fn new(args: NewArgs, config: &Config) -> Result<()> {
    let kind = args.kind.unwrap_or(config.default_kind);
    let document = kind.initial_json();

    match args.output {
        Some(path) => {
            if path.exists() && !args.force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            fs::write(&path, document)?;
            println!("  {} Created {} ({})", "✓".green(), path.display(), kind);
        }
        None => print!("{}", document),
    }

    Ok(())
}
