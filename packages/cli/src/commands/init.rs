use crate::config::{Config, OutputFormat, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use workbench_catalog::DocumentKind;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Default document kind (item, block, entity, recipe)
    #[arg(short, long, default_value = "item")]
    pub kind: DocumentKind,

    /// Default output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Force overwrite existing config
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        default_kind: args.kind,
        preview_format: args.format,
        ..Config::default()
    };
    config.save(cwd)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Run: workbench new > {}.json", args.kind.title().to_lowercase());
    println!("  2. Run: workbench catalog");
    println!("  3. Run: workbench apply <file> --option <name> --write");

    Ok(())
}
