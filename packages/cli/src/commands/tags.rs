use crate::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use workbench_vtml::tag_reference;

#[derive(Debug, Args)]
pub struct TagsArgs {
    /// Output format (defaults to config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn tags(args: TagsArgs, config: &Config) -> Result<()> {
    let reference = tag_reference();

    match args.format.unwrap_or(config.preview_format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reference)?),
        OutputFormat::Text => {
            for info in reference {
                println!("{}", info.tag.bright_white().bold());
                println!("  {}", info.what_it_does);
                println!("  {} {}", "Example:".dimmed(), info.example.cyan());
                println!();
            }
        }
    }

    Ok(())
}
