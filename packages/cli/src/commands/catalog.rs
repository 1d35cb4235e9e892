use crate::config::{Config, OutputFormat};
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use workbench_catalog::{DocumentKind, WorkbenchTab};
use workbench_patch::InsertDirective;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Document kind (defaults to config)
    #[arg(short, long)]
    pub kind: Option<DocumentKind>,

    /// Only list this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format (defaults to config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn catalog(args: CatalogArgs, config: &Config) -> Result<()> {
    let kind = args.kind.unwrap_or(config.default_kind);
    let mut tab = WorkbenchTab::for_kind(kind);

    if let Some(requested) = &args.category {
        let Some(category) = tab
            .categories()
            .iter()
            .find(|c| c.eq_ignore_ascii_case(requested.trim()))
            .cloned()
        else {
            bail!(
                "Unknown category: {}. Available: {}",
                requested,
                tab.categories().join(", ")
            );
        };
        tab.select_category(category);
    }

    let listed: Vec<&InsertDirective> = tab.filtered_options().collect();

    match args.format.unwrap_or(config.preview_format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listed)?),
        OutputFormat::Text => print_text(&tab, &listed),
    }

    Ok(())
}

fn print_text(tab: &WorkbenchTab, listed: &[&InsertDirective]) {
    println!(
        "{} {} ({} options)",
        "📚".bright_blue(),
        tab.title().bold(),
        listed.len()
    );

    let mut current_category: Option<&str> = None;
    for directive in listed {
        if current_category != Some(directive.category.as_str()) {
            current_category = Some(directive.category.as_str());
            println!();
            println!("{}", directive.category.bright_white().bold());
        }

        println!(
            "  {}  {} {}",
            directive.display_name.green(),
            directive.mode.to_string().cyan(),
            directive.pointer.dimmed()
        );
        if !directive.description.is_empty() {
            println!("      {}", directive.description.dimmed());
        }
    }
}
