use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use workbench_catalog::{GuidePage, HandbookSnippets, ItemHandbook};
use workbench_vtml::{parse_hex_color, Rgb};

#[derive(Debug, Args)]
pub struct HandbookArgs {
    #[command(subcommand)]
    pub command: HandbookCommand,
}

#[derive(Debug, Subcommand)]
pub enum HandbookCommand {
    /// Print a "handbook" section for an item or block type
    Item {
        /// Hide the item from the handbook
        #[arg(long)]
        exclude: bool,

        /// Lang key of the extra section title
        #[arg(long)]
        title_key: Option<String>,

        /// Lang key of the extra section text
        #[arg(long)]
        text_key: Option<String>,
    },

    /// Print a guide page file
    Guide {
        /// Page code, e.g. mymod:introduction
        #[arg(long)]
        page_code: Option<String>,

        /// Lang key of the page title
        #[arg(long)]
        title_key: Option<String>,

        /// Lang key of the page text
        #[arg(long)]
        text_key: Option<String>,

        /// Handbook category code
        #[arg(long)]
        category: Option<String>,
    },

    /// Print a color as #RRGGBB, adjusting single channels
    Color {
        /// Starting color (#RGB or #RRGGBB)
        hex: Option<String>,

        #[arg(short, long, allow_negative_numbers = true)]
        red: Option<i64>,

        #[arg(short, long, allow_negative_numbers = true)]
        green: Option<i64>,

        #[arg(short, long, allow_negative_numbers = true)]
        blue: Option<i64>,
    },
}

pub fn handbook(args: HandbookArgs) -> Result<()> {
    let mut snippets = HandbookSnippets::new();

    match args.command {
        HandbookCommand::Item {
            exclude,
            title_key,
            text_key,
        } => {
            let defaults = ItemHandbook::default();
            snippets.item = ItemHandbook {
                include: !exclude,
                title_key: title_key.unwrap_or(defaults.title_key),
                text_key: text_key.unwrap_or(defaults.text_key),
            };
            println!("{}", snippets.item_snippet());
        }

        HandbookCommand::Guide {
            page_code,
            title_key,
            text_key,
            category,
        } => {
            let defaults = GuidePage::default();
            snippets.guide = GuidePage {
                page_code: page_code.unwrap_or(defaults.page_code),
                title_key: title_key.unwrap_or(defaults.title_key),
                text_key: text_key.unwrap_or(defaults.text_key),
                category_code: category.unwrap_or_default(),
            };
            println!("{}", snippets.guide_json());
        }

        HandbookCommand::Color {
            hex,
            red,
            green,
            blue,
        } => {
            if let Some(hex) = hex {
                let color = parse_hex_color(&hex).ok_or_else(|| anyhow!("Invalid hex color: {}", hex))?;
                snippets.set_picked_color(color);
            }
            if let Some(red) = red {
                snippets.set_red(red);
            }
            if let Some(green) = green {
                snippets.set_green(green);
            }
            if let Some(blue) = blue {
                snippets.set_blue(blue);
            }

            let Rgb { r, g, b } = snippets.picked_color();
            println!("{} {}", "████".truecolor(r, g, b), snippets.picked_hex());
        }
    }

    Ok(())
}
