use super::read_input;
use crate::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::{ColoredString, Colorize};
use std::path::PathBuf;
use workbench_vtml::{Segment, VisualStyle};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Markup file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Inline markup instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Output format (defaults to config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn render(args: RenderArgs, config: &Config) -> Result<()> {
    let markup = read_input(args.file.as_deref(), args.text.as_deref())?;
    let segments = workbench_vtml::render(&markup);

    match args.format.unwrap_or(config.preview_format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&segments)?),
        OutputFormat::Text => {
            for segment in &segments {
                match segment {
                    Segment::Text { text, style } => print!("{}", paint(text, style)),
                    Segment::Placeholder { label, style } => {
                        print!("{}", paint(label, style).on_bright_black())
                    }
                    Segment::LineBreak => println!(),
                }
            }
            println!();
        }
    }

    Ok(())
}

/// Terminal approximation of a run's look; font size has no equivalent
fn paint(text: &str, style: &VisualStyle) -> ColoredString {
    let mut painted = text.normal();

    if style.bold {
        painted = painted.bold();
    }
    if style.italic {
        painted = painted.italic();
    }
    if style.underline {
        painted = painted.underline();
    }
    if let Some(color) = style.foreground {
        painted = painted.truecolor(color.r, color.g, color.b);
        if color.a < 128 {
            painted = painted.dimmed();
        }
    }

    painted
}
