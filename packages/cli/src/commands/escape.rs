use super::read_input;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use workbench_vtml::escape_json_string;

#[derive(Debug, Args)]
pub struct EscapeArgs {
    /// Markup file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Inline markup instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Wrap the result in double quotes
    #[arg(short, long)]
    pub quoted: bool,
}

pub fn escape(args: EscapeArgs) -> Result<()> {
    let markup = read_input(args.file.as_deref(), args.text.as_deref())?;
    let escaped = escape_json_string(&markup);

    if args.quoted {
        println!("\"{}\"", escaped);
    } else {
        println!("{}", escaped);
    }

    Ok(())
}
