pub mod apply;
pub mod catalog;
pub mod escape;
pub mod handbook;
pub mod init;
pub mod new;
pub mod render;
pub mod tags;

pub use apply::{apply, ApplyArgs};
pub use catalog::{catalog, CatalogArgs};
pub use escape::{escape, EscapeArgs};
pub use handbook::{handbook, HandbookArgs};
pub use init::{init, InitArgs};
pub use new::{new, NewArgs};
pub use render::{render, RenderArgs};
pub use tags::{tags, TagsArgs};

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Inline text wins, then FILE, then stdin
pub(crate) fn read_input(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Cannot read stdin")?;
            Ok(buffer)
        }
    }
}
