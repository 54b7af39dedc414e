pub mod json;

pub use json::{render, FileContent};

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::ast;
use crate::model;

/// Read a parsed-DDL AST document, run the enrichment pipeline, and write
/// the resulting metadata document to `output` (stdout when `None`).
/// Returns the number of enriched tables.
pub fn convert_to_json(input: &Path, output: Option<&Path>) -> Result<usize> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let ddl = ast::parse(&text)?;
    let tables = model::build_model(&ddl)?;
    let rendered = render(&tables)?;

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(tables.len())
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// The output is current when it exists and is at least as new as every
/// source that has a readable mtime. No readable source forces a rebuild.
pub fn up_to_date(sources: &[PathBuf], output: &Path) -> bool {
    let Some(out_time) = mtime(output) else {
        return false;
    };
    let mut newest = None;
    for source in sources {
        newest = newest.max(mtime(source));
    }
    match newest {
        Some(t) => t <= out_time,
        None => false,
    }
}
