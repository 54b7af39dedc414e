use anyhow::Result;
use serde::Serialize;

use crate::model::Table;

/// Top-level output document consumed by the template step.
#[derive(Debug, Serialize)]
pub struct FileContent<'a> {
    pub kind: &'static str,
    #[serde(rename = "srcKind")]
    pub src_kind: &'static str,
    pub data: &'a [Table],
}

impl<'a> FileContent<'a> {
    pub fn new(tables: &'a [Table]) -> Self {
        FileContent {
            kind: "spanner",
            src_kind: "spanner",
            data: tables,
        }
    }
}

/// Render the enriched model as tab-indented JSON.
pub fn render(tables: &[Table]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    FileContent::new(tables).serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
