//! Input document produced by the external DDL parser: a flat list of
//! declarations, each tagged by kind. The DDL grammar itself is out of
//! scope here; this module only models the parsed shape.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Length sentinel used by the parser for `MAX`-length columns.
pub const UNBOUNDED_LEN: i64 = i64::MAX;

/// Base column kinds, in the parser's enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseType {
    Bool,
    Int64,
    Float64,
    Numeric,
    String,
    Bytes,
    Date,
    Timestamp,
    Json,
}

impl BaseType {
    /// Canonical type name emitted for the downstream generator.
    pub fn type_name(self) -> &'static str {
        match self {
            BaseType::Bool => "bool",
            BaseType::Int64 => "int64",
            BaseType::Float64 => "float64",
            BaseType::Numeric => "int",
            BaseType::String => "string",
            BaseType::Bytes => "[]byte",
            BaseType::Date => "civil.Date",
            BaseType::Timestamp => "time.Time",
            BaseType::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnType {
    pub base: BaseType,
    #[serde(default)]
    pub array: bool,
    #[serde(default)]
    pub len: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub not_null: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPartDecl {
    pub column: String,
    #[serde(default)]
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnDelete {
    #[default]
    NoAction,
    Cascade,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterleaveDecl {
    pub parent: String,
    #[serde(default)]
    pub on_delete: OnDelete,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyDecl {
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
}

/// A named table constraint. Only foreign keys are of interest to the
/// model; other constraint kinds deserialize with `foreign_key` unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintDecl {
    pub name: String,
    #[serde(default)]
    pub foreign_key: Option<ForeignKeyDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDecl {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDecl>,
    #[serde(default)]
    pub primary_key: Vec<KeyPartDecl>,
    #[serde(default)]
    pub interleave: Option<InterleaveDecl>,
    #[serde(default)]
    pub constraints: Vec<ConstraintDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDecl {
    pub name: String,
    pub table: String,
    #[serde(default)]
    pub columns: Vec<KeyPartDecl>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub null_filtered: bool,
    #[serde(default)]
    pub storing: Vec<String>,
    #[serde(default)]
    pub interleave: Option<String>,
}

/// One watch clause of a change stream: a table and either an explicit
/// column list or the all-columns flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchDecl {
    pub table: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub watch_all_cols: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStreamDecl {
    pub name: String,
    #[serde(default)]
    pub watch: Vec<WatchDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Declaration {
    CreateTable(TableDecl),
    CreateIndex(IndexDecl),
    CreateChangeStream(ChangeStreamDecl),
    /// Any declaration kind the model does not consume
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ddl {
    #[serde(default)]
    pub statements: Vec<Declaration>,
}

/// Parse the AST document text. A malformed document is a fatal error.
pub fn parse(text: &str) -> Result<Ddl> {
    serde_json::from_str(text).context("failed to parse DDL AST document")
}
