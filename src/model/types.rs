//! Enriched schema entities. Every naming variant is computed once at
//! construction through the naming engine; serialization field names are
//! the ones the downstream template step consumes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

use crate::ast::{self, BaseType, OnDelete};
use crate::naming;

/// Column length; the parser's `MAX` sentinel serializes as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeLen(pub i64);

impl Serialize for TypeLen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 == ast::UNBOUNDED_LEN {
            serializer.serialize_i64(0)
        } else {
            serializer.serialize_i64(self.0)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnType {
    #[serde(skip)]
    pub base: BaseType,
    pub array: bool,
    pub len: TypeLen,
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    #[serde(rename = "namesDb")]
    pub name: String,
    #[serde(rename = "nameDb")]
    pub name_singular: String,
    #[serde(rename = "nameJson")]
    pub name_json: String,
    #[serde(rename = "nameJsonGo")]
    pub name_json_go: String,
    #[serde(rename = "Name")]
    pub camel_name: String,
    #[serde(rename = "name")]
    pub var_name: String,
    #[serde(rename = "Names")]
    pub camel_plural: String,
    #[serde(rename = "names")]
    pub var_plural: String,
    #[serde(rename = "nameExact")]
    pub name_exact_json: String,
    #[serde(rename = "NameExact")]
    pub name_exact: String,
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "baseType")]
    pub base_type_name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(rename = "isArray")]
    pub is_array: bool,
    #[serde(rename = "notNull")]
    pub not_null: bool,
    pub key: String,
}

impl Column {
    pub fn new(decl: &ast::ColumnDecl) -> Self {
        let name = decl.name.clone();
        let name_singular = naming::singular(&name);
        let camel_name = naming::pascal(&name_singular);
        let camel_plural = naming::pascal_plural(&name);
        let name_json = naming::json_key(&name);
        let name_exact_json = naming::lower_first(&name);

        let (type_name, base_type_name) = resolve_type(&decl.column_type, decl.not_null);

        Column {
            name_json_go: naming::correct_initialisms(&name_json),
            var_name: naming::lower_first(&camel_name),
            var_plural: naming::lower_camel(&camel_plural),
            name_exact: naming::pascal(&name_exact_json),
            key: name_json.clone(),
            is_array: decl.column_type.array,
            not_null: decl.not_null,
            column_type: ColumnType {
                base: decl.column_type.base,
                array: decl.column_type.array,
                len: TypeLen(decl.column_type.len),
            },
            name,
            name_singular,
            name_json,
            name_exact_json,
            camel_name,
            camel_plural,
            type_name,
            base_type_name,
        }
    }
}

/// Resolve the generator-facing type name pair (full, element) for a column.
///
/// Nullable non-array columns of a handful of scalar kinds map to dedicated
/// nullable wrapper types; any other nullable column becomes a pointer to the
/// base type. Arrays wrap the resolved element type.
fn resolve_type(ty: &ast::ColumnType, not_null: bool) -> (String, String) {
    let base_name = ty.base.type_name();
    let element = if not_null {
        base_name.to_string()
    } else {
        match (ty.base, ty.array) {
            (BaseType::Bool, false) => "spanner.NullBool".to_string(),
            (BaseType::Int64, false) => "spanner.NullInt64".to_string(),
            (BaseType::String, false) => "spanner.NullString".to_string(),
            (BaseType::Timestamp, false) => "spanner.NullTime".to_string(),
            (BaseType::Json, false) => "spanner.NullJSON".to_string(),
            _ => format!("*{base_name}"),
        }
    };

    let full = if ty.array {
        format!("[]{element}")
    } else {
        element.clone()
    };
    (full, element)
}

/// A column's participation in a primary key, index key, or watch clause.
#[derive(Debug, Clone, Serialize)]
pub struct KeyPart {
    #[serde(rename = "namesDb")]
    pub column: String,
    #[serde(rename = "nameDb")]
    pub column_singular: String,
    #[serde(rename = "Name")]
    pub camel_name: String,
    #[serde(rename = "name")]
    pub var_name: String,
    #[serde(rename = "Names")]
    pub camel_plural: String,
    #[serde(rename = "names")]
    pub var_plural: String,
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "baseType")]
    pub base_type_name: String,
}

impl KeyPart {
    /// Build a key part with its naming variants; the type names are filled
    /// in later once the owning table's columns are known.
    pub fn new(column: &str) -> Self {
        let column_singular = naming::singular(column);
        let camel_name = naming::pascal(&column_singular);
        let camel_plural = naming::pascal_plural(column);
        KeyPart {
            column: column.to_string(),
            var_name: naming::lower_first(&camel_name),
            var_plural: naming::lower_first(&camel_plural),
            type_name: String::new(),
            base_type_name: String::new(),
            column_singular,
            camel_name,
            camel_plural,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interleave {
    pub parent: String,
    pub on_delete: OnDelete,
}

#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
}

/// A named foreign-key constraint. Consumed by the relationship graph,
/// never serialized.
#[derive(Debug, Clone)]
pub struct TableConstraint {
    pub name: String,
    pub foreign_key: ForeignKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct Index {
    pub name: String,
    pub table: String,
    #[serde(rename = "fields")]
    pub columns: Vec<KeyPart>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
    #[serde(rename = "nullFiltered", skip_serializing_if = "std::ops::Not::not")]
    pub null_filtered: bool,
    #[serde(rename = "watchAll", skip_serializing_if = "std::ops::Not::not")]
    pub watch_all: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub storing: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interleave: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableKind {
    ChangeStream,
}

#[derive(Debug, Clone, Serialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TableKind>,
    #[serde(rename = "namesDb")]
    pub name: String,
    #[serde(rename = "nameDb")]
    pub name_singular: String,
    #[serde(rename = "Name")]
    pub camel_name: String,
    #[serde(rename = "name")]
    pub var_name: String,
    #[serde(rename = "Names")]
    pub camel_plural: String,
    #[serde(rename = "names")]
    pub var_plural: String,
    #[serde(rename = "n")]
    pub short_name: String,
    pub key: String,
    #[serde(rename = "fields")]
    pub columns: Vec<Column>,
    #[serde(rename = "primaryKey", skip_serializing_if = "Vec::is_empty")]
    pub primary_key: Vec<KeyPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interleave: Option<Interleave>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<Index>,
    #[serde(skip)]
    pub constraints: Vec<TableConstraint>,
    /// Keys of tables directly interleaved under this one, sorted
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// Keys of tables holding a foreign key to this one, deduplicated, sorted
    #[serde(rename = "refTables", skip_serializing_if = "Vec::is_empty")]
    pub ref_tables: Vec<String>,
    #[serde(
        serialize_with = "serialize_key_set",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub descendents: BTreeSet<String>,
    #[serde(rename = "dependencyOrder")]
    pub dependency_order: usize,
}

impl Table {
    /// Table skeleton with all naming variants derived; columns, keys and
    /// relationships are filled in by the builder.
    pub fn with_names(name: String, name_singular: String, key: String) -> Self {
        let camel_name = naming::pascal(&name_singular);
        let camel_plural = naming::pascal_plural(&name);
        Table {
            kind: None,
            var_name: naming::lower_first(&camel_name),
            var_plural: naming::lower_camel(&camel_plural),
            short_name: naming::short_name(&camel_name),
            name,
            name_singular,
            camel_name,
            camel_plural,
            key,
            columns: Vec::new(),
            primary_key: Vec::new(),
            interleave: None,
            indexes: Vec::new(),
            constraints: Vec::new(),
            children: Vec::new(),
            ref_tables: Vec::new(),
            descendents: BTreeSet::new(),
            dependency_order: 0,
        }
    }
}

/// Serialize a key set as an object with empty values, in sorted key order.
fn serialize_key_set<S: Serializer>(
    set: &BTreeSet<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Empty {}

    let mut map = serializer.serialize_map(Some(set.len()))?;
    for key in set {
        map.serialize_entry(key, &Empty {})?;
    }
    map.end()
}
