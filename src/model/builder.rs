//! Two-pass conversion of the parsed declaration list into the entity set.
//!
//! Pass 1 materializes tables and change-stream pseudo-tables and records a
//! per-table column lookup. Pass 2 attaches standalone indexes and resolves
//! key-part types through that lookup; indexes and change streams may
//! reference tables declared later, which is why a single pass is not enough.

use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::ast::{BaseType, ChangeStreamDecl, Ddl, Declaration, IndexDecl, TableDecl};
use crate::model::types::{
    Column, ForeignKey, Index, Interleave, KeyPart, Table, TableConstraint, TableKind,
};
use crate::naming;

/// Per-table lookup of raw column name to base kind.
type ColumnLookup = HashMap<String, HashMap<String, BaseType>>;

pub fn build_tables(ddl: &Ddl) -> Result<Vec<Table>> {
    let mut tables: Vec<Table> = Vec::with_capacity(ddl.statements.len());
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut columns: ColumnLookup = HashMap::new();
    let mut seen_keys: HashSet<String> = HashSet::new();

    // Pass 1: tables and change-stream pseudo-tables
    for decl in &ddl.statements {
        let table = match decl {
            Declaration::CreateTable(t) => table_from_decl(t),
            Declaration::CreateChangeStream(cs) => pseudo_table_from_stream(cs),
            Declaration::CreateIndex(_) => continue,
            Declaration::Unknown => {
                warn!("skipping declaration of unknown kind");
                continue;
            }
        };

        if !seen_keys.insert(table.key.clone()) {
            bail!(
                "duplicate table key {:?} (derived from {:?})",
                table.key,
                table.name
            );
        }
        let lookup = table
            .columns
            .iter()
            .map(|c| (c.name.clone(), c.column_type.base))
            .collect();
        columns.insert(table.name.clone(), lookup);
        let declared = declared_name(decl);
        if by_name.insert(declared.clone(), tables.len()).is_some() {
            bail!("duplicate table name {:?}", declared);
        }
        tables.push(table);
    }

    // Pass 2: standalone indexes and watch-column types
    for decl in &ddl.statements {
        match decl {
            Declaration::CreateIndex(idx) => {
                let Some(&owner) = by_name.get(&idx.table) else {
                    warn!(index = %idx.name, table = %idx.table, "index on unknown table");
                    continue;
                };
                let index = index_from_decl(idx, &columns);
                tables[owner].indexes.push(index);
            }
            Declaration::CreateChangeStream(cs) => {
                let Some(&owner) = by_name.get(&cs.name) else {
                    continue;
                };
                for index in &mut tables[owner].indexes {
                    resolve_key_parts(index, &columns);
                }
            }
            _ => {}
        }
    }

    Ok(tables)
}

/// The raw name a declaration is registered under for pass-2 lookups.
fn declared_name(decl: &Declaration) -> String {
    match decl {
        Declaration::CreateTable(t) => t.name.clone(),
        Declaration::CreateChangeStream(cs) => cs.name.clone(),
        _ => unreachable!("only table-producing declarations are registered"),
    }
}

fn table_from_decl(decl: &TableDecl) -> Table {
    let name_singular = naming::singular(&decl.name);
    let key = naming::pascal(&name_singular);
    let mut table = Table::with_names(decl.name.clone(), name_singular, key);

    table.columns = decl.columns.iter().map(Column::new).collect();

    table.primary_key = decl
        .primary_key
        .iter()
        .map(|p| {
            let mut part = KeyPart::new(&p.column);
            match decl.columns.iter().find(|c| c.name == p.column) {
                Some(col) => {
                    part.type_name = col.column_type.base.type_name().to_string();
                    part.base_type_name = part.type_name.clone();
                }
                None => {
                    warn!(table = %decl.name, column = %p.column, "primary key column not found");
                }
            }
            part
        })
        .collect();

    table.interleave = decl.interleave.as_ref().map(|il| Interleave {
        parent: il.parent.clone(),
        on_delete: il.on_delete,
    });

    table.constraints = decl
        .constraints
        .iter()
        .filter_map(|c| {
            let fk = c.foreign_key.as_ref()?;
            Some(TableConstraint {
                name: c.name.clone(),
                foreign_key: ForeignKey {
                    columns: fk.columns.clone(),
                    ref_table: fk.ref_table.clone(),
                    ref_columns: fk.ref_columns.clone(),
                },
            })
        })
        .collect();

    table
}

/// A change stream is modeled as a table-like node whose indexes are
/// synthesized from its watch clauses, one per watched table.
fn pseudo_table_from_stream(decl: &ChangeStreamDecl) -> Table {
    let key = naming::pascal(&decl.name);
    let name_singular = naming::snake(&key);
    let name = naming::plural(&name_singular);
    let mut table = Table::with_names(name, name_singular, key);
    table.kind = Some(TableKind::ChangeStream);

    table.indexes = decl
        .watch
        .iter()
        .map(|w| Index {
            name: String::new(),
            table: w.table.clone(),
            columns: w.columns.iter().map(|c| KeyPart::new(c)).collect(),
            unique: false,
            null_filtered: false,
            watch_all: w.watch_all_cols,
            storing: Vec::new(),
            interleave: None,
        })
        .collect();

    table
}

fn index_from_decl(decl: &IndexDecl, columns: &ColumnLookup) -> Index {
    let mut index = Index {
        name: decl.name.clone(),
        table: decl.table.clone(),
        columns: decl.columns.iter().map(|p| KeyPart::new(&p.column)).collect(),
        unique: decl.unique,
        null_filtered: decl.null_filtered,
        watch_all: false,
        storing: decl.storing.clone(),
        interleave: decl.interleave.clone(),
    };
    resolve_key_parts(&mut index, columns);
    index
}

/// Fill in key-part types from the owning table's columns. A part whose
/// column cannot be found keeps an empty type and processing continues.
fn resolve_key_parts(index: &mut Index, columns: &ColumnLookup) {
    let Some(lookup) = columns.get(&index.table) else {
        warn!(table = %index.table, "key part references unknown table");
        return;
    };
    for part in &mut index.columns {
        match lookup.get(&part.column) {
            Some(base) => {
                part.type_name = base.type_name().to_string();
                part.base_type_name = part.type_name.clone();
            }
            None => {
                warn!(table = %index.table, column = %part.column, "index column not found");
            }
        }
    }
}
