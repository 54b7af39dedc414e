//! Cross-table relationship edges: interleave parents gain `children`
//! entries, foreign-key targets gain `refTables` entries. Edge lists are
//! sorted afterwards so later stages are independent of declaration order.

use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::model::types::Table;

pub fn link_tables(tables: &mut [Table]) {
    let by_name: HashMap<String, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.clone(), i))
        .collect();

    let mut child_edges: Vec<(usize, String)> = Vec::new();
    let mut ref_edges: Vec<(usize, String)> = Vec::new();
    // one refTables edge per ordered (referenced, referencing) pair
    let mut seen: HashSet<(usize, String)> = HashSet::new();

    for table in tables.iter() {
        if let Some(interleave) = &table.interleave {
            match by_name.get(&interleave.parent) {
                Some(&parent) => child_edges.push((parent, table.key.clone())),
                None => {
                    warn!(table = %table.name, parent = %interleave.parent, "interleave parent not found");
                }
            }
        }

        for constraint in &table.constraints {
            let referenced = &constraint.foreign_key.ref_table;
            let Some(&target) = by_name.get(referenced) else {
                warn!(table = %table.name, constraint = %constraint.name, referenced = %referenced, "foreign key references unknown table");
                continue;
            };
            if seen.insert((target, table.key.clone())) {
                ref_edges.push((target, table.key.clone()));
            }
        }
    }

    for (parent, child_key) in child_edges {
        tables[parent].children.push(child_key);
    }
    for (target, referencing_key) in ref_edges {
        tables[target].ref_tables.push(referencing_key);
    }

    for table in tables.iter_mut() {
        table.children.sort();
        table.ref_tables.sort();
    }
}
