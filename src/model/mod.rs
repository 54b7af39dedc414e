pub mod builder;
pub mod closure;
pub mod graph;
pub mod order;
pub mod types;

pub use types::*;

use anyhow::Result;

use crate::ast::Ddl;

/// Run the whole enrichment pipeline over a parsed declaration list:
/// build entities, link relationship edges, close over descendants, and
/// assign the dependency order.
pub fn build_model(ddl: &Ddl) -> Result<Vec<Table>> {
    let mut tables = builder::build_tables(ddl)?;
    graph::link_tables(&mut tables);
    closure::compute_descendents(&mut tables);
    order::assign_dependency_order(&mut tables);
    Ok(tables)
}
