//! Deterministic total order over tables: descendants come before their
//! ancestors, so generated code can refer to already-emitted definitions.

use std::cmp::Ordering;

use crate::model::types::Table;

/// Stable-sort tables and assign the 1-based `dependencyOrder` rank.
///
/// Comparator levels:
///   1. if exactly one of the two is a descendant of the other, the
///      descendant sorts first;
///   2. otherwise the smaller descendant set sorts first (covers unrelated
///      tables and mutual-descendant cycles);
///   3. ties break on ascending key.
pub fn assign_dependency_order(tables: &mut [Table]) {
    tables.sort_by(|a, b| {
        let a_descends_from_b = b.descendents.contains(&a.key);
        let b_descends_from_a = a.descendents.contains(&b.key);
        if a_descends_from_b != b_descends_from_a {
            if a_descends_from_b {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        } else {
            a.descendents
                .len()
                .cmp(&b.descendents.len())
                .then_with(|| a.key.cmp(&b.key))
        }
    });

    for (position, table) in tables.iter_mut().enumerate() {
        table.dependency_order = position + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::closure::compute_descendents;
    use crate::model::types::Table;

    fn table(key: &str, children: &[&str]) -> Table {
        let mut t = Table::with_names(key.to_lowercase(), key.to_lowercase(), key.to_string());
        t.children = children.iter().map(|s| s.to_string()).collect();
        t
    }

    fn ordered_keys(tables: &[Table]) -> Vec<&str> {
        tables.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn test_descendants_precede_ancestors() {
        let mut tables = vec![table("Parent", &["Child"]), table("Child", &[])];
        compute_descendents(&mut tables);
        assign_dependency_order(&mut tables);
        assert_eq!(ordered_keys(&tables), ["Child", "Parent"]);
        assert_eq!(tables[0].dependency_order, 1);
        assert_eq!(tables[1].dependency_order, 2);
    }

    #[test]
    fn test_unrelated_tables_order_by_set_size_then_key() {
        let mut tables = vec![
            table("Zoo", &[]),
            table("Bar", &[]),
            table("Hub", &["Bar", "Zoo"]),
        ];
        compute_descendents(&mut tables);
        assign_dependency_order(&mut tables);
        assert_eq!(ordered_keys(&tables), ["Bar", "Zoo", "Hub"]);
    }

    #[test]
    fn test_cycle_orders_by_key() {
        let mut tables = vec![table("B", &["A"]), table("A", &["B"])];
        compute_descendents(&mut tables);
        assign_dependency_order(&mut tables);
        // mutual descendants: both in each other's sets, tie broken on key
        assert_eq!(ordered_keys(&tables), ["A", "B"]);
    }

    #[test]
    fn test_order_is_consistent_with_closure() {
        let mut tables = vec![
            table("Root", &["Mid"]),
            table("Mid", &["Leaf"]),
            table("Leaf", &[]),
            table("Lone", &[]),
        ];
        compute_descendents(&mut tables);
        assign_dependency_order(&mut tables);

        for a in &tables {
            for b in &tables {
                if a.descendents.contains(&b.key) && !b.descendents.contains(&a.key) {
                    assert!(
                        b.dependency_order < a.dependency_order,
                        "{} should precede {}",
                        b.key,
                        a.key
                    );
                }
            }
        }
    }

    #[test]
    fn test_rerun_is_stable() {
        let mut tables = vec![
            table("Root", &["Mid"]),
            table("Mid", &["Leaf"]),
            table("Leaf", &[]),
        ];
        compute_descendents(&mut tables);
        assign_dependency_order(&mut tables);
        let first = ordered_keys(&tables)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        assign_dependency_order(&mut tables);
        assert_eq!(ordered_keys(&tables), first.as_slice());
    }
}
