//! Transitive descendant closure over the relationship graph. Each table's
//! `descendents` becomes the full set of keys reachable through `children`
//! and `refTables` edges. Traversal carries a visited set per root, so a
//! cyclic schema terminates; a table on a cycle through itself appears in
//! its own descendant set.

use std::collections::{BTreeSet, HashMap};

use crate::model::types::Table;

pub fn compute_descendents(tables: &mut [Table]) {
    let by_key: HashMap<&str, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, t)| (t.key.as_str(), i))
        .collect();

    let adjacency: Vec<Vec<usize>> = tables
        .iter()
        .map(|t| {
            t.children
                .iter()
                .chain(&t.ref_tables)
                .filter_map(|key| by_key.get(key.as_str()).copied())
                .collect()
        })
        .collect();

    for root in 0..tables.len() {
        let mut visited = vec![false; tables.len()];
        let mut stack = adjacency[root].clone();
        let mut reached = BTreeSet::new();
        while let Some(next) = stack.pop() {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            reached.insert(tables[next].key.clone());
            stack.extend(adjacency[next].iter().copied());
        }
        tables[root].descendents = reached;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Table;

    fn table(key: &str, children: &[&str], ref_tables: &[&str]) -> Table {
        let mut t = Table::with_names(key.to_lowercase(), key.to_lowercase(), key.to_string());
        t.children = children.iter().map(|s| s.to_string()).collect();
        t.ref_tables = ref_tables.iter().map(|s| s.to_string()).collect();
        t
    }

    fn descendents(tables: &[Table], key: &str) -> Vec<String> {
        tables
            .iter()
            .find(|t| t.key == key)
            .unwrap()
            .descendents
            .iter()
            .cloned()
            .collect()
    }

    #[test]
    fn test_chain_is_transitive() {
        let mut tables = vec![
            table("A", &["B"], &[]),
            table("B", &[], &["C"]),
            table("C", &[], &[]),
        ];
        compute_descendents(&mut tables);
        assert_eq!(descendents(&tables, "A"), ["B", "C"]);
        assert_eq!(descendents(&tables, "B"), ["C"]);
        assert!(descendents(&tables, "C").is_empty());
    }

    #[test]
    fn test_diamond_merges_branches() {
        let mut tables = vec![
            table("A", &["B", "C"], &[]),
            table("B", &["D"], &[]),
            table("C", &[], &["D"]),
            table("D", &[], &[]),
        ];
        compute_descendents(&mut tables);
        assert_eq!(descendents(&tables, "A"), ["B", "C", "D"]);
    }

    #[test]
    fn test_cycle_terminates_with_self_membership() {
        let mut tables = vec![table("A", &[], &["B"]), table("B", &[], &["A"])];
        compute_descendents(&mut tables);
        assert_eq!(descendents(&tables, "A"), ["A", "B"]);
        assert_eq!(descendents(&tables, "B"), ["A", "B"]);
    }

    #[test]
    fn test_closure_property_holds() {
        let mut tables = vec![
            table("A", &["B"], &["C"]),
            table("B", &[], &["D"]),
            table("C", &["E"], &[]),
            table("D", &[], &[]),
            table("E", &[], &[]),
        ];
        compute_descendents(&mut tables);

        // if Y is in X.descendents and Z in Y.descendents, Z is in X.descendents
        for x in &tables {
            for y in &tables {
                if x.descendents.contains(&y.key) {
                    for z in &y.descendents {
                        assert!(
                            x.descendents.contains(z),
                            "{} reaches {} but not {}",
                            x.key,
                            y.key,
                            z
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_edges_to_unknown_keys_are_ignored() {
        let mut tables = vec![table("A", &["Ghost"], &[])];
        compute_descendents(&mut tables);
        assert!(descendents(&tables, "A").is_empty());
    }
}
