use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::schema::SchemaSet;

/// Nesting structure of a schema set.
///
/// Edges point from a schema to every schema it embeds through
/// `nestedObject`/`nestedArray`. References to undefined schemas are not
/// edges; validation reports them separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestingReport {
    pub nodes: usize,
    pub edges: usize,
    /// Leaves-first order when the graph is acyclic.
    pub resolve_order: Option<Vec<String>>,
    /// Schemas that cannot be ordered because they sit on or above a cycle.
    pub cycle: Option<Vec<String>>,
}

impl NestingReport {
    pub fn is_acyclic(&self) -> bool {
        self.cycle.is_none()
    }
}

/// Build a deterministic nesting report for a schema set.
pub fn build_nesting_report(set: &SchemaSet) -> NestingReport {
    let graph = build_adjacency(set);
    let nodes = graph.len();
    let edges = graph.values().map(BTreeSet::len).sum();

    match toposort(&graph) {
        Ok(order) => NestingReport {
            nodes,
            edges,
            resolve_order: Some(order),
            cycle: None,
        },
        Err(cycle) => NestingReport {
            nodes,
            edges,
            resolve_order: None,
            cycle: Some(cycle),
        },
    }
}

// child -> parents, so a toposort yields leaves first.
fn build_adjacency(set: &SchemaSet) -> BTreeMap<String, BTreeSet<String>> {
    let mut graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for (name, schema) in set.iter() {
        graph.entry(name.to_string()).or_default();
        for child in schema.nested_references() {
            if !set.contains(child) {
                continue;
            }
            graph
                .entry(child.to_string())
                .or_default()
                .insert(name.to_string());
        }
    }

    graph
}

fn toposort(graph: &BTreeMap<String, BTreeSet<String>>) -> Result<Vec<String>, Vec<String>> {
    let mut indegree: BTreeMap<&str, usize> = graph.keys().map(|node| (node.as_str(), 0)).collect();
    for targets in graph.values() {
        for target in targets {
            *indegree.entry(target.as_str()).or_insert(0) += 1;
        }
    }

    let mut ready: BTreeSet<&str> = indegree
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(node, _)| *node)
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    while let Some(node) = ready.pop_first() {
        order.push(node.to_string());
        if let Some(targets) = graph.get(node) {
            for target in targets {
                if let Some(count) = indegree.get_mut(target.as_str()) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        ready.insert(target.as_str());
                    }
                }
            }
        }
    }

    if order.len() == graph.len() {
        Ok(order)
    } else {
        Err(indegree
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(node, _)| node.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDefinition, FieldType};
    use crate::schema::Schema;

    fn nested(name: &str, target: &str) -> FieldDefinition {
        FieldDefinition::new(name, FieldType::NestedObject).with_schema(target)
    }

    #[test]
    fn leaves_resolve_first() {
        let set = SchemaSet::new()
            .with_schema("customer", Schema::new(vec![nested("grading", "riskGrading")]))
            .with_schema("riskGrading", Schema::new(vec![nested("assessment", "riskAssessment")]))
            .with_schema("riskAssessment", Schema::new(vec![FieldDefinition::new("note", FieldType::Sentence)]));

        let report = build_nesting_report(&set);
        assert!(report.is_acyclic());
        assert_eq!(report.edges, 2);
        assert_eq!(
            report.resolve_order.expect("order"),
            vec!["riskAssessment", "riskGrading", "customer"]
        );
    }

    #[test]
    fn detects_cycles() {
        let set = SchemaSet::new()
            .with_schema("a", Schema::new(vec![nested("b", "b")]))
            .with_schema("b", Schema::new(vec![nested("a", "a")]))
            .with_schema("c", Schema::new(vec![nested("a", "a")]));

        let report = build_nesting_report(&set);
        let cycle = report.cycle.expect("cycle");
        assert!(cycle.contains(&"a".to_string()));
        assert!(cycle.contains(&"b".to_string()));
    }

    #[test]
    fn ignores_undefined_targets() {
        let set = SchemaSet::new().with_schema("a", Schema::new(vec![nested("ghost", "ghost")]));
        let report = build_nesting_report(&set);
        assert_eq!(report.edges, 0);
        assert!(report.is_acyclic());
    }
}
