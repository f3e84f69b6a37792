use serde::Serialize;
use serde_json::Value;

use amlsynth_core::DataType;

use crate::catalog::Rule;

/// Records composed to trip one rule, with the operator-facing explanation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationScenario {
    pub rule: Rule,
    pub data_type: DataType,
    pub records: Vec<Value>,
    pub record_count: usize,
    pub explanation: String,
    /// Preconditions the scenario could not establish itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ViolationScenario {
    pub fn new(rule: Rule, records: Vec<Value>, explanation: String, note: Option<String>) -> Self {
        Self {
            rule,
            data_type: rule.data_type,
            record_count: records.len(),
            records,
            explanation,
            note,
        }
    }

    /// Concatenate batches of the same rule.
    ///
    /// A single batch is returned unchanged. Otherwise the rule, data type
    /// and note come from the last batch and the explanation leads with the
    /// batch and record counts followed by the first batch's explanation.
    pub fn merge(batches: Vec<ViolationScenario>) -> Option<ViolationScenario> {
        let batch_count = batches.len();
        let mut batches = batches.into_iter();
        let first = batches.next()?;
        if batch_count == 1 {
            return Some(first);
        }

        let lead = first.explanation.clone();
        let mut merged = first;
        for batch in batches {
            merged.records.extend(batch.records);
            merged.rule = batch.rule;
            merged.data_type = batch.data_type;
            merged.note = batch.note;
        }
        merged.record_count = merged.records.len();
        merged.explanation = format!(
            "Generated {batch_count} batches ({} total records). {lead}",
            merged.record_count
        );
        Some(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleCatalog;
    use serde_json::json;

    fn batch(code: &str, records: usize, explanation: &str, note: Option<&str>) -> ViolationScenario {
        let rule = *RuleCatalog::builtin().get(code).expect("rule");
        ViolationScenario::new(
            rule,
            (0..records).map(|idx| json!({ "idx": idx })).collect(),
            explanation.to_string(),
            note.map(str::to_string),
        )
    }

    #[test]
    fn single_batch_is_unchanged() {
        let merged = ViolationScenario::merge(vec![batch("STRUCTURING", 3, "three deposits", None)])
            .expect("merged");
        assert_eq!(merged.explanation, "three deposits");
        assert_eq!(merged.record_count, 3);
    }

    #[test]
    fn batches_concatenate_and_keep_last_note() {
        let merged = ViolationScenario::merge(vec![
            batch("STRUCTURING", 3, "first", Some("early")),
            batch("STRUCTURING", 3, "second", Some("late")),
        ])
        .expect("merged");
        assert_eq!(merged.record_count, 6);
        assert_eq!(merged.records.len(), 6);
        assert_eq!(merged.explanation, "Generated 2 batches (6 total records). first");
        assert_eq!(merged.note.as_deref(), Some("late"));
    }

    #[test]
    fn empty_input_merges_to_nothing() {
        assert!(ViolationScenario::merge(Vec::new()).is_none());
    }

    #[test]
    fn serializes_camel_case_without_empty_note() {
        let value = serde_json::to_value(batch("CASH_THRESHOLD", 1, "one", None)).expect("json");
        assert_eq!(value["dataType"], "transaction");
        assert_eq!(value["recordCount"], 1);
        assert_eq!(value["rule"]["riskScore"], "80");
        assert!(value.get("note").is_none());
    }
}
