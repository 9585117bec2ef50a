//! Agreement between the fixed rule set and labels already present in a
//! dataset. Nothing here fits or tunes anything: the rules are measured, not
//! trained.

use serde::{Deserialize, Serialize};

use crate::classifier::{classify, MODEL_VERSION};
use crate::types::{RiskLevel, VitalsRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub model: String,
    pub kind: String,
    pub training_size: usize,
}

/// Describe the rule set alongside the dataset it would be compared against
pub fn describe_model(records: &[VitalsRecord]) -> ModelSummary {
    ModelSummary {
        model: MODEL_VERSION.to_string(),
        kind: "rule-based".to_string(),
        training_size: records.len(),
    }
}

/// Counts indexed `[expected][predicted]` in Low, Medium, High order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfusionMatrix {
    cells: [[usize; 3]; 3],
}

impl ConfusionMatrix {
    pub fn count(&self, expected: RiskLevel, predicted: RiskLevel) -> usize {
        self.cells
            .get(expected.ordinal())
            .and_then(|row| row.get(predicted.ordinal()))
            .copied()
            .unwrap_or_default()
    }

    fn record(&mut self, expected: RiskLevel, predicted: RiskLevel) {
        if let Some(cell) = self
            .cells
            .get_mut(expected.ordinal())
            .and_then(|row| row.get_mut(predicted.ordinal()))
        {
            *cell += 1;
        }
    }

    /// Sum of the diagonal
    pub fn agreements(&self) -> usize {
        RiskLevel::ALL
            .iter()
            .map(|level| self.count(*level, *level))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub total: usize,
    /// Records whose label is one of the three known tiers
    pub labelled: usize,
    pub unrecognized_labels: usize,
    pub agreements: usize,
    /// `agreements / labelled`, or 0 when nothing is labelled
    pub agreement_rate: f64,
    pub confusion: ConfusionMatrix,
}

/// Classify every labelled record and compare against its label
pub fn evaluate(records: &[VitalsRecord]) -> EvaluationReport {
    let mut confusion = ConfusionMatrix::default();
    let mut labelled = 0;

    for record in records {
        if let Some(expected) = record.risk_level.level() {
            labelled += 1;
            confusion.record(expected, classify(&record.vitals).risk_level);
        }
    }

    let agreements = confusion.agreements();
    let agreement_rate = if labelled == 0 {
        0.0
    } else {
        agreements as f64 / labelled as f64
    };

    tracing::debug!(total = records.len(), labelled, agreements, "Rule set evaluated");

    EvaluationReport {
        total: records.len(),
        labelled,
        unrecognized_labels: records.len() - labelled,
        agreements,
        agreement_rate,
        confusion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_row;

    #[test]
    fn test_evaluate_counts_agreement_per_tier() {
        let records = vec![
            // 0 points, labelled Low: agrees
            parse_row("18,96,78,128,82,false,Low"),
            // 55 points, labelled Medium: agrees
            parse_row("18,88,78,128,82,true,Medium"),
            // 135 points, labelled Medium: predicted High
            parse_row("8,85,120,170,105,true,Medium"),
            // unrecognized label is skipped
            parse_row("18,96,78,128,82,false,Unknown"),
        ];

        let report = evaluate(&records);
        assert_eq!(report.total, 4);
        assert_eq!(report.labelled, 3);
        assert_eq!(report.unrecognized_labels, 1);
        assert_eq!(report.agreements, 2);
        assert!((report.agreement_rate - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(report.confusion.count(RiskLevel::Medium, RiskLevel::High), 1);
        assert_eq!(report.confusion.count(RiskLevel::Low, RiskLevel::Low), 1);
        assert_eq!(report.confusion.count(RiskLevel::High, RiskLevel::High), 0);
    }

    #[test]
    fn test_empty_dataset_has_zero_rate() {
        let report = evaluate(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.agreement_rate, 0.0);
    }

    #[test]
    fn test_model_summary_reports_dataset_size() {
        let records = vec![parse_row("18,96,78,128,82,false,Low"); 3];
        let summary = describe_model(&records);
        assert_eq!(summary.model, "decision-tree-v1");
        assert_eq!(summary.kind, "rule-based");
        assert_eq!(summary.training_size, 3);
    }

    #[test]
    fn test_confusion_serializes_as_nested_arrays() {
        let records = vec![parse_row("18,96,78,128,82,false,High")];
        let json = serde_json::to_value(evaluate(&records)).unwrap();
        assert_eq!(json["confusion"], serde_json::json!([[0, 0, 0], [0, 0, 0], [1, 0, 0]]));
    }
}
