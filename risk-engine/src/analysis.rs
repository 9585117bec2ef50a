use chrono::{DateTime, Utc};
use config_engine::RiskEngineConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classifier::{classify, MODEL_VERSION};
use crate::dataset::load;
use crate::synthetic::{generate_seeded_dataset, generate_synthetic_dataset};
use crate::types::{ClassificationResult, RiskFactor, RiskLevel, Vitals, VitalsRecord};

/// Sample classified when no dataset record is available
pub const DEFAULT_SAMPLE: Vitals = Vitals {
    respiratory_rate: 18.0,
    oxygen_saturation: 96.0,
    heart_rate: 78.0,
    systolic_bp: 128.0,
    diastolic_bp: 82.0,
    oxygen_therapy: false,
};

// ============================================================================
// REPORT MODEL
// ============================================================================

/// Where the records behind a report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSource {
    /// Read from the configured dataset file
    File,
    /// File yielded nothing, generated records substituted
    Synthetic,
    /// File yielded nothing and fallback is disabled
    Empty,
    /// A sample submitted directly by the caller
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub model_version: String,
    pub dataset_size: usize,
    pub dataset_source: DatasetSource,
    pub timestamp: DateTime<Utc>,
}

/// Classification plus the vitals it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub factors: Vec<RiskFactor>,
    pub vitals: Vitals,
    pub metadata: ReportMetadata,
}

impl RiskReport {
    fn new(
        result: ClassificationResult,
        vitals: Vitals,
        dataset_size: usize,
        dataset_source: DatasetSource,
    ) -> Self {
        Self {
            risk_level: result.risk_level,
            risk_score: result.risk_score,
            factors: result.factors,
            vitals,
            metadata: ReportMetadata {
                model_version: MODEL_VERSION.to_string(),
                dataset_size,
                dataset_source,
                timestamp: Utc::now(),
            },
        }
    }
}

/// Records resolved for an analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub records: Vec<VitalsRecord>,
    pub source: DatasetSource,
}

impl LoadedDataset {
    /// The record an analysis classifies; the default sample when empty
    pub fn sample(&self) -> Vitals {
        self.records
            .first()
            .map_or(DEFAULT_SAMPLE, |record| record.vitals)
    }
}

// ============================================================================
// ANALYZER
// ============================================================================

/// Loader, synthetic fallback and classifier wired together.
///
/// Holds only configuration; every call re-reads the dataset.
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    config: RiskEngineConfig,
}

impl RiskAnalyzer {
    pub fn new(config: RiskEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiskEngineConfig {
        &self.config
    }

    /// Load the configured dataset, substituting synthetic records when it is
    /// empty and fallback is enabled
    pub fn load_dataset(&self) -> LoadedDataset {
        let records = load(&self.config.dataset.path);
        if !records.is_empty() {
            return LoadedDataset {
                records,
                source: DatasetSource::File,
            };
        }

        if !self.config.dataset.fallback_to_synthetic {
            return LoadedDataset {
                records,
                source: DatasetSource::Empty,
            };
        }

        let count = self.config.synthetic.count;
        info!(count, seeded = self.config.synthetic.seed.is_some(), "Using synthetic health data");

        let records = match self.config.synthetic.seed {
            Some(seed) => generate_seeded_dataset(count, seed),
            None => generate_synthetic_dataset(count),
        };

        LoadedDataset {
            records,
            source: DatasetSource::Synthetic,
        }
    }

    /// Classify the first record of the resolved dataset
    pub fn analyze(&self) -> RiskReport {
        let dataset = self.load_dataset();
        let vitals = dataset.sample();
        let result = classify(&vitals);

        debug!(
            risk_level = %result.risk_level,
            risk_score = result.risk_score,
            source = ?dataset.source,
            "Risk analysis complete"
        );

        RiskReport::new(result, vitals, dataset.records.len(), dataset.source)
    }

    /// Classify a sample supplied by the caller
    pub fn analyze_vitals(&self, vitals: Vitals) -> RiskReport {
        let result = classify(&vitals);
        debug!(
            risk_level = %result.risk_level,
            risk_score = result.risk_score,
            "Live vitals classified"
        );
        RiskReport::new(result, vitals, 0, DatasetSource::Live)
    }
}
