use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// VITALS
// ============================================================================

/// One observation of a patient's vital signs.
///
/// Values are taken as given: nothing here rejects negative or implausible
/// readings, and oxygen saturation is not clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    /// Breaths per minute
    pub respiratory_rate: f64,
    /// SpO2 percentage
    pub oxygen_saturation: f64,
    /// Beats per minute
    pub heart_rate: f64,
    /// mmHg
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    /// mmHg
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,
    /// Patient is currently on supplemental oxygen
    pub oxygen_therapy: bool,
}

/// A dataset row: vitals plus the risk label recorded alongside them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsRecord {
    #[serde(flatten)]
    pub vitals: Vitals,
    pub risk_level: RiskLabel,
}

impl VitalsRecord {
    pub fn new(vitals: Vitals, risk_level: RiskLevel) -> Self {
        Self {
            vitals,
            risk_level: RiskLabel::Level(risk_level),
        }
    }
}

// ============================================================================
// RISK TIERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Position in [`RiskLevel::ALL`]
    pub fn ordinal(self) -> usize {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRiskLevel(pub String);

impl fmt::Display for UnknownRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown risk level: {}", self.0)
    }
}

impl std::error::Error for UnknownRiskLevel {}

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    /// Exact, case-sensitive match on `Low`, `Medium` or `High`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Risk label as it appeared in a dataset.
///
/// Labels outside the three known tiers are preserved verbatim instead of
/// being coerced, so bad source data stays visible downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskLabel {
    Level(RiskLevel),
    Unrecognized(String),
}

impl RiskLabel {
    /// Interpret a raw label field. Absent or blank fields mean `Low`.
    pub fn from_field(field: Option<&str>) -> Self {
        let raw = field.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return RiskLabel::Level(RiskLevel::Low);
        }

        raw.parse::<RiskLevel>()
            .map(RiskLabel::Level)
            .unwrap_or_else(|_| RiskLabel::Unrecognized(raw.to_string()))
    }

    pub fn level(&self) -> Option<RiskLevel> {
        match self {
            RiskLabel::Level(level) => Some(*level),
            RiskLabel::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskLabel::Level(level) => level.as_str(),
            RiskLabel::Unrecognized(raw) => raw,
        }
    }
}

impl Default for RiskLabel {
    fn default() -> Self {
        RiskLabel::Level(RiskLevel::Low)
    }
}

impl From<RiskLevel> for RiskLabel {
    fn from(level: RiskLevel) -> Self {
        RiskLabel::Level(level)
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CLASSIFICATION OUTPUT
// ============================================================================

/// Human-readable explanation attached to one fired rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Abnormal respiratory rate")]
    AbnormalRespiratoryRate,
    #[serde(rename = "Borderline respiratory rate")]
    BorderlineRespiratoryRate,
    #[serde(rename = "Low oxygen saturation")]
    LowOxygenSaturation,
    #[serde(rename = "Borderline oxygen saturation")]
    BorderlineOxygenSaturation,
    #[serde(rename = "Abnormal heart rate")]
    AbnormalHeartRate,
    #[serde(rename = "Borderline heart rate")]
    BorderlineHeartRate,
    #[serde(rename = "High blood pressure")]
    HighBloodPressure,
    #[serde(rename = "Elevated blood pressure")]
    ElevatedBloodPressure,
    #[serde(rename = "Low blood pressure")]
    LowBloodPressure,
    #[serde(rename = "Requires oxygen therapy")]
    RequiresOxygenTherapy,
}

impl RiskFactor {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskFactor::AbnormalRespiratoryRate => "Abnormal respiratory rate",
            RiskFactor::BorderlineRespiratoryRate => "Borderline respiratory rate",
            RiskFactor::LowOxygenSaturation => "Low oxygen saturation",
            RiskFactor::BorderlineOxygenSaturation => "Borderline oxygen saturation",
            RiskFactor::AbnormalHeartRate => "Abnormal heart rate",
            RiskFactor::BorderlineHeartRate => "Borderline heart rate",
            RiskFactor::HighBloodPressure => "High blood pressure",
            RiskFactor::ElevatedBloodPressure => "Elevated blood pressure",
            RiskFactor::LowBloodPressure => "Low blood pressure",
            RiskFactor::RequiresOxygenTherapy => "Requires oxygen therapy",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one vitals sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub risk_level: RiskLevel,
    /// Accumulated rule points, capped at 100
    pub risk_score: u8,
    /// One entry per fired rule, in evaluation order
    pub factors: Vec<RiskFactor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults_to_low_when_absent_or_blank() {
        assert_eq!(RiskLabel::from_field(None), RiskLabel::Level(RiskLevel::Low));
        assert_eq!(RiskLabel::from_field(Some("")), RiskLabel::Level(RiskLevel::Low));
        assert_eq!(RiskLabel::from_field(Some("  \r")), RiskLabel::Level(RiskLevel::Low));
    }

    #[test]
    fn test_label_parses_known_tiers_after_trim() {
        assert_eq!(RiskLabel::from_field(Some(" High\r")), RiskLabel::Level(RiskLevel::High));
        assert_eq!(RiskLabel::from_field(Some("Medium")), RiskLabel::Level(RiskLevel::Medium));
    }

    #[test]
    fn test_label_keeps_unrecognized_values() {
        let label = RiskLabel::from_field(Some("critical"));
        assert_eq!(label, RiskLabel::Unrecognized("critical".to_string()));
        assert_eq!(label.level(), None);
        assert_eq!(label.as_str(), "critical");

        // matching is case-sensitive
        assert_eq!(
            RiskLabel::from_field(Some("low")),
            RiskLabel::Unrecognized("low".to_string())
        );
    }

    #[test]
    fn test_record_serializes_with_camel_case_fields() {
        let record = VitalsRecord::new(
            Vitals {
                respiratory_rate: 18.0,
                oxygen_saturation: 96.0,
                heart_rate: 78.0,
                systolic_bp: 128.0,
                diastolic_bp: 82.0,
                oxygen_therapy: false,
            },
            RiskLevel::Medium,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["respiratoryRate"], 18.0);
        assert_eq!(json["systolicBP"], 128.0);
        assert_eq!(json["diastolicBP"], 82.0);
        assert_eq!(json["oxygenTherapy"], false);
        assert_eq!(json["riskLevel"], "Medium");
    }

    #[test]
    fn test_unrecognized_label_round_trips_through_json() {
        let label = RiskLabel::Unrecognized("Severe".to_string());
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"Severe\"");
        let back: RiskLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }

    #[test]
    fn test_factor_serializes_as_message() {
        let json = serde_json::to_string(&RiskFactor::RequiresOxygenTherapy).unwrap();
        assert_eq!(json, "\"Requires oxygen therapy\"");
        assert_eq!(RiskFactor::LowBloodPressure.to_string(), "Low blood pressure");
    }
}
