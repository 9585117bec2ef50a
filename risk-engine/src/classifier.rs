use crate::types::{ClassificationResult, RiskFactor, RiskLevel, Vitals};

/// Display label of the rule set
pub const MODEL_VERSION: &str = "decision-tree-v1";

/// Upper bound of the reported score
pub const MAX_RISK_SCORE: u8 = 100;
/// Uncapped totals at or above this are `High`
pub const HIGH_RISK_THRESHOLD: u32 = 60;
/// Uncapped totals at or above this (and below `HIGH_RISK_THRESHOLD`) are `Medium`
pub const MEDIUM_RISK_THRESHOLD: u32 = 30;

// ============================================================================
// PER-VITAL TIERS
// ============================================================================

/// Deviation tier for a two-threshold vital. Exactly one applies per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Borderline,
    Severe,
}

/// Blood pressure has three mutually exclusive findings, checked in this order:
/// high, elevated, low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloodPressureTier {
    Normal,
    High,
    Elevated,
    Low,
}

/// Normal 12-20 breaths/min
pub fn respiratory_severity(rate: f64) -> Severity {
    if rate < 10.0 || rate > 24.0 {
        Severity::Severe
    } else if rate < 12.0 || rate > 20.0 {
        Severity::Borderline
    } else {
        Severity::Normal
    }
}

/// Normal 95-100%
pub fn oxygen_saturation_severity(saturation: f64) -> Severity {
    if saturation < 90.0 {
        Severity::Severe
    } else if saturation < 95.0 {
        Severity::Borderline
    } else {
        Severity::Normal
    }
}

/// Normal 60-100 bpm
pub fn heart_rate_severity(rate: f64) -> Severity {
    if rate < 50.0 || rate > 110.0 {
        Severity::Severe
    } else if rate < 60.0 || rate > 100.0 {
        Severity::Borderline
    } else {
        Severity::Normal
    }
}

pub fn blood_pressure_tier(systolic: f64, diastolic: f64) -> BloodPressureTier {
    if systolic > 160.0 || diastolic > 100.0 {
        BloodPressureTier::High
    } else if systolic > 140.0 || diastolic > 90.0 {
        BloodPressureTier::Elevated
    } else if systolic < 90.0 || diastolic < 60.0 {
        BloodPressureTier::Low
    } else {
        BloodPressureTier::Normal
    }
}

// ============================================================================
// RULES
// ============================================================================

/// A rule inspects one vital group and reports at most one factor
pub type Rule = fn(&Vitals) -> Option<RiskFactor>;

/// Rule groups in evaluation order; factor order in results follows this.
pub const RULES: [Rule; 5] = [
    respiratory_rule,
    oxygen_saturation_rule,
    heart_rate_rule,
    blood_pressure_rule,
    oxygen_therapy_rule,
];

fn tiered(severity: Severity, severe: RiskFactor, borderline: RiskFactor) -> Option<RiskFactor> {
    match severity {
        Severity::Severe => Some(severe),
        Severity::Borderline => Some(borderline),
        Severity::Normal => None,
    }
}

pub fn respiratory_rule(vitals: &Vitals) -> Option<RiskFactor> {
    tiered(
        respiratory_severity(vitals.respiratory_rate),
        RiskFactor::AbnormalRespiratoryRate,
        RiskFactor::BorderlineRespiratoryRate,
    )
}

pub fn oxygen_saturation_rule(vitals: &Vitals) -> Option<RiskFactor> {
    tiered(
        oxygen_saturation_severity(vitals.oxygen_saturation),
        RiskFactor::LowOxygenSaturation,
        RiskFactor::BorderlineOxygenSaturation,
    )
}

pub fn heart_rate_rule(vitals: &Vitals) -> Option<RiskFactor> {
    tiered(
        heart_rate_severity(vitals.heart_rate),
        RiskFactor::AbnormalHeartRate,
        RiskFactor::BorderlineHeartRate,
    )
}

pub fn blood_pressure_rule(vitals: &Vitals) -> Option<RiskFactor> {
    match blood_pressure_tier(vitals.systolic_bp, vitals.diastolic_bp) {
        BloodPressureTier::High => Some(RiskFactor::HighBloodPressure),
        BloodPressureTier::Elevated => Some(RiskFactor::ElevatedBloodPressure),
        BloodPressureTier::Low => Some(RiskFactor::LowBloodPressure),
        BloodPressureTier::Normal => None,
    }
}

pub fn oxygen_therapy_rule(vitals: &Vitals) -> Option<RiskFactor> {
    vitals
        .oxygen_therapy
        .then_some(RiskFactor::RequiresOxygenTherapy)
}

impl RiskFactor {
    /// Points this factor adds to the running score
    pub fn points(self) -> u32 {
        match self {
            RiskFactor::AbnormalRespiratoryRate => 25,
            RiskFactor::BorderlineRespiratoryRate => 10,
            RiskFactor::LowOxygenSaturation => 35,
            RiskFactor::BorderlineOxygenSaturation => 15,
            RiskFactor::AbnormalHeartRate => 25,
            RiskFactor::BorderlineHeartRate => 10,
            RiskFactor::HighBloodPressure => 30,
            RiskFactor::ElevatedBloodPressure => 15,
            RiskFactor::LowBloodPressure => 20,
            RiskFactor::RequiresOxygenTherapy => 20,
        }
    }
}

impl RiskLevel {
    /// Tier for an uncapped running total
    pub fn from_score(total: u32) -> Self {
        if total >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if total >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// Fired factors and the uncapped point total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub factors: Vec<RiskFactor>,
    pub total: u32,
}

impl ScoreBreakdown {
    fn record(mut self, factor: RiskFactor) -> Self {
        self.total = self.total.saturating_add(factor.points());
        self.factors.push(factor);
        self
    }

    /// Tier decided on the uncapped total
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.total)
    }

    pub fn capped_score(&self) -> u8 {
        u8::try_from(self.total)
            .unwrap_or(MAX_RISK_SCORE)
            .min(MAX_RISK_SCORE)
    }

    pub fn into_result(self) -> ClassificationResult {
        ClassificationResult {
            risk_level: self.risk_level(),
            risk_score: self.capped_score(),
            factors: self.factors,
        }
    }
}

/// Run every rule over the sample and fold the fired factors
pub fn score_vitals(vitals: &Vitals) -> ScoreBreakdown {
    RULES
        .iter()
        .filter_map(|rule| rule(vitals))
        .fold(ScoreBreakdown::default(), ScoreBreakdown::record)
}

/// Classify one vitals sample. Total: every input yields a result.
pub fn classify(vitals: &Vitals) -> ClassificationResult {
    score_vitals(vitals).into_result()
}
