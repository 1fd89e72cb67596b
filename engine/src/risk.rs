//! Rule-based health risk assessment
//!
//! Maps a normalized profile to per-condition risk percentages using a base
//! risk per condition plus fixed additive adjustments triggered by threshold
//! predicates. Pure; never fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use diet_planner_shared::{ProfileFeatures, Sex};

/// Risk percentage above which a condition drives diet-plan and
/// recommendation changes
pub const ACTION_THRESHOLD_PCT: f64 = 50.0;

/// Accumulated rule-based risk is capped at this fraction before conversion
/// to a percentage
const RISK_CAP: f64 = 0.70;

/// Waist circumference thresholds (cm) for abdominal-obesity predicates
const WAIST_THRESHOLD_MALE_CM: f64 = 102.0;
const WAIST_THRESHOLD_FEMALE_CM: f64 = 88.0;

/// Health conditions covered by the risk model
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Cardiovascular,
    Diabetes,
    MetabolicSyndrome,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::Cardiovascular,
        Condition::Diabetes,
        Condition::MetabolicSyndrome,
    ];

    /// Condition-specific base risk, as a fraction
    pub fn base_risk(&self) -> f64 {
        match self {
            Condition::Cardiovascular => 0.30,
            Condition::Diabetes => 0.20,
            Condition::MetabolicSyndrome => 0.25,
        }
    }
}

/// Per-condition risk percentages produced by an assessment
///
/// Rule-based values lie in [0, 70]; blended values may exceed 70 because
/// blending does not re-clamp (see [`crate::blend::RiskBlender`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskAssessment {
    risks: BTreeMap<Condition, f64>,
}

impl RiskAssessment {
    /// Risk percentage for a condition; 0 if the condition was not assessed
    pub fn get(&self, condition: Condition) -> f64 {
        self.risks.get(&condition).copied().unwrap_or(0.0)
    }

    /// Iterate conditions and percentages in stable condition order
    pub fn iter(&self) -> impl Iterator<Item = (Condition, f64)> + '_ {
        self.risks.iter().map(|(c, r)| (*c, *r))
    }

    /// Whether this condition's risk warrants plan adjustments
    pub fn is_elevated(&self, condition: Condition) -> bool {
        self.get(condition) > ACTION_THRESHOLD_PCT
    }
}

impl FromIterator<(Condition, f64)> for RiskAssessment {
    fn from_iter<I: IntoIterator<Item = (Condition, f64)>>(iter: I) -> Self {
        Self {
            risks: iter.into_iter().collect(),
        }
    }
}

/// Deterministic rule-based risk scorer
pub struct RiskModel;

impl RiskModel {
    /// Assess per-condition risk for a normalized profile
    ///
    /// Each condition starts from its base risk, accumulates fixed additive
    /// adjustments, and is clamped to [0, 0.70] before conversion to a
    /// percentage.
    pub fn assess(features: &ProfileFeatures) -> RiskAssessment {
        Condition::ALL
            .iter()
            .map(|&condition| {
                let adjustment = match condition {
                    Condition::Cardiovascular => Self::cardiovascular_adjustment(features),
                    Condition::Diabetes => Self::diabetes_adjustment(features),
                    Condition::MetabolicSyndrome => Self::metabolic_syndrome_adjustment(features),
                };
                let fraction = (condition.base_risk() + adjustment).clamp(0.0, RISK_CAP);
                (condition, fraction * 100.0)
            })
            .collect()
    }

    fn cardiovascular_adjustment(features: &ProfileFeatures) -> f64 {
        let mut adjustment = 0.0;

        if features.age > 45.0 {
            adjustment += 0.10;
        }
        if Self::waist_exceeds_threshold(features) {
            adjustment += 0.15;
        }
        if features.bmi > 30.0 {
            adjustment += 0.20;
        }

        adjustment
    }

    fn diabetes_adjustment(features: &ProfileFeatures) -> f64 {
        let mut adjustment = 0.0;

        if features.age > 45.0 {
            adjustment += 0.10;
        }
        if features.bmi > 25.0 {
            adjustment += 0.15;
        }
        if features.activity_level.is_low_activity() {
            adjustment += 0.10;
        }

        adjustment
    }

    fn metabolic_syndrome_adjustment(features: &ProfileFeatures) -> f64 {
        let mut adjustment = 0.0;

        if Self::waist_exceeds_threshold(features) {
            adjustment += 0.20;
        }
        if features.activity_level.is_low_activity() {
            adjustment += 0.10;
        }

        adjustment
    }

    /// Sex-conditioned waist circumference predicate
    ///
    /// Unknown sex satisfies neither branch.
    fn waist_exceeds_threshold(features: &ProfileFeatures) -> bool {
        match features.sex {
            Sex::Male => features.waist_circumference_cm > WAIST_THRESHOLD_MALE_CM,
            Sex::Female => features.waist_circumference_cm > WAIST_THRESHOLD_FEMALE_CM,
            Sex::Unknown => false,
        }
    }
}
