//! Blending of rule-based and learned risk estimates
//!
//! The learned estimate is optional by design: any failure to produce one is
//! downgraded here to the unblended rule-based assessment. Nothing from the
//! estimator propagates past this boundary.

use tracing::warn;

use diet_planner_shared::AssessmentResult;

use crate::risk::RiskAssessment;

/// Combines rule-based per-condition risks with a learned scalar estimate
pub struct RiskBlender;

impl RiskBlender {
    /// Average each rule-based risk with the learned estimate
    ///
    /// When the estimate is unavailable or not a finite number, the
    /// rule-based mapping is returned unchanged (identity fallback).
    /// Blended values are intentionally not re-clamped; a learned estimate
    /// above 70 can push a blended value past the rule-based cap, and callers
    /// relying on a [0, 70] bound must re-clamp themselves.
    pub fn blend(
        rule_risks: &RiskAssessment,
        learned_estimate: AssessmentResult<f64>,
    ) -> RiskAssessment {
        match learned_estimate {
            Ok(estimate) if estimate.is_finite() => rule_risks
                .iter()
                .map(|(condition, risk)| (condition, (risk + estimate) / 2.0))
                .collect(),
            Ok(estimate) => {
                warn!(estimate, "non-finite learned risk estimate, using rule-based risks");
                rule_risks.clone()
            }
            Err(error) => {
                warn!(%error, "learned risk estimate unavailable, using rule-based risks");
                rule_risks.clone()
            }
        }
    }
}
