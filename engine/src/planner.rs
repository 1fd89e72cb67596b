//! Orchestration of the assessment pipeline
//!
//! [`DietPlanner`] owns the two stateful pieces (the learned estimator and
//! the bounded tracking history) and wires the pure components together:
//! risk model and estimator in parallel positions, blender, score, plan, and
//! recommendations. A report is always produced for a well-formed profile;
//! the learned component's absence is silent degradation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use diet_planner_shared::{AssessmentResult, UserProfile};

use crate::blend::RiskBlender;
use crate::ml::{LearnedRiskEstimator, TrainingExample};
use crate::plan::{DietPlan, DietPlanGenerator};
use crate::recommend::recommendations_for;
use crate::risk::{RiskAssessment, RiskModel};
use crate::scoring::HealthScoreCalculator;
use crate::tracking::{TrackingEntry, TrackingHistory};

/// Comprehensive health report for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub user_id: Uuid,
    pub health_risks: RiskAssessment,
    pub diet_plan: DietPlan,
    pub health_score: f64,
    pub recommendations: Vec<String>,
}

/// Request-scoped orchestrator for risk assessment and reporting
#[derive(Default)]
pub struct DietPlanner {
    estimator: LearnedRiskEstimator,
    history: TrackingHistory,
}

impl DietPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orchestrator with a caller-configured estimator
    pub fn with_estimator(estimator: LearnedRiskEstimator) -> Self {
        Self {
            estimator,
            history: TrackingHistory::new(),
        }
    }

    /// Train the learned risk estimator on historical examples
    ///
    /// Returns the holdout goodness-of-fit. Training failures (for example
    /// too few examples) propagate to the caller; they do not affect the
    /// assessment pipeline, which falls back to rule-based risks.
    pub fn train_risk_predictor(
        &mut self,
        examples: &[TrainingExample],
    ) -> AssessmentResult<f64> {
        let score = self.estimator.train(examples)?;
        info!(examples = examples.len(), goodness_of_fit = score, "risk predictor trained");
        Ok(score)
    }

    /// Append a tracking observation, evicting the oldest beyond the cap
    pub fn record_tracking(&mut self, entry: TrackingEntry) {
        self.history.record(entry);
    }

    /// Assess per-condition health risks, blended with the learned estimate
    /// when one is available
    pub fn assess_health_risks(&self, profile: &UserProfile) -> AssessmentResult<RiskAssessment> {
        profile.validate()?;
        let features = profile.features();

        let rule_risks = RiskModel::assess(&features);
        let learned_estimate = self.estimator.predict(&features);
        debug!(trained = self.estimator.is_trained(), "blending risk estimates");

        Ok(RiskBlender::blend(&rule_risks, learned_estimate))
    }

    /// Composite wellness score for a profile against the current history
    pub fn health_score(
        &self,
        profile: &UserProfile,
        risks: &RiskAssessment,
    ) -> AssessmentResult<f64> {
        profile.validate()?;
        Ok(HealthScoreCalculator::calculate(
            &profile.features(),
            risks,
            self.history.entries(),
        ))
    }

    /// Produce the full report: risks, diet plan, score, recommendations
    pub fn generate_report(&self, profile: &UserProfile) -> AssessmentResult<HealthReport> {
        let health_risks = self.assess_health_risks(profile)?;
        let diet_plan = DietPlanGenerator::generate(profile, &health_risks);
        let health_score = self.health_score(profile, &health_risks)?;
        let recommendations = recommendations_for(&health_risks);

        Ok(HealthReport {
            user_id: profile.user_id,
            health_risks,
            diet_plan,
            health_score,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::Condition;
    use diet_planner_shared::{ActivityLevel, AssessmentError, Sex};

    fn sample_profile() -> UserProfile {
        UserProfile::new(
            35,
            Sex::Female,
            165.0,
            70.0,
            ActivityLevel::ModeratelyActive,
            85.0,
        )
        .unwrap()
    }

    fn cohort() -> Vec<TrainingExample> {
        (0..20)
            .map(|i| TrainingExample {
                age: 25.0 + i as f64 * 2.0,
                bmi: 20.0 + (i % 6) as f64,
                waist_circumference_cm: 75.0 + (i % 9) as f64 * 3.0,
                activity_level_numeric: 1.0 + (i % 4) as f64,
                health_risk_score: 10.0 + i as f64 * 1.5,
            })
            .collect()
    }

    #[test]
    fn test_untrained_assessment_is_rule_based() {
        let planner = DietPlanner::new();
        let risks = planner.assess_health_risks(&sample_profile()).unwrap();
        assert!((risks.get(Condition::Cardiovascular) - 30.0).abs() < 1e-9);
        assert!((risks.get(Condition::Diabetes) - 35.0).abs() < 1e-9);
        assert!((risks.get(Condition::MetabolicSyndrome) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_trained_assessment_blends() {
        let mut planner = DietPlanner::new();
        planner.train_risk_predictor(&cohort()).unwrap();

        let profile = sample_profile();
        let rule = RiskModel::assess(&profile.features());
        let blended = planner.assess_health_risks(&profile).unwrap();

        // Every condition moved toward a single shared estimate
        let estimate_from_cardio =
            2.0 * blended.get(Condition::Cardiovascular) - rule.get(Condition::Cardiovascular);
        let estimate_from_diabetes =
            2.0 * blended.get(Condition::Diabetes) - rule.get(Condition::Diabetes);
        assert!((estimate_from_cardio - estimate_from_diabetes).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_profile_fails_fast() {
        let planner = DietPlanner::new();
        let mut profile = sample_profile();
        profile.height_cm = 0.0;
        let result = planner.assess_health_risks(&profile);
        assert!(matches!(
            result,
            Err(AssessmentError::MalformedProfile { .. })
        ));
    }

    #[test]
    fn test_report_always_produced_untrained() {
        let planner = DietPlanner::new();
        let profile = sample_profile();
        let report = planner.generate_report(&profile).unwrap();
        assert_eq!(report.user_id, profile.user_id);
        assert!((report.health_risks.get(Condition::Diabetes) - 35.0).abs() < 1e-9);
        assert_eq!(report.diet_plan.meals.len(), 3);
        // Empty history: nutrition and progress contribute nothing
        assert!(report.health_score > 0.0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_report_reflects_tracking_history() {
        let mut planner = DietPlanner::new();
        let profile = sample_profile();
        let without = planner.generate_report(&profile).unwrap().health_score;

        planner.record_tracking(TrackingEntry::new(1.0, 0.2).unwrap());
        let with = planner.generate_report(&profile).unwrap().health_score;
        assert!(with > without);
    }

    #[test]
    fn test_train_failure_leaves_pipeline_working() {
        let mut planner = DietPlanner::new();
        assert!(planner.train_risk_predictor(&[]).is_err());
        assert!(planner.generate_report(&sample_profile()).is_ok());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let planner = DietPlanner::new();
        let report = planner.generate_report(&sample_profile()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"cardiovascular\""));
        assert!(json.contains("\"diet_plan\""));
    }
}
