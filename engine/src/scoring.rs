//! Composite wellness score
//!
//! Aggregates baseline biometrics, lifestyle, nutritional compliance, and
//! progress tracking into a single 0-100 score with fixed weights. Pure given
//! its inputs; truncation of the history to the retention cap is the
//! history-owner's job, this module reads whatever sequence it is given.

use diet_planner_shared::{ActivityLevel, ProfileFeatures};

use crate::risk::RiskAssessment;
use crate::tracking::TrackingEntry;

/// Number of most recent entries considered for nutritional compliance
const NUTRITION_WINDOW: usize = 5;

/// Weight changes smaller than this magnitude (kg) count as stable progress
const STABLE_WEIGHT_CHANGE_KG: f64 = 1.0;

/// Fixed-weight composite wellness scorer
pub struct HealthScoreCalculator;

impl HealthScoreCalculator {
    /// Compute the composite wellness score, rounded to 2 decimal places
    ///
    /// The component formulas are kept verbatim from the historical scoring
    /// system, including the double application of the 30/20 component caps
    /// and the 0.3/0.2 aggregate weights; the effective ceilings are
    /// therefore 9 and 4 points, not 30 and 20. The blended risks are part
    /// of the scoring contract but do not enter the current formula.
    pub fn calculate(
        profile: &ProfileFeatures,
        _blended_risks: &RiskAssessment,
        history: &[TrackingEntry],
    ) -> f64 {
        let baseline = Self::baseline_score(profile);
        let lifestyle = Self::lifestyle_score(profile.activity_level);
        let nutrition = Self::nutrition_score(history);
        let progress = Self::progress_score(history);

        let total = baseline * 0.3 + lifestyle * 0.2 + nutrition * 0.3 + progress * 0.2;
        (total * 100.0).round() / 100.0
    }

    /// Baseline biometrics: BMI proximity to 22 plus an age component,
    /// capped at 30
    fn baseline_score(profile: &ProfileFeatures) -> f64 {
        let bmi_score = (30.0 - (profile.bmi - 22.0).abs()).max(0.0) / 8.0 * 10.0;
        let age_score = (10.0 - (profile.age - 30.0) / 5.0).max(0.0);
        (bmi_score + age_score).min(30.0)
    }

    /// Activity lookup; extra-active is absent from the historical table and
    /// scores the sedentary floor
    fn lifestyle_score(activity: ActivityLevel) -> f64 {
        match activity {
            ActivityLevel::LightlyActive => 10.0,
            ActivityLevel::ModeratelyActive => 15.0,
            ActivityLevel::VeryActive => 20.0,
            ActivityLevel::Sedentary | ActivityLevel::ExtraActive => 5.0,
        }
    }

    /// Mean meal compliance over the most recent entries, scaled to 30
    fn nutrition_score(history: &[TrackingEntry]) -> f64 {
        if history.is_empty() {
            return 0.0;
        }
        let recent = &history[history.len().saturating_sub(NUTRITION_WINDOW)..];
        let compliance: f64 =
            recent.iter().map(|e| e.meal_compliance).sum::<f64>() / recent.len() as f64;
        compliance * 30.0
    }

    /// Fraction of all retained entries with a stable weight, scaled to 20
    fn progress_score(history: &[TrackingEntry]) -> f64 {
        if history.is_empty() {
            return 0.0;
        }
        let stable = history
            .iter()
            .filter(|e| e.weight_change_kg.abs() < STABLE_WEIGHT_CHANGE_KG)
            .count();
        stable as f64 / history.len() as f64 * 20.0
    }
}
