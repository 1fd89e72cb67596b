//! Diet Planner AI demo binary
//!
//! Runs the full pipeline for a sample profile: trains the risk estimator on
//! a small synthetic cohort, records a few tracking entries, and prints the
//! comprehensive health report as JSON.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diet_planner_engine::{Condition, DietPlanner, RiskModel, TrackingEntry, TrainingExample};
use diet_planner_shared::{ActivityLevel, ProfileFeatures, Sex, UserProfile};

fn main() -> Result<()> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Diet Planner AI demo");

    let mut planner = DietPlanner::new();

    // Train on a synthetic cohort; the report still works if this fails
    match planner.train_risk_predictor(&synthetic_cohort()) {
        Ok(score) => info!(goodness_of_fit = score, "risk predictor ready"),
        Err(e) => warn!("training skipped: {e}"),
    }

    planner.record_tracking(TrackingEntry::new(0.9, -0.4)?);
    planner.record_tracking(TrackingEntry::new(0.8, 0.3)?);

    let mut profile = UserProfile::new(
        35,
        Sex::Female,
        165.0,
        70.0,
        ActivityLevel::ModeratelyActive,
        85.0,
    )?;
    profile.health_issues.insert("occasional stress".to_string());

    let report = planner.generate_report(&profile)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Cohort of rule-model-labeled profiles covering the feature grid
fn synthetic_cohort() -> Vec<TrainingExample> {
    let activities = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    let mut examples = Vec::new();
    for age_step in 0..5 {
        for bmi_step in 0..4 {
            for &activity in &activities {
                let features = ProfileFeatures {
                    age: 25.0 + age_step as f64 * 10.0,
                    sex: Sex::Female,
                    bmi: 20.0 + bmi_step as f64 * 4.0,
                    waist_circumference_cm: 70.0 + bmi_step as f64 * 10.0,
                    activity_level: activity,
                };
                let risks = RiskModel::assess(&features);
                let mean_risk = risks.iter().map(|(_, pct)| pct).sum::<f64>()
                    / Condition::ALL.len() as f64;
                examples.push(TrainingExample {
                    age: features.age,
                    bmi: features.bmi,
                    waist_circumference_cm: features.waist_circumference_cm,
                    activity_level_numeric: activity.numeric(),
                    health_risk_score: mean_risk,
                });
            }
        }
    }
    examples
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "diet_planner=info,diet_planner_engine=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
