//! Integration tests for the full assessment pipeline

use diet_planner_engine::{
    Condition, DietPlanner, TrackingEntry, TrackingHistory, TrainingExample,
};
use diet_planner_shared::{ActivityLevel, AssessmentError, Sex, UserProfile};

fn reference_profile() -> UserProfile {
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

fn training_cohort() -> Vec<TrainingExample> {
    (0..25)
        .map(|i| TrainingExample {
            age: 22.0 + i as f64 * 2.5,
            bmi: 19.0 + (i % 8) as f64 * 1.5,
            waist_circumference_cm: 70.0 + (i % 10) as f64 * 4.0,
            activity_level_numeric: 1.0 + (i % 4) as f64,
            health_risk_score: 15.0 + i as f64,
        })
        .collect()
}

#[test]
fn test_untrained_pipeline_produces_rule_based_report() {
    let planner = DietPlanner::new();
    let report = planner.generate_report(&reference_profile()).unwrap();

    assert!((report.health_risks.get(Condition::Cardiovascular) - 30.0).abs() < 1e-9);
    assert!((report.health_risks.get(Condition::Diabetes) - 35.0).abs() < 1e-9);
    assert!((report.health_risks.get(Condition::MetabolicSyndrome) - 25.0).abs() < 1e-9);
    assert_eq!(report.diet_plan.meals.len(), 3);
    assert!(report.recommendations.is_empty());
    assert!((0.0..=100.0).contains(&report.health_score));
}

#[test]
fn test_trained_pipeline_blends_and_reports() {
    let mut planner = DietPlanner::new();
    let fit = planner.train_risk_predictor(&training_cohort()).unwrap();
    assert!(fit.is_finite());

    let report = planner.generate_report(&reference_profile()).unwrap();

    // Blended values are averages with a shared scalar in [0, 80], so each
    // condition stays within [rule/2, (rule+80)/2]
    for (condition, rule) in [
        (Condition::Cardiovascular, 30.0),
        (Condition::Diabetes, 35.0),
        (Condition::MetabolicSyndrome, 25.0),
    ] {
        let blended = report.health_risks.get(condition);
        assert!(blended >= rule / 2.0 && blended <= (rule + 80.0) / 2.0);
    }
}

#[test]
fn test_tracking_history_feeds_the_score() {
    let mut planner = DietPlanner::new();
    let profile = reference_profile();

    let baseline = planner.generate_report(&profile).unwrap().health_score;

    // Perfect compliance, stable weight: more than the retention cap
    for _ in 0..(TrackingHistory::CAPACITY + 5) {
        planner.record_tracking(TrackingEntry::new(1.0, 0.1).unwrap());
    }

    let report = planner.generate_report(&profile).unwrap();
    // nutrition adds 30*0.3 = 9, progress adds 20*0.2 = 4
    assert_eq!(report.health_score, baseline + 13.0);
}

#[test]
fn test_malformed_profile_is_rejected_everywhere() {
    let planner = DietPlanner::new();
    let mut profile = reference_profile();
    profile.weight_kg = f64::NAN;

    let assess = planner.assess_health_risks(&profile);
    assert!(matches!(
        assess,
        Err(AssessmentError::MalformedProfile { .. })
    ));
    assert!(planner.generate_report(&profile).is_err());
}

#[test]
fn test_elevated_risks_shape_plan_and_recommendations() {
    // 55yo sedentary male, obese, large waist: diabetes and metabolic
    // syndrome both land above the action threshold before blending
    let profile = UserProfile::new(55, Sex::Male, 170.0, 100.0, ActivityLevel::Sedentary, 110.0)
        .unwrap();
    let planner = DietPlanner::new();
    let report = planner.generate_report(&profile).unwrap();

    assert!(report.health_risks.get(Condition::Cardiovascular) > 50.0);
    assert!(report.health_risks.get(Condition::Diabetes) > 50.0);
    assert!(report.health_risks.get(Condition::MetabolicSyndrome) > 50.0);
    // Dinner dropped, focus populated, guidance for all three conditions
    assert_eq!(report.diet_plan.meals.len(), 2);
    assert!(!report.diet_plan.micronutrient_focus.is_empty());
    assert_eq!(report.recommendations.len(), 9);
}
