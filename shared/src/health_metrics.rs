//! Health metrics calculations module
//!
//! Provides calculations for BMI, BMR, and TDEE based on user profile data.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Mifflin-St Jeor for BMR, standard activity factors
//! 3. **Type Safety**: Strong typing prevents unit confusion

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex for health calculations
///
/// `Unknown` is a first-class value: sex-conditioned risk predicates treat it
/// as matching neither branch, and BMR uses the non-male Mifflin constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

/// Activity level for TDEE calculation and risk predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Numeric encoding used as a regression feature
    ///
    /// Extra-active has no entry in the historical encoding table and shares
    /// the sedentary value.
    pub fn numeric(&self) -> f64 {
        match self {
            ActivityLevel::LightlyActive => 2.0,
            ActivityLevel::ModeratelyActive => 3.0,
            ActivityLevel::VeryActive => 4.0,
            ActivityLevel::Sedentary | ActivityLevel::ExtraActive => 1.0,
        }
    }

    /// Whether this level counts as low activity for risk adjustments
    pub fn is_low_activity(&self) -> bool {
        matches!(
            self,
            ActivityLevel::Sedentary | ActivityLevel::LightlyActive
        )
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

// ============================================================================
// BMI / BMR / TDEE
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// Unknown sex uses the female constant.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female | Sex::Unknown => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
    activity_level: ActivityLevel,
) -> f64 {
    calculate_bmr(weight_kg, height_cm, age_years, sex) * activity_level.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 175cm -> BMI ~22.86
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.1);
    }

    #[test]
    fn test_bmi_scenario_value() {
        // 70kg, 165cm -> BMI ~25.71
        let bmi = calculate_bmi(70.0, 165.0);
        assert!((bmi - 25.71).abs() < 0.01);
    }

    #[test]
    fn test_bmr_mifflin() {
        // 30yo male, 80kg, 180cm -> BMR ~1780
        let bmr = calculate_bmr(80.0, 180.0, 30, Sex::Male);
        assert!((bmr - 1780.0).abs() < 50.0);

        // 30yo female, 60kg, 165cm -> BMR ~1370
        let bmr = calculate_bmr(60.0, 165.0, 30, Sex::Female);
        assert!((bmr - 1370.0).abs() < 50.0);
    }

    #[test]
    fn test_unknown_sex_uses_female_constant() {
        let unknown = calculate_bmr(70.0, 170.0, 40, Sex::Unknown);
        let female = calculate_bmr(70.0, 170.0, 40, Sex::Female);
        assert_eq!(unknown, female);
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1.2, 1.0)]
    #[case(ActivityLevel::LightlyActive, 1.375, 2.0)]
    #[case(ActivityLevel::ModeratelyActive, 1.55, 3.0)]
    #[case(ActivityLevel::VeryActive, 1.725, 4.0)]
    #[case(ActivityLevel::ExtraActive, 1.9, 1.0)]
    fn test_activity_level_encodings(
        #[case] level: ActivityLevel,
        #[case] multiplier: f64,
        #[case] numeric: f64,
    ) {
        assert_eq!(level.multiplier(), multiplier);
        assert_eq!(level.numeric(), numeric);
    }

    #[test]
    fn test_low_activity_predicate() {
        assert!(ActivityLevel::Sedentary.is_low_activity());
        assert!(ActivityLevel::LightlyActive.is_low_activity());
        assert!(!ActivityLevel::ModeratelyActive.is_low_activity());
        assert!(!ActivityLevel::VeryActive.is_low_activity());
        assert!(!ActivityLevel::ExtraActive.is_low_activity());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI is always positive for valid inputs
        #[test]
        fn prop_bmi_positive(weight in 20.0f64..500.0, height in 100.0f64..250.0) {
            let bmi = calculate_bmi(weight, height);
            prop_assert!(bmi > 0.0);
        }

        /// Property: Heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            let bmi1 = calculate_bmi(weight1, height);
            let bmi2 = calculate_bmi(weight2, height);
            prop_assert!(bmi2 > bmi1);
        }

        /// Property: Male BMR > non-male BMR (same stats)
        #[test]
        fn prop_male_bmr_higher(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            let bmr_male = calculate_bmr(weight, height, age, Sex::Male);
            let bmr_female = calculate_bmr(weight, height, age, Sex::Female);
            prop_assert!(bmr_male > bmr_female);
        }

        /// Property: TDEE > BMR whenever BMR is positive (multiplier > 1)
        #[test]
        fn prop_tdee_greater_than_bmr(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20i32..60
        ) {
            let bmr = calculate_bmr(weight, height, age, Sex::Male);
            let tdee = calculate_tdee(weight, height, age, Sex::Male, ActivityLevel::ModeratelyActive);
            prop_assert!(tdee > bmr);
        }
    }
}
