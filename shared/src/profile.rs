//! User profile and the normalized feature view consumed by the engine

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AssessmentResult;
use crate::health_metrics::{
    calculate_bmi, calculate_bmr, calculate_tdee, ActivityLevel, Sex,
};
use crate::validation::{
    validate_age, validate_height_cm, validate_non_negative, validate_weight_kg,
};

/// Biometric and lifestyle data for a single user
///
/// Derived metrics (BMI, BMR, TDEE) are computed on demand, never stored.
/// The getters assume a profile that passed [`UserProfile::validate`];
/// construction through [`UserProfile::new`] guarantees that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    /// Age in years
    pub age: i32,
    pub sex: Sex,
    /// Height in centimeters (stored in SI)
    pub height_cm: f64,
    /// Current weight in kilograms (stored in SI)
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    /// Waist circumference in centimeters; 0 when unmeasured
    pub waist_circumference_cm: f64,
    pub allergies: BTreeSet<String>,
    pub medications: BTreeSet<String>,
    pub health_issues: BTreeSet<String>,
    /// Caffeine intake in mg per day
    pub caffeine_mg_per_day: f64,
    /// Alcohol intake in standard units per week
    pub alcohol_units_per_week: f64,
}

impl UserProfile {
    /// Create a validated profile from the core biometric fields
    ///
    /// Lifestyle collections and intake fields start empty/zero and can be
    /// filled in afterwards.
    pub fn new(
        age: i32,
        sex: Sex,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        waist_circumference_cm: f64,
    ) -> AssessmentResult<Self> {
        let profile = Self {
            user_id: Uuid::new_v4(),
            age,
            sex,
            height_cm,
            weight_kg,
            activity_level,
            waist_circumference_cm,
            allergies: BTreeSet::new(),
            medications: BTreeSet::new(),
            health_issues: BTreeSet::new(),
            caffeine_mg_per_day: 0.0,
            alcohol_units_per_week: 0.0,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the hard invariants on this profile
    ///
    /// Height and weight must be strictly positive (BMI divides by height),
    /// age and the measurement fields must be non-negative finite numbers.
    pub fn validate(&self) -> AssessmentResult<()> {
        validate_height_cm(self.height_cm)?;
        validate_weight_kg(self.weight_kg)?;
        validate_age(self.age)?;
        validate_non_negative("waist_circumference_cm", self.waist_circumference_cm)?;
        validate_non_negative("caffeine_mg_per_day", self.caffeine_mg_per_day)?;
        validate_non_negative("alcohol_units_per_week", self.alcohol_units_per_week)?;
        Ok(())
    }

    /// Body Mass Index
    pub fn bmi(&self) -> f64 {
        calculate_bmi(self.weight_kg, self.height_cm)
    }

    /// Basal Metabolic Rate (Mifflin-St Jeor)
    pub fn bmr(&self) -> f64 {
        calculate_bmr(self.weight_kg, self.height_cm, self.age, self.sex)
    }

    /// Total Daily Energy Expenditure
    pub fn tdee(&self) -> f64 {
        calculate_tdee(
            self.weight_kg,
            self.height_cm,
            self.age,
            self.sex,
            self.activity_level,
        )
    }

    /// Normalized feature view for the risk model and the learned estimator
    pub fn features(&self) -> ProfileFeatures {
        ProfileFeatures {
            age: self.age as f64,
            sex: self.sex,
            bmi: self.bmi(),
            waist_circumference_cm: self.waist_circumference_cm,
            activity_level: self.activity_level,
        }
    }
}

/// Normalized profile features consumed by risk assessment and prediction
///
/// The `Default` values are the stand-ins used when a field is unavailable:
/// a 30 year old of unknown sex, BMI 22, unmeasured waist, sedentary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileFeatures {
    pub age: f64,
    pub sex: Sex,
    pub bmi: f64,
    pub waist_circumference_cm: f64,
    pub activity_level: ActivityLevel,
}

impl Default for ProfileFeatures {
    fn default() -> Self {
        Self {
            age: 30.0,
            sex: Sex::Unknown,
            bmi: 22.0,
            waist_circumference_cm: 0.0,
            activity_level: ActivityLevel::Sedentary,
        }
    }
}

impl From<&UserProfile> for ProfileFeatures {
    fn from(profile: &UserProfile) -> Self {
        profile.features()
    }
}
