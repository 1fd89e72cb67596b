//! Diet-plan skeleton generation
//!
//! Static meal templates and nutrient-focus lookups keyed by the blended
//! risk assessment. This is deliberately not a nutritional database: the
//! plan is a scaffold (protein target, meal slots, micronutrient focus) for
//! a downstream meal service to fill in.

use serde::{Deserialize, Serialize};

use diet_planner_shared::UserProfile;

use crate::risk::{Condition, RiskAssessment};

/// Vegetarian RDA protein target, grams per kg of body weight
pub const PROTEIN_G_PER_KG: f64 = 0.8;

/// Meal slot identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// One templated meal slot in the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    pub meal_type: MealType,
    pub recommended_timing: String,
    pub nutrition_goals: Vec<String>,
}

/// Personalized diet-plan skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Daily protein target in grams
    pub protein_target_g: f64,
    /// Micronutrients to emphasize, driven by elevated risks
    pub micronutrient_focus: Vec<String>,
    pub meals: Vec<MealSlot>,
}

/// Generates diet-plan skeletons from a profile and blended risks
pub struct DietPlanGenerator;

impl DietPlanGenerator {
    /// Build the plan skeleton
    ///
    /// Dinner is dropped when metabolic syndrome risk is elevated; the
    /// micronutrient focus is the union of per-condition nutrients for every
    /// elevated condition, deduplicated in condition order.
    pub fn generate(profile: &UserProfile, risks: &RiskAssessment) -> DietPlan {
        DietPlan {
            protein_target_g: profile.weight_kg * PROTEIN_G_PER_KG,
            micronutrient_focus: Self::nutrient_focus(risks),
            meals: Self::meal_sequence(risks),
        }
    }

    fn meal_sequence(risks: &RiskAssessment) -> Vec<MealSlot> {
        let mut meals = vec![
            MealSlot {
                meal_type: MealType::Breakfast,
                recommended_timing: "7-8 AM".to_string(),
                nutrition_goals: vec![
                    "energy_boost".to_string(),
                    "metabolism_kickstart".to_string(),
                ],
            },
            MealSlot {
                meal_type: MealType::Lunch,
                recommended_timing: "12-1 PM".to_string(),
                nutrition_goals: vec![
                    "sustained_energy".to_string(),
                    "muscle_maintenance".to_string(),
                ],
            },
            MealSlot {
                meal_type: MealType::Dinner,
                recommended_timing: "6-7 PM".to_string(),
                nutrition_goals: vec![
                    "recovery".to_string(),
                    "minimal_digestion_load".to_string(),
                ],
            },
        ];

        if risks.is_elevated(Condition::MetabolicSyndrome) {
            meals.retain(|meal| meal.meal_type != MealType::Dinner);
        }

        meals
    }

    fn nutrient_focus(risks: &RiskAssessment) -> Vec<String> {
        let mut focus: Vec<String> = Vec::new();
        for condition in Condition::ALL {
            if !risks.is_elevated(condition) {
                continue;
            }
            for nutrient in Self::condition_nutrients(condition) {
                if !focus.iter().any(|f| f == nutrient) {
                    focus.push(nutrient.to_string());
                }
            }
        }
        focus
    }

    fn condition_nutrients(condition: Condition) -> &'static [&'static str] {
        match condition {
            Condition::Cardiovascular => &["omega_3", "fiber", "potassium"],
            Condition::Diabetes => &["chromium", "magnesium", "fiber"],
            Condition::MetabolicSyndrome => &["vitamin_d", "calcium", "zinc"],
        }
    }
}
