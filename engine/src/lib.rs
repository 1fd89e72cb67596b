//! Diet Planner AI Engine
//!
//! The risk/scoring engine behind the diet planner: a deterministic
//! rule-based risk model, a trainable risk estimator, the blending of the
//! two, and the composite wellness score, plus the diet-plan skeleton and
//! recommendation text derived from the blended risks.
//!
//! ## Architecture
//!
//! The pipeline is synchronous and request-scoped:
//! profile → normalized features → [`risk::RiskModel`] and
//! [`ml::LearnedRiskEstimator`] → [`blend::RiskBlender`] →
//! [`scoring::HealthScoreCalculator`] → report. The only stateful pieces are
//! the estimator (mutated by training only) and the bounded
//! [`tracking::TrackingHistory`] owned by the orchestrator.

pub mod blend;
pub mod ml;
pub mod plan;
pub mod planner;
pub mod recommend;
pub mod risk;
pub mod scoring;
pub mod tracking;

pub use blend::RiskBlender;
pub use ml::{LearnedRiskEstimator, LinearRegressor, RiskRegressor, TrainingExample};
pub use plan::{DietPlan, DietPlanGenerator};
pub use planner::{DietPlanner, HealthReport};
pub use risk::{Condition, RiskAssessment, RiskModel};
pub use scoring::HealthScoreCalculator;
pub use tracking::{TrackingEntry, TrackingHistory};
