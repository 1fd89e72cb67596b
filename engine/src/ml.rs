//! Learned health risk estimation
//!
//! A trainable regression layer over the feature vector
//! [age, bmi, waist circumference, activity level numeric]. The regression
//! backend is pluggable through [`RiskRegressor`]; the default backend is an
//! ordinary-least-squares [`LinearRegressor`]. The estimator has an explicit
//! untrained → trained lifecycle and refuses to predict before training.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use diet_planner_shared::{AssessmentError, AssessmentResult, ProfileFeatures};

/// Number of regression features: age, bmi, waist, activity numeric
const FEATURE_COUNT: usize = 4;

/// Minimum examples needed for a fit/holdout split
const MIN_TRAINING_EXAMPLES: usize = 2;

/// Fraction of examples held out for scoring the fit
const HOLDOUT_FRACTION: f64 = 0.2;

/// Predicted risk scores are clamped to this range
const PREDICTION_RANGE: (f64, f64) = (0.0, 80.0);

/// One historical observation used to fit the risk estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub age: f64,
    pub bmi: f64,
    pub waist_circumference_cm: f64,
    /// Activity level encoded as 1-4 (see `ActivityLevel::numeric`)
    pub activity_level_numeric: f64,
    /// Observed risk score, the regression target
    pub health_risk_score: f64,
}

impl TrainingExample {
    fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.bmi,
            self.waist_circumference_cm,
            self.activity_level_numeric,
        ]
    }
}

// ============================================================================
// Feature Scaling
// ============================================================================

/// Per-column mean/variance normalization fitted at training time
#[derive(Debug, Clone)]
pub struct FeatureScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl FeatureScaler {
    /// Fit column means and standard deviations over a feature matrix
    ///
    /// A zero-variance column is scaled by 1 so constant features pass
    /// through centered instead of dividing by zero.
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let n = rows.len() as f64;
        let width = rows.first().map_or(0, Vec::len);

        let mut means = vec![0.0; width];
        for row in rows {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut stds = vec![0.0; width];
        for row in rows {
            for ((std, value), mean) in stds.iter_mut().zip(row).zip(&means) {
                *std += (value - mean).powi(2);
            }
        }
        for std in &mut stds {
            *std = (*std / n).sqrt();
            if *std == 0.0 {
                *std = 1.0;
            }
        }

        Self { means, stds }
    }

    /// Scale one feature row to zero mean and unit variance
    pub fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(value, (mean, std))| (value - mean) / std)
            .collect()
    }
}

// ============================================================================
// Regression Backends
// ============================================================================

/// Capability interface for a trainable risk regression backend
///
/// Backends are fitted once and read-only afterwards; `predict` must fail
/// with [`AssessmentError::NotTrained`] before a successful `fit`.
pub trait RiskRegressor: Send {
    fn fit(&mut self, rows: &[Vec<f64>], targets: &[f64]) -> AssessmentResult<()>;
    fn predict(&self, row: &[f64]) -> AssessmentResult<f64>;
}

/// Ordinary least squares with intercept, solved via normal equations
///
/// A tiny ridge term keeps the system positive definite when features are
/// collinear or the fit split is smaller than the feature count.
#[derive(Debug, Clone, Default)]
pub struct LinearRegressor {
    /// Intercept followed by one weight per feature; `None` until fitted
    weights: Option<Vec<f64>>,
}

const RIDGE_LAMBDA: f64 = 1e-8;

impl LinearRegressor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RiskRegressor for LinearRegressor {
    fn fit(&mut self, rows: &[Vec<f64>], targets: &[f64]) -> AssessmentResult<()> {
        if rows.is_empty() || rows.len() != targets.len() {
            return Err(AssessmentError::InsufficientData {
                required: 1,
                got: rows.len().min(targets.len()),
            });
        }

        let width = rows[0].len() + 1; // intercept column

        // Normal equations: (X'X + λI) w = X'y, with X prefixed by a 1s column
        let mut xtx = vec![vec![0.0; width]; width];
        let mut xty = vec![0.0; width];
        for (row, &y) in rows.iter().zip(targets) {
            let mut extended = Vec::with_capacity(width);
            extended.push(1.0);
            extended.extend_from_slice(row);
            for i in 0..width {
                for j in 0..width {
                    xtx[i][j] += extended[i] * extended[j];
                }
                xty[i] += extended[i] * y;
            }
        }
        for (i, row) in xtx.iter_mut().enumerate() {
            row[i] += RIDGE_LAMBDA;
        }

        self.weights = Some(solve_linear_system(xtx, xty)?);
        Ok(())
    }

    fn predict(&self, row: &[f64]) -> AssessmentResult<f64> {
        let weights = self.weights.as_ref().ok_or(AssessmentError::NotTrained)?;
        let prediction = weights[0]
            + weights[1..]
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        Ok(prediction)
    }
}

/// Solve a small symmetric positive definite system by Gaussian elimination
/// with partial pivoting
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> AssessmentResult<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot_row][col].abs() < 1e-12 {
            return Err(AssessmentError::Regression(
                "singular normal-equation system".to_string(),
            ));
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Ok(x)
}

// ============================================================================
// Learned Risk Estimator
// ============================================================================

/// Trainable risk estimator with an explicit untrained → trained lifecycle
///
/// `train` is the only mutating operation; `predict` is read-only, so callers
/// that share an estimator across threads only need to serialize training
/// against prediction.
pub struct LearnedRiskEstimator {
    regressor: Box<dyn RiskRegressor>,
    scaler: Option<FeatureScaler>,
}

impl Default for LearnedRiskEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl LearnedRiskEstimator {
    /// Estimator backed by the default linear regressor
    pub fn new() -> Self {
        Self::with_regressor(Box::new(LinearRegressor::new()))
    }

    /// Estimator backed by a caller-supplied regression backend
    pub fn with_regressor(regressor: Box<dyn RiskRegressor>) -> Self {
        Self {
            regressor,
            scaler: None,
        }
    }

    pub fn is_trained(&self) -> bool {
        self.scaler.is_some()
    }

    /// Fit the scaler and regression backend on historical examples
    ///
    /// The scaler is fitted on the full example set; the examples are then
    /// shuffled and split 80/20 into fit and holdout partitions. Returns the
    /// holdout R² as a goodness-of-fit measure and transitions the estimator
    /// to the trained state.
    pub fn train(&mut self, examples: &[TrainingExample]) -> AssessmentResult<f64> {
        if examples.len() < MIN_TRAINING_EXAMPLES {
            return Err(AssessmentError::InsufficientData {
                required: MIN_TRAINING_EXAMPLES,
                got: examples.len(),
            });
        }

        let rows: Vec<Vec<f64>> = examples
            .iter()
            .map(|e| e.feature_vector().to_vec())
            .collect();
        let targets: Vec<f64> = examples.iter().map(|e| e.health_risk_score).collect();

        let scaler = FeatureScaler::fit(&rows);
        let scaled: Vec<Vec<f64>> = rows.iter().map(|r| scaler.transform(r)).collect();

        let n = examples.len();
        let holdout_size = ((n as f64 * HOLDOUT_FRACTION).ceil() as usize).clamp(1, n - 1);

        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut rand::thread_rng());
        let (holdout_idx, fit_idx) = indices.split_at(holdout_size);

        let fit_rows: Vec<Vec<f64>> = fit_idx.iter().map(|&i| scaled[i].clone()).collect();
        let fit_targets: Vec<f64> = fit_idx.iter().map(|&i| targets[i]).collect();
        self.regressor.fit(&fit_rows, &fit_targets)?;

        let mut predicted = Vec::with_capacity(holdout_idx.len());
        let mut observed = Vec::with_capacity(holdout_idx.len());
        for &i in holdout_idx {
            predicted.push(self.regressor.predict(&scaled[i])?);
            observed.push(targets[i]);
        }

        self.scaler = Some(scaler);
        Ok(r_squared(&observed, &predicted))
    }

    /// Predict a scalar risk estimate for a normalized profile
    ///
    /// Fails with [`AssessmentError::NotTrained`] before a successful
    /// [`train`](Self::train). The result is clamped to [0, 80].
    pub fn predict(&self, features: &ProfileFeatures) -> AssessmentResult<f64> {
        let scaler = self.scaler.as_ref().ok_or(AssessmentError::NotTrained)?;

        let row = [
            features.age,
            features.bmi,
            features.waist_circumference_cm,
            features.activity_level.numeric(),
        ];
        let prediction = self.regressor.predict(&scaler.transform(&row))?;

        let (lo, hi) = PREDICTION_RANGE;
        Ok(prediction.clamp(lo, hi))
    }
}

/// Coefficient of determination over a holdout set
///
/// A zero-variance holdout scores 1.0 when predicted exactly, 0.0 otherwise.
fn r_squared(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mean = observed.iter().sum::<f64>() / n;
    let ss_tot: f64 = observed.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        if ss_res < 1e-9 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    }
}
