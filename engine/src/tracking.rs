//! Bounded tracking history
//!
//! Compliance and weight-change observations appended chronologically by the
//! orchestrator. Only the most recent entries are retained; the cap is an
//! explicit property of the container, not ambient state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use diet_planner_shared::{validation::validate_meal_compliance, AssessmentResult};

/// One tracking observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingEntry {
    /// Fraction of planned meals followed, in [0, 1]
    pub meal_compliance: f64,
    /// Signed weight change in kg since the previous entry
    pub weight_change_kg: f64,
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

impl TrackingEntry {
    /// Create an entry timestamped now, validating the compliance fraction
    pub fn new(meal_compliance: f64, weight_change_kg: f64) -> AssessmentResult<Self> {
        validate_meal_compliance(meal_compliance)?;
        Ok(Self {
            meal_compliance,
            weight_change_kg,
            recorded_at: Utc::now(),
        })
    }
}

/// Bounded, chronologically ordered tracking history
///
/// Holds at most [`TrackingHistory::CAPACITY`] entries; recording one more
/// evicts the oldest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingHistory {
    entries: Vec<TrackingEntry>,
}

impl TrackingHistory {
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest when at capacity
    pub fn record(&mut self, entry: TrackingEntry) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    /// Retained entries, oldest first
    pub fn entries(&self) -> &[TrackingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(compliance: f64, change: f64) -> TrackingEntry {
        TrackingEntry::new(compliance, change).unwrap()
    }

    #[test]
    fn test_entry_validates_compliance() {
        assert!(TrackingEntry::new(0.8, -0.5).is_ok());
        assert!(TrackingEntry::new(1.2, 0.0).is_err());
        assert!(TrackingEntry::new(-0.1, 0.0).is_err());
    }

    #[test]
    fn test_record_keeps_chronological_order() {
        let mut history = TrackingHistory::new();
        history.record(entry(0.1, 0.0));
        history.record(entry(0.2, 0.0));
        history.record(entry(0.3, 0.0));
        let compliances: Vec<f64> = history.entries().iter().map(|e| e.meal_compliance).collect();
        assert_eq!(compliances, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = TrackingHistory::new();
        for i in 0..15 {
            history.record(entry(i as f64 / 100.0, 0.0));
        }
        assert_eq!(history.len(), TrackingHistory::CAPACITY);
        // Entries 0-4 were evicted; the oldest retained entry is the 6th
        assert_eq!(history.entries()[0].meal_compliance, 0.05);
        assert_eq!(history.entries()[9].meal_compliance, 0.14);
    }
}
