mod capacity;
mod config;
mod eligibility;
mod scoring;

pub use config::{EvaluationConfig, MAX_SAFE_MILEAGE_KM};
pub use eligibility::{
    REASON_CLEANING, REASON_FITNESS, REASON_JOB_CARD, REASON_MILEAGE, REASON_SENSOR,
};
pub use scoring::{CompositeScoring, ScoredTrain, ScoringStrategy};

use super::domain::{InductionPlan, Train};

/// Extension seam consulted before eligibility screening.
///
/// Supervisor override pins are recorded on the record store but the shipped
/// rule set does not act on them; an operator policy can implement this trait
/// to divert pinned trains before the evaluator sees them.
pub trait SnapshotFilter: Send + Sync {
    fn retain(&self, trains: Vec<Train>) -> Vec<Train>;
}

/// Default filter: the snapshot passes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl SnapshotFilter for KeepAll {
    fn retain(&self, trains: Vec<Train>) -> Vec<Train> {
        trains
    }
}

/// Stateless evaluator producing a categorized induction plan from a fleet
/// snapshot.
///
/// Pure over its input: no I/O, no mutation of the snapshot, and identical
/// input yields bit-identical output. Callers own persistence of the result.
pub struct InductionEngine {
    config: EvaluationConfig,
    scoring: Box<dyn ScoringStrategy>,
    pre_filter: Box<dyn SnapshotFilter>,
}

impl InductionEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        let scoring = Box::new(CompositeScoring::new(config.clone()));
        Self {
            config,
            scoring,
            pre_filter: Box::new(KeepAll),
        }
    }

    /// Swap in an alternative ranking policy without touching the eligibility
    /// screen or the partitioner.
    pub fn with_strategy(config: EvaluationConfig, scoring: Box<dyn ScoringStrategy>) -> Self {
        Self {
            config,
            scoring,
            pre_filter: Box::new(KeepAll),
        }
    }

    pub fn with_snapshot_filter(mut self, pre_filter: Box<dyn SnapshotFilter>) -> Self {
        self.pre_filter = pre_filter;
        self
    }

    pub fn evaluate(&self, trains: &[Train], traffic_level: i32) -> InductionPlan {
        let snapshot = self.pre_filter.retain(trains.to_vec());
        let (eligible, maintenance) = eligibility::screen(&snapshot, &self.config);
        let demand_fraction = capacity::demand_fraction(traffic_level);

        if eligible.is_empty() {
            // No normalization baseline without an eligible cohort.
            return InductionPlan {
                traffic_level,
                demand_fraction,
                service: Vec::new(),
                standby: Vec::new(),
                maintenance,
            };
        }

        let scored = self.scoring.score_cohort(&eligible);
        let (service, standby) = capacity::partition(scored, traffic_level);

        InductionPlan {
            traffic_level,
            demand_fraction,
            service,
            standby,
            maintenance,
        }
    }
}
