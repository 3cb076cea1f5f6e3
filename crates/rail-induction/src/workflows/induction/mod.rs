//! Daily train induction: intake, evaluation, and audit scaffolding.
//!
//! The evaluator itself is a pure function over an immutable fleet snapshot;
//! everything stateful (record store, decision log, override pins) lives
//! behind traits so the rule pipeline can be exercised in isolation.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssignmentCategory, DecisionLogEntry, InductionPlan, MaintenanceAssignment, OverrideStatus,
    RankedAssignment, Train, TrainSubmission, TrainUpdate,
};
pub use evaluation::{
    CompositeScoring, EvaluationConfig, InductionEngine, KeepAll, ScoredTrain, ScoringStrategy,
    SnapshotFilter, MAX_SAFE_MILEAGE_KM,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{DecisionLog, DecisionLogError, RepositoryError, TrainRepository};
pub use router::induction_router;
pub use service::{ImportSummary, InductionService, InductionServiceError};
