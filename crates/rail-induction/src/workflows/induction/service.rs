use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::domain::{DecisionLogEntry, InductionPlan, Train, TrainSubmission, TrainUpdate};
use super::evaluation::{EvaluationConfig, InductionEngine};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{DecisionLog, DecisionLogError, RepositoryError, TrainRepository};

/// Service composing the intake guard, record store, decision log, and
/// evaluation engine.
pub struct InductionService<R, L> {
    guard: IntakeGuard,
    repository: Arc<R>,
    log: Arc<L>,
    engine: Arc<InductionEngine>,
}

impl<R, L> InductionService<R, L>
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    pub fn new(repository: Arc<R>, log: Arc<L>, config: EvaluationConfig) -> Self {
        Self::with_engine(repository, log, InductionEngine::new(config))
    }

    pub fn with_engine(repository: Arc<R>, log: Arc<L>, engine: InductionEngine) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            log,
            engine: Arc::new(engine),
        }
    }

    /// Register a new train, returning the stored record.
    pub fn register(&self, submission: TrainSubmission) -> Result<Train, InductionServiceError> {
        let train = self.guard.train_from_submission(submission)?;
        let stored = self.repository.insert(train)?;
        Ok(stored)
    }

    /// Current fleet in registration order.
    pub fn roster(&self) -> Result<Vec<Train>, InductionServiceError> {
        Ok(self.repository.snapshot()?)
    }

    pub fn get(&self, name: &str) -> Result<Train, InductionServiceError> {
        let train = self
            .repository
            .fetch(name)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(train)
    }

    /// Apply a single-field update from the maintenance desk endpoints.
    pub fn apply_update(
        &self,
        name: &str,
        update: TrainUpdate,
    ) -> Result<Train, InductionServiceError> {
        let mut train = self
            .repository
            .fetch(name)?
            .ok_or(RepositoryError::NotFound)?;

        match update {
            TrainUpdate::JobCard(open) => train.open_job_card = open,
            TrainUpdate::Fitness(valid) => train.fitness_valid = valid,
            TrainUpdate::Cleaning(completed) => train.cleaning_completed = completed,
            TrainUpdate::SensorAlert(alert) => train.sensor_alert = alert,
            TrainUpdate::Mileage(mileage) => {
                if !mileage.is_finite() || mileage < 0.0 {
                    return Err(IntakeViolation::InvalidMileage(mileage).into());
                }
                train.mileage = mileage;
            }
            TrainUpdate::Override(status) => train.override_status = status,
        }

        self.repository.update(train.clone())?;
        Ok(train)
    }

    /// Bulk roster ingestion: new names are inserted, existing names updated
    /// in place. The whole batch is validated before anything is written.
    pub fn import(
        &self,
        submissions: Vec<TrainSubmission>,
    ) -> Result<ImportSummary, InductionServiceError> {
        let mut trains = Vec::with_capacity(submissions.len());
        for submission in submissions {
            trains.push(self.guard.train_from_submission(submission)?);
        }

        let mut summary = ImportSummary::default();
        for train in trains {
            match self.repository.insert(train.clone()) {
                Ok(_) => summary.registered += 1,
                Err(RepositoryError::Conflict) => {
                    self.repository.update(train)?;
                    summary.updated += 1;
                }
                Err(other) => return Err(other.into()),
            }
        }

        Ok(summary)
    }

    /// Evaluate the current snapshot, persist the audit entry, and clear
    /// supervisor override pins for the next cycle.
    pub fn plan(&self, traffic_level: i32) -> Result<InductionPlan, InductionServiceError> {
        let snapshot = self.repository.snapshot()?;
        let plan = self.engine.evaluate(&snapshot, traffic_level);

        self.log.append(plan.log_entry(Utc::now()))?;

        for train in snapshot {
            if train.override_status.is_some() {
                let mut cleared = train;
                cleared.override_status = None;
                self.repository.update(cleared)?;
            }
        }

        Ok(plan)
    }

    /// Most recent audit entries, newest first.
    pub fn history(&self, limit: usize) -> Result<Vec<DecisionLogEntry>, InductionServiceError> {
        Ok(self.log.recent(limit)?)
    }
}

/// Counts reported by bulk roster ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub registered: usize,
    pub updated: usize,
}

/// Error raised by the induction service.
#[derive(Debug, thiserror::Error)]
pub enum InductionServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    DecisionLog(#[from] DecisionLogError),
}
