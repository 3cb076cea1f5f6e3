use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::induction::domain::{DecisionLogEntry, Train, TrainSubmission};
use crate::workflows::induction::repository::{
    DecisionLog, DecisionLogError, RepositoryError, TrainRepository,
};
use crate::workflows::induction::{
    induction_router, EvaluationConfig, InductionEngine, InductionService,
};

/// Healthy train that passes every hard constraint.
pub(super) fn train(name: &str, mileage: f64, branding_priority: u32) -> Train {
    Train {
        name: name.to_string(),
        fitness_valid: true,
        open_job_card: false,
        cleaning_completed: true,
        sensor_alert: false,
        mileage,
        branding_priority,
        override_status: None,
    }
}

pub(super) fn submission(name: &str, mileage: f64, branding_priority: u32) -> TrainSubmission {
    TrainSubmission {
        name: name.to_string(),
        fitness_valid: true,
        open_job_card: false,
        cleaning_completed: true,
        sensor_alert: false,
        mileage,
        branding_priority,
        override_status: None,
    }
}

pub(super) fn engine() -> InductionEngine {
    InductionEngine::new(EvaluationConfig::default())
}

pub(super) fn build_service() -> (
    InductionService<MemoryRepository, MemoryLog>,
    Arc<MemoryRepository>,
    Arc<MemoryLog>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let log = Arc::new(MemoryLog::default());
    let service = InductionService::new(
        repository.clone(),
        log.clone(),
        EvaluationConfig::default(),
    );
    (service, repository, log)
}

pub(super) fn induction_router_with_service(
    service: InductionService<MemoryRepository, MemoryLog>,
) -> axum::Router {
    induction_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Vec-backed store preserving registration order, as snapshot order is what
/// breaks score ties.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) trains: Arc<Mutex<Vec<Train>>>,
}

impl TrainRepository for MemoryRepository {
    fn insert(&self, train: Train) -> Result<Train, RepositoryError> {
        let mut guard = self.trains.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.name == train.name) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(train.clone());
        Ok(train)
    }

    fn update(&self, train: Train) -> Result<(), RepositoryError> {
        let mut guard = self.trains.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.name == train.name) {
            Some(slot) => {
                *slot = train;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, name: &str) -> Result<Option<Train>, RepositoryError> {
        let guard = self.trains.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|train| train.name == name).cloned())
    }

    fn snapshot(&self) -> Result<Vec<Train>, RepositoryError> {
        let guard = self.trains.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLog {
    entries: Arc<Mutex<Vec<DecisionLogEntry>>>,
}

impl MemoryLog {
    pub(super) fn entries(&self) -> Vec<DecisionLogEntry> {
        self.entries.lock().expect("log mutex poisoned").clone()
    }
}

impl DecisionLog for MemoryLog {
    fn append(&self, entry: DecisionLogEntry) -> Result<(), DecisionLogError> {
        self.entries
            .lock()
            .expect("log mutex poisoned")
            .push(entry);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<DecisionLogEntry>, DecisionLogError> {
        let guard = self.entries.lock().expect("log mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl TrainRepository for ConflictRepository {
    fn insert(&self, _train: Train) -> Result<Train, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _train: Train) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _name: &str) -> Result<Option<Train>, RepositoryError> {
        Ok(None)
    }

    fn snapshot(&self) -> Result<Vec<Train>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl TrainRepository for UnavailableRepository {
    fn insert(&self, _train: Train) -> Result<Train, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _train: Train) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _name: &str) -> Result<Option<Train>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn snapshot(&self) -> Result<Vec<Train>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct UnavailableLog;

impl DecisionLog for UnavailableLog {
    fn append(&self, _entry: DecisionLogEntry) -> Result<(), DecisionLogError> {
        Err(DecisionLogError::Unavailable("log offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<DecisionLogEntry>, DecisionLogError> {
        Err(DecisionLogError::Unavailable("log offline".to_string()))
    }
}
