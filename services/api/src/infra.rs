use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use rail_induction::workflows::induction::{
    DecisionLog, DecisionLogEntry, DecisionLogError, EvaluationConfig, RepositoryError, Train,
    TrainRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Vec-backed record store. Registration order is preserved because snapshot
/// order breaks score ties during evaluation.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTrainRepository {
    trains: Arc<Mutex<Vec<Train>>>,
}

impl TrainRepository for InMemoryTrainRepository {
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
pub(crate) struct InMemoryDecisionLog {
    entries: Arc<Mutex<Vec<DecisionLogEntry>>>,
}

impl InMemoryDecisionLog {
    pub(crate) fn entries(&self) -> Vec<DecisionLogEntry> {
        self.entries.lock().expect("log mutex poisoned").clone()
    }
}

impl DecisionLog for InMemoryDecisionLog {
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

pub(crate) fn default_evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}
