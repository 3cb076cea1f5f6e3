use super::domain::{Train, TrainSubmission};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("train name must not be empty")]
    EmptyName,
    #[error("mileage must be a finite non-negative number, found {0}")]
    InvalidMileage(f64),
}

/// Guard responsible for producing validated `Train` records.
///
/// Malformed input is rejected here so the evaluator never sees it.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn train_from_submission(
        &self,
        submission: TrainSubmission,
    ) -> Result<Train, IntakeViolation> {
        let name = submission.name.trim().to_string();
        if name.is_empty() {
            return Err(IntakeViolation::EmptyName);
        }

        if !submission.mileage.is_finite() || submission.mileage < 0.0 {
            return Err(IntakeViolation::InvalidMileage(submission.mileage));
        }

        Ok(Train {
            name,
            fitness_valid: submission.fitness_valid,
            open_job_card: submission.open_job_card,
            cleaning_completed: submission.cleaning_completed,
            sensor_alert: submission.sensor_alert,
            mileage: submission.mileage,
            branding_priority: submission.branding_priority,
            override_status: submission.override_status,
        })
    }
}
