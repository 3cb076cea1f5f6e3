use super::super::domain::{AssignmentCategory, MaintenanceAssignment, Train};
use super::config::EvaluationConfig;

pub const REASON_FITNESS: &str = "Fitness certificate invalid";
pub const REASON_JOB_CARD: &str = "Open job card pending";
pub const REASON_CLEANING: &str = "Cleaning not completed";
pub const REASON_MILEAGE: &str = "Exceeded maximum safe mileage limit";
pub const REASON_SENSOR: &str = "IoT sensor alert detected";

/// Splits the snapshot into trains that clear every hard constraint and
/// maintenance assignments carrying the full reason list.
///
/// Reasons are collected in a fixed order (fitness, job card, cleaning,
/// mileage, sensor) so two runs over the same snapshot report identically.
pub(crate) fn screen(
    trains: &[Train],
    config: &EvaluationConfig,
) -> (Vec<Train>, Vec<MaintenanceAssignment>) {
    let mut eligible = Vec::new();
    let mut maintenance = Vec::new();

    for train in trains {
        let reasons = failing_reasons(train, config);
        if reasons.is_empty() {
            eligible.push(train.clone());
        } else {
            maintenance.push(MaintenanceAssignment {
                name: train.name.clone(),
                category: AssignmentCategory::Maintenance,
                explanation: format!("Held for maintenance: {}", reasons.join("; ")),
                reasons,
            });
        }
    }

    (eligible, maintenance)
}

fn failing_reasons(train: &Train, config: &EvaluationConfig) -> Vec<String> {
    let mut reasons = Vec::new();

    if !train.fitness_valid {
        reasons.push(REASON_FITNESS.to_string());
    }
    if train.open_job_card {
        reasons.push(REASON_JOB_CARD.to_string());
    }
    if !train.cleaning_completed {
        reasons.push(REASON_CLEANING.to_string());
    }
    if train.mileage >= config.max_safe_mileage_km {
        reasons.push(REASON_MILEAGE.to_string());
    }
    if train.sensor_alert {
        reasons.push(REASON_SENSOR.to_string());
    }

    reasons
}
