use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rail unit in the nightly induction snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub name: String,
    pub fitness_valid: bool,
    pub open_job_card: bool,
    pub cleaning_completed: bool,
    pub sensor_alert: bool,
    pub mileage: f64,
    pub branding_priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_status: Option<OverrideStatus>,
}

/// Manual supervisor pin recorded on a train between runs.
///
/// The stock evaluator does not consult it; the service clears pins after
/// every plan run so a pin covers at most one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideStatus {
    Standby,
    Maintenance,
}

impl OverrideStatus {
    pub const fn label(self) -> &'static str {
        match self {
            OverrideStatus::Standby => "standby",
            OverrideStatus::Maintenance => "maintenance",
        }
    }
}

/// Intake payload accepted by the registration and bulk-import endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainSubmission {
    pub name: String,
    pub fitness_valid: bool,
    pub open_job_card: bool,
    pub cleaning_completed: bool,
    pub sensor_alert: bool,
    pub mileage: f64,
    pub branding_priority: u32,
    #[serde(default)]
    pub override_status: Option<OverrideStatus>,
}

/// Single-field mutations accepted by the maintenance desk endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainUpdate {
    JobCard(bool),
    Fitness(bool),
    Cleaning(bool),
    SensorAlert(bool),
    Mileage(f64),
    Override(Option<OverrideStatus>),
}

/// Category a train lands in after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentCategory {
    Service,
    Standby,
    Maintenance,
}

impl AssignmentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            AssignmentCategory::Service => "service",
            AssignmentCategory::Standby => "standby",
            AssignmentCategory::Maintenance => "maintenance",
        }
    }
}

/// Ranked placement for a train that cleared every hard constraint.
///
/// `slot` is a parking position counted from 1 in ranking order; the counter
/// continues from the service block into standby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAssignment {
    pub name: String,
    pub score: f64,
    pub slot: u32,
    pub explanation: String,
}

/// Maintenance placement carrying every failed constraint for the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceAssignment {
    pub name: String,
    pub category: AssignmentCategory,
    pub reasons: Vec<String>,
    pub explanation: String,
}

/// Complete categorized result of one evaluation run.
///
/// Constructed fresh on every call; the service persists a [`DecisionLogEntry`]
/// derived from it and the plan itself is returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InductionPlan {
    pub traffic_level: i32,
    pub demand_fraction: f64,
    pub service: Vec<RankedAssignment>,
    pub standby: Vec<RankedAssignment>,
    pub maintenance: Vec<MaintenanceAssignment>,
}

impl InductionPlan {
    /// Audit record for this plan, keyed by the moment it was recorded.
    pub fn log_entry(&self, recorded_at: DateTime<Utc>) -> DecisionLogEntry {
        DecisionLogEntry {
            recorded_at,
            traffic_level: self.traffic_level,
            service: self.service.iter().map(|entry| entry.name.clone()).collect(),
            standby: self.standby.iter().map(|entry| entry.name.clone()).collect(),
            maintenance: self
                .maintenance
                .iter()
                .map(|entry| entry.name.clone())
                .collect(),
        }
    }
}

/// Append-only audit record persisted after every plan run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionLogEntry {
    pub recorded_at: DateTime<Utc>,
    pub traffic_level: i32,
    pub service: Vec<String>,
    pub standby: Vec<String>,
    pub maintenance: Vec<String>,
}
