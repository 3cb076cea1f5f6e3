use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{OverrideStatus, TrainSubmission, TrainUpdate};
use super::repository::{DecisionLog, RepositoryError, TrainRepository};
use super::service::{InductionService, InductionServiceError};
use crate::workflows::roster::RosterImporter;

/// Router builder exposing HTTP endpoints for fleet upkeep, roster ingestion,
/// and plan generation.
pub fn induction_router<R, L>(service: Arc<InductionService<R, L>>) -> Router
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    Router::new()
        .route(
            "/api/v1/trains",
            get(roster_handler::<R, L>).post(register_handler::<R, L>),
        )
        .route("/api/v1/trains/import", post(import_handler::<R, L>))
        .route("/api/v1/trains/:name", get(train_handler::<R, L>))
        .route(
            "/api/v1/trains/:name/job-card",
            patch(job_card_handler::<R, L>),
        )
        .route(
            "/api/v1/trains/:name/fitness",
            patch(fitness_handler::<R, L>),
        )
        .route(
            "/api/v1/trains/:name/cleaning",
            patch(cleaning_handler::<R, L>),
        )
        .route("/api/v1/trains/:name/sensor", patch(sensor_handler::<R, L>))
        .route(
            "/api/v1/trains/:name/mileage",
            patch(mileage_handler::<R, L>),
        )
        .route(
            "/api/v1/trains/:name/override",
            patch(override_handler::<R, L>),
        )
        .route("/api/v1/induction/plan", post(plan_handler::<R, L>))
        .route("/api/v1/induction/log", get(log_handler::<R, L>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobCardPayload {
    pub(crate) open: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FitnessPayload {
    pub(crate) valid: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CleaningPayload {
    pub(crate) completed: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SensorPayload {
    pub(crate) alert: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MileagePayload {
    pub(crate) mileage: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OverridePayload {
    pub(crate) status: Option<OverrideStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlanRequest {
    pub(crate) traffic_level: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogQuery {
    #[serde(default = "default_log_limit")]
    pub(crate) limit: usize,
}

fn default_log_limit() -> usize {
    20
}

pub(crate) async fn register_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    axum::Json(submission): axum::Json<TrainSubmission>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    match service.register(submission) {
        Ok(train) => (StatusCode::CREATED, axum::Json(train)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn roster_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    match service.roster() {
        Ok(trains) => (StatusCode::OK, axum::Json(trains)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn train_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Path(name): Path<String>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    match service.get(&name) {
        Ok(train) => (StatusCode::OK, axum::Json(train)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn import_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    body: String,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    let submissions = match RosterImporter::from_reader(body.as_bytes()) {
        Ok(parsed) => parsed,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.import(submissions) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_card_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Path(name): Path<String>,
    axum::Json(payload): axum::Json<JobCardPayload>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    update_response(&service, &name, TrainUpdate::JobCard(payload.open))
}

pub(crate) async fn fitness_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Path(name): Path<String>,
    axum::Json(payload): axum::Json<FitnessPayload>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    update_response(&service, &name, TrainUpdate::Fitness(payload.valid))
}

pub(crate) async fn cleaning_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Path(name): Path<String>,
    axum::Json(payload): axum::Json<CleaningPayload>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    update_response(&service, &name, TrainUpdate::Cleaning(payload.completed))
}

pub(crate) async fn sensor_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Path(name): Path<String>,
    axum::Json(payload): axum::Json<SensorPayload>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    update_response(&service, &name, TrainUpdate::SensorAlert(payload.alert))
}

pub(crate) async fn mileage_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Path(name): Path<String>,
    axum::Json(payload): axum::Json<MileagePayload>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    update_response(&service, &name, TrainUpdate::Mileage(payload.mileage))
}

pub(crate) async fn override_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Path(name): Path<String>,
    axum::Json(payload): axum::Json<OverridePayload>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    update_response(&service, &name, TrainUpdate::Override(payload.status))
}

pub(crate) async fn plan_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    axum::Json(request): axum::Json<PlanRequest>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    match service.plan(request.traffic_level) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn log_handler<R, L>(
    State(service): State<Arc<InductionService<R, L>>>,
    Query(query): Query<LogQuery>,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    match service.history(query.limit) {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

fn update_response<R, L>(
    service: &InductionService<R, L>,
    name: &str,
    update: TrainUpdate,
) -> Response
where
    R: TrainRepository + 'static,
    L: DecisionLog + 'static,
{
    match service.apply_update(name, update) {
        Ok(train) => (StatusCode::OK, axum::Json(train)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: InductionServiceError) -> Response {
    let status = match &error {
        InductionServiceError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InductionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        InductionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        InductionServiceError::Repository(RepositoryError::Unavailable(_))
        | InductionServiceError::DecisionLog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
