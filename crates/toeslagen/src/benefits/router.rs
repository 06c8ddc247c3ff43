use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{BenefitsWizardInput, CaseId, ProgramYear, Scheme, WizardDraft};
use super::repository::{DraftRepository, RepositoryError};
use super::service::{EligibilityService, EligibilityServiceError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EstimateRequest {
    #[serde(default)]
    pub(crate) program_year: Option<ProgramYear>,
    pub(crate) input: BenefitsWizardInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DraftRequest {
    #[serde(default)]
    pub(crate) program_year: Option<ProgramYear>,
    #[serde(default)]
    pub(crate) draft: WizardDraft,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BundleRequest {
    pub(crate) schemes: Vec<Scheme>,
}

/// Router builder exposing the estimate, draft, and bundle endpoints.
pub fn benefits_router<R>(service: Arc<EligibilityService<R>>) -> Router
where
    R: DraftRepository + 'static,
{
    Router::new()
        .route("/api/v1/benefits/estimate", post(estimate_handler::<R>))
        .route(
            "/api/v1/benefits/drafts/:case_id",
            put(save_draft_handler::<R>)
                .get(draft_handler::<R>)
                .delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/benefits/drafts/:case_id/results",
            post(finalize_handler::<R>),
        )
        .route(
            "/api/v1/benefits/drafts/:case_id/bundle",
            post(bundle_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn estimate_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Json(request): Json<EstimateRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.estimate(request.program_year, &request.input) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_draft_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(case_id): Path<String>,
    Json(request): Json<DraftRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.save_draft(CaseId(case_id), request.program_year, request.draft) {
        Ok(record) => (StatusCode::ACCEPTED, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn draft_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.draft(&CaseId(case_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.discard(&CaseId(case_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn finalize_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.finalize(&CaseId(case_id)) {
        Ok(record) => (StatusCode::OK, Json(record.results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn bundle_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(case_id): Path<String>,
    Json(request): Json<BundleRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.quote(&CaseId(case_id), &request.schemes) {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: EligibilityServiceError) -> Response {
    let status = match &error {
        EligibilityServiceError::Intake(_) | EligibilityServiceError::Bundle(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EligibilityServiceError::Repository(RepositoryError::NotFound)
        | EligibilityServiceError::UnknownProgramYear(_) => StatusCode::NOT_FOUND,
        EligibilityServiceError::ResultsPending => StatusCode::CONFLICT,
        EligibilityServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
