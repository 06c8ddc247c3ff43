use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use toeslagen::benefits::{
    benefits_router, DraftRepository, EligibilityService, EligibilityServiceError, ProgramYear,
};
use toeslagen::error::AppError;

pub(crate) fn with_benefit_routes<R>(service: Arc<EligibilityService<R>>) -> axum::Router
where
    R: DraftRepository + 'static,
{
    benefits_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/benefits/rules/:year", get(rules_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "programYears": state.catalog.years() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Publishes the table a year is computed with, so the frontend can show its thresholds.
pub(crate) async fn rules_endpoint(
    Extension(state): Extension<AppState>,
    Path(year): Path<u16>,
) -> Result<impl IntoResponse, AppError> {
    let year = ProgramYear(year);
    let rules = state
        .catalog
        .get(year)
        .ok_or(EligibilityServiceError::UnknownProgramYear(year))?;

    Ok(Json(rules.as_ref().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryDraftRepository;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use toeslagen::benefits::RulesCatalog;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let catalog = Arc::new(RulesCatalog::standard().expect("compiled tables validate"));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            catalog: catalog.clone(),
        };
        let service = Arc::new(EligibilityService::new(
            catalog,
            Arc::new(InMemoryDraftRepository::default()),
            ProgramYear(2026),
        ));

        with_benefit_routes(service).layer(Extension(state))
    }

    async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&bytes).expect("json payload"))
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let (status, body) = get_json(app(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_flag() {
        let (status, body) = get_json(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, body) = get_json(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["programYears"], json!([2026]));
    }

    #[tokio::test]
    async fn rules_endpoint_serves_known_year() {
        let (status, body) = get_json(app(true), "/api/v1/benefits/rules/2026").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["programYear"], 2026);
        assert_eq!(body["zorgtoeslag"]["minAge"], 18);
    }

    #[tokio::test]
    async fn rules_endpoint_rejects_unknown_year() {
        let (status, body) = get_json(app(true), "/api/v1/benefits/rules/1999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap_or_default().contains("1999"));
    }
}
