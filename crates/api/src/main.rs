use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optifinops_core::config::Settings;
use optifinops_core::domain::contract::{AssessmentSubmission, SavingsRequest};
use optifinops_core::domain::savings::{Provider, ResourceType, SavingsResult};
use optifinops_core::maturity::questionnaire::{self, Section};
use optifinops_core::maturity::AssessmentReport;
use optifinops_core::savings::{Level, Practice, PracticeCategory, ResourceTips};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let port = settings.port_or_default();
    let state = AppState {
        settings: Arc::new(settings),
    };

    let app = router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| report_fatal(anyhow::Error::new(e).context(format!("bind {addr} failed"))))?;
    tracing::info!(%addr, "api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| report_fatal(anyhow::Error::new(e).context("api server failed")))?;

    Ok(())
}

fn report_fatal(err: anyhow::Error) -> anyhow::Error {
    sentry_anyhow::capture_anyhow(&err);
    tracing::error!(error = %err, "api stopped");
    err
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/savings/estimate", post(estimate_savings))
        .route("/savings/tips/:provider/:resource_type", get(get_tips))
        .route("/assessment/questions", get(get_questions))
        .route("/assessment/score", post(score_assessment))
        .route("/best-practices", get(get_best_practices))
        .route("/best-practices/practices", get(get_filtered_practices))
        .with_state(state)
        // The site is served from a static host on a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    settings: Arc<Settings>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn unprocessable(error: impl std::fmt::Display, missing: Vec<String>) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: error.to_string(),
            missing,
        }),
    )
}

async fn estimate_savings(
    State(state): State<AppState>,
    Json(request): Json<SavingsRequest>,
) -> Result<Json<SavingsResult>, ApiError> {
    let input = request.validate_and_into_input().map_err(|e| {
        tracing::info!(error = %e, "rejected savings request");
        unprocessable(e, Vec::new())
    })?;

    let anchor = state
        .settings
        .projection_anchor
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let result = optifinops_core::savings::estimate_at(&input, anchor)
        .map_err(|e| unprocessable(e, Vec::new()))?;

    tracing::info!(
        provider = %input.provider,
        resource_type = %input.resource_type,
        monthly_savings = result.monthly_savings,
        "savings estimated"
    );

    Ok(Json(result))
}

async fn get_tips(
    Path((provider, resource_type)): Path<(String, String)>,
) -> Result<Json<ResourceTips>, StatusCode> {
    let provider: Provider = provider.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let resource_type: ResourceType = resource_type.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Json(optifinops_core::savings::optimization_tips(
        provider,
        resource_type,
    )))
}

async fn get_questions() -> Json<&'static [Section]> {
    Json(questionnaire::questionnaire())
}

async fn get_best_practices() -> Json<&'static [PracticeCategory]> {
    Json(optifinops_core::savings::best_practices())
}

#[derive(Debug, Default, Deserialize)]
struct PracticeFilter {
    min_impact: Option<String>,
    max_effort: Option<String>,
}

async fn get_filtered_practices(
    Query(filter): Query<PracticeFilter>,
) -> Result<Json<Vec<&'static Practice>>, ApiError> {
    let parse = |raw: Option<String>, default: Level| match raw {
        Some(s) => s.parse::<Level>().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: e.to_string(),
                    missing: Vec::new(),
                }),
            )
        }),
        None => Ok(default),
    };
    let min_impact = parse(filter.min_impact, Level::Low)?;
    let max_effort = parse(filter.max_effort, Level::High)?;

    Ok(Json(optifinops_core::savings::filter_practices(
        min_impact, max_effort,
    )))
}

async fn score_assessment(
    State(state): State<AppState>,
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<AssessmentReport>, ApiError> {
    let dimensions = questionnaire::dimensions();

    let answers = submission
        .validate_and_into_answers(&dimensions)
        .map_err(|e| {
            tracing::info!(error = %e, "rejected assessment submission");
            unprocessable(e, Vec::new())
        })?;

    let report = optifinops_core::maturity::assess(
        &answers,
        &dimensions,
        state.settings.assessment_allow_partial,
    )
    .map_err(|e| {
        tracing::info!(missing = e.missing.len(), "incomplete assessment submission");
        let missing = e.missing.clone();
        unprocessable(e, missing)
    })?;

    tracing::info!(
        maturity_level = %report.result.maturity_level,
        overall_score = report.result.overall_score,
        "assessment scored"
    );

    Ok(Json(report))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
