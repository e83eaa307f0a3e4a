// 🌐 HTTP API - axum routes around summarize()

use crate::config::ServerConfig;
use crate::grade_scale::GRADE_SCALE;
use crate::student::{summarize, StudentRequest};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tower_http::cors::CorsLayer;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GradeScaleEntry {
    pub grade: &'static str,
    pub points: f64,
}

// ============================================================================
// ERRORS
// ============================================================================

/// Request rejected before it reached the calculator.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // axum picks the status: 422 bad shape, 400 bad syntax, 415 wrong content type
        ApiError {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::err(self.message))).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST /student_summary - GPA and total credits for one student
pub async fn student_summary(
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("rejected student summary request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let response = summarize(&request);

    tracing::info!(
        student_id = %request.student_id,
        courses = request.courses.len(),
        gpa = response.student_summary.gpa,
        total_credits = response.student_summary.total_credits,
        "student summary"
    );

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/health - Health check
pub async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/grade-scale - The fixed letter → points table
pub async fn grade_scale() -> impl IntoResponse {
    let entries: Vec<GradeScaleEntry> = GRADE_SCALE
        .iter()
        .map(|(grade, points)| GradeScaleEntry {
            grade: *grade,
            points: points.to_f64().unwrap_or_default(),
        })
        .collect();

    Json(ApiResponse::ok(entries))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/grade-scale", get(grade_scale));

    let app = Router::new()
        .route("/student_summary", post(student_summary))
        .nest("/api", api_routes);

    if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

// ============================================================================
// TESTS
// ============================================================================
