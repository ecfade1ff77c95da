//! HTTP Server
//!
//! Axum routes over an `EmployeeRepo`. Handlers stay thin: decode, call the
//! store, hand the snapshot result back as JSON. Errors are turned into
//! responses in one place by `ServerError`.

use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Request, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Form, Router,
};
use anyhow::Result;
use serde_json::json;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::Error;
use crate::model::{DepartmentBreakdown, DepartmentStatistic, Employee, EmployeeDraft, SummaryStatistic};
use crate::store::EmployeeRepo;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn EmployeeRepo>,
    pub passphrase: Arc<str>,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepo>, passphrase: impl Into<Arc<str>>) -> Self {
        Self {
            repo,
            passphrase: passphrase.into(),
        }
    }
}

pub struct ServerError(Error);

impl From<Error> for ServerError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            Error::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            Error::MalformedBody(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            Error::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "error": "unauthorized" })),
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, json!({ "error": self.0.to_string() })),
            Error::Dataset { .. } | Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.0.to_string() }),
            ),
        };
        if status.is_client_error() {
            warn!("Rejected request ({}): {}", status, self.0);
        }
        (status, Json(body)).into_response()
    }
}

/// Employee body decoded from either JSON or an urlencoded form
pub struct EmployeeForm(pub EmployeeDraft);

impl<S> FromRequest<S> for EmployeeForm
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase().starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        let draft = if is_form {
            let Form(draft) = Form::<EmployeeDraft>::from_request(req, state)
                .await
                .map_err(|e| Error::MalformedBody(e.body_text()))?;
            draft
        } else {
            let Json(draft) = Json::<EmployeeDraft>::from_request(req, state)
                .await
                .map_err(|e| Error::MalformedBody(e.body_text()))?;
            draft
        };
        Ok(Self(draft))
    }
}

/// Guard for mutations that need the passphrase in the `authorization` header
pub struct Authorized;

impl FromRequestParts<AppState> for Authorized {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        match supplied {
            Some(value) if value == &*state.passphrase => Ok(Authorized),
            _ => Err(Error::Unauthorized.into()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/statistics", get(overall_statistics))
        .route("/statistics/contractors", get(contractor_statistics))
        .route("/statistics/by-dept", get(department_statistics))
        .route("/statistics/by-dept-and-sub-dept", get(sub_department_statistics))
        .route("/employees", post(add_employee))
        .route("/employees/{name}", delete(delete_employee))
        .with_state(state)
}

pub async fn run_server(config: ServiceConfig, repo: Arc<dyn EmployeeRepo>) -> Result<()> {
    info!("📊 Starting salary statistics server with {} records", repo.len().await);

    let state = AppState::new(repo, config.passphrase.as_str());
    let app = create_router(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server is running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn overall_statistics(State(state): State<AppState>) -> Json<SummaryStatistic> {
    debug!("GET /statistics");
    Json(state.repo.overall_statistics().await)
}

async fn contractor_statistics(State(state): State<AppState>) -> Json<SummaryStatistic> {
    debug!("GET /statistics/contractors");
    Json(state.repo.contractor_statistics().await)
}

async fn department_statistics(State(state): State<AppState>) -> Json<Vec<DepartmentStatistic>> {
    debug!("GET /statistics/by-dept");
    Json(state.repo.statistics_by_department().await)
}

async fn sub_department_statistics(State(state): State<AppState>) -> Json<Vec<DepartmentBreakdown>> {
    debug!("GET /statistics/by-dept-and-sub-dept");
    Json(state.repo.statistics_by_department_and_sub_department().await)
}

async fn add_employee(
    State(state): State<AppState>,
    EmployeeForm(draft): EmployeeForm,
) -> Result<Json<Employee>, ServerError> {
    let employee = draft.validate()?;
    info!("Adding employee '{}' to {}", employee.name, employee.department);
    Ok(Json(state.repo.add_record(employee).await))
}

async fn delete_employee(
    _auth: Authorized,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Employee>, ServerError> {
    let employee = state.repo.delete_record(&name).await?;
    info!("Deleted employee '{}'", employee.name);
    Ok(Json(employee))
}
