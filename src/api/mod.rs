pub mod dto;

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, Request, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    middleware,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde_json::Value;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::api::dto::{CreateTaskReq, HealthResponse, TaskPage};
use crate::auth::require_api_key;
use crate::config::Config;
use crate::domain::Task;
use crate::errors::AppError;
use crate::pagination::{PaginationParams, paginate};
use crate::store::TaskStore;
use crate::validation::validate_create_task;


#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
    pub config: Arc<Config>,
}

#[derive(Clone, Copy)]
pub struct MakeUuidRequest;

impl MakeRequestId for MakeUuidRequest {
    fn make_request_id<B>(&mut self, _: &axum::http::Request<B>) -> Option<RequestId> {
        let uuid = Uuid::new_v4().to_string();

        let header_value =
            HeaderValue::from_str(&uuid).unwrap_or(HeaderValue::from_static("invalid-uuid"));

        Some(RequestId::new(header_value))
    }
}

/// Build the application router with all routes, documentation UIs, and
/// middleware.
///
/// # Arguments
///
/// * `state` - Application state (mock store + configuration)
/// * `doc` - The OpenAPI document assembled at startup, served verbatim
///
/// # Returns
/// * `Router` - The configured Axum router
pub fn router(state: AppState, doc: utoipa::openapi::OpenApi) -> Router {
    let x_request_id = "x-request-id".parse::<axum::http::HeaderName>().unwrap();

    let protected = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    let spec = doc.clone();

    Router::new()
        .route("/", get(redirect_to_docs))
        .route("/healthcheck", get(healthcheck))
        .merge(protected)
        .route(
            "/api-docs/json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .with_state(state)
        .merge(Scalar::with_url("/api-docs", doc.clone()))
        .merge(SwaggerUi::new("/swagger-docs").url("/swagger.json", doc))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let req_id = request
                        .extensions()
                        .get::<RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or("bad-ascii"))
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        request_id = %req_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeUuidRequest))
}

/// Redirect the root path to the interactive documentation.
async fn redirect_to_docs() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/api-docs")])
}

/// Health check handler, open to unauthenticated callers.
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

/// Handler to list tasks from the mock store, one page at a time.
///
/// # Arguments
///
/// * `State(state)` - Application state containing the TaskStore
/// * `Query(params)` - Optional `page` and `limit` query parameters
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    params(PaginationParams),
    security(("apiKey" = [])),
    responses(
        (status = 200, description = "List of tasks with pagination metadata", body = TaskPage),
        (status = 401, description = "APIKey invalid or not present")
    )
)]
pub(crate) async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<TaskPage> {
    let tasks = state.store.list();
    let (window, pagination) = paginate(tasks.len(), params.page, params.limit);

    Json(TaskPage {
        data: tasks[window].to_vec(),
        pagination,
    })
}

/// Handler to create a new task.
///
/// The body is read raw so an unparseable payload can be told apart from
/// a schema violation. The validated task is echoed back with a fresh id
/// and timestamp; it is not written to the store.
///
/// # Errors
///
/// * `AppError::MalformedBody` - If the body is not valid JSON
/// * `AppError::Validation` - If the body fails the task-creation schema
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    security(("apiKey" = [])),
    request_body = CreateTaskReq,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Invalid request body or invalid JSON"),
        (status = 401, description = "APIKey invalid or not present")
    )
)]
pub(crate) async fn create_task(body: Bytes) -> Result<(StatusCode, Json<Task>), AppError> {
    let value: Value = serde_json::from_slice(&body).map_err(|_| AppError::MalformedBody)?;
    let req = validate_create_task(&value).map_err(AppError::Validation)?;

    let task = Task::new(req);

    tracing::info!(task_id = %task.id, "Task Created Successfully");

    Ok((StatusCode::CREATED, Json(task)))
}
