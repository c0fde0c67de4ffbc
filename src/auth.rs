use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::errors::AppError;

/// Middleware guarding protected routes with the shared api key.
///
/// The credential comes from the `Authorization: APIKey <key>` header when
/// that prefix is present, otherwise from the `api-key` header. Comparison
/// is plain equality, not constant-time.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = extract_api_key(req.headers());

    if provided != state.config.api_key {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}

fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if auth.starts_with("APIKey ") {
        return auth.split(' ').nth(1).map(str::to_string);
    }

    headers
        .get("api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
