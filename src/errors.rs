use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;
use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("APIKey invalid or not present")]
    Unauthorized,

    #[error("Invalid request body")]
    Validation(Vec<FieldError>),

    #[error("Invalid JSON")]
    MalformedBody,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal Server Error"})),
                )
                    .into_response()
            }
            AppError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": msg})),
            )
                .into_response(),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"status": "Error", "message": "APIKey invalid or not present"})),
            )
                .into_response(),
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid request body", "details": details})),
            )
                .into_response(),
            AppError::MalformedBody => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid JSON"})),
            )
                .into_response(),
        }
    }
}
