use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Task, TaskPriority, TaskStatus};
use crate::pagination::PaginationMeta;

/// Validated task-creation payload, produced by the input validator.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct CreateTaskReq {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Option<TaskPriority>,
}

/// One page of tasks plus navigation metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskPage {
    pub data: Vec<Task>,
    pub pagination: PaginationMeta,
}

/// Response DTO for the health check endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
