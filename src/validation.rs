use serde::Serialize;
use serde_json::Value;

use crate::api::dto::CreateTaskReq;
use crate::domain::{TaskPriority, TaskStatus};

/// A single schema violation, pointing at the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate an already-parsed JSON body against the task-creation schema.
///
/// All violations are collected rather than stopping at the first, so the
/// caller can report every bad field in one 400 response. Unknown fields
/// are ignored.
pub fn validate_create_task(body: &Value) -> Result<CreateTaskReq, Vec<FieldError>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![FieldError::new("", "Expected object")]);
    };

    let mut errors = Vec::new();

    let title = match obj.get("title") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new("title", "Expected string"));
            None
        }
        None => {
            errors.push(FieldError::new("title", "Required"));
            None
        }
    };

    let description = match obj.get("description") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(FieldError::new("description", "Expected string"));
            None
        }
    };

    let status = match obj.get("status") {
        Some(Value::String(s)) => match TaskStatus::parse(s) {
            Some(status) => Some(status),
            None => {
                errors.push(FieldError::new(
                    "status",
                    "Invalid enum value. Expected 'pending' | 'in_progress' | 'completed'",
                ));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(
                "status",
                "Invalid enum value. Expected 'pending' | 'in_progress' | 'completed'",
            ));
            None
        }
        None => {
            errors.push(FieldError::new("status", "Required"));
            None
        }
    };

    let priority = match obj.get("priority") {
        Some(Value::String(s)) => match TaskPriority::parse(s) {
            Some(priority) => Some(priority),
            None => {
                errors.push(FieldError::new(
                    "priority",
                    "Invalid enum value. Expected 'low' | 'medium' | 'high'",
                ));
                None
            }
        },
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(FieldError::new(
                "priority",
                "Invalid enum value. Expected 'low' | 'medium' | 'high'",
            ));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // Both unwraps are guarded by the error check above.
    Ok(CreateTaskReq {
        title: title.unwrap(),
        description,
        status: status.unwrap(),
        priority,
    })
}
