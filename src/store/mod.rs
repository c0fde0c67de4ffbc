use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::domain::{Task, TaskPriority, TaskStatus};

/// In-memory mock task collection, built once at startup and read-only
/// afterwards, so concurrent handlers can share it without locking.
///
/// The create endpoint intentionally does not write here; the listed data
/// is a fixed synthetic set regenerated on every process start.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Generate `count` synthetic tasks with random status and priority.
    pub fn seed(count: usize) -> Self {
        let mut rng = rand::rng();

        let tasks = (1..=count)
            .map(|i| Task {
                id: Uuid::new_v4(),
                title: format!("Task {}", i),
                description: Some(format!("Description for task {}", i)),
                status: TaskStatus::ALL[rng.random_range(0..TaskStatus::ALL.len())],
                priority: Some(TaskPriority::ALL[rng.random_range(0..TaskPriority::ALL.len())]),
                created_at: Utc::now(),
            })
            .collect();

        Self { tasks }
    }

    /// All tasks, in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
