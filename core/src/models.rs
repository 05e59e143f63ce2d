use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task record as stored and served by the API.
///
/// Tasks are created via `POST /tasks`, mutated via `PUT /tasks/:id` and
/// removed via `DELETE /tasks/:id`. The `id` and both timestamps are assigned
/// by the store; clients never supply them.
///
/// # Examples
///
/// ```rust
/// use taskd_core::models::Task;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let task = Task {
///     id: 42,
///     title: "Write release notes".to_string(),
///     description: "Summarize the changes since 0.3".to_string(),
///     due_date: None,
///     created_at: now,
///     updated_at: now,
/// };
///
/// assert!(task.updated_at >= task.created_at);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Auto-increment primary key, immutable after creation
    pub id: i64,
    /// Short task title
    pub title: String,
    /// Detailed task description
    pub description: String,
    /// Optional deadline
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp, set once and never changed by updates
    pub created_at: DateTime<Utc>,
    /// Refreshed by every successful update; equals `created_at` on creation
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied task fields, used as the body of both `POST /tasks` and
/// `PUT /tasks/:id`.
///
/// `title` and `description` must be present in the JSON payload; `due_date`
/// may be omitted or null. There is no validation beyond field presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    /// Short task title
    pub title: String,
    /// Detailed task description
    pub description: String,
    /// Optional deadline
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: String, description: String, due_date: Option<DateTime<Utc>>) -> Self {
        Self {
            title,
            description,
            due_date,
        }
    }
}
