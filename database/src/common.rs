use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use taskd_core::{
    error::{Result, TaskError},
    models::Task,
};

/// Convert a SQLite row to a Task model
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");
    let due_date: Option<DateTime<Utc>> = row.get("due_date");

    Ok(Task {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        due_date,
        created_at,
        updated_at,
    })
}

/// Convert a SQLx error to a TaskError
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TaskError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("Database I/O error: {io_err}")),
        _ => TaskError::Database(format!("Database operation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_mapping() {
        let err = sqlx_error_to_task_error(sqlx::Error::PoolTimedOut);
        assert!(err.is_database());
        assert_eq!(
            format!("{err}"),
            "Database error: Connection pool timeout"
        );
    }

    #[test]
    fn test_row_not_found_mapping() {
        let err = sqlx_error_to_task_error(sqlx::Error::RowNotFound);
        assert!(err.is_database());
    }
}
