//! In-memory TaskStore used by the router tests.
//!
//! Keeps tasks in a BTreeMap so list order matches id order, and supports
//! error injection for exercising the 500 path.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;
use taskd_core::{error::Result, NewTask, Task, TaskError, TaskStore};

pub struct MemoryTaskStore {
    tasks: Mutex<BTreeMap<i64, Task>>,
    next_id: AtomicI64,
    fail: AtomicBool,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent store call fail with a database error.
    pub fn inject_failure(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TaskError::Database("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create(&self, draft: NewTask) -> Result<Task> {
        self.check()?;
        let now = Utc::now();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().insert(id, task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        self.check()?;
        Ok(self.tasks.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.check()?;
        Ok(self.tasks.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: i64, draft: NewTask) -> Result<Task> {
        self.check()?;
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.get_mut(&id) {
            Some(task) => {
                task.title = draft.title;
                task.description = draft.description;
                task.due_date = draft.due_date;
                task.updated_at = Utc::now();
                Ok(task.clone())
            }
            None => Err(TaskError::not_found_id(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.check()?;
        self.tasks.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn close(&self) {}
}
