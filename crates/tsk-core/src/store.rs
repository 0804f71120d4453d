//! Task collection store with whole-snapshot JSON persistence.
//!
//! The store is the single source of truth for the collection. Every mutation
//! checks the access policy, applies the change in memory, then rewrites the
//! full collection atomically (write-to-temp-then-rename), so a crash leaves
//! either the old snapshot or the new one, never a torn file.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use crate::auth::Session;
use crate::error::{Error, Result};
use crate::paths::tasks_path;
use crate::policy::{self, Operation};
use crate::task::{StatusFilter, Task, TaskDraft, TaskPatch, TaskStatus};

/// Bundled starter collection used when no tasks blob exists yet.
///
/// Embedded at compile time; same record format as the persisted blob.
const SEED_TASKS: &str = include_str!("seed_tasks.json");

/// Returns an RFC3339 UTC timestamp string.
fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Generates a unique task ID using UUID v4.
fn generate_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Owns the canonical task collection for the process.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Loads the store from `$TSK_HOME/tasks.json`, seeding on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(tasks_path())
    }

    /// Loads from an explicit path.
    ///
    /// When the blob is missing the bundled seed list becomes the initial
    /// state; nothing is written until the first mutation.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks: Vec<Task> = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            tracing::debug!(path = %path.display(), "no tasks blob, starting from seed data");
            serde_json::from_str(SEED_TASKS)?
        };
        Ok(Self { tasks, path })
    }

    /// Creates a task from `draft` and prepends it to the collection.
    ///
    /// Admin only. The store assigns a fresh unique id and sets `updated_at`
    /// to the current time. An empty (or whitespace) title is rejected.
    pub fn create(&mut self, session: &Session, draft: TaskDraft) -> Result<Task> {
        self.authorize(session, Operation::Create)?;
        if draft.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        let task = Task {
            id: generate_task_id(),
            title: draft.title,
            description: draft.description,
            assigned_to: draft.assigned_to,
            status: draft.status,
            updated_at: now_timestamp(),
        };
        self.tasks.insert(0, task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Merges `patch` into the task with id `id` and refreshes `updated_at`.
    ///
    /// Unknown ids are an error ([`Error::TaskNotFound`]); clearing the title
    /// to empty is rejected.
    pub fn update(&mut self, session: &Session, id: &str, patch: TaskPatch) -> Result<Task> {
        self.authorize(session, Operation::Update)?;
        self.apply_patch(id, patch)
    }

    /// Sets only the status of the task with id `id`.
    pub fn set_status(&mut self, session: &Session, id: &str, status: TaskStatus) -> Result<Task> {
        self.authorize(session, Operation::SetStatus)?;
        self.apply_patch(
            id,
            TaskPatch {
                status: Some(status),
                ..TaskPatch::default()
            },
        )
    }

    /// Removes the task with id `id`. Silent no-op when it does not exist.
    pub fn delete(&mut self, session: &Session, id: &str) -> Result<()> {
        self.authorize(session, Operation::Delete)?;
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Returns the filtered view of the collection, order preserved.
    pub fn list(&self, filter: StatusFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t.status))
            .collect()
    }

    /// Returns the full collection in order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn authorize(&self, session: &Session, operation: Operation) -> Result<()> {
        if policy::can_perform(session.role(), operation) {
            Ok(())
        } else {
            Err(Error::PolicyDenied {
                operation,
                role: session.role(),
            })
        }
    }

    fn apply_patch(&mut self, id: &str, patch: TaskPatch) -> Result<Task> {
        if let Some(title) = &patch.title
            && title.trim().is_empty()
        {
            return Err(Error::EmptyTitle);
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound { id: id.to_string() })?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(assigned_to) = patch.assigned_to {
            task.assigned_to = assigned_to;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = now_timestamp();

        let task = task.clone();
        self.persist()?;
        Ok(task)
    }

    /// Writes the full collection to disk atomically.
    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(&self.tasks)?;
        let temp_path = self.path.with_extension("json.tmp");
        let mut temp = File::create(&temp_path)?;
        temp.write_all(json.as_bytes())?;
        temp.sync_all()?;
        fs::rename(&temp_path, &self.path)?;
        tracing::debug!(count = self.tasks.len(), path = %self.path.display(), "persisted tasks");
        Ok(())
    }
}
