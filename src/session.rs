//! Mutations of the in-memory task collection.
//!
//! The collection is ordered newest first. Tasks only ever change by being
//! toggled or removed.

use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Difficulty, Task};

/// User-supplied fields for a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub difficulty: Difficulty,
    pub category: Option<String>,
    pub duration: Option<u32>,
    pub has_timer: bool,
    pub reminder_time: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, difficulty: Difficulty) -> Self {
        NewTask {
            title: title.into(),
            difficulty,
            category: None,
            duration: None,
            has_timer: false,
            reminder_time: None,
        }
    }
}

/// Inserts a new incomplete task at the front of the collection and returns it.
pub fn add_task(tasks: &mut Vec<Task>, new: NewTask) -> Result<Task> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    let reminder_time = new.reminder_time.filter(|r| !r.trim().is_empty());
    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        difficulty: new.difficulty,
        completed: false,
        category: new.category,
        duration: new.duration,
        has_timer: new.has_timer,
        has_reminder: reminder_time.is_some(),
        reminder_time,
    };
    debug!(id = %task.id, difficulty = %task.difficulty, "task added");
    tasks.insert(0, task.clone());
    Ok(task)
}

/// Resolves a full id or a unique id prefix to the task's full id.
pub fn resolve_id(tasks: &[Task], prefix: &str) -> Result<String> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(Error::TaskNotFound(prefix.to_string()));
    }
    if let Some(t) = tasks.iter().find(|t| t.id == prefix) {
        return Ok(t.id.clone());
    }

    let mut matches = tasks.iter().filter(|t| t.id.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(t), None) => Ok(t.id.clone()),
        (Some(_), Some(_)) => Err(Error::AmbiguousId(prefix.to_string())),
        (None, _) => Err(Error::TaskNotFound(prefix.to_string())),
    }
}

/// Chars always kept in a shortened id.
pub const SHORT_ID_LEN: usize = 8;

/// Shortest prefix of `id`, at least [`SHORT_ID_LEN`] chars, that
/// [`resolve_id`] maps back to `id` within `tasks`. Falls back to the full id.
pub fn short_id<'a>(id: &'a str, tasks: &[Task]) -> &'a str {
    let ends = id
        .char_indices()
        .map(|(i, _)| i)
        .skip(SHORT_ID_LEN)
        .chain(std::iter::once(id.len()));
    for end in ends {
        let prefix = &id[..end];
        if !tasks.iter().any(|t| t.id != id && t.id.starts_with(prefix)) {
            return prefix;
        }
    }
    id
}

/// Flips a task's completion state and returns the new state.
///
/// Completing a task bumps the streak by one. Un-completing leaves the
/// streak untouched: the streak never decreases.
pub fn toggle_task(tasks: &mut [Task], streak: &mut u32, id: &str) -> Result<bool> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

    task.completed = !task.completed;
    if task.completed {
        *streak = streak.saturating_add(1);
    }
    debug!(id, completed = task.completed, streak = *streak, "task toggled");
    Ok(task.completed)
}

/// Removes a task and returns it.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> Result<Task> {
    let idx = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
    Ok(tasks.remove(idx))
}

/// Marks every task incomplete for a fresh day. Returns how many changed.
pub fn reset_daily_tasks(tasks: &mut [Task]) -> usize {
    let mut changed = 0;
    for t in tasks.iter_mut().filter(|t| t.completed) {
        t.completed = false;
        changed += 1;
    }
    changed
}
