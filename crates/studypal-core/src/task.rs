//! Task store.
//!
//! Tasks are kept in insertion order; views sort by deadline on read.
//! Subject references are validated against the [`Catalog`] only when a
//! task is created.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{Result, StudyError};

/// Stable identity of a task across toggles and deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub subject: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub completed: bool,
}

/// How pressing an incomplete task is, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    DueToday,
    Upcoming,
}

impl Urgency {
    pub fn from_days_left(days_left: i64) -> Self {
        match days_left {
            d if d < 0 => Urgency::Overdue,
            0 => Urgency::DueToday,
            _ => Urgency::Upcoming,
        }
    }
}

/// An incomplete task annotated with its distance from today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingTask {
    #[serde(flatten)]
    pub task: Task,
    pub days_left: i64,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, incomplete task.
    ///
    /// # Errors
    /// `EmptyDescription` for a blank description, `UnknownSubject` if the
    /// subject is not in `catalog`. The description is checked first.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        subject: &str,
        description: &str,
        deadline: NaiveDate,
    ) -> Result<TaskId> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StudyError::EmptyDescription);
        }
        if !catalog.contains(subject) {
            return Err(StudyError::UnknownSubject(subject.to_string()));
        }
        let task = Task {
            id: TaskId::new(),
            subject: subject.to_string(),
            description: description.to_string(),
            deadline,
            completed: false,
        };
        let id = task.id;
        info!(%id, subject, %deadline, "task added");
        self.tasks.push(task);
        Ok(id)
    }

    pub fn toggle_complete(&mut self, id: TaskId, value: bool) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StudyError::UnknownTask(id))?;
        task.completed = value;
        debug!(%id, completed = value, "task toggled");
        Ok(())
    }

    /// Remove a task. Returns `None` if it was already gone.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(pos);
        info!(%id, "task deleted");
        Some(task)
    }

    /// Cascade delete for a removed subject. Returns how many tasks went.
    pub fn remove_subject(&mut self, subject: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.subject != subject);
        before - self.tasks.len()
    }

    /// Incomplete tasks by deadline, earliest first, capped at `limit`.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<UpcomingTask> {
        let mut pending: Vec<&Task> = self.tasks.iter().filter(|t| !t.completed).collect();
        pending.sort_by_key(|t| t.deadline);
        pending
            .into_iter()
            .take(limit)
            .map(|task| {
                let days_left = (task.deadline - today).num_days();
                UpcomingTask {
                    task: task.clone(),
                    days_left,
                    urgency: Urgency::from_days_left(days_left),
                }
            })
            .collect()
    }

    /// Every task in display order (deadline ascending, ties by insertion).
    pub fn sorted_by_deadline(&self) -> Vec<&Task> {
        let mut all: Vec<&Task> = self.tasks.iter().collect();
        all.sort_by_key(|t| t.deadline);
        all
    }

    pub fn for_subject<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.subject == subject)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
