//! Application state.
//!
//! [`AppState`] owns the catalog, task store, session timer and study log
//! for one user session. The front end holds exactly one instance and
//! drives it through `&mut self` commands; reads never mutate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Result, StudyError};
use crate::events::Event;
use crate::pet::PetStatus;
use crate::study_log::{StudyLog, StudyLogEntry, SubjectMinutes};
use crate::task::{TaskId, TaskStore, UpcomingTask};
use crate::timer::{SessionTimer, Tick};

/// Dashboard read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub upcoming: Vec<UpcomingTask>,
    /// True when tasks exist but every one is completed.
    pub all_tasks_completed: bool,
    pub has_tasks: bool,
    pub pet: PetStatus,
}

/// Progress page read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub total_minutes: u64,
    pub session_count: usize,
    pub average_duration: f64,
    pub minutes_by_subject: Vec<SubjectMinutes>,
    pub history: Vec<StudyLogEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    catalog: Catalog,
    tasks: TaskStore,
    timer: SessionTimer,
    log: StudyLog,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state seeded with the configured subjects.
    pub fn from_config(config: &Config) -> Self {
        Self {
            catalog: Catalog::with_subjects(&config.subjects.defaults),
            ..Self::default()
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn log(&self) -> &StudyLog {
        &self.log
    }

    /// Cumulative logged minutes.
    pub fn xp(&self) -> u64 {
        self.log.total_minutes()
    }

    pub fn pet(&self) -> PetStatus {
        PetStatus::compute(self.xp())
    }

    pub fn dashboard(&self, today: NaiveDate, limit: usize) -> Dashboard {
        let upcoming = self.tasks.upcoming(today, limit);
        let has_tasks = !self.tasks.is_empty();
        Dashboard {
            all_tasks_completed: has_tasks && self.tasks.tasks().iter().all(|t| t.completed),
            has_tasks,
            upcoming,
            pet: self.pet(),
        }
    }

    pub fn progress(&self) -> ProgressReport {
        ProgressReport {
            total_minutes: self.log.total_minutes(),
            session_count: self.log.session_count(),
            average_duration: self.log.average_duration(),
            minutes_by_subject: self.log.minutes_by_subject(),
            history: self.log.history().into_iter().cloned().collect(),
        }
    }

    // ── Subjects ─────────────────────────────────────────────────────

    pub fn add_subject(&mut self, name: &str) -> Result<Event> {
        self.catalog.add(name)?;
        Ok(Event::SubjectAdded {
            name: name.trim().to_string(),
        })
    }

    /// Remove a subject and every task filed under it.
    pub fn remove_subject(&mut self, name: &str) -> Result<Event> {
        let name = name.trim();
        self.catalog.remove(name)?;
        let tasks_removed = self.tasks.remove_subject(name);
        info!(subject = name, tasks_removed, "subject cascade complete");
        Ok(Event::SubjectRemoved {
            name: name.to_string(),
            tasks_removed,
        })
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn add_task(&mut self, subject: &str, description: &str, deadline: NaiveDate) -> Result<Event> {
        let id = self.tasks.add(&self.catalog, subject, description, deadline)?;
        let task = self
            .tasks
            .get(id)
            .cloned()
            .ok_or(StudyError::UnknownTask(id))?;
        Ok(Event::TaskAdded { task })
    }

    pub fn toggle_task(&mut self, id: TaskId, completed: bool) -> Result<Event> {
        self.tasks.toggle_complete(id, completed)?;
        Ok(Event::TaskToggled { id, completed })
    }

    pub fn delete_task(&mut self, id: TaskId) -> Event {
        let existed = self.tasks.delete(id).is_some();
        Event::TaskDeleted { id, existed }
    }

    // ── Timer ────────────────────────────────────────────────────────

    /// Start a focus session for a catalog subject.
    ///
    /// # Errors
    /// `UnknownSubject` if the subject is not in the catalog,
    /// `AlreadyRunning` if a session occupies the timer.
    pub fn start_session(&mut self, subject: &str, now: DateTime<Utc>) -> Result<Event> {
        if !self.catalog.contains(subject) {
            return Err(StudyError::UnknownSubject(subject.to_string()));
        }
        self.timer.start(subject, now)
    }

    pub fn cancel_session(&mut self, now: DateTime<Utc>) -> Result<Event> {
        self.timer.cancel(now)
    }

    /// Raw timer tick. Pair a `Tick::Finished` with [`Self::consume_completion`].
    pub fn tick_timer(&mut self, now: DateTime<Utc>) -> Tick {
        self.timer.tick(now)
    }

    /// Log the finished session, dated `today`. `None` if nothing finished.
    pub fn consume_completion(&mut self, today: NaiveDate) -> Option<Event> {
        let session = self.timer.consume_completion()?;
        let entry = self
            .log
            .append(&session.subject, session.duration_minutes, today);
        Some(Event::SessionLogged {
            xp_awarded: entry.duration_minutes,
            entry,
            pet: self.pet(),
        })
    }

    /// Call periodically. Returns `Some(Event::SessionLogged)` on the tick
    /// that completes a session; repeated calls never log it twice.
    pub fn tick(&mut self, now: DateTime<Utc>, today: NaiveDate) -> Option<Event> {
        match self.timer.tick(now) {
            Tick::Finished { .. } | Tick::AwaitingConsumption => self.consume_completion(today),
            Tick::Idle | Tick::Running { .. } => None,
        }
    }
}
