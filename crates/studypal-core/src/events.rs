use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pet::PetStatus;
use crate::study_log::StudyLogEntry;
use crate::task::{Task, TaskId};
use crate::timer::TimerState;

/// Every successful command produces an Event.
/// Front ends print or render them; nothing in the core reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SubjectAdded {
        name: String,
    },
    /// Subject left the catalog; its tasks were removed with it.
    SubjectRemoved {
        name: String,
        tasks_removed: usize,
    },
    TaskAdded {
        task: Task,
    },
    TaskToggled {
        id: TaskId,
        completed: bool,
    },
    TaskDeleted {
        id: TaskId,
        existed: bool,
    },
    TimerStarted {
        subject: String,
        ends_at: DateTime<Utc>,
        duration_secs: i64,
        at: DateTime<Utc>,
    },
    /// Session dropped before completion. No XP awarded.
    TimerCancelled {
        subject: String,
        remaining_secs: i64,
        at: DateTime<Utc>,
    },
    /// A finished session was written to the study log.
    SessionLogged {
        entry: StudyLogEntry,
        xp_awarded: u32,
        pet: PetStatus,
    },
    TimerSnapshot {
        state: TimerState,
        subject: Option<String>,
        remaining_secs: i64,
        remaining_display: String,
        remaining_fraction: f64,
        at: DateTime<Utc>,
    },
}
