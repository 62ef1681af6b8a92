//! # StudyPal Core Library
//!
//! This library provides the core logic for StudyPal, a single-user study
//! tracker. All state lives in one in-process [`AppState`]; nothing is
//! persisted except user preferences in [`Config`].
//!
//! ## Architecture
//!
//! - **Catalog**: ordered set of subjects, `General` is permanent
//! - **Task Store**: tasks with deadlines, cascade-deleted with their subject
//! - **Session Timer**: a wall-clock state machine for fixed 25-minute focus
//!   sessions; the caller supplies `now` and invokes `tick()` periodically
//! - **Study Log**: append-only record of completed sessions
//! - **Pet Progress**: growth stage derived from total logged minutes (XP)
//!
//! ## Key Components
//!
//! - [`AppState`]: owns everything above and exposes the command surface
//! - [`SessionTimer`]: core timer state machine
//! - [`PetStatus`]: pure XP-to-stage projection
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod pet;
pub mod quotes;
pub mod state;
pub mod study_log;
pub mod task;
pub mod timer;

pub use catalog::{Catalog, DEFAULT_SUBJECTS, GENERAL};
pub use config::Config;
pub use error::{ConfigError, Result, StudyError};
pub use events::Event;
pub use pet::{PetStage, PetStatus, PET_STAGES};
pub use quotes::{random_quote, MOTIVATIONAL_QUOTES};
pub use state::{AppState, Dashboard, ProgressReport};
pub use study_log::{StudyLog, StudyLogEntry, SubjectMinutes};
pub use task::{Task, TaskId, TaskStore, UpcomingTask, Urgency};
pub use timer::{CompletedSession, SessionTimer, Tick, TimerState, SESSION_MINUTES};
