//! Focus session timer.
//!
//! The timer is a wall-clock state machine with no internal thread. The
//! caller supplies `now` on every call and is responsible for calling
//! `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Completed -> Idle   (consume_completion)
//!            \-------------------> Idle  (cancel)
//! ```
//!
//! `Completed` only exists between the tick that observes the deadline and
//! the matching `consume_completion()`. Consuming moves the timer back to
//! `Idle`, so a second consume has nothing to take.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = SessionTimer::new();
//! timer.start("Math", Utc::now())?;
//! // In a loop:
//! if let Tick::Finished { .. } = timer.tick(Utc::now()) {
//!     let session = timer.consume_completion();
//! }
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, StudyError};
use crate::events::Event;

/// Length of every focus session, in minutes. Not configurable.
pub const SESSION_MINUTES: u32 = 25;

pub fn session_length() -> Duration {
    Duration::minutes(i64::from(SESSION_MINUTES))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    /// Deadline passed; waiting for `consume_completion()`.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
enum Phase {
    Idle,
    Running {
        subject: String,
        ends_at: DateTime<Utc>,
    },
    Completed {
        subject: String,
        ended_at: DateTime<Utc>,
    },
}

/// Result of a single `tick()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Running { remaining: Duration },
    /// The deadline was crossed on this tick. Reported once per session.
    Finished { subject: String },
    /// Already reported as finished, still unconsumed.
    AwaitingConsumption,
}

/// A finished, non-cancelled session handed out by `consume_completion()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSession {
    pub subject: String,
    pub duration_minutes: u32,
    pub ended_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimer {
    phase: Phase,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        match self.phase {
            Phase::Idle => TimerState::Idle,
            Phase::Running { .. } => TimerState::Running,
            Phase::Completed { .. } => TimerState::Completed,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn subject(&self) -> Option<&str> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Running { subject, .. } | Phase::Completed { subject, .. } => Some(subject),
        }
    }

    /// Present if and only if the timer is running.
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        match self.phase {
            Phase::Running { ends_at, .. } => Some(ends_at),
            _ => None,
        }
    }

    /// Time left while running, clamped at zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.ends_at()
            .map(|ends_at| (ends_at - now).max(Duration::zero()))
    }

    /// 1.0 .. 0.0 share of the session still ahead.
    pub fn remaining_fraction(&self, now: DateTime<Utc>) -> f64 {
        let Some(remaining) = self.remaining(now) else {
            return 0.0;
        };
        let total = session_length().num_milliseconds() as f64;
        (remaining.num_milliseconds() as f64 / total).clamp(0.0, 1.0)
    }

    /// Build a display snapshot without advancing the state machine.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Event {
        let remaining = self.remaining(now).unwrap_or_else(Duration::zero);
        Event::TimerSnapshot {
            state: self.state(),
            subject: self.subject().map(str::to_string),
            remaining_secs: remaining.num_seconds(),
            remaining_display: format_mm_ss(remaining),
            remaining_fraction: self.remaining_fraction(now),
            at: now,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a 25-minute session for `subject`.
    ///
    /// # Errors
    /// `AlreadyRunning` while a session is running or a finished session
    /// has not been consumed yet.
    pub fn start(&mut self, subject: &str, now: DateTime<Utc>) -> Result<Event> {
        if self.state() != TimerState::Idle {
            return Err(StudyError::AlreadyRunning);
        }
        let ends_at = now + session_length();
        self.phase = Phase::Running {
            subject: subject.to_string(),
            ends_at,
        };
        info!(subject, %ends_at, "focus session started");
        Ok(Event::TimerStarted {
            subject: subject.to_string(),
            ends_at,
            duration_secs: session_length().num_seconds(),
            at: now,
        })
    }

    /// Drop the current session without logging anything.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<Event> {
        let remaining = self.remaining(now).unwrap_or_else(Duration::zero);
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => Err(StudyError::NotRunning),
            Phase::Running { subject, .. } | Phase::Completed { subject, .. } => {
                info!(subject = %subject, "focus session cancelled");
                Ok(Event::TimerCancelled {
                    subject,
                    remaining_secs: remaining.num_seconds(),
                    at: now,
                })
            }
        }
    }

    /// Advance against the wall clock. Only a running timer whose deadline
    /// has passed changes state.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        match &self.phase {
            Phase::Idle => Tick::Idle,
            Phase::Completed { .. } => Tick::AwaitingConsumption,
            Phase::Running { ends_at, .. } if now < *ends_at => Tick::Running {
                remaining: *ends_at - now,
            },
            Phase::Running { subject, ends_at } => {
                let subject = subject.clone();
                let ended_at = *ends_at;
                info!(subject = %subject, "focus session finished");
                self.phase = Phase::Completed {
                    subject: subject.clone(),
                    ended_at,
                };
                Tick::Finished { subject }
            }
        }
    }

    /// Take the finished session and return to `Idle`.
    ///
    /// Returns `None` in any other state; calling it twice for one session
    /// yields the session once.
    pub fn consume_completion(&mut self) -> Option<CompletedSession> {
        if self.state() != TimerState::Completed {
            debug!(state = ?self.state(), "nothing to consume");
            return None;
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Completed { subject, ended_at } => Some(CompletedSession {
                subject,
                duration_minutes: SESSION_MINUTES,
                ended_at,
            }),
            _ => None,
        }
    }
}

/// Render a duration as `MM:SS`, truncating sub-second remainders.
pub fn format_mm_ss(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
