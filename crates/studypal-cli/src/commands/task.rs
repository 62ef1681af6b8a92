//! Task management commands for the interactive session.

use std::io::Write;

use chrono::NaiveDate;
use clap::Subcommand;
use studypal_core::{TaskId, GENERAL};

use super::{print_json, CommandResult};
use crate::session::Session;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Subject the task belongs to
        #[arg(long, default_value = GENERAL)]
        subject: String,
        /// Deadline as YYYY-MM-DD (default: today)
        #[arg(long)]
        deadline: Option<NaiveDate>,
        /// Task description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Set a task's completion flag
    Toggle {
        /// Task ID
        id: TaskId,
        /// New completion state
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        completed: bool,
    },
    /// Mark a task as completed
    Done {
        /// Task ID
        id: TaskId,
    },
    /// Mark a task as not completed
    Undo {
        /// Task ID
        id: TaskId,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
    /// List all tasks by deadline
    List,
    /// Incomplete tasks by deadline, with urgency
    Upcoming {
        /// How many to show (default: dashboard.upcoming_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run<W: Write>(action: TaskAction, session: &mut Session, out: &mut W) -> CommandResult {
    match action {
        TaskAction::Add {
            subject,
            deadline,
            description,
        } => {
            let deadline = deadline.unwrap_or_else(|| session.clock.today());
            let event = session
                .state
                .add_task(&subject, &description.join(" "), deadline)?;
            print_json(out, &event)?;
        }
        TaskAction::Toggle { id, completed } => {
            let event = session.state.toggle_task(id, completed)?;
            print_json(out, &event)?;
        }
        TaskAction::Done { id } => {
            let event = session.state.toggle_task(id, true)?;
            print_json(out, &event)?;
        }
        TaskAction::Undo { id } => {
            let event = session.state.toggle_task(id, false)?;
            print_json(out, &event)?;
        }
        TaskAction::Delete { id } => {
            let event = session.state.delete_task(id);
            print_json(out, &event)?;
        }
        TaskAction::List => {
            print_json(out, &session.state.tasks().sorted_by_deadline())?;
        }
        TaskAction::Upcoming { limit } => {
            let limit = limit.unwrap_or(session.config.dashboard.upcoming_limit);
            let upcoming = session.state.tasks().upcoming(session.clock.today(), limit);
            print_json(out, &upcoming)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::clock::manual::ManualClock;
    use crate::session::Session;
    use chrono::{TimeZone, Utc};
    use studypal_core::Config;

    fn session() -> Session {
        let clock = ManualClock::at(Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap());
        Session::new(Config::default(), Box::new(clock))
    }

    fn exec(s: &mut Session, line: &str) -> String {
        let mut out = Vec::new();
        s.execute(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_defaults_to_general_and_today() {
        let mut s = session();
        exec(&mut s, "task add Plan the week");
        let task = &s.state.tasks().tasks()[0];
        assert_eq!(task.subject, "General");
        assert_eq!(task.description, "Plan the week");
        assert_eq!(task.deadline.to_string(), "2026-10-17");
    }

    #[test]
    fn done_and_delete_by_id() {
        let mut s = session();
        exec(&mut s, "task add --subject Math --deadline 2026-10-19 Problem set");
        let id = s.state.tasks().tasks()[0].id;

        let out = exec(&mut s, &format!("task done {id}"));
        assert!(out.contains("\"task_toggled\""), "{out}");
        assert!(s.state.tasks().get(id).unwrap().completed);

        exec(&mut s, &format!("task delete {id}"));
        assert!(s.state.tasks().is_empty());
    }

    #[test]
    fn toggle_sets_flag_both_ways() {
        let mut s = session();
        exec(&mut s, "task add --subject Science Lab report");
        let id = s.state.tasks().tasks()[0].id;

        exec(&mut s, &format!("task toggle {id}"));
        assert!(s.state.tasks().get(id).unwrap().completed);

        let out = exec(&mut s, &format!("task toggle {id} --completed false"));
        assert!(out.contains("\"completed\": false"), "{out}");
        assert!(!s.state.tasks().get(id).unwrap().completed);
    }

    #[test]
    fn upcoming_reports_urgency() {
        let mut s = session();
        exec(&mut s, "task add --subject History --deadline 2026-10-16 Essay");
        let out = exec(&mut s, "task upcoming");
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["urgency"], "overdue");
        assert_eq!(parsed[0]["days_left"], -1);
    }

    #[test]
    fn unknown_subject_is_an_error() {
        let mut s = session();
        let out = exec(&mut s, "task add --subject Art Sketch");
        assert_eq!(out.trim(), "error: unknown subject: 'Art'");
    }

    #[test]
    fn malformed_id_is_rejected_by_parser() {
        let mut s = session();
        let out = exec(&mut s, "task done 42");
        assert!(out.contains("invalid value"), "{out}");
    }
}
