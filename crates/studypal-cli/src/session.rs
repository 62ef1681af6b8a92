//! Interactive session.
//!
//! Holds the single [`AppState`] for the process and feeds it one command
//! per input line. Before every command the timer is polled, so a session
//! that finished while the user was idle is logged on the next line.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use studypal_core::{AppState, Config};

use crate::clock::Clock;
use crate::commands;

#[derive(Parser)]
#[command(no_binary_name = true, name = "studypal")]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand)]
enum LineCommand {
    /// Subject management
    Subject {
        #[command(subcommand)]
        action: commands::subject::SubjectAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Focus timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Logged focus sessions, newest first
    Log,
    /// Study history and aggregates
    Progress,
    /// Focus pet status
    Pet,
    /// Upcoming deadlines and pet overview
    Dashboard,
    /// A motivational quote
    Quote,
    /// Leave the session (all study data is discarded)
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    pub(crate) state: AppState,
    pub(crate) config: Config,
    pub(crate) clock: Box<dyn Clock>,
}

impl Session {
    pub fn new(config: Config, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::from_config(&config),
            config,
            clock,
        }
    }

    /// Read commands until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if self.execute(&line, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Run one input line. Command failures are reported on `out` and do
    /// not end the session; only write failures are returned.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> std::io::Result<Flow> {
        self.poll(out)?;

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        let parsed = match Line::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        let result = match parsed.command {
            LineCommand::Subject { action } => commands::subject::run(action, self, out),
            LineCommand::Task { action } => commands::task::run(action, self, out),
            LineCommand::Timer { action } => commands::timer::run(action, self, out),
            LineCommand::Log => commands::stats::log(self, out),
            LineCommand::Progress => commands::stats::progress(self, out),
            LineCommand::Pet => commands::stats::pet(self, out),
            LineCommand::Dashboard => commands::stats::dashboard(self, out),
            LineCommand::Quote => commands::stats::quote(out),
            LineCommand::Quit => return Ok(Flow::Quit),
        };
        if let Err(e) = result {
            writeln!(out, "error: {e}")?;
        }
        Ok(Flow::Continue)
    }

    /// Log a finished focus session, if one is due.
    pub(crate) fn poll<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let (now, today) = (self.clock.now(), self.clock.today());
        if let Some(event) = self.state.tick(now, today) {
            commands::print_json(out, &event)?;
        }
        Ok(())
    }
}
