use std::io::Write;
use std::time::Duration as StdDuration;

use clap::Subcommand;
use studypal_core::timer::format_mm_ss;
use studypal_core::{Event, GENERAL};

use super::{print_json, CommandResult};
use crate::session::Session;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a 25-minute focus session
    Start {
        /// Subject to study
        #[arg(num_args = 0..)]
        subject: Vec<String>,
    },
    /// Cancel the running session (no XP awarded)
    Cancel,
    /// Print current timer state as JSON
    Status,
    /// Follow the running session until it finishes; Ctrl-C cancels it
    Watch,
}

pub fn run<W: Write>(action: TimerAction, session: &mut Session, out: &mut W) -> CommandResult {
    match action {
        TimerAction::Start { subject } => {
            let subject = if subject.is_empty() {
                GENERAL.to_string()
            } else {
                subject.join(" ")
            };
            let event = session.state.start_session(&subject, session.clock.now())?;
            print_json(out, &event)?;
        }
        TimerAction::Cancel => {
            let event = session.state.cancel_session(session.clock.now())?;
            print_json(out, &event)?;
        }
        TimerAction::Status => {
            print_json(out, &session.state.timer().snapshot(session.clock.now()))?;
        }
        TimerAction::Watch => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(watch(session, out))?;
        }
    }
    Ok(())
}

/// Render the countdown on a fixed cadence until the session ends.
///
/// Completion is driven by a sleep that fires at the session deadline,
/// not by the render interval.
async fn watch<W: Write>(session: &mut Session, out: &mut W) -> CommandResult {
    let Some(remaining) = session.state.timer().remaining(session.clock.now()) else {
        writeln!(out, "no focus session is running")?;
        return Ok(());
    };
    let poll = StdDuration::from_millis(session.config.timer.poll_interval_ms.max(1));
    let mut ticker = tokio::time::interval(poll);
    let deadline = tokio::time::sleep(remaining.to_std().unwrap_or_default());
    tokio::pin!(deadline);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Event::TimerSnapshot { subject, remaining_secs, .. } =
                    session.state.timer().snapshot(session.clock.now())
                {
                    let subject = subject.unwrap_or_default();
                    let left = chrono::Duration::seconds(remaining_secs);
                    writeln!(out, "Studying {subject}: {} remaining", format_mm_ss(left))?;
                    out.flush()?;
                }
            }
            _ = &mut deadline => {
                let (now, today) = (session.clock.now(), session.clock.today());
                match session.state.tick(now, today) {
                    Some(event) => {
                        writeln!(out, "Focus session complete! Great job!")?;
                        print_json(out, &event)?;
                        return Ok(());
                    }
                    None if session.state.timer().is_running() => {
                        // Wall clock lags the runtime timer; check again shortly.
                        deadline
                            .as_mut()
                            .reset(tokio::time::Instant::now() + StdDuration::from_millis(50));
                    }
                    None => return Ok(()),
                }
            }
            _ = &mut ctrl_c => {
                let event = session.state.cancel_session(session.clock.now())?;
                writeln!(out, "Session cancelled. No XP awarded.")?;
                print_json(out, &event)?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::manual::ManualClock;
    use crate::session::Session;
    use chrono::{Duration, TimeZone, Utc};
    use studypal_core::{Config, TimerState};

    fn session() -> (Session, ManualClock) {
        let clock = ManualClock::at(Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap());
        (Session::new(Config::default(), Box::new(clock.clone())), clock)
    }

    fn exec(s: &mut Session, line: &str) -> String {
        let mut out = Vec::new();
        s.execute(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn start_without_subject_uses_general() {
        let (mut s, _) = session();
        exec(&mut s, "timer start");
        assert_eq!(s.state.timer().subject(), Some("General"));
    }

    #[test]
    fn status_shows_countdown() {
        let (mut s, clock) = session();
        exec(&mut s, "timer start Science");
        clock.advance(Duration::seconds(61));
        let out = exec(&mut s, "timer status");
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["state"], "running");
        assert_eq!(parsed["remaining_display"], "23:59");
    }

    #[test]
    fn cancel_discards_session() {
        let (mut s, clock) = session();
        exec(&mut s, "timer start Math");
        let out = exec(&mut s, "timer cancel");
        assert!(out.contains("\"timer_cancelled\""), "{out}");
        clock.advance(Duration::minutes(30));
        exec(&mut s, "progress");
        assert_eq!(s.state.timer().state(), TimerState::Idle);
        assert!(s.state.log().is_empty());
    }

    #[test]
    fn second_start_is_rejected() {
        let (mut s, _) = session();
        exec(&mut s, "timer start Math");
        let out = exec(&mut s, "timer start History");
        assert_eq!(out.trim(), "error: a focus session is already running");
    }

    #[test]
    fn watch_when_idle_returns_immediately() {
        let (mut s, _) = session();
        let out = exec(&mut s, "timer watch");
        assert_eq!(out.trim(), "no focus session is running");
    }

    #[test]
    fn watch_logs_an_already_expired_session() {
        let (mut s, clock) = session();
        exec(&mut s, "timer start Math");
        // Reach the deadline without polling through `execute`.
        clock.advance(Duration::minutes(25));
        let mut out = Vec::new();
        super::run(super::TimerAction::Watch, &mut s, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Focus session complete!"), "{out}");
        assert_eq!(s.state.log().session_count(), 1);
    }
}
