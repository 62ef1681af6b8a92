//! Read-only views: log, progress, pet, dashboard, quote.

use std::io::Write;

use serde::Serialize;
use studypal_core::{random_quote, Dashboard};

use super::{print_json, CommandResult};
use crate::session::Session;

#[derive(Serialize)]
struct DashboardView<'a> {
    #[serde(flatten)]
    dashboard: Dashboard,
    quote: &'a str,
}

pub fn log<W: Write>(session: &Session, out: &mut W) -> CommandResult {
    print_json(out, &session.state.log().history())?;
    Ok(())
}

pub fn progress<W: Write>(session: &Session, out: &mut W) -> CommandResult {
    print_json(out, &session.state.progress())?;
    Ok(())
}

pub fn pet<W: Write>(session: &Session, out: &mut W) -> CommandResult {
    let pet = session.state.pet();
    print_json(out, &pet)?;
    match pet.next_threshold {
        Some(next) => writeln!(out, "{} / {next} XP to the next stage.", pet.xp)?,
        None => writeln!(out, "Max Level Reached! You're a true scholar!")?,
    }
    Ok(())
}

pub fn dashboard<W: Write>(session: &Session, out: &mut W) -> CommandResult {
    let dashboard = session
        .state
        .dashboard(session.clock.today(), session.config.dashboard.upcoming_limit);
    let view = DashboardView {
        dashboard,
        quote: random_quote(&mut rand::thread_rng()),
    };
    print_json(out, &view)?;
    Ok(())
}

pub fn quote<W: Write>(out: &mut W) -> CommandResult {
    writeln!(out, "{}", random_quote(&mut rand::thread_rng()))?;
    Ok(())
}
