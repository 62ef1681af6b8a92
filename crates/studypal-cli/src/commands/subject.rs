use std::io::Write;

use clap::Subcommand;

use super::{print_json, CommandResult};
use crate::session::Session;

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject
    Add {
        /// Subject name (may contain spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Remove a subject and all of its tasks
    Remove {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// List subjects
    List,
}

pub fn run<W: Write>(action: SubjectAction, session: &mut Session, out: &mut W) -> CommandResult {
    match action {
        SubjectAction::Add { name } => {
            let event = session.state.add_subject(&name.join(" "))?;
            print_json(out, &event)?;
        }
        SubjectAction::Remove { name } => {
            let event = session.state.remove_subject(&name.join(" "))?;
            print_json(out, &event)?;
        }
        SubjectAction::List => {
            print_json(out, session.state.catalog().list())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::clock::SystemClock;
    use crate::session::Session;
    use studypal_core::Config;

    #[test]
    fn multi_word_subjects() {
        let mut s = Session::new(Config::default(), Box::new(SystemClock));
        let mut out = Vec::new();
        s.execute("subject add Computer Science", &mut out).unwrap();
        assert!(s.state.catalog().contains("Computer Science"));
        s.execute("subject remove Computer Science", &mut out).unwrap();
        assert!(!s.state.catalog().contains("Computer Science"));
    }

    #[test]
    fn list_prints_json_array() {
        let mut s = Session::new(Config::default(), Box::new(SystemClock));
        let mut out = Vec::new();
        s.execute("subject list", &mut out).unwrap();
        let listed: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(listed, ["General", "Math", "History", "Science"]);
    }
}
