//! Append-only log of completed focus sessions.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyLogEntry {
    pub subject: String,
    pub duration_minutes: u32,
    pub date: NaiveDate,
}

/// Total minutes studied for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectMinutes {
    pub subject: String,
    pub minutes: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyLog {
    entries: Vec<StudyLogEntry>,
}

impl StudyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        subject: &str,
        duration_minutes: u32,
        date: NaiveDate,
    ) -> StudyLogEntry {
        let entry = StudyLogEntry {
            subject: subject.to_string(),
            duration_minutes,
            date,
        };
        self.entries.push(entry.clone());
        info!(subject, duration_minutes, %date, "study session logged");
        entry
    }

    pub fn total_minutes(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.duration_minutes)).sum()
    }

    pub fn session_count(&self) -> usize {
        self.entries.len()
    }

    /// Mean session length in minutes; 0.0 for an empty log.
    pub fn average_duration(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.total_minutes() as f64 / self.entries.len() as f64
    }

    /// Minutes grouped by subject, largest first (ties by name).
    pub fn minutes_by_subject(&self) -> Vec<SubjectMinutes> {
        let mut totals: HashMap<&str, u64> = HashMap::new();
        for entry in &self.entries {
            *totals.entry(entry.subject.as_str()).or_default() += u64::from(entry.duration_minutes);
        }
        let mut grouped: Vec<SubjectMinutes> = totals
            .into_iter()
            .map(|(subject, minutes)| SubjectMinutes {
                subject: subject.to_string(),
                minutes,
            })
            .collect();
        grouped.sort_by(|a, b| b.minutes.cmp(&a.minutes).then_with(|| a.subject.cmp(&b.subject)));
        grouped
    }

    /// Entries newest first; same-day entries keep log order.
    pub fn history(&self) -> Vec<&StudyLogEntry> {
        let mut sorted: Vec<&StudyLogEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn entries(&self) -> &[StudyLogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn empty_log_aggregates_to_zero() {
        let log = StudyLog::new();
        assert_eq!(log.total_minutes(), 0);
        assert_eq!(log.session_count(), 0);
        assert_eq!(log.average_duration(), 0.0);
        assert!(log.minutes_by_subject().is_empty());
    }

    #[test]
    fn aggregates_over_entries() {
        let mut log = StudyLog::new();
        log.append("Math", 25, date(15));
        log.append("History", 25, date(16));
        log.append("Math", 10, date(17));
        assert_eq!(log.total_minutes(), 60);
        assert_eq!(log.session_count(), 3);
        assert!((log.average_duration() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn minutes_by_subject_is_order_independent() {
        let mut a = StudyLog::new();
        a.append("Math", 25, date(15));
        a.append("History", 25, date(15));
        a.append("Math", 25, date(16));
        let mut b = StudyLog::new();
        b.append("Math", 25, date(16));
        b.append("Math", 25, date(15));
        b.append("History", 25, date(15));

        let grouped = a.minutes_by_subject();
        assert_eq!(grouped, b.minutes_by_subject());
        assert_eq!(grouped[0].subject, "Math");
        assert_eq!(grouped[0].minutes, 50);
        assert_eq!(grouped[1].minutes, 25);
    }

    #[test]
    fn append_returns_the_stored_entry() {
        let mut log = StudyLog::new();
        let entry = log.append("Science", 25, date(17));
        assert_eq!(entry.subject, "Science");
        assert_eq!(log.entries(), [entry]);
    }

    #[test]
    fn history_is_newest_first() {
        let mut log = StudyLog::new();
        log.append("Math", 25, date(10));
        log.append("Science", 25, date(12));
        log.append("History", 25, date(11));
        let subjects: Vec<&str> = log.history().iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, ["Science", "History", "Math"]);
        assert_eq!(log.entries()[0].subject, "Math");
    }
}
