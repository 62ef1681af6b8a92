//! Subject catalog.
//!
//! An ordered set of subject names. `General` is always present and can
//! never be removed; every other subject can be added or removed freely.
//! Removing a subject here does not touch tasks -- [`crate::AppState`]
//! performs the cascade.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, StudyError};

/// The permanent fallback subject.
pub const GENERAL: &str = "General";

/// Subjects seeded into a fresh catalog.
pub const DEFAULT_SUBJECTS: [&str; 4] = [GENERAL, "Math", "History", "Science"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    subjects: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_subjects(DEFAULT_SUBJECTS)
    }
}

impl Catalog {
    /// Build a catalog from a seed list.
    ///
    /// `General` is forced to the front; blank names and repeats are dropped.
    pub fn with_subjects<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut subjects = vec![GENERAL.to_string()];
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !subjects.iter().any(|s| s == name) {
                subjects.push(name.to_string());
            }
        }
        Self { subjects }
    }

    pub fn add(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return Err(StudyError::DuplicateSubject(name.to_string()));
        }
        self.subjects.push(name.to_string());
        info!(subject = name, "subject added");
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name == GENERAL {
            return Err(StudyError::ProtectedSubject(name.to_string()));
        }
        let pos = self
            .subjects
            .iter()
            .position(|s| s == name)
            .ok_or_else(|| StudyError::UnknownSubject(name.to_string()))?;
        self.subjects.remove(pos);
        info!(subject = name, "subject removed");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.subjects.iter().any(|s| s == name)
    }

    /// Subjects in insertion order.
    pub fn list(&self) -> &[String] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
