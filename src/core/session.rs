use crate::core::types::{Bool, ClockTime, Weekday};
use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use strum::IntoEnumIterator;

/// One scheduled occurrence of a course on a given weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    pub name: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub send_message: Bool,
}

impl CourseEntry {
    pub fn new(
        name: impl Into<String>,
        start_time: ClockTime,
        end_time: ClockTime,
        send_message: Bool,
    ) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
            send_message,
        }
    }
}

impl fmt::Display for CourseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} | notifications: {}",
            self.name, self.start_time, self.end_time, self.send_message
        )
    }
}

/// The authoritative in-memory state of one interactive session: the
/// first-seen-ordered course registry, the five weekday buckets, and the
/// course-name -> metadata-value mapping.
///
/// Invariants maintained by the mutation methods:
/// - a name is in the registry iff some bucket holds an entry with it;
/// - every metadata key is a registered course name.
#[derive(Debug)]
pub struct Session {
    courses: Vec<String>,
    schedule: HashMap<Weekday, Vec<CourseEntry>>,
    metadata: HashMap<String, String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            schedule: Weekday::iter().map(|d| (d, Vec::new())).collect(),
            metadata: HashMap::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Schedule mutations -------------------------------------------------

    /// Append an entry to `day`'s bucket, registering the course name on
    /// first sight. Duplicate names (same or other days) are independent
    /// occurrences.
    pub fn add_entry(&mut self, day: Weekday, entry: CourseEntry) -> Result<&CourseEntry> {
        if entry.name.trim().is_empty() {
            return Err(Error::Validation(
                "Course name must not be empty.".to_string(),
            ));
        }

        if !self.is_registered(&entry.name) {
            self.courses.push(entry.name.clone());
        }

        let bucket = self.schedule.entry(day).or_default();
        bucket.push(entry);
        Ok(bucket.last().expect("entry missing after push"))
    }

    /// Remove the entry at `index` (0-based) from `day`'s bucket. When the
    /// removed occurrence was the last one carrying its name anywhere, the
    /// name leaves the registry and its metadata is deleted with it.
    pub fn remove_entry(&mut self, day: Weekday, index: usize) -> Result<CourseEntry> {
        let bucket = self.schedule.entry(day).or_default();
        if index >= bucket.len() {
            return Err(Error::Validation(format!(
                "No entry {} on {}. {} has {} entr{}.",
                index + 1,
                day,
                day,
                bucket.len(),
                if bucket.len() == 1 { "y" } else { "ies" }
            )));
        }

        let removed = bucket.remove(index);
        if !self.is_scheduled(&removed.name) {
            self.courses.retain(|c| c != &removed.name);
            self.metadata.remove(&removed.name);
        }
        Ok(removed)
    }

    // ---- Metadata mutations -------------------------------------------------

    /// Store or overwrite the metadata value for a registered course.
    pub fn set_metadata(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !self.is_registered(name) {
            return Err(Error::Validation(format!(
                "Unknown course: '{}'. Add it to the schedule first.",
                name
            )));
        }
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::Validation(
                "Metadata value must not be empty.".to_string(),
            ));
        }
        self.metadata.insert(name.to_string(), value);
        Ok(())
    }

    /// Delete the metadata value for `name` if one is stored. The course
    /// stays registered and scheduled; metadata removal never cascades.
    pub fn remove_metadata(&mut self, name: &str) -> Option<String> {
        self.metadata.remove(name)
    }

    /// Clear registry, schedule, and metadata together.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ---- Read access --------------------------------------------------------

    pub fn course_names(&self) -> &[String] {
        &self.courses
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.courses.iter().any(|c| c == name)
    }

    pub fn entries(&self, day: Weekday) -> &[CourseEntry] {
        self.schedule.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn metadata_for(&self, name: &str) -> Option<&str> {
        self.metadata.get(name).map(String::as_str)
    }

    /// True while any bucket holds an entry with `name`.
    pub fn is_scheduled(&self, name: &str) -> bool {
        self.schedule
            .values()
            .any(|entries| entries.iter().any(|e| e.name == name))
    }

    pub fn has_entries(&self) -> bool {
        self.schedule.values().any(|entries| !entries.is_empty())
    }

    pub fn entry_count(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }
}
