//! Filtering logic

use super::roster::Roster;
use crate::types::Student;

/// The three filter-bar predicates. An empty predicate matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub name: String,
    pub lastname: String,
    /// Exact group name, not a substring
    pub group: String,
}

impl StudentFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.lastname.is_empty() && self.group.is_empty()
    }

    pub fn matches(&self, student: &Student) -> bool {
        contains_ci(&student.name, &self.name)
            && contains_ci(&student.lastname, &self.lastname)
            && (self.group.is_empty() || student.group == self.group)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Roster {
    /// Recompute `filtered_indices` from the student list and the filter.
    /// Source order is kept.
    pub fn apply_filters(&mut self) {
        let filter = &self.filter;
        self.filtered_indices = self
            .students
            .iter()
            .enumerate()
            .filter(|(_, s)| filter.matches(s))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn set_filter(&mut self, filter: StudentFilter) {
        self.filter = filter;
        self.apply_filters();
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(StudentFilter::default());
    }
}
