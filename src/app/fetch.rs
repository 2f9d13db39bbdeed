//! Loading the student list and the reference lists

use super::roster::{Request, Roster};
use crate::api::ApiError;
use crate::types::Student;
use tracing::{debug, error};

impl Roster {
    /// Initial requests issued when the view first appears
    pub fn mount(&self) -> Vec<Request> {
        vec![Request::FetchStudents, Request::FetchGroups, Request::FetchLevels]
    }

    pub(crate) fn on_students(&mut self, result: Result<Vec<Student>, ApiError>) {
        match result {
            Ok(students) => {
                debug!(count = students.len(), "Student list replaced");
                self.students = students;
                self.apply_filters();
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch students");
                self.toasts.error("Could not load students");
            }
        }
    }

    pub(crate) fn on_groups(&mut self, result: Result<Vec<String>, ApiError>) {
        match result {
            Ok(groups) => {
                debug!(count = groups.len(), "Groups loaded");
                self.groups = groups;
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch groups");
                self.toasts.error("Could not load groups");
            }
        }
    }

    pub(crate) fn on_levels(&mut self, result: Result<Vec<i64>, ApiError>) {
        match result {
            Ok(levels) => {
                debug!(count = levels.len(), "Levels loaded");
                self.levels = levels;
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch levels");
                self.toasts.error("Could not load levels");
            }
        }
    }
}
