//! View model for the student table
//!
//! `Roster` owns everything the window shows. It never touches the network:
//! operations that need the backend hand back a [`Request`], and whatever the
//! backend answers comes back in as a [`Response`].

use super::filters::StudentFilter;
use super::notifications::Toasts;
use crate::api::ApiError;
use crate::types::{EditorMode, Student, StudentDraft};

/// Work for the backend, produced by the model and executed by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchStudents,
    FetchGroups,
    FetchLevels,
    Create(StudentDraft),
    Update(Student),
    Delete(i64),
}

/// Outcome of a [`Request`]
#[derive(Debug)]
pub enum Response {
    Students(Result<Vec<Student>, ApiError>),
    Groups(Result<Vec<String>, ApiError>),
    Levels(Result<Vec<i64>, ApiError>),
    Created(Result<(), ApiError>),
    Updated(i64, Result<(), ApiError>),
    Deleted(i64, Result<(), ApiError>),
}

pub struct Roster {
    pub(crate) students: Vec<Student>,
    pub(crate) groups: Vec<String>,
    pub(crate) levels: Vec<i64>,
    pub(crate) filter: StudentFilter,
    pub(crate) filtered_indices: Vec<usize>,
    pub(crate) editor_mode: EditorMode,
    pub(crate) draft: StudentDraft,
    pub(crate) pending_delete: Option<i64>,
    pub(crate) toasts: Toasts,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            groups: Vec::new(),
            levels: Vec::new(),
            filter: StudentFilter::default(),
            filtered_indices: Vec::new(),
            editor_mode: EditorMode::Closed,
            draft: StudentDraft::default(),
            pending_delete: None,
            toasts: Toasts::default(),
        }
    }
}

impl Roster {
    pub fn student(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Rows currently shown, in source order
    pub fn visible(&self) -> impl Iterator<Item = &Student> {
        self.filtered_indices.iter().filter_map(|&i| self.students.get(i))
    }

    /// Feed a backend outcome into the model, returning follow-up requests
    pub fn handle(&mut self, response: Response) -> Vec<Request> {
        match response {
            Response::Students(result) => {
                self.on_students(result);
                Vec::new()
            }
            Response::Groups(result) => {
                self.on_groups(result);
                Vec::new()
            }
            Response::Levels(result) => {
                self.on_levels(result);
                Vec::new()
            }
            Response::Created(result) => self.on_saved(None, result),
            Response::Updated(id, result) => self.on_saved(Some(id), result),
            Response::Deleted(id, result) => self.on_deleted(id, result),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::Student;

    pub fn student(id: i64, name: &str, lastname: &str, group: &str, level: i64) -> Student {
        Student {
            id,
            name: name.into(),
            lastname: lastname.into(),
            group: group.into(),
            level,
        }
    }

    pub fn sample() -> Vec<Student> {
        vec![
            student(1, "Anvar", "Karimov", "A1", 2),
            student(2, "Olim", "Tursunov", "A10", 1),
            student(3, "Dilnoza", "Rahimova", "A1", 3),
        ]
    }
}
