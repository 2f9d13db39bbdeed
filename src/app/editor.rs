//! Add/edit form and delete confirmation

use super::roster::{Request, Roster};
use crate::api::ApiError;
use crate::types::{EditorMode, Student, StudentDraft};
use tracing::{error, info, warn};

impl Roster {
    /// Open the form, seeded from `student` for editing or blank for adding
    pub fn open_editor(&mut self, student: Option<&Student>) {
        match student {
            Some(s) => {
                self.draft = StudentDraft::from(s);
                self.editor_mode = EditorMode::Edit { id: s.id };
            }
            None => {
                self.draft = StudentDraft::default();
                self.editor_mode = EditorMode::Create;
            }
        }
    }

    pub fn close_editor(&mut self) {
        self.editor_mode = EditorMode::Closed;
        self.draft = StudentDraft::default();
    }

    pub fn editor_open(&self) -> bool {
        self.editor_mode != EditorMode::Closed
    }

    /// Validate the draft and build the save request.
    ///
    /// The modal stays open; it closes when the save succeeds.
    pub fn submit(&mut self) -> Option<Request> {
        if let Some(field) = self.draft.missing_field() {
            warn!(field, "Form submitted with missing field");
            self.toasts.error(format!("{} is required", field));
            return None;
        }
        match self.editor_mode {
            EditorMode::Closed => None,
            EditorMode::Create => Some(Request::Create(self.draft.clone())),
            EditorMode::Edit { id } => Some(Request::Update(self.draft.clone().into_student(id))),
        }
    }

    pub(crate) fn on_saved(&mut self, id: Option<i64>, result: Result<(), ApiError>) -> Vec<Request> {
        match result {
            Ok(()) => {
                info!(id = ?id, "Student saved");
                self.toasts.success(if id.is_some() { "Student updated" } else { "Student added" });
                self.close_editor();
                vec![Request::FetchStudents]
            }
            Err(e) => {
                error!(id = ?id, error = %e, "Failed to save student");
                self.toasts.error("Could not save student");
                Vec::new()
            }
        }
    }

    /// Ask for confirmation before deleting
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<Request> {
        self.pending_delete.take().map(Request::Delete)
    }

    pub(crate) fn on_deleted(&mut self, id: i64, result: Result<(), ApiError>) -> Vec<Request> {
        match result {
            Ok(()) => {
                info!(id, "Student deleted");
                self.toasts.success("Student deleted");
                vec![Request::FetchStudents]
            }
            Err(e) => {
                error!(id, error = %e, "Failed to delete student");
                self.toasts.error("Could not delete student");
                Vec::new()
            }
        }
    }
}
