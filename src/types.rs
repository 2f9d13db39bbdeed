//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Student record as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub group: String,
    pub level: i64,
}

/// Working copy of a student bound to the editor form.
///
/// Carries no identifier, so it serializes as the POST body directly.
/// `level == 0` means no level has been chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub lastname: String,
    pub group: String,
    pub level: i64,
}

impl StudentDraft {
    /// Name of the first required field that is missing, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Name")
        } else if self.lastname.trim().is_empty() {
            Some("Lastname")
        } else if self.group.trim().is_empty() {
            Some("Group")
        } else if self.level == 0 {
            Some("Level")
        } else {
            None
        }
    }

    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            lastname: self.lastname,
            group: self.group,
            level: self.level,
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(s: &Student) -> Self {
        Self {
            name: s.name.clone(),
            lastname: s.lastname.clone(),
            group: s.group.clone(),
            level: s.level,
        }
    }
}

/// Group entry from GET /groups, either `{"name": "A1"}` or `"A1"`
#[derive(Deserialize)]
#[serde(untagged)]
pub enum GroupEntry {
    Named { name: String },
    Plain(String),
}

impl From<GroupEntry> for String {
    fn from(entry: GroupEntry) -> Self {
        match entry {
            GroupEntry::Named { name } => name,
            GroupEntry::Plain(name) => name,
        }
    }
}

/// Level entry from GET /levels, either `{"value": 3}` or `3`
#[derive(Deserialize)]
#[serde(untagged)]
pub enum LevelEntry {
    Valued { value: i64 },
    Plain(i64),
}

impl From<LevelEntry> for i64 {
    fn from(entry: LevelEntry) -> Self {
        match entry {
            LevelEntry::Valued { value } => value,
            LevelEntry::Plain(value) => value,
        }
    }
}

/// Which phase the editor modal is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Closed,
    Create,
    Edit { id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_decode_from_either_shape() {
        let named: Vec<GroupEntry> = serde_json::from_str(r#"[{"name":"A1"},{"name":"B2"}]"#).unwrap();
        let plain: Vec<GroupEntry> = serde_json::from_str(r#"["A1","B2"]"#).unwrap();
        let named: Vec<String> = named.into_iter().map(String::from).collect();
        let plain: Vec<String> = plain.into_iter().map(String::from).collect();
        assert_eq!(named, vec!["A1", "B2"]);
        assert_eq!(named, plain);
    }

    #[test]
    fn levels_decode_from_either_shape() {
        let valued: Vec<LevelEntry> = serde_json::from_str(r#"[{"value":1},{"value":2}]"#).unwrap();
        let plain: Vec<LevelEntry> = serde_json::from_str("[1,2]").unwrap();
        let valued: Vec<i64> = valued.into_iter().map(i64::from).collect();
        let plain: Vec<i64> = plain.into_iter().map(i64::from).collect();
        assert_eq!(valued, vec![1, 2]);
        assert_eq!(valued, plain);
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = StudentDraft {
            name: "Anvar".into(),
            lastname: "Karimov".into(),
            group: "A1".into(),
            level: 2,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["lastname"], "Karimov");
    }

    #[test]
    fn missing_field_reports_first_blank() {
        let mut draft = StudentDraft {
            name: "Anvar".into(),
            lastname: "  ".into(),
            group: "A1".into(),
            level: 2,
        };
        assert_eq!(draft.missing_field(), Some("Lastname"));
        draft.lastname = "Karimov".into();
        draft.level = 0;
        assert_eq!(draft.missing_field(), Some("Level"));
        draft.level = 1;
        assert_eq!(draft.missing_field(), None);
    }

    #[test]
    fn draft_from_student_keeps_fields() {
        let student = Student {
            id: 7,
            name: "Olim".into(),
            lastname: "Tursunov".into(),
            group: "B2".into(),
            level: 3,
        };
        let draft = StudentDraft::from(&student);
        assert_eq!(draft.clone().into_student(7), student);
    }
}
