//! REST client for the student backend

use crate::types::{GroupEntry, LevelEntry, Student, StudentDraft};
use reqwest::StatusCode;
use tracing::debug;

/// Any failed exchange with the backend. The UI does not distinguish the two.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with HTTP {0}")]
    Status(StatusCode),
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        match request.send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(ApiError::Status(response.status())),
            Err(e) => Err(ApiError::Transport(e)),
        }
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let response = Self::send(self.client.get(self.url("/users"))).await?;
        let students: Vec<Student> = response.json().await?;
        debug!(count = students.len(), "Fetched students");
        Ok(students)
    }

    pub async fn create_student(&self, draft: &StudentDraft) -> Result<(), ApiError> {
        let response = Self::send(self.client.post(self.url("/users")).json(draft)).await?;
        debug!(status = %response.status(), name = %draft.name, "Student created");
        Ok(())
    }

    pub async fn update_student(&self, student: &Student) -> Result<(), ApiError> {
        let url = self.url(&format!("/users/{}", student.id));
        let response = Self::send(self.client.put(url).json(student)).await?;
        debug!(status = %response.status(), id = student.id, "Student updated");
        Ok(())
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/users/{}", id));
        let response = Self::send(self.client.delete(url)).await?;
        debug!(status = %response.status(), id, "Student deleted");
        Ok(())
    }

    pub async fn list_groups(&self) -> Result<Vec<String>, ApiError> {
        let response = Self::send(self.client.get(self.url("/groups"))).await?;
        let entries: Vec<GroupEntry> = response.json().await?;
        Ok(entries.into_iter().map(String::from).collect())
    }

    pub async fn list_levels(&self) -> Result<Vec<i64>, ApiError> {
        let response = Self::send(self.client.get(self.url("/levels"))).await?;
        let entries: Vec<LevelEntry> = response.json().await?;
        Ok(entries.into_iter().map(i64::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type CallLog = Arc<Mutex<Vec<(&'static str, String, Option<Value>)>>>;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn list_users(State(log): State<CallLog>) -> Json<Value> {
        log.lock().unwrap().push(("GET", "/users".into(), None));
        Json(json!([
            { "id": 1, "name": "Anvar", "lastname": "Karimov", "group": "A1", "level": 2 },
            { "id": 2, "name": "Olim", "lastname": "Tursunov", "group": "A10", "level": 1 }
        ]))
    }

    async fn create_user(State(log): State<CallLog>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        log.lock().unwrap().push(("POST", "/users".into(), Some(body.clone())));
        let mut created = body;
        created["id"] = json!(3);
        (StatusCode::CREATED, Json(created))
    }

    async fn update_user(
        State(log): State<CallLog>,
        Path(id): Path<i64>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        log.lock().unwrap().push(("PUT", format!("/users/{id}"), Some(body.clone())));
        Json(body)
    }

    async fn delete_user(State(log): State<CallLog>, Path(id): Path<i64>) -> StatusCode {
        log.lock().unwrap().push(("DELETE", format!("/users/{id}"), None));
        StatusCode::OK
    }

    fn backend(log: CallLog) -> Router {
        Router::new()
            .route("/users", get(list_users).post(create_user))
            .route("/users/{id}", put(update_user).delete(delete_user))
            .route("/groups", get(|| async { Json(json!([{ "name": "A1" }, { "name": "A10" }])) }))
            .route("/levels", get(|| async { Json(json!([1, 2, 3])) }))
            .with_state(log)
    }

    #[tokio::test]
    async fn lists_students_in_server_order() {
        let log = CallLog::default();
        let client = ApiClient::new(spawn_backend(backend(log.clone())).await);

        let students = client.list_students().await.unwrap();
        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Anvar", "Olim"]);
        assert_eq!(students[1].group, "A10");
    }

    #[tokio::test]
    async fn create_posts_draft_without_id() {
        let log = CallLog::default();
        let client = ApiClient::new(spawn_backend(backend(log.clone())).await);
        let draft = StudentDraft {
            name: "Dilnoza".into(),
            lastname: "Rahimova".into(),
            group: "A1".into(),
            level: 3,
        };

        client.create_student(&draft).await.unwrap();

        let calls = log.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (method, path, body) = &calls[0];
        assert_eq!(*method, "POST");
        assert_eq!(path, "/users");
        let body = body.as_ref().unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Dilnoza");
        assert_eq!(body["level"], 3);
    }

    #[tokio::test]
    async fn update_puts_full_record_to_its_path() {
        let log = CallLog::default();
        let client = ApiClient::new(spawn_backend(backend(log.clone())).await);
        let student = Student {
            id: 2,
            name: "Olim".into(),
            lastname: "Tursunov".into(),
            group: "A1".into(),
            level: 2,
        };

        client.update_student(&student).await.unwrap();

        let calls = log.lock().unwrap();
        let (method, path, body) = &calls[0];
        assert_eq!(*method, "PUT");
        assert_eq!(path, "/users/2");
        assert_eq!(body.as_ref().unwrap()["id"], 2);
        assert_eq!(body.as_ref().unwrap()["group"], "A1");
    }

    #[tokio::test]
    async fn delete_hits_record_path() {
        let log = CallLog::default();
        let client = ApiClient::new(spawn_backend(backend(log.clone())).await);

        client.delete_student(5).await.unwrap();

        let calls = log.lock().unwrap();
        assert_eq!(calls[0].0, "DELETE");
        assert_eq!(calls[0].1, "/users/5");
    }

    #[tokio::test]
    async fn reference_lists_are_flattened() {
        let client = ApiClient::new(spawn_backend(backend(CallLog::default())).await);

        assert_eq!(client.list_groups().await.unwrap(), vec!["A1", "A10"]);
        assert_eq!(client.list_levels().await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_ignored() {
        let base = spawn_backend(backend(CallLog::default())).await;
        let client = ApiClient::new(format!("{base}/"));

        assert_eq!(client.base_url(), base);
        assert_eq!(client.list_levels().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let router = Router::new().route(
            "/groups",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = ApiClient::new(spawn_backend(router).await);

        let err = client.list_groups().await.unwrap_err();
        assert!(matches!(err, ApiError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ApiClient::new(format!("http://{addr}"));

        let err = client.list_students().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
