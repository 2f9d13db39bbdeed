//! App module - contains the main application state and logic

mod editor;
mod fetch;
mod filters;
mod modals;
mod notifications;
mod roster;
mod views;

pub use roster::{Request, Response, Roster};

use crate::api::ApiClient;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) roster: Roster,
    pub(crate) client: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Finished requests, drained once per frame
    pub(crate) responses_tx: mpsc::UnboundedSender<Response>,
    pub(crate) responses_rx: mpsc::UnboundedReceiver<Response>,
    pub(crate) mounted: bool,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) api_base_url: String,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings, data_dir)
    }

    /// Everything except the egui context setup
    pub(crate) fn with_settings(settings: Settings, data_dir: PathBuf) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let client = ApiClient::new(settings.api_base_url.clone());
        info!(base_url = client.base_url(), "Backend configured");

        let (responses_tx, responses_rx) = mpsc::unbounded_channel();

        Ok(Self {
            roster: Roster::default(),
            client,
            runtime,
            responses_tx,
            responses_rx,
            mounted: false,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: settings.window_x.is_none(),
            api_base_url: settings.api_base_url,
            data_dir,
        })
    }

    /// Run a request on the runtime; its response arrives on the channel
    pub fn dispatch(&self, ctx: &egui::Context, request: Request) {
        debug!(?request, "Dispatching request");
        let client = self.client.clone();
        let tx = self.responses_tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let response = match request {
                Request::FetchStudents => Response::Students(client.list_students().await),
                Request::FetchGroups => Response::Groups(client.list_groups().await),
                Request::FetchLevels => Response::Levels(client.list_levels().await),
                Request::Create(draft) => Response::Created(client.create_student(&draft).await),
                Request::Update(student) => {
                    Response::Updated(student.id, client.update_student(&student).await)
                }
                Request::Delete(id) => Response::Deleted(id, client.delete_student(id).await),
            };
            // Receiver only goes away on shutdown
            let _ = tx.send(response);
            ctx.request_repaint();
        });
    }

    pub fn dispatch_all(&self, ctx: &egui::Context, requests: impl IntoIterator<Item = Request>) {
        for request in requests {
            self.dispatch(ctx, request);
        }
    }

    /// Issue the initial fetches once
    pub fn mount(&mut self, ctx: &egui::Context) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let requests = self.roster.mount();
        self.dispatch_all(ctx, requests);
    }

    /// Apply every response that arrived since the last frame
    pub fn poll_responses(&mut self, ctx: &egui::Context) {
        while let Ok(response) = self.responses_rx.try_recv() {
            let follow_up = self.roster.handle(response);
            self.dispatch_all(ctx, follow_up);
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_base_url: self.api_base_url.clone(),
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Student, StudentDraft};
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct Backend {
        students: Vec<Student>,
        next_id: i64,
        requests: usize,
    }

    type Shared = Arc<Mutex<Backend>>;

    async fn list(State(db): State<Shared>) -> Json<Vec<Student>> {
        let mut db = db.lock().unwrap();
        db.requests += 1;
        Json(db.students.clone())
    }

    async fn create(State(db): State<Shared>, Json(draft): Json<StudentDraft>) -> (StatusCode, Json<Student>) {
        let mut db = db.lock().unwrap();
        db.requests += 1;
        db.next_id += 1;
        let student = draft.into_student(db.next_id);
        db.students.push(student.clone());
        (StatusCode::CREATED, Json(student))
    }

    async fn remove(State(db): State<Shared>, Path(id): Path<i64>) -> StatusCode {
        let mut db = db.lock().unwrap();
        db.requests += 1;
        db.students.retain(|s| s.id != id);
        StatusCode::OK
    }

    /// App wired to an in-process backend; groups always fail
    fn app_with_backend() -> (App, Shared) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let settings = Settings {
            api_base_url: format!("http://{addr}"),
            ..Default::default()
        };
        let data_dir = std::env::temp_dir();
        let app = App::with_settings(settings, data_dir).unwrap();

        let db: Shared = Arc::new(Mutex::new(Backend::default()));
        let router = Router::new()
            .route("/users", get(list).post(create))
            .route("/users/{id}", delete(remove))
            .route("/groups", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/levels", get(|| async { Json(json!([{ "value": 1 }, { "value": 2 }])) }))
            .with_state(db.clone());
        app.runtime.spawn(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });

        (app, db)
    }

    fn pump_until(app: &mut App, ctx: &egui::Context, done: impl Fn(&Roster) -> bool) {
        for _ in 0..300 {
            app.poll_responses(ctx);
            if done(&app.roster) {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("condition not reached");
    }

    #[test]
    fn mount_loads_lists_and_survives_failed_groups() {
        let (mut app, db) = app_with_backend();
        db.lock().unwrap().students.push(Student {
            id: 1,
            name: "Anvar".into(),
            lastname: "Karimov".into(),
            group: "A1".into(),
            level: 1,
        });
        let ctx = egui::Context::default();

        app.mount(&ctx);
        app.mount(&ctx);
        pump_until(&mut app, &ctx, |r| {
            r.students.len() == 1 && r.levels.len() == 2 && !r.toasts.is_empty()
        });

        assert!(app.roster.groups.is_empty());
        assert_eq!(app.roster.toasts.last().unwrap().message, "Could not load groups");
        assert_eq!(db.lock().unwrap().requests, 1);
    }

    #[test]
    fn create_then_delete_round_trip_through_refetch() {
        let (mut app, db) = app_with_backend();
        let ctx = egui::Context::default();

        app.roster.open_editor(None);
        app.roster.draft = StudentDraft {
            name: "Bekzod".into(),
            lastname: "Aliyev".into(),
            group: "A1".into(),
            level: 2,
        };
        let request = app.roster.submit().unwrap();
        app.dispatch(&ctx, request);
        pump_until(&mut app, &ctx, |r| r.students.len() == 1);

        assert!(!app.roster.editor_open());
        assert_eq!(app.roster.students[0].id, 1);

        app.roster.request_delete(1);
        let request = app.roster.confirm_delete().unwrap();
        app.dispatch(&ctx, request);
        pump_until(&mut app, &ctx, |r| r.students.is_empty());

        assert!(db.lock().unwrap().students.is_empty());
    }

    #[test]
    fn invalid_form_never_reaches_backend() {
        let (mut app, db) = app_with_backend();
        let ctx = egui::Context::default();

        app.roster.open_editor(None);
        app.roster.draft.name = "Bekzod".into();
        let request = app.roster.submit();
        app.dispatch_all(&ctx, request);

        std::thread::sleep(Duration::from_millis(50));
        app.poll_responses(&ctx);
        assert_eq!(db.lock().unwrap().requests, 0);
        assert!(app.roster.editor_open());
    }
}
