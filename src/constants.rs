//! Application constants and configuration

pub const APP_NAME: &str = "Student Roster";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend used when settings.json does not name one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Toast timings in seconds
pub const TOAST_VISIBLE_SECS: f32 = 3.0;
pub const TOAST_FADE_SECS: f32 = 0.5;
