//! UI module - widgets shared across views

pub mod components;
