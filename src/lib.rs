//! mortui - a terminal browser for the Rick and Morty character API
//!
//! This library exposes modules for use in integration tests.

pub mod api;
pub mod app;
pub mod models;
pub mod state;
pub mod ui;
