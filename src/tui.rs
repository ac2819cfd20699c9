//! Terminal front end: app state, key handling and drawing.

pub mod app;
pub mod controller;
mod ui;
