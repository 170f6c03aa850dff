//! TUI module: Terminal User Interface using Ratatui.
//!
//! Four pages behind an explicit page state machine:
//! - Home with the about text and a start action
//! - EDA over the survey dataset
//! - Survey form and prediction
//! - Quick tips

mod app;
mod styles;
mod ui;

pub use app::{navigate, nav_action, App, NavAction, Page};
pub use styles::WellbeingTheme;
