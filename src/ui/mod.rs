//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Layout of the header, main view, log panel and footer
//! - Theme management
//! - View rendering (plant list, add plant form)

pub type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
