//! A terminal user interface for keeping track of garden plants.
//!
//! The session holds an in-memory registry of plants and moves between a
//! plant list and an add plant form. Nothing is persisted except the
//! configuration file.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod garden;
pub mod logger;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
