//! Application state management module.
//!
//! This module contains the session state for the application, including:
//! - Main `State` struct that owns the plant registry and the view stack
//! - Navigation types (View, FormField)
//! - The add plant draft and its validation gate
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{parse_frequency, validate, PlantDraft, INVALID_FORM_MESSAGE};
pub use navigation::{FormField, View};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
