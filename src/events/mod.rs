//! Event handling module.
//!
//! Terminal input is polled on a background thread and applied to the
//! session state on the main thread.

pub mod terminal;
