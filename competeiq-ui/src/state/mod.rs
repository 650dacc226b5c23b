//! State Management
//!
//! Global application state around the browser-backed record store.

pub mod global;

pub use global::{format_date, provide_global_state, GlobalState};
