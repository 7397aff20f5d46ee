//! State Management
//!
//! Global application state shared by every page.

pub mod global;

pub use global::{provide_global_state, GlobalState};
