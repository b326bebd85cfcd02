//! State Management
//!
//! Application state, API view models, and section navigation.

pub mod global;
pub mod models;
pub mod navigation;

pub use global::{provide_app_state, use_app_state, LoadState, Lookup, Status};
pub use navigation::Section;
