//! API Layer
//!
//! Typed access to the activities backend.

pub mod client;
pub mod error;
pub mod routes;

pub use client::*;
pub use error::{ClientError, DEFAULT_ERROR_DETAIL};
