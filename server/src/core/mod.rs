//! Core Module - Application infrastructure
//!
//! Configuration, HTTP error mapping, request extractors and shared state.

pub mod config;
pub mod error;
pub mod extract;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use extract::{IdPath, JsonBody};
pub use state::AppState;
