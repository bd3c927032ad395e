//! Shared frontend utilities for API access, configuration, errors, logging,
//! browser dialogs and build metadata.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod logging;
pub mod prompts;

pub use errors::AppError;
pub use prompts::{BrowserPrompts, Prompts};
