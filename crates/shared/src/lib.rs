//! Shared types, errors, and configuration for Centime.
//!
//! This crate provides the common vocabulary used across the workspace:
//! - Typed IDs for type-safe entity references
//! - Pagination types for list endpoints
//! - Application-wide error types with HTTP status mapping
//! - Configuration loading for the hosting layer

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
