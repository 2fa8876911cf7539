//! # HacknHost Core
//!
//! Shared configuration and error types used by every HacknHost crate.

pub mod config;
pub mod error;

pub use config::HacknHostConfig;
pub use error::{HacknHostError, Result};
