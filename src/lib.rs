//! sorenson-client - Client library for the Sorenson Squeeze transcoding server
//!
//! Resolves (quality, aspect ratio) pairs to server-side preset identifiers
//! and drives the remote job lifecycle: start, status, stop, restart.
//! The server is the sole owner of job state; this crate never transcodes
//! anything itself.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod extension;
pub mod service;

pub use catalog::{AspectRatio, PresetCatalog};
pub use client::{JobState, JobStatus, SorensonClient};
pub use config::Config;
pub use error::{Error, Result, SorensonError};
pub use service::EncodingService;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
