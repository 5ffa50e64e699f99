//! Configuration module for uncleared-cli
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Resolution of the access token and budget id

pub mod paths;
pub mod settings;

pub use paths::ReviewPaths;
pub use settings::{ConfigOverrides, ResolvedConfig, Settings};
