//! # Core Runtime Module
//!
//! Runtime infrastructure shared by the audio node client:
//! - Logging and tracing infrastructure
//! - Configuration management (endpoint identity inputs, transport injection)
//!
//! ## Overview
//!
//! Nothing here talks to the node. This crate decides how the client is wired
//! together and how it reports what it does.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
