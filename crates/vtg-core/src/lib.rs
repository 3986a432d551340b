//! # vtg-core
//!
//! Shared types for vid-to-gif: the unified [`Error`], configuration loaded
//! from TOML, the [`ConversionRequest`] model and its validation rules, and
//! timecode formatting.

pub mod config;
pub mod error;
pub mod request;
pub mod timecode;

pub use config::{Config, DefaultsConfig, ToolsConfig};
pub use error::{Error, Result};
pub use request::{ConversionRequest, TrimWindow};
pub use timecode::format_duration;
