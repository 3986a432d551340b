//! vid-to-gif - convert video files to GIFs with ffmpeg
//!
//! This library crate exposes the command-line flow for integration testing.

pub mod app;
pub mod config;
