//! # vtg-av
//!
//! External engine plumbing for vid-to-gif.
//!
//! This crate provides:
//!
//! - **Tool discovery** ([`ToolRegistry`]) -- locate ffmpeg and ffprobe and
//!   check that the engine runs.
//! - **Command execution** ([`ToolCommand`]) -- builder that keeps arguments
//!   as separate tokens and either captures or passes through tool output.
//! - **Workspace management** ([`Workspace`]) -- lifetime of the intermediate
//!   palette image.
//! - **Duration probing** ([`probe_duration`]) -- advisory container length.
//! - **Conversion** ([`convert`]) -- the two-pass palette GIF encode.
//!
//! ## Example
//!
//! ```no_run
//! use vtg_av::{convert, ToolRegistry};
//! use vtg_core::{ConversionRequest, ToolsConfig};
//!
//! let tools = ToolRegistry::discover(&ToolsConfig::default());
//! let request = ConversionRequest::new("clip.mp4", "clip.gif").fps(20);
//! let summary = convert(&tools, &request)?;
//! println!("{summary}");
//! # Ok::<(), vtg_core::Error>(())
//! ```

pub mod actions;
pub mod command;
pub mod probe;
pub mod tools;
pub mod workspace;

// ---- Re-exports for convenience ----

pub use actions::{apply_command, convert, palette_command, ConversionSummary};
pub use command::{ToolCommand, ToolOutput};
pub use probe::probe_duration;
pub use tools::ToolRegistry;
pub use workspace::Workspace;
