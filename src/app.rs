//! Command-line flow: upfront environment checks, then conversion.

use vtg_av::{probe_duration, ConversionSummary, ToolRegistry};
use vtg_core::{ConversionRequest, Error, Result};

/// Check everything the conversion needs from the environment.
///
/// In order: the engine runs, the input exists, and the output directory
/// exists. An output path without a directory component refers to the
/// current directory.
pub fn preflight(tools: &ToolRegistry, request: &ConversionRequest) -> Result<()> {
    if !tools.check_engine_available() {
        return Err(Error::engine_unavailable(vtg_av::tools::FFMPEG));
    }

    if !request.input().exists() {
        return Err(Error::input_not_found(request.input()));
    }

    if let Some(dir) = request.output().parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            return Err(Error::output_dir_missing(dir));
        }
    }

    Ok(())
}

/// Run the conversion, then log the source duration in verbose mode.
///
/// ffprobe only runs once the conversion has succeeded, so rejected
/// requests never reach an external tool.
pub fn convert(tools: &ToolRegistry, request: &ConversionRequest) -> Result<ConversionSummary> {
    let summary = vtg_av::convert(tools, request)?;

    if request.verbose {
        match probe_duration(tools, request.input()) {
            Some(secs) => tracing::info!(
                "source duration: {}",
                vtg_core::format_duration(secs)
            ),
            None => tracing::info!("source duration: unknown"),
        }
    }

    Ok(summary)
}
