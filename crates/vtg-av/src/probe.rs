//! Container duration probing via ffprobe.

use std::path::Path;

use crate::command::ToolCommand;
use crate::tools::ToolRegistry;

/// Ask ffprobe for the container duration of `path`, in seconds.
///
/// The result is advisory: `None` is returned when ffprobe cannot be run,
/// exits non-zero, or prints something that is not a number.
pub fn probe_duration(tools: &ToolRegistry, path: &Path) -> Option<f64> {
    let mut cmd = ToolCommand::new(tools.ffprobe());
    cmd.args(["-v", "error"])
        .args(["-show_entries", "format=duration"])
        .args(["-of", "default=noprint_wrappers=1:nokey=1"])
        .arg(path);

    let output = match cmd.execute() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("duration probe failed for {}: {e}", path.display());
            return None;
        }
    };

    parse_duration(&output.stdout)
}

fn parse_duration(stdout: &str) -> Option<f64> {
    stdout
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}
