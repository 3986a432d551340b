//! Two-pass video to GIF conversion with a generated palette.
//!
//! The first pass samples the (optionally trimmed) source and writes a
//! 256-color palette image. The second pass reads the source again together
//! with that palette and maps every frame onto it.

use std::fmt;
use std::path::{Path, PathBuf};

use vtg_core::{ConversionRequest, Error, Result, TrimWindow};

use crate::command::ToolCommand;
use crate::tools::ToolRegistry;
use crate::workspace::Workspace;

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Source video that was converted.
    pub input: PathBuf,
    /// GIF that was written.
    pub output: PathBuf,
    /// Trim window applied to the source, if any.
    pub window: TrimWindow,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully converted {}", self.input.display())?;
        if !self.window.is_unbounded() {
            write!(f, " {}", self.window)?;
        }
        write!(f, " to {}", self.output.display())
    }
}

/// Resample and scale chain shared by both passes.
///
/// A width of `-1` lets the engine keep the aspect ratio.
fn scale_filter(fps: i64, scale: i64) -> String {
    format!("fps={fps},scale=-1:{scale}:flags=lanczos")
}

/// Filter graph for the palette pass.
pub fn palette_filter(fps: i64, scale: i64) -> String {
    format!("{},palettegen", scale_filter(fps, scale))
}

/// Filter graph for the apply pass: the scaled video is labelled `x` and
/// mapped onto the palette, which is the second input.
pub fn apply_filter(fps: i64, scale: i64) -> String {
    format!("{}[x];[x][1:v]paletteuse", scale_filter(fps, scale))
}

/// Build the palette pass: `ffmpeg [-ss S] [-t D] -i INPUT -vf FILTER -y PALETTE`.
pub fn palette_command(
    tools: &ToolRegistry,
    request: &ConversionRequest,
    palette: &Path,
) -> ToolCommand {
    let mut cmd = ToolCommand::new(tools.ffmpeg());
    cmd.args(request.window.to_args())
        .arg("-i")
        .arg(request.input())
        .arg("-vf")
        .arg(palette_filter(request.fps, request.scale))
        .arg("-y")
        .arg(palette);
    cmd
}

/// Build the apply pass:
/// `ffmpeg [-ss S] [-t D] -i INPUT -i PALETTE -lavfi FILTER -y OUTPUT`.
///
/// The trim options are repeated because the engine keeps no state between
/// the two runs.
pub fn apply_command(
    tools: &ToolRegistry,
    request: &ConversionRequest,
    palette: &Path,
) -> ToolCommand {
    let mut cmd = ToolCommand::new(tools.ffmpeg());
    cmd.args(request.window.to_args())
        .arg("-i")
        .arg(request.input())
        .arg("-i")
        .arg(palette)
        .arg("-lavfi")
        .arg(apply_filter(request.fps, request.scale))
        .arg("-y")
        .arg(request.output());
    cmd
}

/// Convert `request.input_path` into a GIF at `request.output_path`.
///
/// The input must be an existing file and the parameters must pass
/// [`ConversionRequest::validate`]; both are checked before anything is run
/// or created. The palette file lives only for the duration of this call.
///
/// # Errors
///
/// - [`Error::InputNotFound`] if the input is not a file.
/// - [`Error::InvalidParameter`] for the first out-of-range parameter.
/// - [`Error::Tool`] if either ffmpeg pass fails.
pub fn convert(tools: &ToolRegistry, request: &ConversionRequest) -> Result<ConversionSummary> {
    if !request.input().is_file() {
        return Err(Error::input_not_found(request.input()));
    }
    request.validate()?;

    let workspace = Workspace::new()?;

    tracing::info!("Generating color palette...");
    run(
        &palette_command(tools, request, workspace.palette()),
        request.verbose,
    )?;

    tracing::info!("Converting video to GIF...");
    run(
        &apply_command(tools, request, workspace.palette()),
        request.verbose,
    )?;

    workspace.cleanup();

    Ok(ConversionSummary {
        input: request.input_path.clone(),
        output: request.output_path.clone(),
        window: request.window,
    })
}

fn run(cmd: &ToolCommand, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("{cmd}");
    }

    let mut cmd = cmd.clone();
    cmd.passthrough(verbose).execute()?;
    Ok(())
}
