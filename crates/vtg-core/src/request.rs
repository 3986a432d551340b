//! The conversion request model and its validation rules.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::timecode::format_duration;
use crate::{Error, Result};

/// Default output frame rate.
pub const DEFAULT_FPS: i64 = 15;
/// Default output height in pixels.
pub const DEFAULT_SCALE: i64 = 480;

/// Accepted frame rates, inclusive.
pub const FPS_RANGE: (i64, i64) = (1, 60);
/// Accepted output heights, inclusive.
pub const SCALE_RANGE: (i64, i64) = (16, 4096);

/// Optional sub-range of the source to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrimWindow {
    /// Seek offset in seconds; `None` starts from the beginning.
    pub start: Option<f64>,
    /// Length in seconds; `None` runs to the end.
    pub duration: Option<f64>,
}

impl TrimWindow {
    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.duration.is_none()
    }

    /// Engine arguments for this window as separate flag/value tokens.
    ///
    /// Seek comes before the limit: `-ss <start> -t <duration>`.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(start) = self.start {
            args.push("-ss".into());
            args.push(start.to_string().into());
        }
        if let Some(duration) = self.duration {
            args.push("-t".into());
            args.push(duration.to_string().into());
        }
        args
    }
}

impl fmt::Display for TrimWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.unwrap_or(0.0);
        match self.duration {
            Some(duration) => write!(
                f,
                "[{}-{}]",
                format_duration(start),
                format_duration(start + duration)
            ),
            None => write!(f, "[{}-end]", format_duration(start)),
        }
    }
}

/// Parameters for converting one video into a GIF.
///
/// # Example
///
/// ```
/// use vtg_core::ConversionRequest;
///
/// let request = ConversionRequest::new("clip.mp4", "clip.gif")
///     .fps(20)
///     .scale(320)
///     .start_time(1.5);
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Source video.
    pub input_path: PathBuf,
    /// Destination GIF.
    pub output_path: PathBuf,
    /// Output frame rate.
    pub fps: i64,
    /// Output height; width follows the aspect ratio.
    pub scale: i64,
    /// Optional trim window.
    pub window: TrimWindow,
    /// Echo engine commands and let their output through.
    pub verbose: bool,
}

impl ConversionRequest {
    /// Create a request with default frame rate and scale and no trimming.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            fps: DEFAULT_FPS,
            scale: DEFAULT_SCALE,
            window: TrimWindow::default(),
            verbose: false,
        }
    }

    /// Set the output frame rate.
    pub fn fps(mut self, fps: i64) -> Self {
        self.fps = fps;
        self
    }

    /// Set the output height.
    pub fn scale(mut self, scale: i64) -> Self {
        self.scale = scale;
        self
    }

    /// Start converting at `seconds` into the source.
    pub fn start_time(mut self, seconds: f64) -> Self {
        self.window.start = Some(seconds);
        self
    }

    /// Convert only `seconds` worth of the source.
    pub fn duration(mut self, seconds: f64) -> Self {
        self.window.duration = Some(seconds);
        self
    }

    /// Toggle verbose engine output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The source video path.
    pub fn input(&self) -> &Path {
        &self.input_path
    }

    /// The destination path.
    pub fn output(&self) -> &Path {
        &self.output_path
    }

    /// Check the numeric parameters.
    ///
    /// Checks run in a fixed order (fps, scale, start time, duration) and the
    /// first violation is returned.
    pub fn validate(&self) -> Result<()> {
        if !(FPS_RANGE.0..=FPS_RANGE.1).contains(&self.fps) {
            return Err(Error::invalid(format!(
                "FPS must be between {} and {}",
                FPS_RANGE.0, FPS_RANGE.1
            )));
        }

        if !(SCALE_RANGE.0..=SCALE_RANGE.1).contains(&self.scale) {
            return Err(Error::invalid(format!(
                "Scale must be between {} and {}",
                SCALE_RANGE.0, SCALE_RANGE.1
            )));
        }

        if let Some(start) = self.window.start {
            if !start.is_finite() || start < 0.0 {
                return Err(Error::invalid("Start time must be non-negative"));
            }
        }

        if let Some(duration) = self.window.duration {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(Error::invalid("Duration must be positive"));
            }
        }

        Ok(())
    }
}
