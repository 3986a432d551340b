use clap::Parser;
use std::path::PathBuf;
use vtg_core::{ConversionRequest, DefaultsConfig};

#[derive(Parser)]
#[command(name = "vid-to-gif")]
#[command(author, version, about = "Convert any video file to a high-quality GIF")]
#[command(after_help = "Examples:
  vid-to-gif input.mp4 output.gif
  vid-to-gif input.mov output.gif --fps 20 --scale 600
  vid-to-gif input.mkv clip.gif --start 12.5 --duration 4")]
pub struct Cli {
    /// Input video file path
    pub input: PathBuf,

    /// Output GIF file path
    pub output: PathBuf,

    /// Frames per second for the GIF [default: 15]
    #[arg(short, long, allow_negative_numbers = true)]
    pub fps: Option<i64>,

    /// Height to scale the GIF to; width keeps the aspect ratio [default: 480]
    #[arg(short, long, allow_negative_numbers = true)]
    pub scale: Option<i64>,

    /// Start time in seconds
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Duration in seconds
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub duration: Option<f64>,

    /// Show ffmpeg commands and output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the request, filling unset parameters from the config defaults.
    pub fn to_request(&self, defaults: &DefaultsConfig) -> ConversionRequest {
        let mut request = ConversionRequest::new(&self.input, &self.output)
            .fps(self.fps.unwrap_or(defaults.fps))
            .scale(self.scale.unwrap_or(defaults.scale))
            .verbose(self.verbose);

        if let Some(start) = self.start {
            request = request.start_time(start);
        }
        if let Some(duration) = self.duration {
            request = request.duration(duration);
        }

        request
    }
}
