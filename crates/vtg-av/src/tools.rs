//! External tool detection.
//!
//! The [`ToolRegistry`] resolves where ffmpeg and ffprobe live, either from
//! configured overrides or from `PATH`, and answers whether the engine is
//! usable.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use vtg_core::ToolsConfig;

/// Name of the transcoding engine.
pub const FFMPEG: &str = "ffmpeg";
/// Name of the probing tool.
pub const FFPROBE: &str = "ffprobe";

/// Registry holding resolved tool paths.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
}

impl ToolRegistry {
    /// Discover tools by searching `PATH` (or using overrides from config).
    ///
    /// A configured path is used when it exists. Otherwise [`which::which`]
    /// locates the tool in `PATH`. A tool that cannot be found keeps its bare
    /// name, so running it later reports the absence.
    pub fn discover(config: &ToolsConfig) -> Self {
        Self {
            ffmpeg: resolve(FFMPEG, config.ffmpeg_path.as_deref()),
            ffprobe: resolve(FFPROBE, config.ffprobe_path.as_deref()),
        }
    }

    /// Use exactly these executables, without any lookup.
    pub fn with_paths(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }

    /// Path used to run ffmpeg.
    pub fn ffmpeg(&self) -> &Path {
        &self.ffmpeg
    }

    /// Path used to run ffprobe.
    pub fn ffprobe(&self) -> &Path {
        &self.ffprobe
    }

    /// Whether ffmpeg starts and answers `-version` with a zero exit status.
    ///
    /// Never fails: a missing executable or a non-zero exit both yield `false`.
    pub fn check_engine_available(&self) -> bool {
        let status = Command::new(&self.ffmpeg)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => true,
            Ok(status) => {
                tracing::debug!("{} -version exited with {status}", self.ffmpeg.display());
                false
            }
            Err(e) => {
                tracing::debug!("failed to run {}: {e}", self.ffmpeg.display());
                false
            }
        }
    }
}

fn resolve(name: &str, custom: Option<&Path>) -> PathBuf {
    if let Some(path) = custom {
        if path.exists() {
            return path.to_path_buf();
        }
        tracing::warn!(
            "configured {name} path {} does not exist; searching PATH",
            path.display()
        );
    }

    which::which(name).unwrap_or_else(|_| PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_engine_is_unavailable() {
        let registry = ToolRegistry::with_paths("nonexistent_tool_xyz_12345", "ffprobe");
        assert!(!registry.check_engine_available());
    }

    #[test]
    fn discover_with_default_config() {
        // We cannot guarantee ffmpeg is installed in CI, but discovery and the
        // availability check must not panic.
        let registry = ToolRegistry::discover(&ToolsConfig::default());
        let _ = registry.check_engine_available();
        assert!(registry.ffmpeg().ends_with(FFMPEG) || registry.ffmpeg().exists());
    }

    #[test]
    fn configured_path_wins_when_it_exists() {
        let fake = tempfile::NamedTempFile::new().unwrap();
        let config = ToolsConfig {
            ffmpeg_path: Some(fake.path().to_path_buf()),
            ffprobe_path: None,
        };
        let registry = ToolRegistry::discover(&config);
        assert_eq!(registry.ffmpeg(), fake.path());
    }

    #[test]
    fn missing_configured_path_falls_back() {
        let config = ToolsConfig {
            ffmpeg_path: Some(PathBuf::from("/definitely/not/here/ffmpeg")),
            ffprobe_path: None,
        };
        let registry = ToolRegistry::discover(&config);
        assert_ne!(registry.ffmpeg(), Path::new("/definitely/not/here/ffmpeg"));
    }
}
