//! Shared test harness for integration tests.
//!
//! Provides [`StubEngine`], a pair of POSIX shell scripts standing in for
//! ffmpeg and ffprobe. The ffmpeg stub answers `-version`, records the
//! arguments of every other invocation to a log, prints [`ENGINE_CHATTER`] on
//! both of its output streams, and creates the file named by its last
//! argument, the way the real engine writes its output. The ffprobe stub
//! counts its invocations in a separate log.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vtg_av::ToolRegistry;

/// Separates arguments within one logged invocation.
const ARG_SEP: char = '\u{1f}';

/// Line the ffmpeg stub writes to stdout and stderr on every pass.
pub const ENGINE_CHATTER: &str = "stub engine progress";

/// How the stub engine should behave.
#[derive(Debug, Clone, Copy, Default)]
pub struct Behavior {
    /// `ffmpeg -version` exits non-zero.
    pub broken_version: bool,
    /// The palette pass exits non-zero.
    pub fail_palette: bool,
    /// The apply pass exits non-zero.
    pub fail_apply: bool,
    /// ffprobe exits non-zero.
    pub fail_ffprobe: bool,
}

/// Stub ffmpeg/ffprobe pair living in a temporary directory.
pub struct StubEngine {
    dir: TempDir,
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
    log: PathBuf,
    ffprobe_log: PathBuf,
}

impl StubEngine {
    /// An engine where every invocation succeeds.
    pub fn new() -> Self {
        Self::with_behavior(Behavior::default())
    }

    pub fn with_behavior(behavior: Behavior) -> Self {
        let dir = tempfile::tempdir().expect("failed to create stub dir");
        let log = dir.path().join("invocations.log");
        let ffprobe_log = dir.path().join("ffprobe.log");
        let ffmpeg = dir.path().join("ffmpeg");
        let ffprobe = dir.path().join("ffprobe");

        write_script(&ffmpeg, &ffmpeg_script(&log, behavior));
        write_script(&ffprobe, &ffprobe_script(&ffprobe_log, behavior));

        Self {
            dir,
            ffmpeg,
            ffprobe,
            log,
            ffprobe_log,
        }
    }

    /// A registry pointing at the stubs.
    pub fn tools(&self) -> ToolRegistry {
        ToolRegistry::with_paths(&self.ffmpeg, &self.ffprobe)
    }

    /// Scratch directory for inputs and outputs.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Create a placeholder input video and return its path.
    pub fn input(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, b"not really a video").expect("failed to write input");
        path
    }

    /// Write a config file pointing the CLI at the stubs.
    pub fn config(&self, extra: &str) -> PathBuf {
        let path = self.dir.path().join("vid-to-gif.toml");
        let contents = format!(
            "[tools]\nffmpeg_path = {:?}\nffprobe_path = {:?}\n{extra}",
            self.ffmpeg.display().to_string(),
            self.ffprobe.display().to_string(),
        );
        fs::write(&path, contents).expect("failed to write config");
        path
    }

    /// Arguments of every recorded ffmpeg invocation, oldest first.
    ///
    /// `-version` checks are not recorded.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        let Ok(contents) = fs::read_to_string(&self.log) else {
            return Vec::new();
        };

        contents
            .lines()
            .map(|line| {
                line.split(ARG_SEP)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    /// Number of times ffprobe was run.
    pub fn ffprobe_runs(&self) -> usize {
        fs::read_to_string(&self.ffprobe_log)
            .map(|contents| contents.lines().count())
            .unwrap_or(0)
    }
}

fn ffmpeg_script(log: &Path, behavior: Behavior) -> String {
    let version_status = if behavior.broken_version { 1 } else { 0 };
    let palette_status = if behavior.fail_palette { 1 } else { 0 };
    let apply_status = if behavior.fail_apply { 1 } else { 0 };

    format!(
        r#"#!/bin/sh
if [ "$1" = "-version" ]; then
  echo "ffmpeg version stub"
  exit {version_status}
fi
printf '%s\037' "$@" >> '{log}'
printf '\n' >> '{log}'
case "$*" in
  *paletteuse*) status={apply_status} ;;
  *) status={palette_status} ;;
esac
if [ "$status" -ne 0 ]; then
  echo "stub engine failure" >&2
  exit "$status"
fi
echo "{ENGINE_CHATTER}"
echo "{ENGINE_CHATTER}" >&2
for last; do :; done
: > "$last"
exit 0
"#,
        log = log.display(),
    )
}

fn ffprobe_script(log: &Path, behavior: Behavior) -> String {
    let body = if behavior.fail_ffprobe {
        "echo 'ffprobe failed' >&2\nexit 1"
    } else {
        "echo '120.5'"
    };
    format!("#!/bin/sh\necho run >> '{}'\n{body}\n", log.display())
}

fn write_script(path: &Path, contents: &str) {
    fs::write(path, contents).expect("failed to write stub script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("failed to make stub executable");
}
