//! Builder for executing external tool commands.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use vtg_core::{Error, Result};

/// Output captured from a tool execution.
///
/// Both streams are empty when the command ran in passthrough mode.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// A builder for constructing and executing external tool invocations.
///
/// Arguments are kept as an ordered list of separate tokens and handed to the
/// process directly, so no shell ever re-parses them.
///
/// # Example
///
/// ```no_run
/// use vtg_av::ToolCommand;
/// use std::path::PathBuf;
///
/// let output = ToolCommand::new(PathBuf::from("ffprobe"))
///     .args(["-v", "error"])
///     .args(["-show_entries", "format=duration"])
///     .arg("/path/to/video.mp4")
///     .execute()?;
/// println!("{}", output.stdout);
/// # Ok::<(), vtg_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
    passthrough: bool,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            passthrough: false,
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    /// Append multiple arguments.
    pub fn args<I, S>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(iter.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Let the tool write straight to our stdout/stderr instead of capturing.
    pub fn passthrough(&mut self, enabled: bool) -> &mut Self {
        self.passthrough = enabled;
        self
    }

    /// The program that will be run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The argument tokens, in order.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Execute the command and wait for it to exit.
    ///
    /// # Errors
    ///
    /// - Returns [`Error::EngineUnavailable`] if the program does not exist.
    /// - Returns [`Error::Tool`] if spawning fails for another reason.
    /// - Returns [`Error::Tool`] if the process exits with a non-zero status.
    ///   Unless running in passthrough mode, the message includes the
    ///   captured stdout and stderr.
    pub fn execute(&self) -> Result<ToolOutput> {
        let program_name = self.program_name();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).stdin(Stdio::null());

        if self.passthrough {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        }

        tracing::debug!("running {program_name}");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::engine_unavailable(&program_name)
            } else {
                Error::tool(&program_name, format!("failed to spawn: {e}"))
            }
        })?;

        let tool_output = ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            let captured = format!("{}{}", tool_output.stdout, tool_output.stderr);
            let captured = captured.trim();
            let message = if captured.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {captured}", output.status)
            };
            return Err(Error::tool(program_name, message));
        }

        Ok(tool_output)
    }
}

/// Renders the command as a copy-pasteable shell line.
impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(self.program.as_os_str()))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(token: &OsStr) -> String {
    let s = token.to_string_lossy();
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if safe {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
