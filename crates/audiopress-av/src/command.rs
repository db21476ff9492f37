//! Builder for running external tool commands with captured output.

use crate::{Error, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Output captured from a tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// A builder for constructing and running external tool invocations.
///
/// Each run is a blocking call: the process is spawned with stdout and
/// stderr captured and waited on to completion before the caller continues.
///
/// # Example
///
/// ```no_run
/// use audiopress_av::ToolCommand;
///
/// let output = ToolCommand::new("ffprobe")
///     .arg("-v").arg("error")
///     .arg("-show_entries").arg("format=bit_rate")
///     .arg("/path/to/song.mp3")
///     .run()?;
/// println!("{}", output.stdout);
/// # Ok::<(), audiopress_av::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl Into<String>) -> &mut Self {
        self.args.push(s.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Run the command to completion, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// - Returns [`Error::ToolNotFound`] if the program cannot be spawned
    ///   because it does not exist.
    /// - Returns [`Error::ToolFailed`] if the process exits with a non-zero
    ///   status (message includes stderr).
    /// - Returns [`Error::Io`] for any other spawn failure.
    pub fn run(&self) -> Result<ToolOutput> {
        let tool = self.tool_name();
        tracing::debug!(%tool, args = ?self.args, "running external tool");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(tool.clone())
                } else {
                    Error::Io(e)
                }
            })?;

        let tool_output = ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !tool_output.status.success() {
            return Err(Error::tool_failed(
                tool,
                format!(
                    "exited with {}: {}",
                    tool_output.status,
                    tool_output.stderr.trim()
                ),
            ));
        }

        Ok(tool_output)
    }

    fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_echo() {
        let mut cmd = ToolCommand::new("echo");
        cmd.arg("hello");

        match cmd.run() {
            Ok(out) => {
                assert!(out.status.success());
                assert!(out.stdout.contains("hello"));
            }
            Err(_) => {
                // Minimal environments may lack echo; nothing to assert.
            }
        }
    }

    #[test]
    fn run_nonexistent_tool() {
        let result = ToolCommand::new("nonexistent_tool_xyz_12345").run();
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_tool_failed() {
        let mut cmd = ToolCommand::new("ls");
        cmd.arg("/definitely/not/a/real/path/xyz_12345");

        let err = cmd.run().unwrap_err();
        assert!(matches!(err, Error::ToolFailed { .. }));
        assert!(err.to_string().contains("ls"));
    }
}
