//! Synchronous command execution against the local host.

use std::process::{Command, Stdio};

use tracing::{error, info};

use crate::command::{ExecutionResult, RunOptions};
use crate::error::{Error, Result};
use crate::shellwords;

/// Runs commands on the local host on behalf of the remote workflow engine.
///
/// Each call spawns one child process, blocks until it exits, and performs
/// no retries; retry is strictly the caller's concern, informed by the
/// error kind raised. The runner holds no mutable state, so one instance
/// may be shared freely across threads.
pub struct CommandRunner {
    /// Name attached to every log line this runner emits
    scope: String,
}

impl CommandRunner {
    /// Create a runner whose log lines carry the given scope name
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    /// Get the scope name used for logging
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Run `command` with elevated privileges.
    ///
    /// Sugar for [`CommandRunner::run`] with `sudo ` prefixed to the
    /// command string; option semantics are identical. Assumes sudo is
    /// configured not to prompt for a password, since no stdin is wired
    /// to the child.
    pub fn sudo(&self, command: &str, options: RunOptions) -> Result<ExecutionResult> {
        self.run(&sudo_command(command), options)
    }

    /// Run a command synchronously and capture its outcome.
    ///
    /// The command string is split into an argument vector with shell
    /// quoting rules and the process is launched directly from it; no
    /// shell is interposed. Caller-supplied environment variables are
    /// overlaid on the ambient environment, overrides winning on
    /// collision.
    ///
    /// A process that cannot start at all fails with
    /// [`Error::LaunchFailure`]. A process that starts and exits non-zero
    /// fails with [`Error::CommandFailed`] unless the caller disabled
    /// abort-on-failure, in which case the result carries the non-zero
    /// code and the caller must inspect it.
    pub fn run(&self, command: &str, options: RunOptions) -> Result<ExecutionResult> {
        let words = shellwords::split(command)
            .map_err(|err| Error::launch_failure(command, err.to_string()))?;
        let (program, args) = words
            .split_first()
            .ok_or_else(|| Error::launch_failure(command, "empty command"))?;

        let mut child = Command::new(program);
        child.args(args);
        for (key, value) in &options.env {
            child.env(key, value);
        }
        if let Some(dir) = &options.cwd {
            child.current_dir(dir);
        }
        child.stdout(stdio_for(options.capture_stdout));
        child.stderr(stdio_for(options.capture_stderr));

        if !options.quiet {
            info!(scope = %self.scope, command = %command, "running command");
        }

        let spawned = child
            .spawn()
            .map_err(|err| Error::launch_failure(command, err.to_string()))?;
        let collected = spawned
            .wait_with_output()
            .map_err(|err| Error::launch_failure(command, err.to_string()))?;

        let code = collected.status.code().unwrap_or(-1);
        let stdout = options
            .capture_stdout
            .then(|| String::from_utf8_lossy(&collected.stdout).trim_end().to_string());
        let stderr = options
            .capture_stderr
            .then(|| String::from_utf8_lossy(&collected.stderr).trim_end().to_string());

        if code != 0 && options.abort_on_failure {
            let err = Error::CommandFailed {
                command: command.to_string(),
                code,
                error: stderr,
                output: stdout,
            };
            error!(scope = %self.scope, %err, "command execution failed");
            return Err(err);
        }

        Ok(ExecutionResult {
            command: command.to_string(),
            code,
            output: stdout,
        })
    }
}

fn sudo_command(command: &str) -> String {
    format!("sudo {command}")
}

fn stdio_for(capture: bool) -> Stdio {
    if capture {
        Stdio::piped()
    } else {
        Stdio::inherit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sudo_prefixes_the_command_string() {
        assert_eq!(sudo_command("apt-get update"), "sudo apt-get update");
    }
}
