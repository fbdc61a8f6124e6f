//! Per-invocation options and the execution result type.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Options for a single command invocation.
///
/// Created per call and consumed by [`CommandRunner::run`]. The defaults
/// capture both output streams, abort on a non-zero exit, and stay quiet
/// about the invocation itself.
///
/// [`CommandRunner::run`]: crate::CommandRunner::run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Working directory for the child, if different from the parent's
    pub(crate) cwd: Option<PathBuf>,
    /// Extra environment variables overlaid on the ambient environment;
    /// overrides win on key collision
    pub(crate) env: HashMap<String, String>,
    /// Capture stdout into the result instead of inheriting the parent's
    pub(crate) capture_stdout: bool,
    /// Capture stderr for error reporting instead of inheriting
    pub(crate) capture_stderr: bool,
    /// Fail with `CommandFailed` on a non-zero exit instead of returning
    /// the result for the caller to inspect
    pub(crate) abort_on_failure: bool,
    /// Skip the info log line describing the invocation
    pub(crate) quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            env: HashMap::new(),
            capture_stdout: true,
            capture_stderr: true,
            abort_on_failure: true,
            quiet: true,
        }
    }
}

impl RunOptions {
    /// Create the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory for the child process
    pub fn current_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Overlay an environment variable onto the ambient environment
    pub fn env<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Overlay multiple environment variables onto the ambient environment
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in vars {
            self.env.insert(key.into(), value.into());
        }
        self
    }

    /// Control whether stdout is captured (default: captured)
    pub fn capture_stdout(mut self, capture: bool) -> Self {
        self.capture_stdout = capture;
        self
    }

    /// Control whether stderr is captured (default: captured)
    pub fn capture_stderr(mut self, capture: bool) -> Self {
        self.capture_stderr = capture;
        self
    }

    /// Control whether a non-zero exit aborts the call (default: it does)
    pub fn abort_on_failure(mut self, abort: bool) -> Self {
        self.abort_on_failure = abort;
        self
    }

    /// Control whether the invocation itself is logged at info level
    /// (default: it is not)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Everything worth keeping from one finished command invocation.
///
/// Returned on success, and on a non-zero exit when the caller disabled
/// abort-on-failure; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The literal command string that was executed
    pub command: String,
    /// The process exit code (-1 when the child died to a signal)
    pub code: i32,
    /// Captured stdout with trailing whitespace trimmed; `None` when
    /// stdout capture was disabled
    pub output: Option<String>,
}

impl ExecutionResult {
    /// Returns true if the process exited with code 0
    pub fn success(&self) -> bool {
        self.code == 0
    }
}
