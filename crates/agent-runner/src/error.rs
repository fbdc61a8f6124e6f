//! Error taxonomy for command execution and operation classification.
//!
//! Every kind renders a self-sufficient message: these errors are expected
//! to cross a process or RPC boundary as text, so all structured fields
//! appear in the Display output, not just an opaque code.

use thiserror::Error;

/// Result type alias for agent-runner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Marker rendered in place of empty or uncaptured process output.
const NO_OUTPUT: &str = "<none>";

/// Unified error type for command execution and operation-level faults
#[derive(Error, Debug)]
pub enum Error {
    /// A permanent fault; the remote engine must not retry the operation
    #[error("{message}")]
    NonRecoverable {
        /// Description of the permanent fault
        message: String,
    },

    /// A transient fault; the operation may succeed if retried
    #[error("{message}{}", retry_suffix(.retry_after))]
    Recoverable {
        /// Description of the transient fault
        message: String,
        /// Suggested delay in seconds before the engine re-attempts
        retry_after: Option<u64>,
    },

    /// A deliberate re-run requested by operation code, independent of
    /// whether a real fault occurred
    #[error("{message} [retry_after={retry_after}]")]
    OperationRetry {
        /// Reason the operation asked to be re-run
        message: String,
        /// Delay in seconds before the engine re-attempts
        retry_after: u64,
    },

    /// The process started and exited non-zero
    #[error(
        "command '{command}' exited with an error.\ncode: {code}\nerror: {}\noutput: {}",
        text_or_none(.error),
        text_or_none(.output)
    )]
    CommandFailed {
        /// The literal command string that was executed
        command: String,
        /// The process exit code
        code: i32,
        /// Captured stderr, if stderr capture was enabled
        error: Option<String>,
        /// Captured stdout, if stdout capture was enabled
        output: Option<String>,
    },

    /// The process could not be started at all (executable not found,
    /// missing working directory, malformed command string)
    #[error("failed launching command '{command}': {error}")]
    LaunchFailure {
        /// The literal command string that failed to launch
        command: String,
        /// The reason the launch failed
        error: String,
    },

    /// A bounded wait exceeded its deadline
    #[error("timed out: {message}")]
    Timeout {
        /// Description of the wait that timed out
        message: String,
    },

    /// An HTTP interaction failed permanently
    #[error("{code} ({url}): {message}")]
    Http {
        /// The url the request was made to
        url: String,
        /// The response status code
        code: u16,
        /// The underlying reason for the failure
        message: String,
    },

    /// A required environment variable is not set
    #[error("missing environment variable: {key}")]
    MissingEnv {
        /// The variable that was looked up
        key: &'static str,
    },

    /// An environment variable is set but its value cannot be used
    #[error("invalid value for environment variable {key}: {value}")]
    InvalidEnv {
        /// The variable that was looked up
        key: &'static str,
        /// The value that failed to parse
        value: String,
    },
}

/// Retry decision carried by an error kind.
///
/// The taxonomy never schedules retries itself; it only carries the
/// decision and the delay as data for the remote engine to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAdvice {
    /// The operation will never succeed; do not retry
    Never,
    /// The operation may succeed if retried, optionally after a delay
    /// in seconds
    Retry {
        /// Suggested delay in seconds, if the raiser supplied one
        after: Option<u64>,
    },
    /// The kind does not classify itself; the engine applies its
    /// default policy (see [`RetryAdvice::or_default_retry`])
    Unclassified,
}

impl RetryAdvice {
    /// Resolve [`RetryAdvice::Unclassified`] to the engine's default
    /// policy: anything not explicitly marked non-recoverable is assumed
    /// retryable, with no suggested delay.
    pub fn or_default_retry(self) -> Self {
        match self {
            Self::Unclassified => Self::Retry { after: None },
            other => other,
        }
    }
}

impl Error {
    /// Create a non-recoverable error
    pub fn non_recoverable(message: impl Into<String>) -> Self {
        Self::NonRecoverable {
            message: message.into(),
        }
    }

    /// Create a recoverable error with an optional retry delay in seconds
    pub fn recoverable(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::Recoverable {
            message: message.into(),
            retry_after,
        }
    }

    /// Create an explicit retry request with a delay in seconds
    pub fn operation_retry(message: impl Into<String>, retry_after: u64) -> Self {
        Self::OperationRetry {
            message: message.into(),
            retry_after,
        }
    }

    /// Create a launch failure for a command that could not start
    pub fn launch_failure(command: impl Into<String>, error: impl Into<String>) -> Self {
        Self::LaunchFailure {
            command: command.into(),
            error: error.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Report whether this failure warrants an automatic retry, and after
    /// how long.
    ///
    /// Only `Recoverable` and `OperationRetry` carry retry metadata.
    /// `CommandFailed`, `LaunchFailure`, and `Timeout` are raised by
    /// mechanism code, not operation logic, so they report
    /// [`RetryAdvice::Unclassified`] and must be wrapped into a
    /// recoverable or non-recoverable kind by calling code to get
    /// explicit retry semantics.
    pub fn retry_advice(&self) -> RetryAdvice {
        match self {
            Self::NonRecoverable { .. }
            | Self::Http { .. }
            | Self::MissingEnv { .. }
            | Self::InvalidEnv { .. } => RetryAdvice::Never,
            Self::Recoverable { retry_after, .. } => RetryAdvice::Retry {
                after: *retry_after,
            },
            Self::OperationRetry { retry_after, .. } => RetryAdvice::Retry {
                after: Some(*retry_after),
            },
            Self::CommandFailed { .. } | Self::LaunchFailure { .. } | Self::Timeout { .. } => {
                RetryAdvice::Unclassified
            }
        }
    }
}

fn retry_suffix(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(seconds) => format!(" [retry_after={seconds}]"),
        None => String::new(),
    }
}

fn text_or_none(text: &Option<String>) -> &str {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => NO_OUTPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_renders_delay() {
        let err = Error::recoverable("backend not ready", Some(30));
        let rendered = err.to_string();
        assert!(rendered.contains("backend not ready"));
        assert!(rendered.contains("[retry_after=30]"));
    }

    #[test]
    fn recoverable_without_delay_has_no_annotation() {
        let err = Error::recoverable("backend not ready", None);
        assert!(!err.to_string().contains("retry_after"));
    }

    #[test]
    fn operation_retry_renders_delay() {
        let err = Error::operation_retry("waiting for ip allocation", 15);
        assert!(err.to_string().contains("[retry_after=15]"));
    }

    #[test]
    fn command_failed_renders_all_fields() {
        let err = Error::CommandFailed {
            command: "echo x".to_string(),
            code: 1,
            error: Some("boom".to_string()),
            output: Some(String::new()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("echo x"));
        assert!(rendered.contains("code: 1"));
        assert!(rendered.contains("boom"));
        assert!(rendered.contains("output: <none>"));
    }

    #[test]
    fn command_failed_renders_uncaptured_streams_as_none() {
        let err = Error::CommandFailed {
            command: "false".to_string(),
            code: 1,
            error: None,
            output: None,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("error: <none>"));
        assert!(rendered.contains("output: <none>"));
    }

    #[test]
    fn launch_failure_renders_command_and_reason() {
        let err = Error::launch_failure("nosuchbin", "No such file or directory");
        let rendered = err.to_string();
        assert!(rendered.contains("nosuchbin"));
        assert!(rendered.contains("No such file or directory"));
    }

    #[test]
    fn http_renders_code_url_and_message() {
        let err = Error::Http {
            url: "http://manager:8080/blueprints".to_string(),
            code: 404,
            message: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "404 (http://manager:8080/blueprints): not found"
        );
        assert_eq!(err.retry_advice(), RetryAdvice::Never);
    }

    #[test]
    fn retry_advice_classification() {
        assert_eq!(
            Error::non_recoverable("bad input").retry_advice(),
            RetryAdvice::Never
        );
        assert_eq!(
            Error::recoverable("busy", Some(10)).retry_advice(),
            RetryAdvice::Retry { after: Some(10) }
        );
        assert_eq!(
            Error::recoverable("busy", None).retry_advice(),
            RetryAdvice::Retry { after: None }
        );
        assert_eq!(
            Error::operation_retry("re-check", 5).retry_advice(),
            RetryAdvice::Retry { after: Some(5) }
        );
        assert_eq!(
            Error::timeout("no response").retry_advice(),
            RetryAdvice::Unclassified
        );
        assert_eq!(
            Error::launch_failure("x", "y").retry_advice(),
            RetryAdvice::Unclassified
        );
    }

    #[test]
    fn unclassified_defaults_to_retry() {
        assert_eq!(
            RetryAdvice::Unclassified.or_default_retry(),
            RetryAdvice::Retry { after: None }
        );
        assert_eq!(RetryAdvice::Never.or_default_retry(), RetryAdvice::Never);
        assert_eq!(
            RetryAdvice::Retry { after: Some(3) }.or_default_retry(),
            RetryAdvice::Retry { after: Some(3) }
        );
    }
}
