use std::fmt;

/// Failure of a single adb invocation or of local input validation.
///
/// There is no recovery anywhere in this crate: every error propagates to
/// the one boundary in each binary's `main`, which prints it and sets the
/// process exit status via [`AppError::exit_code`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Bad local input (unknown flag, unusable adb path).
    Validation(String),
    /// The adb binary could not be started at all.
    SpawnFailed { command: String, message: String },
    /// adb ran and exited non-zero; `code` is `None` when it was killed by
    /// a signal.
    NonZeroExit {
        command: String,
        code: Option<i32>,
    },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ERR_VALIDATION",
            Self::SpawnFailed { .. } => "ERR_SPAWN",
            Self::NonZeroExit { .. } => "ERR_EXIT",
        }
    }

    /// Process exit status for the top-level boundary: the bridge's own
    /// exit code when it has one, otherwise 1; local validation errors
    /// exit 2 so callers can tell them from device failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::SpawnFailed { .. } => 1,
            Self::NonZeroExit { code, .. } => code.unwrap_or(1),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message} ({})", self.code()),
            Self::SpawnFailed { command, message } => {
                write!(f, "failed to spawn `{command}`: {message} ({})", self.code())
            }
            Self::NonZeroExit { command, code: Some(code) } => {
                write!(f, "`{command}` exited with code {code} ({})", self.code())
            }
            Self::NonZeroExit { command, code: None } => {
                write!(f, "`{command}` was terminated by a signal ({})", self.code())
            }
        }
    }
}

impl std::error::Error for AppError {}
