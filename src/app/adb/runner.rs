use std::process::{Command, Stdio};

use tracing::info;

use crate::app::error::AppError;

/// Runs one adb invocation to completion with inherited stdio and checks
/// the exit status.
///
/// stdout/stderr pass straight through to the console: the exerciser's
/// output is the point of running it, and nothing here parses it.
pub fn run_checked(program: &str, args: &[String]) -> Result<(), AppError> {
    let rendered = render_command(program, args);
    info!("running: {rendered}");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| AppError::SpawnFailed {
            command: rendered.clone(),
            message: err.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::NonZeroExit {
            command: rendered,
            code: status.code(),
        })
    }
}

/// Single-line rendering of an argv for logs and error messages; tokens
/// containing whitespace are quoted so the line stays copy-pasteable.
pub fn render_command(program: &str, args: &[String]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.chars().any(char::is_whitespace) {
            line.push('\'');
            line.push_str(arg);
            line.push('\'');
        } else {
            line.push_str(arg);
        }
    }
    line
}
