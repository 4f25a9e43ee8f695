use crate::app::adb::command::{launch_args, DeviceRoot};
use crate::app::adb::runner;
use crate::app::config::ToolConfig;
use crate::app::error::AppError;
use crate::app::logging::init_logging;

/// One blocking `adb shell` invocation that starts the exerciser entry
/// point through app_process. No timeout, no retry; the exerciser's output
/// streams to the console.
pub fn run_launch(
    config: &ToolConfig,
    root: DeviceRoot,
    forwarded: &[String],
) -> Result<(), AppError> {
    let args = launch_args(&config.selection, root, forwarded);
    runner::run_checked(&config.adb_program, &args)
}

/// Shared main body for the launcher binaries; they differ only in the
/// on-device root. Every CLI argument is forwarded verbatim to the
/// exerciser, nothing is interpreted locally. Returns the process exit
/// status.
pub fn launcher_main(tool: &str, root: DeviceRoot) -> i32 {
    init_logging();
    let forwarded: Vec<String> = std::env::args().skip(1).collect();

    let result =
        ToolConfig::from_env(false).and_then(|config| run_launch(&config, root, &forwarded));
    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{tool}: {err}");
            err.exit_code()
        }
    }
}
