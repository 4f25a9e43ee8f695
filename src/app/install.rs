use tracing::info;

use crate::app::adb::command::{
    chmod_helper_args, push_args, DeviceRoot, APE_HELPER, APE_JAR,
};
use crate::app::adb::runner;
use crate::app::config::ToolConfig;
use crate::app::error::AppError;

/// The three install invocations, in the order they must run: the chmod
/// depends on the helper being on the device, and re-running the whole
/// sequence just overwrites what is already there.
pub fn install_steps(
    config: &ToolConfig,
    root: DeviceRoot,
) -> Vec<(&'static str, Vec<String>)> {
    let jar = config.assets_dir.join(APE_JAR);
    let helper = config.assets_dir.join(APE_HELPER);
    vec![
        ("push jar", push_args(&config.selection, &jar, root)),
        ("push helper", push_args(&config.selection, &helper, root)),
        (
            "mark helper executable",
            chmod_helper_args(&config.selection, root),
        ),
    ]
}

pub fn run_install(config: &ToolConfig, root: DeviceRoot) -> Result<(), AppError> {
    run_install_with(config, root, runner::run_checked)
}

/// Same as [`run_install`] but with the executor injected, so the
/// stop-on-first-failure sequencing is testable without a device. A step's
/// failure aborts the rest; partially pushed files stay on the device.
pub fn run_install_with<F>(
    config: &ToolConfig,
    root: DeviceRoot,
    mut run: F,
) -> Result<(), AppError>
where
    F: FnMut(&str, &[String]) -> Result<(), AppError>,
{
    for (step, args) in install_steps(config, root) {
        info!("install: {step}");
        run(&config.adb_program, &args)?;
    }
    Ok(())
}
