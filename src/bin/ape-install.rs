use ape_tools::app::adb::command::DeviceRoot;
use ape_tools::app::config::ToolConfig;
use ape_tools::app::install::run_install;
use ape_tools::app::logging::init_logging;

const USAGE: &str = "Usage: ape-install [-d]

Pushes ape.jar and the ape helper to /data/local/tmp/ on the target device
and marks the helper executable.

  -d    address the single USB-attached device

Environment:
  ADB             adb binary to invoke (default: adb from PATH)
  SERIAL          device serial; scopes every adb call with -s (wins over -d)
  APE_ASSETS_DIR  directory holding ape.jar and ape (default: next to this binary)";

fn parse_usb_flag() -> Result<bool, String> {
    let mut usb = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-d" => usb = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("Unknown arg: {other}\n\n{USAGE}")),
        }
    }
    Ok(usb)
}

fn main() {
    init_logging();

    let usb = match parse_usb_flag() {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let result =
        ToolConfig::from_env(usb).and_then(|config| run_install(&config, DeviceRoot::LocalTmp));
    if let Err(err) = result {
        eprintln!("ape-install: {err}");
        std::process::exit(err.exit_code());
    }
}
