use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::adb::locator::{resolve_adb_program, validate_adb_program};
use crate::app::error::AppError;

/// Which device every adb invocation is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelection {
    /// No flags; adb addresses the only attached device, or fails when
    /// more than one is connected.
    Any,
    /// `-d`: the single USB-attached device.
    Usb,
    /// `-s <serial>`, from the `SERIAL` environment variable.
    Serial(String),
}

impl DeviceSelection {
    /// Flags placed immediately after the adb binary name, before the
    /// subcommand.
    pub fn adb_flags(&self) -> Vec<String> {
        match self {
            Self::Any => Vec::new(),
            Self::Usb => vec!["-d".to_string()],
            Self::Serial(serial) => vec!["-s".to_string(), serial.clone()],
        }
    }
}

/// Optional on-disk settings; everything has a working default so a
/// missing file is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub adb_path: String,
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("APE_TOOLS_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".ape_tools_config.json")
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile, AppError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = fs::read_to_string(path).map_err(|err| {
        AppError::validation(format!("failed to read config {}: {err}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::validation(format!("failed to parse config {}: {err}", path.display()))
    })
}

/// Everything an operation needs, resolved once in `main` and passed down;
/// nothing below this layer reads the environment.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub adb_program: String,
    pub selection: DeviceSelection,
    /// Local directory holding `ape.jar` and the `ape` helper.
    pub assets_dir: PathBuf,
}

impl ToolConfig {
    pub fn from_env(usb: bool) -> Result<Self, AppError> {
        let file = load_config_file(&config_path())?;
        resolve(
            &file,
            std::env::var("ADB").ok(),
            std::env::var("SERIAL").ok(),
            usb,
            std::env::var("APE_ASSETS_DIR").ok().map(PathBuf::from),
        )
    }
}

pub fn resolve(
    file: &ConfigFile,
    env_adb: Option<String>,
    env_serial: Option<String>,
    usb: bool,
    assets_override: Option<PathBuf>,
) -> Result<ToolConfig, AppError> {
    let adb_program = resolve_adb_program(env_adb.as_deref(), &file.adb_path);
    validate_adb_program(&adb_program)?;

    // SERIAL wins over -d when both are given.
    let serial = env_serial
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let selection = match serial {
        Some(serial) => DeviceSelection::Serial(serial),
        None if usb => DeviceSelection::Usb,
        None => DeviceSelection::Any,
    };

    let assets_dir = match assets_override {
        Some(dir) => dir,
        None => default_assets_dir()?,
    };

    Ok(ToolConfig {
        adb_program,
        selection,
        assets_dir,
    })
}

/// The artifacts ship next to the binaries, so the default is the running
/// executable's own directory.
fn default_assets_dir() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()
        .map_err(|err| AppError::validation(format!("cannot locate own executable: {err}")))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::validation("executable has no parent directory"))
}
