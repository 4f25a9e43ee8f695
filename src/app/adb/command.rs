//! Pure argv builders for the adb invocations this crate issues.
//!
//! Nothing here touches a process or the environment; the builders return
//! token vectors so the exact command shape stays unit-testable.

use std::path::Path;

use crate::app::config::DeviceSelection;

pub const APE_JAR: &str = "ape.jar";
pub const APE_HELPER: &str = "ape";
pub const APE_MAIN_CLASS: &str = "com.android.commands.monkey.Monkey";
pub const APP_PROCESS: &str = "/system/bin/app_process";

/// On-device directory the exerciser is installed to and launched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceRoot {
    /// `/data/local/tmp/` — world-writable temp dir, survives on most builds.
    LocalTmp,
    /// `/sdcard/` — removable storage, for devices that lock down the temp dir.
    Sdcard,
}

impl DeviceRoot {
    pub fn path(self) -> &'static str {
        match self {
            Self::LocalTmp => "/data/local/tmp/",
            Self::Sdcard => "/sdcard/",
        }
    }

    pub fn jar_path(self) -> String {
        format!("{}{APE_JAR}", self.path())
    }

    pub fn helper_path(self) -> String {
        format!("{}{APE_HELPER}", self.path())
    }
}

/// `adb push <local> <root>`, selection flags first.
pub fn push_args(selection: &DeviceSelection, local: &Path, root: DeviceRoot) -> Vec<String> {
    let mut args = selection.adb_flags();
    args.push("push".to_string());
    args.push(local.to_string_lossy().to_string());
    args.push(root.path().to_string());
    args
}

/// `adb shell chmod 777 <root>ape`, selection flags first.
pub fn chmod_helper_args(selection: &DeviceSelection, root: DeviceRoot) -> Vec<String> {
    let mut args = selection.adb_flags();
    args.push("shell".to_string());
    args.push("chmod".to_string());
    args.push("777".to_string());
    args.push(root.helper_path());
    args
}

/// `adb shell CLASSPATH=<root>ape.jar /system/bin/app_process <root>
/// com.android.commands.monkey.Monkey <forwarded...>`.
///
/// The classpath assignment must precede the loader, and the root directory
/// must precede the main-class name; that is the loader's positional
/// contract. Forwarded tokens are appended verbatim and in order.
pub fn launch_args(
    selection: &DeviceSelection,
    root: DeviceRoot,
    forwarded: &[String],
) -> Vec<String> {
    let mut args = selection.adb_flags();
    args.push("shell".to_string());
    args.push(format!("CLASSPATH={}", root.jar_path()));
    args.push(APP_PROCESS.to_string());
    args.push(root.path().to_string());
    args.push(APE_MAIN_CLASS.to_string());
    args.extend(forwarded.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn selection_flags_lead_every_invocation() {
        let serial = DeviceSelection::Serial("emulator-5554".to_string());
        let jar = PathBuf::from("/work/ape.jar");

        for args in [
            push_args(&serial, &jar, DeviceRoot::LocalTmp),
            chmod_helper_args(&serial, DeviceRoot::LocalTmp),
            launch_args(&serial, DeviceRoot::LocalTmp, &[]),
        ] {
            assert_eq!(&args[..2], &strings(&["-s", "emulator-5554"])[..]);
        }
    }

    #[test]
    fn no_selection_means_no_flags() {
        let args = push_args(
            &DeviceSelection::Any,
            &PathBuf::from("/work/ape.jar"),
            DeviceRoot::LocalTmp,
        );
        assert_eq!(args[0], "push");
    }

    #[test]
    fn usb_selection_uses_dash_d() {
        let args = chmod_helper_args(&DeviceSelection::Usb, DeviceRoot::LocalTmp);
        assert_eq!(
            args,
            strings(&["-d", "shell", "chmod", "777", "/data/local/tmp/ape"])
        );
    }

    #[test]
    fn launch_matches_loader_positional_contract() {
        let forwarded = strings(&["-p", "com.example.app", "--throttle", "200"]);
        let args = launch_args(&DeviceSelection::Any, DeviceRoot::LocalTmp, &forwarded);
        assert_eq!(
            args,
            strings(&[
                "shell",
                "CLASSPATH=/data/local/tmp/ape.jar",
                "/system/bin/app_process",
                "/data/local/tmp/",
                "com.android.commands.monkey.Monkey",
                "-p",
                "com.example.app",
                "--throttle",
                "200",
            ])
        );
    }

    #[test]
    fn forwarded_tokens_survive_whitespace_and_hyphens() {
        let forwarded = strings(&["--act", "android.intent.action.MAIN", "-v", "a b c"]);
        let args = launch_args(&DeviceSelection::Any, DeviceRoot::Sdcard, &forwarded);
        assert_eq!(&args[args.len() - 4..], &forwarded[..]);
    }

    #[test]
    fn root_variants_differ_only_in_paths() {
        let tmp = launch_args(&DeviceSelection::Any, DeviceRoot::LocalTmp, &[]);
        let sdcard = launch_args(&DeviceSelection::Any, DeviceRoot::Sdcard, &[]);
        assert_eq!(tmp.len(), sdcard.len());
        assert_eq!(tmp[1], "CLASSPATH=/data/local/tmp/ape.jar");
        assert_eq!(sdcard[1], "CLASSPATH=/sdcard/ape.jar");
        assert_eq!(sdcard[3], "/sdcard/");
        // Exactly one classpath assignment and one main-class token each.
        for args in [tmp, sdcard] {
            assert_eq!(
                args.iter()
                    .filter(|t| t.starts_with("CLASSPATH="))
                    .count(),
                1
            );
            assert_eq!(args.iter().filter(|t| *t == APE_MAIN_CLASS).count(), 1);
        }
    }
}
