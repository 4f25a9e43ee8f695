pub mod adb;
pub mod config;
pub mod error;
pub mod install;
pub mod launch;
pub mod logging;
