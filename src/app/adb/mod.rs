pub mod command;
pub mod locator;
pub mod runner;
