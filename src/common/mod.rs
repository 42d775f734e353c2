pub mod config;
pub mod package;
pub mod paths;
pub mod platform;
pub mod progress;
