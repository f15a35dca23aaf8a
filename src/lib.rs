pub mod cli;
pub mod config;
pub mod launcher;
pub mod run;

pub use config::ToolConfig;
