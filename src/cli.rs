//! Shared clap argument groups for the launcher bins.

use clap::builder::BoolishValueParser;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::run::{LogLevel, RunConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevelArg> for LogLevel {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Warning => LogLevel::Warning,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Critical => LogLevel::Critical,
        }
    }
}

/// Arguments common to both pipeline variants.
#[derive(Debug, Clone, Args)]
pub struct CommonRunArgs {
    /// Name identifying this run.
    #[arg(long)]
    pub run_name: String,

    /// Compute device passed through to the pipeline (cpu, cuda, cuda:1, ...).
    #[arg(long, default_value = "cuda")]
    pub device: String,

    /// Total number of training epochs.
    #[arg(long)]
    pub total_epochs: u32,

    /// Checkpoint path to resume from.
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Console log level of the pipeline.
    #[arg(long, value_enum)]
    pub console_log: Option<LogLevelArg>,

    /// File log level of the pipeline.
    #[arg(long, value_enum)]
    pub file_log: Option<LogLevelArg>,

    /// Print the command instead of running it.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CommonRunArgs {
    /// Base run configuration from the shared flags.
    pub fn to_run_config(&self) -> RunConfig<'static> {
        let mut run = RunConfig::default()
            .with_run_name(self.run_name.clone())
            .with_device(self.device.clone())
            .with_total_epochs(self.total_epochs);
        if let Some(ckpt) = &self.resume {
            run = run.with_resume(ckpt.display().to_string());
        }
        if let Some(level) = self.console_log {
            run = run.with_console_log(level.into());
        }
        if let Some(level) = self.file_log {
            run = run.with_file_log(level.into());
        }
        run
    }
}

/// Validation toggles shared by both pipeline variants.
#[derive(Debug, Clone, Copy, Args)]
pub struct ValidationArgs {
    /// Run generative validation (1/0).
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub gen_val: Option<bool>,

    /// Epochs between generative validations.
    #[arg(long)]
    pub gen_val_epoch: Option<u32>,

    /// Run reconstruction validation (1/0).
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub recon_val: Option<bool>,

    /// Epochs between reconstruction validations.
    #[arg(long)]
    pub recon_val_epoch: Option<u32>,
}

impl ValidationArgs {
    pub fn apply<'a>(&self, mut run: RunConfig<'a>) -> RunConfig<'a> {
        if let Some(enabled) = self.gen_val {
            run = run.with_gen_val(enabled);
        }
        if let Some(every) = self.gen_val_epoch {
            run = run.with_gen_val_epoch(every);
        }
        if let Some(enabled) = self.recon_val {
            run = run.with_recon_val(enabled);
        }
        if let Some(every) = self.recon_val_epoch {
            run = run.with_recon_val_epoch(every);
        }
        run
    }
}
