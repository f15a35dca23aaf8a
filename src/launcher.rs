use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus};

use thiserror::Error;

use crate::config::ToolConfig;
use crate::run::RunConfig;

/// A fully assembled external invocation: interpreter plus argument list.
#[derive(Debug, Clone)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// One-line rendering for `--dry-run` output.
    pub fn display_line(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Build the invocation for the generative pipeline variant.
pub fn gen_pipeline_command(cfg: &ToolConfig, run: &RunConfig<'_>) -> LaunchCommand {
    let mut args = vec![cfg.gen_pipeline_script.display().to_string()];
    args.extend(run.gen_args());
    args.extend(cfg.gen_args.iter().cloned());
    LaunchCommand {
        program: cfg.python_bin.clone(),
        args,
    }
}

/// Build the invocation for the unsupervised trainer variant.
pub fn unsupervised_command(cfg: &ToolConfig, run: &RunConfig<'_>) -> LaunchCommand {
    let mut args = vec![cfg.unsupervised_script.display().to_string()];
    args.extend(run.unsupervised_args());
    args.extend(cfg.unsupervised_args.iter().cloned());
    LaunchCommand {
        program: cfg.python_bin.clone(),
        args,
    }
}

pub fn spawn(cmd: &LaunchCommand) -> io::Result<Child> {
    Command::new(&cmd.program).args(&cmd.args).spawn()
}

/// Spawn the command, block until it exits, and return its exit code.
///
/// The caller is expected to pass the code straight to `process::exit` so the
/// child's status surfaces unchanged.
pub fn run_to_completion(cmd: &LaunchCommand) -> Result<i32, LaunchError> {
    let mut child = spawn(cmd)?;
    let status = child.wait()?;
    Ok(exit_code(&status))
}

fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    // No code means the child died to a signal; report it shell-style.
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
