use std::{borrow::Cow, fmt};

/// Log level understood by the pipeline's `--console-log` / `--file-log` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One run of the external training/evaluation program.
///
/// Field order is the emission order of [`RunConfig::gen_args`] and
/// [`RunConfig::unsupervised_args`]. Unset optional fields emit nothing.
#[derive(Clone, Debug)]
pub struct RunConfig<'a> {
    pub run_name: Cow<'a, str>,
    pub data_conf: Option<Cow<'a, str>>,  // gen variant only
    pub model_conf: Option<Cow<'a, str>>, // gen variant only
    pub device: Cow<'a, str>,
    pub log_dir: Option<Cow<'a, str>>, // gen variant only
    pub total_epochs: u32,
    pub resume: Option<Cow<'a, str>>,
    pub console_log: Option<LogLevel>,
    pub file_log: Option<LogLevel>,
    pub gen_val: Option<bool>,
    pub gen_val_epoch: Option<u32>,
    pub recon_val: Option<bool>,
    pub recon_val_epoch: Option<u32>,
    pub draw: Option<bool>, // gen variant only
}

pub const DEFAULT_RUN: RunConfig<'static> = RunConfig {
    run_name: Cow::Borrowed("debug"),
    data_conf: None,
    model_conf: None,
    device: Cow::Borrowed("cuda"),
    log_dir: None,
    total_epochs: 1,
    resume: None,
    console_log: None,
    file_log: None,
    gen_val: None,
    gen_val_epoch: None,
    recon_val: None,
    recon_val_epoch: None,
    draw: None,
};

impl Default for RunConfig<'_> {
    fn default() -> Self {
        DEFAULT_RUN
    }
}

impl<'a> RunConfig<'a> {
    pub fn with_run_name<T: Into<Cow<'a, str>>>(mut self, run_name: T) -> Self {
        self.run_name = run_name.into();
        self
    }

    pub fn with_data_conf<T: Into<Cow<'a, str>>>(mut self, data_conf: T) -> Self {
        self.data_conf = Some(data_conf.into());
        self
    }

    pub fn with_model_conf<T: Into<Cow<'a, str>>>(mut self, model_conf: T) -> Self {
        self.model_conf = Some(model_conf.into());
        self
    }

    pub fn with_device<T: Into<Cow<'a, str>>>(mut self, device: T) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_log_dir<T: Into<Cow<'a, str>>>(mut self, log_dir: T) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn with_total_epochs(mut self, total_epochs: u32) -> Self {
        self.total_epochs = total_epochs;
        self
    }

    pub fn with_resume<T: Into<Cow<'a, str>>>(mut self, resume: T) -> Self {
        self.resume = Some(resume.into());
        self
    }

    pub fn with_console_log(mut self, level: LogLevel) -> Self {
        self.console_log = Some(level);
        self
    }

    pub fn with_file_log(mut self, level: LogLevel) -> Self {
        self.file_log = Some(level);
        self
    }

    pub fn with_gen_val(mut self, enabled: bool) -> Self {
        self.gen_val = Some(enabled);
        self
    }

    pub fn with_gen_val_epoch(mut self, every: u32) -> Self {
        self.gen_val_epoch = Some(every);
        self
    }

    pub fn with_recon_val(mut self, enabled: bool) -> Self {
        self.recon_val = Some(enabled);
        self
    }

    pub fn with_recon_val_epoch(mut self, every: u32) -> Self {
        self.recon_val_epoch = Some(every);
        self
    }

    pub fn with_draw(mut self, draw: bool) -> Self {
        self.draw = Some(draw);
        self
    }

    /// Arguments for the generative pipeline (`pipeline_gen.py`).
    ///
    /// Every set key renders as a single `--key=value` token; values pass
    /// through unaltered and booleans render as `1`/`0`.
    pub fn gen_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        args.push(format!("--run-name={}", self.run_name));
        if let Some(conf) = &self.data_conf {
            args.push(format!("--data-conf={conf}"));
        }
        if let Some(conf) = &self.model_conf {
            args.push(format!("--model-conf={conf}"));
        }
        args.push(format!("--device={}", self.device));
        if let Some(dir) = &self.log_dir {
            args.push(format!("--log-dir={dir}"));
        }
        args.push(format!("--total-epochs={}", self.total_epochs));
        self.push_shared_tail(&mut args);
        if let Some(draw) = self.draw {
            args.push(format!("--draw={}", draw as u8));
        }
        args
    }

    /// Arguments for the unsupervised trainer (`train_gen_unsupervised.py`).
    ///
    /// `data-conf`, `model-conf`, `log-dir` and `draw` belong to the
    /// generative variant and are never emitted here.
    pub fn unsupervised_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        args.push(format!("--run-name={}", self.run_name));
        args.push(format!("--device={}", self.device));
        args.push(format!("--total-epochs={}", self.total_epochs));
        self.push_shared_tail(&mut args);
        args
    }

    fn push_shared_tail(&self, args: &mut Vec<String>) {
        if let Some(ckpt) = &self.resume {
            args.push(format!("--resume={ckpt}"));
        }
        if let Some(level) = self.console_log {
            args.push(format!("--console-log={level}"));
        }
        if let Some(level) = self.file_log {
            args.push(format!("--file-log={level}"));
        }
        if let Some(enabled) = self.gen_val {
            args.push(format!("--gen-val={}", enabled as u8));
        }
        if let Some(every) = self.gen_val_epoch {
            args.push(format!("--gen-val-epoch={every}"));
        }
        if let Some(enabled) = self.recon_val {
            args.push(format!("--recon-val={}", enabled as u8));
        }
        if let Some(every) = self.recon_val_epoch {
            args.push(format!("--recon-val-epoch={every}"));
        }
    }
}
