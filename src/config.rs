use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_NAME: &str = "eventseq-tools.toml";

/// Tool-level configuration: where the pipeline scripts live and what to run
/// them with. Loaded from `eventseq-tools.toml` in the working directory, or
/// from the path in `EVENTSEQ_TOOLS_CONFIG` when set.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub python_bin: PathBuf,
    pub gen_pipeline_script: PathBuf,
    pub unsupervised_script: PathBuf,
    pub configs_root: PathBuf,
    pub logs_root: PathBuf,
    pub gen_args: Vec<String>,
    pub unsupervised_args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            python_bin: PathBuf::from("python"),
            gen_pipeline_script: PathBuf::from("pipeline_gen.py"),
            unsupervised_script: PathBuf::from("train_gen_unsupervised.py"),
            configs_root: PathBuf::from("configs"),
            logs_root: PathBuf::from("logs"),
            gen_args: Vec::new(),
            unsupervised_args: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ToolConfigFile {
    python_bin: Option<String>,
    gen_pipeline_script: Option<String>,
    unsupervised_script: Option<String>,
    configs_root: Option<String>,
    logs_root: Option<String>,
    gen: Option<ArgSection>,
    unsupervised: Option<ArgSection>,
}

#[derive(Debug, Deserialize, Default)]
struct ArgSection {
    args: Option<Vec<String>>,
}

impl ToolConfig {
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("EVENTSEQ_TOOLS_CONFIG") {
            let cfg = Self::from_path(Path::new(&path)).unwrap_or_default();
            cfg.warn_if_invalid();
            return cfg;
        }
        let cfg = Self::from_path(Path::new(DEFAULT_CONFIG_NAME)).unwrap_or_default();
        cfg.warn_if_invalid();
        cfg
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let raw = std::fs::read_to_string(path).ok()?;
        let file: ToolConfigFile = toml::from_str(&raw).ok()?;
        Some(Self::from_file(file))
    }

    fn from_file(file: ToolConfigFile) -> Self {
        ToolConfig {
            python_bin: file
                .python_bin
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("python")),
            gen_pipeline_script: file
                .gen_pipeline_script
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("pipeline_gen.py")),
            unsupervised_script: file
                .unsupervised_script
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("train_gen_unsupervised.py")),
            configs_root: file
                .configs_root
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("configs")),
            logs_root: file
                .logs_root
                .map(|v| expand_path(&v))
                .unwrap_or_else(|| PathBuf::from("logs")),
            gen_args: file.gen.and_then(|s| s.args).unwrap_or_default(),
            unsupervised_args: file.unsupervised.and_then(|s| s.args).unwrap_or_default(),
        }
    }

    /// Data configuration path for a named dataset preset.
    pub fn preset_data_conf(&self, name: &str) -> PathBuf {
        self.configs_root
            .join("data_configs")
            .join(format!("{name}.py"))
    }

    /// Generative model configuration path for a named dataset preset.
    pub fn preset_model_conf(&self, name: &str) -> PathBuf {
        self.configs_root
            .join("model_configs")
            .join("gen")
            .join(format!("{name}.py"))
    }

    fn warn_if_invalid(&self) {
        if self.python_bin.as_os_str().is_empty() {
            eprintln!("tools config: python_bin is empty; launches will fail");
        }
        if self.gen_pipeline_script.as_os_str().is_empty() {
            eprintln!("tools config: gen_pipeline_script is empty; launch_gen will fail");
        }
        if self.unsupervised_script.as_os_str().is_empty() {
            eprintln!(
                "tools config: unsupervised_script is empty; launch_unsupervised will fail"
            );
        }
    }
}

fn expand_path(raw: &str) -> PathBuf {
    let mut out = raw.to_string();
    if let Some(stripped) = out.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME") {
            out = format!("{home}{stripped}");
        }
    }
    PathBuf::from(expand_env(&out))
}

fn expand_env(input: &str) -> String {
    let mut out = String::new();
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() && bytes[i + 1] == b'{' {
            if let Some(end) = input[i + 2..].find('}') {
                let key = &input[i + 2..i + 2 + end];
                if let Ok(val) = std::env::var(key) {
                    out.push_str(&val);
                } else {
                    out.push_str(&format!("${{{}}}", key));
                }
                i += end + 3;
                continue;
            }
        }
        out.push(bytes[i] as char);
        i += 1;
    }
    out
}
