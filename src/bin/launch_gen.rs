//! Launch the generative pipeline (`pipeline_gen.py`) with a fixed run
//! configuration and exit with the pipeline's own status.

use anyhow::bail;
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use eventseq_tools::cli::{CommonRunArgs, ValidationArgs};
use eventseq_tools::launcher::{gen_pipeline_command, run_to_completion};
use eventseq_tools::ToolConfig;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, Copy)]
enum Preset {
    /// Age transaction dataset
    Age,
    /// PhysioNet clinical time-series dataset
    Physionet,
    /// Rosbank transaction dataset
    Rosbank,
}

impl Preset {
    fn name(&self) -> &'static str {
        match self {
            Preset::Age => "age",
            Preset::Physionet => "physionet",
            Preset::Rosbank => "rosbank",
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Launch the generative training pipeline")]
struct Cli {
    #[command(flatten)]
    common: CommonRunArgs,

    /// Data configuration path (filled by a preset if omitted).
    #[arg(long)]
    data_conf: Option<PathBuf>,

    /// Model configuration path (filled by a preset if omitted).
    #[arg(long)]
    model_conf: Option<PathBuf>,

    /// Directory the pipeline writes logs to (defaults to logs_root from the
    /// tool config).
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(flatten)]
    validation: ValidationArgs,

    /// Produce visualization output (1/0).
    #[arg(long, value_parser = BoolishValueParser::new())]
    draw: Option<bool>,

    #[command(subcommand)]
    preset: Option<Preset>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = ToolConfig::load();

    let data_conf = match (&cli.data_conf, &cli.preset) {
        (Some(path), _) => path.clone(),
        (None, Some(preset)) => cfg.preset_data_conf(preset.name()),
        (None, None) => bail!("--data-conf is required unless a dataset preset is given"),
    };
    let model_conf = match (&cli.model_conf, &cli.preset) {
        (Some(path), _) => path.clone(),
        (None, Some(preset)) => cfg.preset_model_conf(preset.name()),
        (None, None) => bail!("--model-conf is required unless a dataset preset is given"),
    };
    let log_dir = cli.log_dir.clone().unwrap_or_else(|| cfg.logs_root.clone());

    let mut run = cli
        .common
        .to_run_config()
        .with_data_conf(data_conf.display().to_string())
        .with_model_conf(model_conf.display().to_string())
        .with_log_dir(log_dir.display().to_string());
    run = cli.validation.apply(run);
    if let Some(draw) = cli.draw {
        run = run.with_draw(draw);
    }

    let cmd = gen_pipeline_command(&cfg, &run);
    if cli.common.dry_run {
        println!("{}", cmd.display_line());
        return Ok(());
    }

    let code = run_to_completion(&cmd)?;
    std::process::exit(code);
}
