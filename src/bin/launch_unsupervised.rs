//! Launch the unsupervised trainer (`train_gen_unsupervised.py`) and exit
//! with the trainer's own status.

use clap::Parser;
use eventseq_tools::cli::{CommonRunArgs, ValidationArgs};
use eventseq_tools::launcher::{run_to_completion, unsupervised_command};
use eventseq_tools::ToolConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Launch the unsupervised generative trainer")]
struct Cli {
    #[command(flatten)]
    common: CommonRunArgs,

    #[command(flatten)]
    validation: ValidationArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = ToolConfig::load();

    let run = cli.validation.apply(cli.common.to_run_config());

    let cmd = unsupervised_command(&cfg, &run);
    if cli.common.dry_run {
        println!("{}", cmd.display_line());
        return Ok(());
    }

    let code = run_to_completion(&cmd)?;
    std::process::exit(code);
}
