use std::path::PathBuf;

use eventseq_tools::launcher::{gen_pipeline_command, unsupervised_command};
use eventseq_tools::run::{LogLevel, RunConfig};
use eventseq_tools::ToolConfig;

#[test]
fn gen_args_render_every_set_key_in_declared_order() {
    let run = RunConfig::default()
        .with_run_name("gru-rosbank")
        .with_data_conf("configs/data_configs/rosbank.py")
        .with_model_conf("configs/model_configs/gen/rosbank.py")
        .with_device("cuda")
        .with_log_dir("./logs")
        .with_total_epochs(100)
        .with_resume("ckpt/gru-rosbank/epoch_50.ckpt")
        .with_console_log(LogLevel::Warning)
        .with_file_log(LogLevel::Info)
        .with_gen_val(true)
        .with_gen_val_epoch(5)
        .with_recon_val(true)
        .with_recon_val_epoch(10)
        .with_draw(false);
    let expected = vec![
        "--run-name=gru-rosbank",
        "--data-conf=configs/data_configs/rosbank.py",
        "--model-conf=configs/model_configs/gen/rosbank.py",
        "--device=cuda",
        "--log-dir=./logs",
        "--total-epochs=100",
        "--resume=ckpt/gru-rosbank/epoch_50.ckpt",
        "--console-log=warning",
        "--file-log=info",
        "--gen-val=1",
        "--gen-val-epoch=5",
        "--recon-val=1",
        "--recon-val-epoch=10",
        "--draw=0",
    ];
    assert_eq!(run.gen_args(), expected);
}

#[test]
fn unset_keys_are_omitted() {
    let run = RunConfig::default();
    assert_eq!(
        run.gen_args(),
        vec!["--run-name=debug", "--device=cuda", "--total-epochs=1"]
    );
}

#[test]
fn zero_epochs_render_literally() {
    let run = RunConfig::default().with_total_epochs(0);
    assert!(run.gen_args().contains(&"--total-epochs=0".to_string()));
    assert!(run
        .unsupervised_args()
        .contains(&"--total-epochs=0".to_string()));
}

#[test]
fn validation_toggles_render_as_ints() {
    let run = RunConfig::default().with_gen_val(true).with_gen_val_epoch(1);
    let args = run.gen_args();
    assert!(args.contains(&"--gen-val=1".to_string()));
    assert!(args.contains(&"--gen-val-epoch=1".to_string()));

    let run = RunConfig::default().with_recon_val(false);
    assert!(run.gen_args().contains(&"--recon-val=0".to_string()));
}

#[test]
fn device_string_passes_through_unaltered() {
    let run = RunConfig::default().with_device("cuda:1");
    assert!(run.gen_args().contains(&"--device=cuda:1".to_string()));
    assert!(run
        .unsupervised_args()
        .contains(&"--device=cuda:1".to_string()));
}

#[test]
fn rendering_is_deterministic() {
    let run = RunConfig::default()
        .with_run_name("repeat")
        .with_total_epochs(30)
        .with_gen_val(true)
        .with_gen_val_epoch(3)
        .with_draw(true);
    assert_eq!(run.gen_args(), run.gen_args());
    assert_eq!(run.unsupervised_args(), run.unsupervised_args());
}

#[test]
fn unsupervised_args_skip_gen_only_keys() {
    let run = RunConfig::default()
        .with_run_name("unsup")
        .with_data_conf("configs/data_configs/age.py")
        .with_model_conf("configs/model_configs/gen/age.py")
        .with_log_dir("./logs")
        .with_total_epochs(10)
        .with_gen_val(true)
        .with_draw(true);
    let args = run.unsupervised_args();
    assert_eq!(
        args,
        vec![
            "--run-name=unsup",
            "--device=cuda",
            "--total-epochs=10",
            "--gen-val=1",
        ]
    );
    assert!(!args.iter().any(|a| a.starts_with("--data-conf")
        || a.starts_with("--model-conf")
        || a.starts_with("--log-dir")
        || a.starts_with("--draw")));
}

#[test]
fn gen_command_wraps_script_and_appends_extra_args() {
    let mut cfg = ToolConfig::default();
    cfg.gen_args = vec!["--comments=smoke".to_string()];
    let run = RunConfig::default();
    let cmd = gen_pipeline_command(&cfg, &run);
    assert_eq!(cmd.program, PathBuf::from("python"));
    assert_eq!(cmd.args[0], "pipeline_gen.py");
    assert_eq!(cmd.args[1], "--run-name=debug");
    assert_eq!(cmd.args.last().unwrap(), "--comments=smoke");
}

#[test]
fn unsupervised_command_uses_its_own_script() {
    let cfg = ToolConfig::default();
    let run = RunConfig::default();
    let cmd = unsupervised_command(&cfg, &run);
    assert_eq!(cmd.program, PathBuf::from("python"));
    assert_eq!(cmd.args[0], "train_gen_unsupervised.py");
    assert_eq!(
        cmd.display_line(),
        "python train_gen_unsupervised.py --run-name=debug --device=cuda --total-epochs=1"
    );
}
