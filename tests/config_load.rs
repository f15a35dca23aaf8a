use std::fs;
use std::path::PathBuf;

use eventseq_tools::ToolConfig;
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, contents: &str) -> PathBuf {
    let path = dir.join("eventseq-tools.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn loads_minimal_config_and_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "python_bin = \"python3\"\n");
    let cfg = ToolConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.python_bin, PathBuf::from("python3"));
    assert_eq!(cfg.gen_pipeline_script, PathBuf::from("pipeline_gen.py"));
    assert_eq!(
        cfg.unsupervised_script,
        PathBuf::from("train_gen_unsupervised.py")
    );
    assert_eq!(cfg.configs_root, PathBuf::from("configs"));
    assert_eq!(cfg.logs_root, PathBuf::from("logs"));
    assert!(cfg.gen_args.is_empty());
    assert!(cfg.unsupervised_args.is_empty());
}

#[test]
fn loads_arg_sections() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        concat!(
            "logs_root = \"runs/logs\"\n",
            "[gen]\n",
            "args = [\"--comments=nightly\"]\n",
            "[unsupervised]\n",
            "args = [\"--comments=unsup\"]\n",
        ),
    );
    let cfg = ToolConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.logs_root, PathBuf::from("runs/logs"));
    assert_eq!(cfg.gen_args, vec!["--comments=nightly".to_string()]);
    assert_eq!(cfg.unsupervised_args, vec!["--comments=unsup".to_string()]);
}

#[test]
fn missing_file_yields_none() {
    let dir = tempdir().expect("tempdir");
    assert!(ToolConfig::from_path(&dir.path().join("absent.toml")).is_none());
}

#[test]
fn preset_paths_follow_configs_layout() {
    let cfg = ToolConfig::default();
    assert_eq!(
        cfg.preset_data_conf("age"),
        PathBuf::from("configs/data_configs/age.py")
    );
    assert_eq!(
        cfg.preset_model_conf("rosbank"),
        PathBuf::from("configs/model_configs/gen/rosbank.py")
    );
}

#[test]
fn expands_env_placeholders_in_paths() {
    std::env::set_var("EVENTSEQ_TEST_ROOT", "/srv/eventseq");
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "logs_root = \"${EVENTSEQ_TEST_ROOT}/logs\"\n");
    let cfg = ToolConfig::from_path(&path).expect("load config");
    assert_eq!(cfg.logs_root, PathBuf::from("/srv/eventseq/logs"));
}
