use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// A wayfind command isolated from the user's config and environment
pub fn wayfind(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("wayfind");
    cmd.env("WAYFIND_CONFIG_DIR", config_dir)
        .env_remove("WAYFIND_GRAPH")
        .env_remove("WAYFIND_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a problem file into `dir` and return its path
#[allow(dead_code)]
pub fn write_problem(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
