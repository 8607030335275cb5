//! Test harness for favor integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary workspace holding directory trees, a config file and a votes file.
pub struct TestEnv {
    dir: TempDir,
}

/// One `trees:` entry of the generated configuration.
pub struct TreeEntry {
    pub name: &'static str,
    pub dir: PathBuf,
    pub min_depth: usize,
    pub max_depth: usize,
    pub ignore: Vec<&'static str>,
    pub include_root: bool,
}

impl TreeEntry {
    pub fn new(name: &'static str, dir: PathBuf, min_depth: usize, max_depth: usize) -> Self {
        Self {
            name,
            dir,
            min_depth,
            max_depth,
            ignore: Vec::new(),
            include_root: false,
        }
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("favor.conf")
    }

    pub fn votes_path(&self) -> PathBuf {
        self.dir.path().join("state/votes.yaml")
    }

    /// Write a config using `sh -c <script>` as the picker.
    pub fn write_config(&self, script: &str, ignore_global: &[&str], trees: &[TreeEntry]) {
        let mut yaml = String::new();
        yaml.push_str(&format!("picker: [sh, -c, {:?}]\n", script));
        yaml.push_str("threads: 4\n");
        yaml.push_str(&format!("votes_path: {:?}\n", self.votes_path().display().to_string()));
        yaml.push_str(&format!("ignore_global: {:?}\n", ignore_global));
        yaml.push_str("trees:\n");
        for tree in trees {
            yaml.push_str(&format!("  - name: {}\n", tree.name));
            yaml.push_str(&format!("    dir: {:?}\n", tree.dir.display().to_string()));
            yaml.push_str(&format!("    min_depth: {}\n", tree.min_depth));
            yaml.push_str(&format!("    max_depth: {}\n", tree.max_depth));
            yaml.push_str(&format!("    ignore: {:?}\n", tree.ignore));
            yaml.push_str(&format!("    include_root: {}\n", tree.include_root));
        }
        fs::write(self.config_path(), yaml).expect("Failed to write config");
    }

    pub fn write_votes(&self, yaml: &str) {
        let path = self.votes_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create votes dir");
        fs::write(path, yaml).expect("Failed to write votes");
    }

    pub fn read_votes(&self) -> Option<String> {
        fs::read_to_string(self.votes_path()).ok()
    }

    /// Shell picker that records its input to `input.txt` and answers `line`.
    pub fn echo_picker(&self, line: &str) -> String {
        format!(
            "cat > {:?}; echo {:?}",
            self.input_path().display().to_string(),
            line
        )
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("input.txt")
    }

    pub fn picker_input(&self) -> Vec<String> {
        fs::read_to_string(self.input_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

pub fn run_favor(env: &TestEnv, extra_args: &[&str]) -> (String, String, Option<i32>) {
    let binary = env!("CARGO_BIN_EXE_favor");
    let output = Command::new(binary)
        .arg("--config")
        .arg(env.config_path())
        .args(extra_args)
        .current_dir(env.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run favor");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_writes_config() {
        let env = TestEnv::new();
        let work = env.add_dir("work");
        env.write_config("cat", &["node_modules"], &[TreeEntry::new("work", work, 1, 1)]);
        let config = fs::read_to_string(env.config_path()).unwrap();
        assert!(config.contains("name: work"));
        assert!(config.contains("node_modules"));
    }
}
