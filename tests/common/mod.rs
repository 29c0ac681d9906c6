#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the roster binary with config, data dir and feed isolated in a temp directory
pub struct RosterTest {
    pub temp_dir: TempDir,
}

impl RosterTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        RosterTest { temp_dir }
    }

    /// Path of the config file the binary is pointed at
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Write a feed file and return its path
    pub fn write_feed(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("members.json");
        fs::write(&path, content).expect("Failed to write feed");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_roster"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("ROSTER_CONFIG", self.config_path())
            .env_remove("ROSTER_FEED_URL")
            .env("XDG_DATA_HOME", self.temp_dir.path().join("data"))
            .env("HOME", self.temp_dir.path())
            .output()
            .expect("Failed to execute command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "Command {:?} failed.\nstdout: {}\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed.\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
