use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run triage commands in an isolated temp directory.
///
/// The backend URL is pointed at an unreachable port so no test depends
/// on a running backend; commands under test either never reach the
/// network or are expected to fail when they do.
pub struct TriageTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl TriageTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let binary_path = if cfg!(debug_assertions) {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/triage")
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/triage")
        };
        let binary_path = if std::path::Path::new(binary_path).exists() {
            binary_path.to_string()
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/triage").to_string()
        };

        TriageTest {
            temp_dir,
            binary_path,
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TRIAGE_BACKEND_URL", "http://127.0.0.1:9/api")
            .output()
            .expect("Failed to execute triage command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_config(&self) -> String {
        let path = self
            .temp_dir
            .path()
            .join(".triage")
            .join("config.yaml");
        fs::read_to_string(path).expect("Failed to read config file")
    }

    pub fn config_exists(&self) -> bool {
        self.temp_dir
            .path()
            .join(".triage")
            .join("config.yaml")
            .exists()
    }
}
