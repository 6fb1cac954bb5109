//! E2E test fixture with step logging and checkpointing.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Checkpoint snapshot for test debugging.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub name: String,
    pub timestamp: Duration,
    pub step_count: usize,
    pub files_created: Vec<PathBuf>,
}

/// Step result for report generation.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub name: String,
    pub success: bool,
    pub duration: Duration,
    pub output_summary: String,
}

/// E2E test fixture providing an isolated working directory.
pub struct E2EFixture {
    /// Test scenario name
    pub scenario_name: String,
    /// Root temp directory
    pub temp_dir: TempDir,
    /// Working directory for every command (temp_dir path)
    pub root: PathBuf,
    /// Test start time
    start_time: Instant,
    /// Current step number
    step_count: usize,
    /// Checkpoints captured
    checkpoints: Vec<Checkpoint>,
    /// Step results for report
    step_results: Vec<StepResult>,
}

impl E2EFixture {
    /// Create a fresh E2E test fixture.
    pub fn new(scenario_name: &str) -> Self {
        let start_time = Instant::now();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        println!();
        println!("{}", "█".repeat(70));
        println!("█ E2E SCENARIO: {scenario_name}");
        println!("{}", "█".repeat(70));
        println!();
        println!("[E2E] Root: {root:?}");
        println!();

        Self {
            scenario_name: scenario_name.to_string(),
            temp_dir,
            root,
            start_time,
            step_count: 0,
            checkpoints: Vec::new(),
            step_results: Vec::new(),
        }
    }

    /// Log a step in the E2E workflow.
    pub fn log_step(&mut self, description: &str) {
        self.step_count += 1;
        let elapsed = self.start_time.elapsed();

        println!();
        println!("┌{}", "─".repeat(68));
        println!("│ STEP {}: {}", self.step_count, description);
        println!("│ Time: {elapsed:?}");
        println!("└{}", "─".repeat(68));
    }

    /// Capture a checkpoint of the files under the root.
    pub fn checkpoint(&mut self, name: &str) {
        let timestamp = self.start_time.elapsed();

        let files_created: Vec<PathBuf> = walkdir::WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();

        println!();
        println!("[CHECKPOINT] {name}");
        println!("[CHECKPOINT] Files: {}", files_created.len());

        self.checkpoints.push(Checkpoint {
            name: name.to_string(),
            timestamp,
            step_count: self.step_count,
            files_created,
        });
    }

    /// Run the skillkit binary with extra environment and capture output.
    pub fn run_skillkit_with_env(&mut self, args: &[&str], env: &[(&str, &str)]) -> CommandOutput {
        let step_name = format!("skillkit {}", args.join(" "));
        let start = Instant::now();

        println!();
        println!("[CMD] {step_name}");

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_skillkit"));
        cmd.args(args)
            .env("HOME", &self.root)
            .env("XDG_CONFIG_HOME", self.root.join(".config"))
            .env_remove("SKILLKIT_CONFIG")
            .env_remove("SKILLKIT_INIT_PATH")
            .env_remove("SKILLKIT_OUTPUT_DIR")
            .env_remove("SKILLKIT_CHECKER_BINARY")
            .env_remove("SKILLKIT_CHECKER_INSTALL")
            .env_remove("SKILLKIT_CHECKER_COMMAND")
            .env_remove("RUST_LOG")
            .current_dir(&self.root);
        for (key, value) in env {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute skillkit command");

        let elapsed = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let result = CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
            elapsed,
        };

        println!("[CMD] Exit: {} ({:?})", result.exit_code, elapsed);
        if !result.stdout.is_empty() {
            println!("[STDOUT] {}", truncate(&result.stdout, 500));
        }
        if !result.stderr.is_empty() {
            println!("[STDERR] {}", result.stderr);
        }

        let summary = if result.success {
            format!("OK ({})", truncate(&result.stdout, 50))
        } else {
            format!("FAIL: {}", truncate(&result.stderr, 100))
        };

        self.step_results.push(StepResult {
            name: step_name,
            success: result.success,
            duration: elapsed,
            output_summary: summary,
        });

        result
    }

    /// Run the skillkit binary and capture output.
    pub fn run_skillkit(&mut self, args: &[&str]) -> CommandOutput {
        self.run_skillkit_with_env(args, &[])
    }

    /// Path relative to the fixture root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Overwrite a file under the root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        println!("[FILE] Wrote {relative} ({} bytes)", content.len());
    }

    /// Sorted entry names of a `.skill` archive.
    pub fn archive_entries(&self, archive: &Path) -> Vec<String> {
        let file = File::open(archive).expect("Failed to open archive");
        let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        println!("[ARCHIVE] {} entries", names.len());
        names
    }

    /// Assert command succeeded.
    pub fn assert_success(&self, output: &CommandOutput, operation: &str) {
        assert!(
            output.success,
            "[E2E] {} failed with exit code {}: {}",
            operation, output.exit_code, output.stderr
        );
        println!("[ASSERT] {operation} - SUCCESS ({:?})", output.elapsed);
    }

    /// Assert command exited with a specific code.
    pub fn assert_exit_code(&self, output: &CommandOutput, expected: i32, operation: &str) {
        assert_eq!(
            output.exit_code, expected,
            "[E2E] {} exited with {} (expected {})\nStdout: {}\nStderr: {}",
            operation,
            output.exit_code,
            expected,
            truncate(&output.stdout, 500),
            truncate(&output.stderr, 500)
        );
        println!("[ASSERT] {operation} exit code {expected} - PASSED");
    }

    /// Assert output contains expected text.
    pub fn assert_output_contains(&self, output: &CommandOutput, expected: &str) {
        let found = output.stdout.contains(expected) || output.stderr.contains(expected);
        assert!(
            found,
            "[E2E] Output does not contain '{}'\nStdout: {}\nStderr: {}",
            expected,
            truncate(&output.stdout, 500),
            truncate(&output.stderr, 500)
        );
        println!("[ASSERT] Output contains '{expected}' - PASSED");
    }

    /// Generate final test report.
    pub fn generate_report(&self) {
        let total_time = self.start_time.elapsed();

        println!();
        println!("{}", "█".repeat(70));
        println!("█ E2E REPORT: {}", self.scenario_name);
        println!("{}", "█".repeat(70));
        println!();

        println!("SUMMARY");
        println!("───────────────────────────────────────────────────");
        println!("Total Steps: {}", self.step_count);
        println!("Checkpoints: {}", self.checkpoints.len());
        println!("Total Time:  {total_time:?}");
        println!();

        println!("STEP RESULTS");
        println!("───────────────────────────────────────────────────");
        for (i, step) in self.step_results.iter().enumerate() {
            let status = if step.success { "✓" } else { "✗" };
            println!("{:2}. {} {} ({:?})", i + 1, status, step.name, step.duration);
            if !step.success {
                println!("     └─ {}", step.output_summary);
            }
        }
        println!();

        println!("CHECKPOINTS");
        println!("───────────────────────────────────────────────────");
        for checkpoint in &self.checkpoints {
            println!(
                "  [{:?}] {} (step {}, {} files)",
                checkpoint.timestamp,
                checkpoint.name,
                checkpoint.step_count,
                checkpoint.files_created.len()
            );
        }
        println!();
        println!("{}", "█".repeat(70));
    }
}

impl Drop for E2EFixture {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        println!();
        println!("{}", "█".repeat(70));
        println!("█ E2E CLEANUP: {}", self.scenario_name);
        println!("█ Total time: {elapsed:?}");
        println!("█ Temp dir: {:?}", self.temp_dir.path());
        println!("{}", "█".repeat(70));
    }
}

/// Command output structure.
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl CommandOutput {
    /// Parse stdout as JSON (robot mode).
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout is not valid JSON")
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
