//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for throwaway home directories
pub struct HomeDirBuilder {
    temp_dir: TempDir,
}

impl HomeDirBuilder {
    /// Create a new builder with an empty home directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the home directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a .bash_history with one line per entry
    pub fn with_history_lines(self, lines: &[&str]) -> Self {
        let content: String = lines.iter().map(|l| format!("{}\n", l)).collect();
        self.with_history(&content)
    }

    /// Add a .bash_history with the given raw content
    pub fn with_history(self, content: &str) -> Self {
        self.with_file(".bash_history", content)
    }

    /// Add a regular file with the given content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Add several server log files
    pub fn with_logs(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.with_file(name, "log line\n");
        }
        self
    }

    /// Add a subdirectory
    pub fn with_dir(self, name: &str) -> Self {
        fs::create_dir(self.temp_dir.path().join(name)).expect("Failed to create dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the history file of `home` as lines
pub fn history_lines(home: &Path) -> Vec<String> {
    fs::read_to_string(home.join(".bash_history"))
        .expect("Failed to read .bash_history")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Sorted file names directly under `home`
pub fn entry_names(home: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(home)
        .expect("Failed to read home dir")
        .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
