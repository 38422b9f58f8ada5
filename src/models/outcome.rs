use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimOutcome {
    /// History cut after the first sentinel line
    Trimmed { kept: usize, removed: usize },
    /// No sentinel line; file left untouched
    SentinelNotFound,
    /// History file was missing and has been seeded with defaults
    Created,
}

#[derive(Debug)]
pub struct DeleteOutcome {
    pub file_name: String,
    pub result: io::Result<()>,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        self.result.is_ok()
    }
}
