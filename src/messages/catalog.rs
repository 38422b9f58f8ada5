use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::messages::format::format_template;

/// File name of the catalog, looked up next to the executable
pub const CATALOG_FILE_NAME: &str = "messages.ini";

/// Printed when the catalog file is absent
pub const CATALOG_NOT_FOUND: &str = "messages.ini not found.";

const MESSAGES_HEADER: &str = "[Messages]";

/// Key/value table of user-facing message templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Parse catalog text in the INI-like `messages.ini` format
    ///
    /// Blank lines and lines starting with `;` or `#` are skipped. Only
    /// `key=value` lines after a line starting with `[Messages]` are kept,
    /// until the next `[Section]` header. Each pair is split on the first `=`
    /// and both halves are trimmed. Later keys overwrite earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use home_janitor::MessageCatalog;
    ///
    /// let catalog = MessageCatalog::parse("[Messages]\nLogFileDeleted = Deleted {0}\n");
    /// assert_eq!(catalog.get("LogFileDeleted"), "Deleted {0}");
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        let mut in_messages = false;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            // Text after the header is allowed, e.g. `[Messages] ; english`
            if trimmed.starts_with(MESSAGES_HEADER) {
                in_messages = true;
                continue;
            }

            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                in_messages = false;
                continue;
            }

            if !in_messages {
                continue;
            }

            if let Some((key, value)) = trimmed.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { entries }
    }

    /// Load the catalog from `path`
    ///
    /// Returns `Ok(None)` when the file does not exist, which callers treat
    /// as "use fallback text". Bytes that are not valid UTF-8 are replaced
    /// rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read message catalog: {}", path.display()));
            }
        };

        let catalog = Self::parse(&String::from_utf8_lossy(&bytes));
        tracing::debug!("loaded {} messages from {}", catalog.len(), path.display());
        Ok(Some(catalog))
    }

    /// Look up a template, falling back to a diagnostic naming the key
    pub fn get(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => format!("Message not found: {}", key),
        }
    }

    /// Look up a template and fill its positional placeholders
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        format_template(&self.get(key), args)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
