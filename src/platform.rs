//! Platform gate evaluated once at startup.

use std::env::consts::OS;

/// Whether the maintenance pass applies to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    /// Host has no bash history or home-directory server logs to manage
    NotApplicable,
}

impl Gate {
    /// Gate for the running host
    pub fn detect() -> Self {
        Self::for_os(OS)
    }

    /// Gate for an OS identifier as reported by [`std::env::consts::OS`]
    pub fn for_os(os: &str) -> Self {
        if os.eq_ignore_ascii_case("windows") { Gate::NotApplicable } else { Gate::Proceed }
    }
}
