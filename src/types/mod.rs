use std::fmt;

/// File size in whole kilobytes, rounded down
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SizeKb(pub u64);

impl SizeKb {
    /// Convert a byte count, dropping any partial kilobyte
    pub fn from_bytes(bytes: u64) -> Self {
        Self(bytes / 1024)
    }

    /// Get the inner value
    pub fn inner(&self) -> u64 {
        self.0
    }

    /// Label sent as `logsize` in reports, e.g. `12K`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SizeKb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

/// Newtype for application names used in paths and reports
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(pub String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
