use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::logfile::FilterError;
use crate::logfile::line::KeywordMatcher;

/// Layout of the timestamp every log line starts with
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Byte width of a formatted timestamp
pub const TIMESTAMP_WIDTH: usize = 19;

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, FilterError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        FilterError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
    })
}

/// How the keyword is interpreted when matching lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMode {
    /// Plain substring, metacharacters have no special meaning
    #[default]
    Literal,
    /// Regular expression
    Regex,
}

/// How keyword occurrences are marked in selected lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Bold red on black ANSI escapes
    #[default]
    Ansi,
    /// Leave matching lines untouched
    Plain,
}

/// Inclusive time range a line must fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds in `YYYY-MM-DD HH:MM:SS` form
    pub fn parse(start: &str, end: &str) -> Result<Self, FilterError> {
        Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }
}

/// Everything needed to filter one log file
#[derive(Debug, Clone)]
pub struct FilterRequest {
    path: PathBuf,
    keyword: String,
    window: TimeWindow,
    context_lines: usize,
    matcher: KeywordMatcher,
}

impl FilterRequest {
    /// Build a request with no trailing context and ANSI highlighting.
    ///
    /// The keyword is compiled here, so an empty or invalid pattern is
    /// rejected before any file is opened.
    pub fn new(
        path: impl Into<PathBuf>,
        keyword: &str,
        window: TimeWindow,
        mode: KeywordMode,
    ) -> Result<Self, FilterError> {
        let matcher = KeywordMatcher::new(keyword, mode)?;
        Ok(Self {
            path: path.into(),
            keyword: keyword.to_string(),
            window,
            context_lines: 0,
            matcher,
        })
    }

    /// Number of non-matching lines to keep after each match
    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.matcher = self.matcher.with_highlight(highlight);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }
}
