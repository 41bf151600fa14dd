use std::borrow::Cow;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};

use crate::logfile::FilterError;
use crate::logfile::request::{
    Highlight, KeywordMode, TIMESTAMP_FORMAT, TIMESTAMP_WIDTH, parse_timestamp,
};

pub const HIGHLIGHT_START: &str = "\x1b[1;31;40m";
pub const HIGHLIGHT_END: &str = "\x1b[0m";

/// Timestamp at the start of a log line, if the line has one.
///
/// The prefix must be exactly `YYYY-MM-DD HH:MM:SS`: the parser alone
/// tolerates padding and single-digit fields, which would misread
/// indented or irregular lines.
pub fn line_timestamp(line: &str) -> Option<NaiveDateTime> {
    let prefix = line.get(..TIMESTAMP_WIDTH)?;
    let timestamp = parse_timestamp(prefix).ok()?;
    (timestamp.format(TIMESTAMP_FORMAT).to_string() == prefix).then_some(timestamp)
}

/// Compiled keyword used both to test lines and to mark occurrences
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    regex: Regex,
    highlight: Highlight,
}

impl KeywordMatcher {
    pub fn new(keyword: &str, mode: KeywordMode) -> Result<Self, FilterError> {
        if keyword.is_empty() {
            return Err(FilterError::EmptyKeyword);
        }

        let pattern = match mode {
            KeywordMode::Literal => regex::escape(keyword),
            KeywordMode::Regex => keyword.to_string(),
        };

        let regex = Regex::new(&pattern).map_err(|source| FilterError::InvalidKeyword {
            keyword: keyword.to_string(),
            source,
        })?;

        // A pattern like `a*` would select and mark every line
        if regex.is_match("") {
            return Err(FilterError::EmptyMatch {
                keyword: keyword.to_string(),
            });
        }

        Ok(Self {
            regex,
            highlight: Highlight::default(),
        })
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Wrap every occurrence of the keyword with the highlight marker
    pub fn highlight<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self.highlight {
            Highlight::Plain => Cow::Borrowed(line),
            Highlight::Ansi => self.regex.replace_all(line, |caps: &Captures| {
                format!("{HIGHLIGHT_START}{}{HIGHLIGHT_END}", &caps[0])
            }),
        }
    }
}
