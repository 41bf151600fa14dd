use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::logfile::line::line_timestamp;
use crate::logfile::{FilterError, FilterRequest};
use crate::types::SizeKb;

/// Lines selected from one log file, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    lines: Vec<String>,
    size: SizeKb,
}

impl FilterResult {
    pub fn new(lines: Vec<String>, size: SizeKb) -> Self {
        Self { lines, size }
    }

    /// Selected lines, each keeping its original line terminator
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All selected lines as one blob
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    pub fn size(&self) -> SizeKb {
        self.size
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Outcome of feeding one line to a [`LineSelector`]
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Keyword found; the line with occurrences marked
    Matched(Cow<'a, str>),
    /// Trailing context after a match, kept verbatim
    Context,
    /// Outside the window, or no match and no context left
    Skipped,
    /// Line lacks a leading timestamp; nothing after it is read
    Unsupported,
}

/// Per-file state for picking matching lines and their trailing context
#[derive(Debug)]
pub struct LineSelector<'r> {
    request: &'r FilterRequest,
    remaining_context: usize,
}

impl<'r> LineSelector<'r> {
    pub fn new(request: &'r FilterRequest) -> Self {
        Self {
            request,
            remaining_context: 0,
        }
    }

    pub fn select<'a>(&mut self, line: &'a str) -> Selection<'a> {
        let Some(timestamp) = line_timestamp(line) else {
            return Selection::Unsupported;
        };

        if !self.request.window().contains(&timestamp) {
            return Selection::Skipped;
        }

        let matcher = self.request.matcher();
        if matcher.is_match(line) {
            self.remaining_context = self.request.context_lines();
            return Selection::Matched(matcher.highlight(line));
        }

        if self.remaining_context > 0 {
            self.remaining_context -= 1;
            return Selection::Context;
        }

        Selection::Skipped
    }
}

/// Run the selection over any line source.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the read.
pub fn filter_lines<R: BufRead>(mut reader: R, request: &FilterRequest) -> io::Result<Vec<String>> {
    let mut selector = LineSelector::new(request);
    let mut selected = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        match selector.select(&line) {
            Selection::Matched(marked) => selected.push(marked.into_owned()),
            Selection::Context => selected.push(line.to_string()),
            Selection::Skipped => {}
            Selection::Unsupported => {
                tracing::warn!("Log format is not supported at line {line_no}, stopping");
                break;
            }
        }
    }

    tracing::debug!(
        "Scanned {line_no} lines, selected {} for keyword {:?}",
        selected.len(),
        request.keyword()
    );
    Ok(selected)
}

/// Make sure the path names an existing regular file
pub fn check_path(path: &Path) -> Result<(), FilterError> {
    let metadata = fs::metadata(path).map_err(|source| io_error(path, source))?;
    if metadata.is_dir() {
        return Err(FilterError::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

pub fn file_size(path: &Path) -> Result<SizeKb, FilterError> {
    let metadata = fs::metadata(path).map_err(|source| io_error(path, source))?;
    Ok(SizeKb::from_bytes(metadata.len()))
}

/// Filter the request's file and report its size.
///
/// The file is read to the end, or to the first line without a timestamp,
/// and closed before this returns.
pub fn read_filtered(request: &FilterRequest) -> Result<FilterResult, FilterError> {
    let path = request.path();
    check_path(path)?;
    let size = file_size(path)?;

    tracing::info!("Reading {} ({size})", path.display());

    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let lines = filter_lines(BufReader::new(file), request).map_err(|source| io_error(path, source))?;

    Ok(FilterResult::new(lines, size))
}

fn io_error(path: &Path, source: io::Error) -> FilterError {
    if source.kind() == io::ErrorKind::NotFound {
        FilterError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        FilterError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
