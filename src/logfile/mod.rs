mod error;
mod line;
mod path;
mod reader;
mod request;

pub use error::FilterError;
pub use line::{HIGHLIGHT_END, HIGHLIGHT_START, KeywordMatcher, line_timestamp};
pub use path::{DEFAULT_LOG_ROOT, resolve_log_path};
pub use reader::{FilterResult, LineSelector, Selection, check_path, file_size, filter_lines, read_filtered};
pub use request::{
    FilterRequest, Highlight, KeywordMode, TIMESTAMP_FORMAT, TIMESTAMP_WIDTH, TimeWindow,
    parse_timestamp,
};
