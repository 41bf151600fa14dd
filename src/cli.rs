use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;

use crate::logfile::{KeywordMode, parse_timestamp};

/// Default collection server for `-r`
pub const DEFAULT_API_SERVER: &str = "glog.bobtthp.com";

/// glog - search an application log by time range and keyword
#[derive(Parser, Debug, Clone)]
#[command(name = "glog")]
#[command(author, version, about, long_about = None)]
pub struct CliOptions {
    /// Application name
    #[arg(short = 'a', value_name = "APP")]
    pub app: String,

    /// Namespace (zone) the application runs in
    #[arg(short = 'n', value_name = "NAMESPACE")]
    pub namespace: String,

    /// Keyword to search for
    #[arg(short = 'k', value_name = "KEYWORD")]
    pub keyword: String,

    /// Beginning of the query, "YYYY-MM-DD HH:MM:SS"
    #[arg(short = 's', value_name = "STARTTIME", value_parser = parse_time_arg)]
    pub start: NaiveDateTime,

    /// End of the query, "YYYY-MM-DD HH:MM:SS"
    #[arg(short = 'e', value_name = "ENDTIME", value_parser = parse_time_arg)]
    pub end: NaiveDateTime,

    /// Log file to read (derived from the app name and end date if omitted)
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Lines to keep after each keyword match
    #[arg(short = 'l', value_name = "LINES", default_value_t = 10)]
    pub lines: usize,

    /// Report the result to the api server
    #[arg(short = 'r')]
    pub report: bool,

    /// Api server address
    #[arg(long = "api", value_name = "ADDR", default_value = DEFAULT_API_SERVER)]
    pub api_server: String,

    /// Treat the keyword as a regular expression
    #[arg(long)]
    pub regex: bool,
}

impl CliOptions {
    /// Parse the process arguments, printing usage and exiting on error
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn keyword_mode(&self) -> KeywordMode {
        if self.regex {
            KeywordMode::Regex
        } else {
            KeywordMode::Literal
        }
    }
}

fn parse_time_arg(value: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(value).map_err(|e| e.to_string())
}
