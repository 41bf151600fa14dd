use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::AppName;

/// Default location of application log directories
pub const DEFAULT_LOG_ROOT: &str = "/wls/applications";

/// Locate an application's log file for the day the query ends on.
///
/// Today's log is `<root>/<app>/logs/<app>.log`; earlier days are rotated
/// to `<root>/<app>/logs/<app>.log.<YYYY-MM-DD>.log`.
pub fn resolve_log_path(root: &Path, app: &AppName, end: NaiveDateTime, today: NaiveDate) -> PathBuf {
    let end_date = end.date();
    let name = if end_date == today {
        app.to_string()
    } else {
        format!("{app}.log.{}", end_date.format("%Y-%m-%d"))
    };

    root.join(app.as_str()).join("logs").join(format!("{name}.log"))
}
