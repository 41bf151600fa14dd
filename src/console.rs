use std::fmt;

const BANNER_WIDTH: usize = 120;

/// Fields shown in the run summary, displayed framed by `#` banners
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    pub app_name: &'a str,
    pub zone: &'a str,
    pub log_size: &'a str,
    pub log_file: &'a str,
    pub log_info: &'a str,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "#".repeat(BANNER_WIDTH);

        writeln!(f, "{banner}\n{banner}\n")?;
        writeln!(f, "appname: {}", self.app_name)?;
        writeln!(f, "zone: {}", self.zone)?;
        writeln!(f, "logsize: {}", self.log_size)?;
        writeln!(f, "logfile: {}", self.log_file)?;
        writeln!(f, "loginfo:")?;
        f.write_str(self.log_info)?;
        if !self.log_info.is_empty() && !self.log_info.ends_with('\n') {
            writeln!(f)?;
        }
        writeln!(f, "\n{banner}\n{banner}")
    }
}
