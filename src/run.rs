use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::cli::CliOptions;
use crate::config::Config;
use crate::console::Summary;
use crate::logfile::{FilterError, FilterRequest, FilterResult, TimeWindow, read_filtered, resolve_log_path};
use crate::report::Reporter;
use crate::types::AppName;

/// What a completed run produced
#[derive(Debug)]
pub struct RunOutcome {
    pub path: PathBuf,
    pub result: FilterResult,
    /// `None` when reporting was not requested
    pub reported: Option<bool>,
}

/// Turn command line options into a validated filter request.
///
/// Fails on a reversed time range or a bad keyword, so nothing is read
/// for an invalid query.
pub fn build_request(
    options: &CliOptions,
    config: &Config,
    today: NaiveDate,
) -> Result<FilterRequest, FilterError> {
    let window = TimeWindow::new(options.start, options.end)?;

    let path = match &options.file {
        Some(file) => file.clone(),
        None => resolve_log_path(
            &config.path.log_root,
            &AppName::new(options.app.as_str()),
            options.end,
            today,
        ),
    };

    Ok(
        FilterRequest::new(path, &options.keyword, window, options.keyword_mode())?
            .with_context_lines(options.lines)
            .with_highlight(config.log.highlight()),
    )
}

pub async fn run(options: CliOptions, config: Config) -> Result<RunOutcome> {
    let today = Local::now().date_naive();
    let request = build_request(&options, &config, today).context("Invalid query")?;

    tracing::info!(
        "Searching {} for {:?} between {} and {}",
        request.path().display(),
        request.keyword(),
        request.window().start(),
        request.window().end()
    );

    let result = read_filtered(&request)?;
    let path = request.path().to_path_buf();
    let file_name = path.display().to_string();
    let log_size = result.size().label();
    let text = result.text();

    let summary = Summary {
        app_name: &options.app,
        zone: &options.namespace,
        log_size: &log_size,
        log_file: &file_name,
        log_info: &text,
    };
    print!("{summary}");

    let reported = if options.report {
        let reporter = Reporter::new(&options.api_server, &config.report)?;
        let accepted = reporter
            .report(&options.app, &options.namespace, &log_size, &file_name, &text)
            .await;
        println!("send report to api {}", options.api_server);
        Some(accepted)
    } else {
        println!("don't send report to api");
        None
    };

    Ok(RunOutcome {
        path,
        result,
        reported,
    })
}
