#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use tokio::sync::Mutex;

    use glog::config::{Config, ReportConfig};
    use glog::logfile::{FilterError, FilterRequest, KeywordMode, TimeWindow, parse_timestamp, read_filtered};
    use glog::report::Reporter;
    use glog::run::run;
    use glog::CliOptions;

    const SAMPLE: &str = "2023-01-01 10:00:00 hello\n\
                          2023-01-01 10:00:01 world\n\
                          2023-01-01 10:00:02 hello again\n";

    type Received = Arc<Mutex<Vec<Value>>>;

    fn write_log(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn options(file: &std::path::Path, start: &str, end: &str) -> CliOptions {
        CliOptions {
            app: "orders".to_string(),
            namespace: "prod".to_string(),
            keyword: "hello".to_string(),
            start: parse_timestamp(start).unwrap(),
            end: parse_timestamp(end).unwrap(),
            file: Some(file.to_path_buf()),
            lines: 1,
            report: false,
            api_server: "127.0.0.1:1".to_string(),
            regex: false,
        }
    }

    async fn accept(State(received): State<Received>, Json(body): Json<Value>) -> &'static str {
        received.lock().await.push(body);
        "accepted"
    }

    async fn reject() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Start a collection server and return its `host:port` and captured bodies
    async fn spawn_server() -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route("/report", post(accept))
            .route("/reject", post(reject))
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (addr.to_string(), received)
    }

    #[test]
    fn test_read_filtered_from_disk() {
        let file = write_log(SAMPLE);
        let window = TimeWindow::parse("2023-01-01 10:00:00", "2023-01-01 10:00:02").unwrap();
        let request = FilterRequest::new(file.path(), "hello", window, KeywordMode::Literal)
            .unwrap()
            .with_context_lines(1);

        let result = read_filtered(&request).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.lines()[0].contains("\x1b[1;31;40mhello\x1b[0m"));
        assert_eq!(result.lines()[1], "2023-01-01 10:00:01 world\n");
        assert!(result.lines()[2].contains("\x1b[1;31;40mhello\x1b[0m again"));
        assert_eq!(result.size().label(), "0K");
    }

    #[test]
    fn test_every_selected_line_is_in_window() {
        let mut contents = String::new();
        for second in 0..60 {
            let word = if second % 7 == 0 { "hello" } else { "noise" };
            contents.push_str(&format!("2023-01-01 10:00:{second:02} {word}\n"));
        }
        let file = write_log(&contents);
        let window = TimeWindow::parse("2023-01-01 10:00:10", "2023-01-01 10:00:40").unwrap();
        let request = FilterRequest::new(file.path(), "hello", window, KeywordMode::Literal)
            .unwrap()
            .with_context_lines(2);

        let result = read_filtered(&request).unwrap();
        assert!(!result.is_empty());
        for line in result.lines() {
            let ts = glog::logfile::line_timestamp(line).unwrap();
            assert!(window.contains(&ts), "{line:?} outside window");
        }
        // Matches at :14, :21, :28, :35 each followed by two context lines
        assert_eq!(result.len(), 12);
    }

    #[test]
    fn test_file_size_in_kilobytes() {
        let line = "2023-01-01 10:00:00 padding padding padding padding padding\n";
        let file = write_log(&line.repeat(3000 / line.len() + 1));
        let window = TimeWindow::parse("2023-01-01 10:00:00", "2023-01-01 10:00:00").unwrap();
        let request = FilterRequest::new(file.path(), "absent", window, KeywordMode::Literal).unwrap();

        let result = read_filtered(&request).unwrap();
        let bytes = std::fs::metadata(file.path()).unwrap().len();
        assert_eq!(result.size().inner(), bytes / 1024);
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let window = TimeWindow::parse("2023-01-01 10:00:00", "2023-01-01 10:00:02").unwrap();

        let request = FilterRequest::new(dir.path().join("nope.log"), "hello", window, KeywordMode::Literal)
            .unwrap();
        assert!(matches!(read_filtered(&request), Err(FilterError::NotFound { .. })));

        let request = FilterRequest::new(dir.path(), "hello", window, KeywordMode::Literal).unwrap();
        assert!(matches!(read_filtered(&request), Err(FilterError::IsDirectory { .. })));
    }

    #[tokio::test]
    async fn test_reversed_range_never_reads() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.log");
        let opts = options(&missing, "2023-01-01 10:00:02", "2023-01-01 10:00:00");

        let err = run(opts, Config::default()).await.unwrap_err();
        let filter_err = err.downcast_ref::<FilterError>().unwrap();
        assert!(matches!(filter_err, FilterError::InvalidRange { .. }));
    }

    #[tokio::test]
    async fn test_run_without_report() {
        let file = write_log(SAMPLE);
        let opts = options(file.path(), "2023-01-01 10:00:01", "2023-01-01 10:00:01");

        let outcome = run(opts, Config::default()).await.unwrap();
        assert!(outcome.result.is_empty());
        assert_eq!(outcome.reported, None);
        assert_eq!(outcome.path, file.path());
    }

    #[tokio::test]
    async fn test_run_reports_payload() {
        let (addr, received) = spawn_server().await;
        let file = write_log(SAMPLE);
        let mut opts = options(file.path(), "2023-01-01 10:00:00", "2023-01-01 10:00:02");
        opts.report = true;
        opts.api_server = format!("{addr}/report");

        let outcome = run(opts, Config::default()).await.unwrap();
        assert_eq!(outcome.reported, Some(true));

        let bodies = received.lock().await;
        assert_eq!(bodies.len(), 1);
        let body = bodies[0].as_object().unwrap();
        assert_eq!(body.len(), 5);
        assert_eq!(body["appname"], "orders");
        assert_eq!(body["zone"], "prod");
        assert_eq!(body["logsize"], "0K");
        assert_eq!(body["logfile"], file.path().display().to_string());
        assert_eq!(body["loginfo"], outcome.result.text());
    }

    #[tokio::test]
    async fn test_report_non_200_is_failure() {
        let (addr, received) = spawn_server().await;
        let reporter = Reporter::new(&format!("{addr}/reject"), &ReportConfig::default()).unwrap();

        let accepted = reporter.report("orders", "prod", "1K", "orders.log", "line\n").await;
        assert!(!accepted);
        assert!(received.lock().await.is_empty());
    }
}
