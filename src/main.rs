use anyhow::Result;
use glog::{CliOptions, Config, run};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let options = CliOptions::from_args();
    let config = Config::from_env()?;

    init_tracing(&config.log.rust_log);

    tracing::debug!("Parsed CLI options: {options:?}");

    run::run(options, config).await.inspect_err(|e| {
        tracing::error!("Run failed: {e:#}");
    })?;

    Ok(())
}

fn init_tracing(directives: &str) {
    let env_filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
