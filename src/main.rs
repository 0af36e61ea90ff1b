use anyhow::{Context, Result};
use bookings_report::{Config, ReportBuilder};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::from_env(env::args().nth(1)).context("reading configuration")?;
    info!(
        url = %config.sheet_url,
        out_dir = %config.out_dir.display(),
        today = %config.today,
        "configured"
    );

    // ─── 3) fetch, aggregate, render ─────────────────────────────────
    let written = ReportBuilder::new(config)
        .run()
        .await
        .context("building bookings report")?;

    info!(files = written.len(), "all done");
    Ok(())
}
