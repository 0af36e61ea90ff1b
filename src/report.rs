// src/report.rs

use reqwest::Client;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::fetch::fetch_csv;
use crate::process::{aggregate, parse_csv, Record, Summary};
use crate::render::{render_report, Artifact, HtmlRenderer, JsonRenderer, Renderer};

/// One fetch cycle's parsed rows and their aggregate.
#[derive(Debug, Clone)]
pub struct Report {
    pub records: Vec<Record>,
    pub summary: Summary,
}

/// Fetches the sheet, parses it, aggregates it and renders the outputs.
pub struct ReportBuilder {
    client: Client,
    config: Config,
}

impl ReportBuilder {
    pub fn new(config: Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Fetch and aggregate. Every call starts from fresh counters.
    #[instrument(level = "info", skip(self), fields(url = %self.config.sheet_url))]
    pub async fn build(&self) -> Result<Report> {
        let text = fetch_csv(&self.client, &self.config.sheet_url).await?;
        Ok(Self::build_from_text(&text, &self.config))
    }

    /// Parse + aggregate already fetched CSV text.
    pub fn build_from_text(text: &str, config: &Config) -> Report {
        let records = parse_csv(text);
        let summary = aggregate(&records, config.today);
        info!(
            rows = records.len(),
            today = summary.today,
            confirmed = summary.confirmed,
            pending = summary.pending,
            cancelled = summary.cancelled,
            "built report"
        );
        Report { records, summary }
    }

    /// Render `report` with every configured output format.
    pub fn render(&self, report: &Report) -> Result<Vec<Artifact>> {
        self.config
            .formats
            .iter()
            .map(|format| {
                debug!(format = format.as_str(), "rendering");
                let mut renderer: Box<dyn Renderer> = match format {
                    OutputFormat::Html => Box::new(HtmlRenderer::new()),
                    OutputFormat::Json => Box::new(JsonRenderer::new()),
                };
                render_report(renderer.as_mut(), &report.summary, &report.records)
            })
            .collect()
    }

    /// Full cycle: fetch, aggregate, render and write the artifacts into
    /// the output directory. Returns the written paths.
    pub async fn run(&self) -> Result<Vec<PathBuf>> {
        let report = self.build().await?;
        let artifacts = self.render(&report)?;

        fs::create_dir_all(&self.config.out_dir).await?;
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.config.out_dir.join(artifact.file_name);
            fs::write(&path, artifact.contents.as_bytes()).await?;
            info!(path = %path.display(), "wrote");
            written.push(path);
        }
        Ok(written)
    }
}
