// src/config.rs

use chrono::{NaiveDate, Utc};
use std::{env, path::PathBuf};
use url::Url;

use crate::error::{ReportError, Result};

/// Published CSV export of the bookings sheet.
pub static DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vQw.../pub?gid=0&single=true&output=csv";
pub static DEFAULT_OUT_DIR: &str = "report";

pub const ENV_SHEET_URL: &str = "REPORT_SHEET_URL";
pub const ENV_OUT_DIR: &str = "REPORT_OUT_DIR";
pub const ENV_TODAY: &str = "REPORT_TODAY";
pub const ENV_FORMATS: &str = "REPORT_FORMATS";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub sheet_url: Url,
    pub out_dir: PathBuf,
    /// Reference date for the "today" tile.
    pub today: NaiveDate,
    pub formats: Vec<OutputFormat>,
}

impl Config {
    /// Build from the process environment. `url_arg` (the first CLI
    /// argument) takes precedence over `REPORT_SHEET_URL`.
    pub fn from_env(url_arg: Option<String>) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), url_arg)
    }

    pub fn from_lookup<F>(lookup: F, url_arg: Option<String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = url_arg
            .or_else(|| lookup(ENV_SHEET_URL))
            .unwrap_or_else(|| DEFAULT_SHEET_URL.to_string());
        let sheet_url = Url::parse(&raw_url).map_err(|e| ReportError::InvalidUrl(raw_url, e))?;

        let out_dir = lookup(ENV_OUT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        let today = match lookup(ENV_TODAY) {
            Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|_| ReportError::InvalidDate(s))?,
            None => Utc::now().date_naive(),
        };

        let formats = match lookup(ENV_FORMATS) {
            Some(list) => parse_formats(&list)?,
            None => vec![OutputFormat::Html, OutputFormat::Json],
        };

        Ok(Self {
            sheet_url,
            out_dir,
            today,
            formats,
        })
    }
}

fn parse_formats(list: &str) -> Result<Vec<OutputFormat>> {
    let mut out = Vec::new();
    for part in list.split(',').filter(|p| !p.trim().is_empty()) {
        let f = OutputFormat::from_str(part)
            .ok_or_else(|| ReportError::UnknownFormat(part.trim().to_string()))?;
        if !out.contains(&f) {
            out.push(f);
        }
    }
    Ok(out)
}
