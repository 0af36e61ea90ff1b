// src/render/mod.rs

//! Data handed across the rendering boundary, and the renderers that
//! consume it.

pub mod html;
pub mod json;

use serde::Serialize;

use crate::error::Result;
use crate::process::aggregate::{COL_DATE, COL_SERVICE, COL_STATUS, COL_TIME};
use crate::process::{Grouping, Record, Summary};

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

/// Placeholder actions shown next to every table row.
pub const ROW_ACTIONS: [&str; 2] = ["Editar", "Eliminar"];

/// Scalar counters for the stat tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTiles {
    pub total_count: usize,
    pub today_count: usize,
    pub confirmed_count: usize,
    pub pending_count: usize,
    pub cancelled_count: usize,
}

impl From<&Summary> for StatTiles {
    fn from(s: &Summary) -> Self {
        Self {
            total_count: s.total,
            today_count: s.today,
            confirmed_count: s.confirmed,
            pending_count: s.pending,
            cancelled_count: s.cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// One chart's worth of `(label, count)` points, in grouping order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<(String, usize)>,
}

impl ChartSeries {
    pub fn from_grouping(title: &str, kind: ChartKind, grouping: &Grouping) -> Self {
        Self {
            title: title.to_string(),
            kind,
            points: grouping.iter().map(|(l, c)| (l.to_string(), c)).collect(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn values(&self) -> Vec<usize> {
        self.points.iter().map(|(_, c)| *c).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Charts {
    /// Bar chart: bookings per service label.
    pub services: ChartSeries,
    /// Line chart: bookings per `month-year`, first-seen order.
    pub monthly: ChartSeries,
}

impl From<&Summary> for Charts {
    fn from(s: &Summary) -> Self {
        Self {
            services: ChartSeries::from_grouping(
                "Servicios más solicitados",
                ChartKind::Bar,
                &s.by_service,
            ),
            monthly: ChartSeries::from_grouping(
                "Reservas Mensuales",
                ChartKind::Line,
                &s.by_month_year,
            ),
        }
    }
}

/// One booking as shown in the reservations table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub time: String,
    pub service: String,
    pub status: String,
    pub actions: [&'static str; 2],
}

impl From<&Record> for TableRow {
    fn from(r: &Record) -> Self {
        Self {
            date: r.get(COL_DATE).to_string(),
            time: r.get(COL_TIME).to_string(),
            service: r.get(COL_SERVICE).to_string(),
            status: r.get(COL_STATUS).to_string(),
            actions: ROW_ACTIONS,
        }
    }
}

/// A rendered output, ready to be written under the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub contents: String,
}

/// Rendering collaborator. Each `render_*` call replaces what the previous
/// call for the same section produced; `finish` assembles the artifact.
pub trait Renderer {
    fn render_stats(&mut self, stats: &StatTiles) -> Result<()>;
    fn render_charts(&mut self, charts: &Charts) -> Result<()>;
    fn render_table(&mut self, rows: &[TableRow]) -> Result<()>;
    fn finish(&mut self) -> Result<Artifact>;
}

/// Drive `renderer` through stats, charts and table, then finish it.
pub fn render_report(
    renderer: &mut dyn Renderer,
    summary: &Summary,
    records: &[Record],
) -> Result<Artifact> {
    renderer.render_stats(&StatTiles::from(summary))?;
    renderer.render_charts(&Charts::from(summary))?;
    let rows: Vec<TableRow> = records.iter().map(TableRow::from).collect();
    renderer.render_table(&rows)?;
    renderer.finish()
}
