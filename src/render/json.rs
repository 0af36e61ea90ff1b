// src/render/json.rs

use serde_json::{Map, Value};

use super::{Artifact, Charts, Renderer, StatTiles, TableRow};
use crate::error::Result;

/// Renders `summary.json` with the stats, both chart series and the table.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    doc: Map<String, Value>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for JsonRenderer {
    fn render_stats(&mut self, stats: &StatTiles) -> Result<()> {
        self.doc
            .insert("stats".into(), serde_json::to_value(stats)?);
        Ok(())
    }

    fn render_charts(&mut self, charts: &Charts) -> Result<()> {
        self.doc
            .insert("charts".into(), serde_json::to_value(charts)?);
        Ok(())
    }

    fn render_table(&mut self, rows: &[TableRow]) -> Result<()> {
        self.doc.insert("table".into(), serde_json::to_value(rows)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<Artifact> {
        let contents = serde_json::to_string_pretty(&self.doc)?;
        Ok(Artifact {
            file_name: "summary.json",
            contents,
        })
    }
}
