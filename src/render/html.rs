// src/render/html.rs

use serde_json::{json, Value};
use std::fmt::Write;
use tracing::debug;

use super::{Artifact, ChartSeries, Charts, Renderer, StatTiles, TableRow};
use crate::error::Result;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";
const BAR_PALETTE: [&str; 4] = ["#f39c12", "#e74c3c", "#2ecc71", "#9b59b6"];

/// Renders a static `index.html` dashboard: stat tiles, two Chart.js
/// canvases and the reservations table.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    stats: String,
    charts: String,
    table: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn bar_config(series: &ChartSeries) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": series.labels(),
            "datasets": [{
                "label": series.title,
                "data": series.values(),
                "backgroundColor": BAR_PALETTE,
            }]
        },
        "options": {
            "responsive": true,
            "plugins": { "legend": { "display": false } }
        }
    })
}

fn line_config(series: &ChartSeries) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": series.labels(),
            "datasets": [{
                "label": series.title,
                "data": series.values(),
                "borderColor": "#3498db",
                "backgroundColor": "rgba(52, 152, 219, 0.2)",
                "fill": true,
                "tension": 0.3,
            }]
        },
        "options": {
            "responsive": true,
            "plugins": {
                "legend": { "display": true },
                "tooltip": { "enabled": true }
            }
        }
    })
}

/// JSON is embedded in a `<script>`; keep `</script>` out of it.
fn script_json(v: &Value) -> Result<String> {
    Ok(serde_json::to_string(v)?.replace("</", "<\\/"))
}

impl Renderer for HtmlRenderer {
    fn render_stats(&mut self, stats: &StatTiles) -> Result<()> {
        let tiles = [
            ("reservas-hoy", "Reservas de hoy", stats.today_count),
            ("confirmadas", "Confirmadas", stats.confirmed_count),
            ("pendientes", "Pendientes", stats.pending_count),
            ("canceladas", "Canceladas", stats.cancelled_count),
        ];
        self.stats.clear();
        self.stats.push_str("<section class=\"stats\">\n");
        for (id, label, value) in tiles {
            writeln!(
                self.stats,
                "  <div class=\"stat\"><h3>{}</h3><p id=\"{}\">{}</p></div>",
                label, id, value
            )?;
        }
        self.stats.push_str("</section>\n");
        Ok(())
    }

    fn render_charts(&mut self, charts: &Charts) -> Result<()> {
        let bar = script_json(&bar_config(&charts.services))?;
        let line = script_json(&line_config(&charts.monthly))?;

        self.charts.clear();
        self.charts.push_str(
            "<section class=\"charts\">\n  <canvas id=\"chartServicios\"></canvas>\n  <canvas id=\"chartMensual\"></canvas>\n</section>\n",
        );
        writeln!(self.charts, "<script src=\"{}\"></script>", CHART_JS_CDN)?;
        writeln!(
            self.charts,
            "<script>\nnew Chart(document.getElementById('chartServicios').getContext('2d'), {});\nnew Chart(document.getElementById('chartMensual').getContext('2d'), {});\n</script>",
            bar, line
        )?;
        Ok(())
    }

    fn render_table(&mut self, rows: &[TableRow]) -> Result<()> {
        self.table.clear();
        self.table.push_str(
            "<table class=\"reservations\">\n<thead><tr><th>Fecha</th><th>Hora</th><th>Servicio</th><th>Estado</th><th>Acciones</th></tr></thead>\n<tbody id=\"reservations-table-body\">\n",
        );
        for row in rows {
            write!(
                self.table,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>",
                escape_html(&row.date),
                escape_html(&row.time),
                escape_html(&row.service),
                escape_html(&row.status),
            )?;
            for action in row.actions {
                write!(
                    self.table,
                    "<button class=\"action-btn\">{}</button>",
                    action
                )?;
            }
            self.table.push_str("</td></tr>\n");
        }
        self.table.push_str("</tbody>\n</table>\n");
        debug!(rows = rows.len(), "rendered table");
        Ok(())
    }

    fn finish(&mut self) -> Result<Artifact> {
        let mut page = String::from(
            "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n<title>Reservas</title>\n</head>\n<body>\n",
        );
        page.push_str(&self.stats);
        page.push_str(&self.table);
        page.push_str(&self.charts);
        page.push_str("</body>\n</html>\n");
        Ok(Artifact {
            file_name: "index.html",
            contents: page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ChartKind, ROW_ACTIONS};
    use scraper::{Html, Selector};

    fn row(date: &str, service: &str, status: &str) -> TableRow {
        TableRow {
            date: date.to_string(),
            time: "10:00".to_string(),
            service: service.to_string(),
            status: status.to_string(),
            actions: ROW_ACTIONS,
        }
    }

    fn text_of(doc: &Html, css: &str) -> Vec<String> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel)
            .map(|e| e.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_stat_tiles_use_dashboard_ids() {
        let mut r = HtmlRenderer::new();
        r.render_stats(&StatTiles {
            total_count: 9,
            today_count: 1,
            confirmed_count: 2,
            pending_count: 3,
            cancelled_count: 4,
        })
        .unwrap();
        let page = r.finish().unwrap();
        assert_eq!(page.file_name, "index.html");

        let doc = Html::parse_document(&page.contents);
        assert_eq!(text_of(&doc, "#reservas-hoy"), vec!["1"]);
        assert_eq!(text_of(&doc, "#confirmadas"), vec!["2"]);
        assert_eq!(text_of(&doc, "#pendientes"), vec!["3"]);
        assert_eq!(text_of(&doc, "#canceladas"), vec!["4"]);
    }

    #[test]
    fn test_table_rows_are_escaped() {
        let mut r = HtmlRenderer::new();
        r.render_table(&[
            row("2024-01-05 10:00", "Corte", "Completado"),
            row("2024-01-06 11:00", "<script>alert(1)</script>", "Pendiente"),
        ])
        .unwrap();
        let page = r.finish().unwrap();
        assert!(!page.contents.contains("<script>alert(1)</script>"));

        let doc = Html::parse_document(&page.contents);
        let rows = Selector::parse("#reservations-table-body tr").unwrap();
        assert_eq!(doc.select(&rows).count(), 2);
        assert_eq!(
            text_of(&doc, "#reservations-table-body tr td:nth-child(3)"),
            vec!["Corte", "<script>alert(1)</script>"]
        );
        assert_eq!(
            text_of(&doc, "#reservations-table-body button.action-btn"),
            vec!["Editar", "Eliminar", "Editar", "Eliminar"]
        );
    }

    #[test]
    fn test_chart_configs_embedded() {
        let charts = Charts {
            services: ChartSeries {
                title: "Servicios más solicitados".into(),
                kind: ChartKind::Bar,
                points: vec![("Corte".into(), 2), ("Tinte".into(), 1)],
            },
            monthly: ChartSeries {
                title: "Reservas Mensuales".into(),
                kind: ChartKind::Line,
                points: vec![("1-2024".into(), 3)],
            },
        };
        let mut r = HtmlRenderer::new();
        r.render_charts(&charts).unwrap();
        let page = r.finish().unwrap();

        let doc = Html::parse_document(&page.contents);
        let canvases = Selector::parse("canvas").unwrap();
        let ids: Vec<_> = doc
            .select(&canvases)
            .filter_map(|e| e.value().attr("id"))
            .collect();
        assert_eq!(ids, vec!["chartServicios", "chartMensual"]);

        assert!(page.contents.contains(r#""labels":["Corte","Tinte"]"#));
        assert!(page.contents.contains(r#""data":[2,1]"#));
        assert!(page.contents.contains(r#""labels":["1-2024"]"#));
        assert!(page.contents.contains(r##""borderColor":"#3498db""##));
    }

    #[test]
    fn test_script_json_cannot_close_script() {
        let v = json!({ "label": "</script><b>" });
        let s = script_json(&v).unwrap();
        assert!(!s.contains("</script>"));
    }
}
