// src/process/csv.rs

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// One spreadsheet row keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Cell value for `column`, or `""` when the sheet has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a published-sheet CSV export.
///
/// The first line holds the headers; every non-blank line after it becomes a
/// [`Record`]. Fields are split on every `,` with no quote handling, so a
/// comma inside a value shifts the following columns. Short rows get `""`
/// for the missing trailing columns and surplus fields are dropped.
#[instrument(level = "debug", skip(text), fields(content_len = text.len()))]
pub fn parse_csv(text: &str) -> Vec<Record> {
    let mut lines = text.split('\n');
    let headers: Vec<&str> = match lines.next() {
        Some(first) => first.split(',').map(str::trim).collect(),
        None => return Vec::new(),
    };
    trace!(?headers, "parsed header line");

    let records: Vec<Record> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values: Vec<&str> = line.split(',').collect();
            if values.len() < headers.len() {
                trace!(line, "short row, padding with empty values");
            }
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).map(|v| v.trim()).unwrap_or("");
                    (*header, value)
                })
                .collect::<Record>()
        })
        .collect();

    debug!(rows = records.len(), columns = headers.len(), "parsed sheet");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "Fecha,Hora,Tipo de Servicio,Estado
2024-01-05 10:00,10:00,Corte,Completado
2024-01-06 11:30,11:30,Tinte,Pendiente
2024-02-01 09:00,09:00,Corte,Cancelado
";

    #[test]
    fn test_every_record_has_every_header() {
        let records = parse_csv(SHEET);
        assert_eq!(records.len(), 3);
        for rec in &records {
            assert_eq!(rec.len(), 4);
            assert_eq!(
                rec.columns().collect::<Vec<_>>(),
                vec!["Estado", "Fecha", "Hora", "Tipo de Servicio"]
            );
        }
        assert_eq!(records[1].get("Tipo de Servicio"), "Tinte");
        assert_eq!(records[2].get("Estado"), "Cancelado");
    }

    #[test]
    fn test_short_row_pads_with_empty_strings() {
        let records = parse_csv("Fecha,Hora,Tipo de Servicio,Estado\n2024-01-05,10:00\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 4);
        assert_eq!(records[0].get("Hora"), "10:00");
        assert_eq!(records[0].get("Tipo de Servicio"), "");
        assert_eq!(records[0].get("Estado"), "");
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let records = parse_csv("a,b\n1,2,3,4\n");
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("a"), "1");
        assert_eq!(records[0].get("b"), "2");
    }

    #[test]
    fn test_quoted_commas_are_not_special() {
        let records = parse_csv("Servicio,Estado\n\"Corte, lavado\",Pendiente\n");
        assert_eq!(records[0].get("Servicio"), "\"Corte");
        assert_eq!(records[0].get("Estado"), "lavado\"");
    }

    #[test]
    fn test_duplicate_headers_later_column_wins() {
        let records = parse_csv("Estado,Estado\nPendiente,Cancelado\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("Estado"), "Cancelado");
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let text = " Fecha , Estado \r\n\r\n2024-01-05 , Pendiente\r\n   \r\n2024-01-06,Cancelado\r\n";
        let records = parse_csv(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Fecha"), "2024-01-05");
        assert_eq!(records[0].get("Estado"), "Pendiente");
        assert_eq!(records[1].get("Estado"), "Cancelado");
    }

    #[test]
    fn test_empty_and_header_only_input() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("Fecha,Estado\n").is_empty());
    }

    #[test]
    fn test_missing_column_reads_empty() {
        let records = parse_csv("Fecha\n2024-01-05\n");
        assert_eq!(records[0].get("Estado"), "");
    }
}
