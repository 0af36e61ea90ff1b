// src/process/aggregate.rs

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use super::csv::Record;
use super::date_parser::{date_part, month_year, UNPARSEABLE_MONTH_YEAR};
use super::status::Status;

pub const COL_DATE: &str = "Fecha";
pub const COL_TIME: &str = "Hora";
pub const COL_SERVICE: &str = "Tipo de Servicio";
pub const COL_STATUS: &str = "Estado";

/// Label → count, iterated in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Grouping {
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.index.get(label).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, c)| *c).collect()
    }

    pub fn sum(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Grouping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

/// Counters and groupings from one pass over the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub today: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Rows whose status is none of the three known ones.
    pub other_status: usize,
    /// Rows whose date landed in the `NaN-NaN` month bucket.
    pub unparseable_dates: usize,
    pub by_date: Grouping,
    pub by_service: Grouping,
    pub by_month_year: Grouping,
}

/// Fold `records` into a fresh [`Summary`]. `today` is compared against the
/// date part of each `Fecha` cell in ISO form.
#[instrument(level = "debug", skip(records), fields(rows = records.len()))]
pub fn aggregate(records: &[Record], today: NaiveDate) -> Summary {
    let today = today.format("%Y-%m-%d").to_string();
    let mut s = Summary::default();

    for rec in records {
        let date = date_part(rec.get(COL_DATE));
        let service = rec.get(COL_SERVICE);

        s.total += 1;
        if date == today {
            s.today += 1;
        }

        match Status::classify(rec.get(COL_STATUS)) {
            Status::Confirmed => s.confirmed += 1,
            Status::Pending => s.pending += 1,
            Status::Cancelled => s.cancelled += 1,
            Status::Other => s.other_status += 1,
        }

        s.by_date.increment(date);
        s.by_service.increment(service);

        match month_year(date) {
            Some(key) => s.by_month_year.increment(&key),
            None => {
                warn!(date, "unparseable booking date");
                s.unparseable_dates += 1;
                s.by_month_year.increment(UNPARSEABLE_MONTH_YEAR);
            }
        }
    }

    debug!(
        total = s.total,
        today = s.today,
        confirmed = s.confirmed,
        pending = s.pending,
        cancelled = s.cancelled,
        "aggregated"
    );
    s
}
