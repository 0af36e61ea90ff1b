// src/process/status.rs

/// Booking state as written in the sheet's `Estado` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Confirmed,
    Pending,
    Cancelled,
    /// Anything else, e.g. "Reagendado". Counts toward the total only.
    Other,
}

impl Status {
    /// Case-insensitive match on the sheet value.
    pub fn classify(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "completado" => Status::Confirmed,
            "pendiente" => Status::Pending,
            "cancelado" => Status::Cancelled,
            _ => Status::Other,
        }
    }
}
