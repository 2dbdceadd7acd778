//! Logistics record type - shipments linking an order and a supplier

use rusqlite::Row;

/// One row of the `logistics` table.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticsEntry {
    pub id: i64,
    pub order_id: Option<i64>,
    pub supplier_id: Option<i64>,
    /// Free text, not validated as a calendar date.
    pub dispatch_date: Option<String>,
    pub arrival_date: Option<String>,
    pub status: Option<String>,
}

impl LogisticsEntry {
    /// Map a `SELECT id, order_id, supplier_id, dispatch_date,
    /// arrival_date, status` row.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            order_id: row.get(1)?,
            supplier_id: row.get(2)?,
            dispatch_date: row.get(3)?,
            arrival_date: row.get(4)?,
            status: row.get(5)?,
        })
    }
}

/// Caller-supplied fields for recording a logistics entry.
#[derive(Debug, Clone)]
pub struct LogisticsFields {
    pub order_id: i64,
    pub supplier_id: i64,
    pub dispatch_date: String,
    pub arrival_date: String,
    pub status: String,
}
