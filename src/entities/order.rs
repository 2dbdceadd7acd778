//! Order record type - customer purchase requests tied to a supplier
//!
//! `status` is never written at creation time and has no default; the only
//! operation that touches it is the status update. A freshly created order
//! therefore lists with an empty status until one is set.

use rusqlite::Row;

/// One row of the `orders` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    /// Free text, not validated as a calendar date.
    pub order_date: Option<String>,
    pub total_amount: Option<f64>,
    pub supplier_id: Option<i64>,
    pub status: Option<String>,
}

impl Order {
    /// Map a `SELECT id, customer_name, order_date, total_amount,
    /// supplier_id, status` row.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            customer_name: row.get(1)?,
            order_date: row.get(2)?,
            total_amount: row.get(3)?,
            supplier_id: row.get(4)?,
            status: row.get(5)?,
        })
    }
}

/// Caller-supplied fields for creating an order. Status is not part of
/// creation.
#[derive(Debug, Clone)]
pub struct OrderFields {
    pub customer_name: String,
    pub order_date: String,
    pub total_amount: f64,
    pub supplier_id: i64,
}
