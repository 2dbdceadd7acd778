//! Item record type - products associated with a supplier and a price

use rusqlite::Row;

/// One row of the `items` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: Option<f64>,
    pub supplier_id: Option<i64>,
}

impl Item {
    /// Map a `SELECT id, name, price, supplier_id` row.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            supplier_id: row.get(3)?,
        })
    }
}

/// Caller-supplied fields for inserting or overwriting an item.
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub name: String,
    pub price: f64,
    pub supplier_id: i64,
}
