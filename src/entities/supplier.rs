//! Supplier record type - vendors supplying items and fulfilling orders

use rusqlite::Row;

/// One row of the `suppliers` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl Supplier {
    /// Map a `SELECT id, name, contact_name, contact_phone, address` row.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            contact_name: row.get(2)?,
            contact_phone: row.get(3)?,
            address: row.get(4)?,
        })
    }
}

/// Caller-supplied fields for inserting or overwriting a supplier.
#[derive(Debug, Clone)]
pub struct SupplierFields {
    pub name: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub address: String,
}
