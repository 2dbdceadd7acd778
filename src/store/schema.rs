//! Database schema initialization

use crate::core::error::StoreResult;

use super::Store;

impl Store {
    /// Create the four tables if they do not exist. Safe on every startup;
    /// the schema is fixed and never migrated.
    ///
    /// Foreign keys are declared but enforcement stays off, so deletes do
    /// not cascade and dangling references remain readable.
    pub(super) fn init_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS suppliers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                contact_name TEXT,
                contact_phone TEXT,
                address TEXT
            );

            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL,
                supplier_id INTEGER,
                FOREIGN KEY (supplier_id) REFERENCES suppliers (id)
            );

            -- status is only ever written by the order status update;
            -- inserts leave it NULL and no default exists.
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_name TEXT NOT NULL,
                order_date TEXT,
                total_amount REAL,
                supplier_id INTEGER,
                status TEXT,
                FOREIGN KEY (supplier_id) REFERENCES suppliers (id)
            );

            CREATE TABLE IF NOT EXISTS logistics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_id INTEGER,
                supplier_id INTEGER,
                dispatch_date TEXT,
                arrival_date TEXT,
                status TEXT,
                FOREIGN KEY (order_id) REFERENCES orders (id),
                FOREIGN KEY (supplier_id) REFERENCES suppliers (id)
            );
            "#,
        )?;
        Ok(())
    }
}
