//! Logistics queries

use rusqlite::params;

use crate::core::error::StoreResult;
use crate::entities::logistics::{LogisticsEntry, LogisticsFields};

use super::Store;

impl Store {
    /// Insert a new logistics entry, returning its assigned id.
    pub fn record_logistics(&self, fields: &LogisticsFields) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO logistics (order_id, supplier_id, dispatch_date, arrival_date, status) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.order_id,
                fields.supplier_id,
                fields.dispatch_date,
                fields.arrival_date,
                fields.status
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Set the shipment status. Returns rows affected.
    pub fn update_logistics_status(&self, id: i64, status: &str) -> StoreResult<usize> {
        Ok(self.conn.execute(
            "UPDATE logistics SET status = ?1 WHERE id = ?2",
            params![status, id],
        )?)
    }

    /// All logistics entries in storage order.
    pub fn list_logistics(&self) -> StoreResult<Vec<LogisticsEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, order_id, supplier_id, dispatch_date, arrival_date, status FROM logistics",
        )?;
        let rows = stmt.query_map([], |row| LogisticsEntry::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Case-insensitive substring match on the status text.
    pub fn search_logistics(&self, keyword: &str) -> StoreResult<Vec<LogisticsEntry>> {
        let pattern = format!("%{}%", keyword);
        let mut stmt = self.conn.prepare(
            "SELECT id, order_id, supplier_id, dispatch_date, arrival_date, status FROM logistics WHERE status LIKE ?1",
        )?;
        let rows = stmt.query_map(params![pattern], |row| LogisticsEntry::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Hard delete by id.
    pub fn delete_logistics(&self, id: i64) -> StoreResult<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM logistics WHERE id = ?1", params![id])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::order::OrderFields;
    use crate::entities::supplier::SupplierFields;

    fn store_with_order() -> (Store, i64, i64) {
        let store = Store::open_in_memory().unwrap();
        let supplier_id = store
            .add_supplier(&SupplierFields {
                name: "ABC Liquors".to_string(),
                contact_name: "John Doe".to_string(),
                contact_phone: "123-456-7890".to_string(),
                address: "123 Main Street".to_string(),
            })
            .unwrap();
        let order_id = store
            .create_order(&OrderFields {
                customer_name: "XYZ Bar & Grill".to_string(),
                order_date: "2024-06-15".to_string(),
                total_amount: 500.00,
                supplier_id,
            })
            .unwrap();
        (store, order_id, supplier_id)
    }

    fn in_transit(order_id: i64, supplier_id: i64) -> LogisticsFields {
        LogisticsFields {
            order_id,
            supplier_id,
            dispatch_date: "2024-06-16".to_string(),
            arrival_date: "2024-06-18".to_string(),
            status: "In transit".to_string(),
        }
    }

    #[test]
    fn test_record_then_list() {
        let (store, order_id, supplier_id) = store_with_order();
        let id = store
            .record_logistics(&in_transit(order_id, supplier_id))
            .unwrap();
        let entries = store.list_logistics().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].order_id, Some(order_id));
        assert_eq!(entries[0].supplier_id, Some(supplier_id));
        assert_eq!(entries[0].status.as_deref(), Some("In transit"));
    }

    #[test]
    fn test_search_by_status() {
        let (store, order_id, supplier_id) = store_with_order();
        store
            .record_logistics(&in_transit(order_id, supplier_id))
            .unwrap();
        let found = store.search_logistics("transit").unwrap();
        assert_eq!(found.len(), 1);
        assert!(store.search_logistics("delivered").unwrap().is_empty());
    }

    #[test]
    fn test_status_update() {
        let (store, order_id, supplier_id) = store_with_order();
        let id = store
            .record_logistics(&in_transit(order_id, supplier_id))
            .unwrap();
        assert_eq!(store.update_logistics_status(id, "Delivered").unwrap(), 1);
        let entries = store.list_logistics().unwrap();
        assert_eq!(entries[0].status.as_deref(), Some("Delivered"));
        // Dates stay as recorded.
        assert_eq!(entries[0].dispatch_date.as_deref(), Some("2024-06-16"));
    }

    #[test]
    fn test_delete_by_id() {
        let (store, order_id, supplier_id) = store_with_order();
        let id = store
            .record_logistics(&in_transit(order_id, supplier_id))
            .unwrap();
        assert_eq!(store.delete_logistics(id).unwrap(), 1);
        assert!(store.list_logistics().unwrap().is_empty());
    }

    #[test]
    fn test_deleting_order_leaves_entry_dangling() {
        let (store, order_id, supplier_id) = store_with_order();
        store
            .record_logistics(&in_transit(order_id, supplier_id))
            .unwrap();
        store.delete_order(order_id).unwrap();
        let entries = store.list_logistics().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].order_id, Some(order_id));
    }
}
