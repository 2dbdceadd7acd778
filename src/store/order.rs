//! Order queries

use rusqlite::params;

use crate::core::error::StoreResult;
use crate::entities::order::{Order, OrderFields};

use super::Store;

impl Store {
    /// Insert a new order, returning its assigned id. `status` is not set
    /// here and stays NULL until the first status update.
    pub fn create_order(&self, fields: &OrderFields) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO orders (customer_name, order_date, total_amount, supplier_id) VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.customer_name,
                fields.order_date,
                fields.total_amount,
                fields.supplier_id
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Set the order status. The fields supplied at creation are never
    /// touched by updates. Returns rows affected.
    pub fn update_order_status(&self, id: i64, status: &str) -> StoreResult<usize> {
        Ok(self.conn.execute(
            "UPDATE orders SET status = ?1 WHERE id = ?2",
            params![status, id],
        )?)
    }

    /// All orders in storage order.
    pub fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, customer_name, order_date, total_amount, supplier_id, status FROM orders",
        )?;
        let rows = stmt.query_map([], |row| Order::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Case-insensitive substring match on the customer name.
    pub fn search_orders(&self, keyword: &str) -> StoreResult<Vec<Order>> {
        let pattern = format!("%{}%", keyword);
        let mut stmt = self.conn.prepare(
            "SELECT id, customer_name, order_date, total_amount, supplier_id, status FROM orders WHERE customer_name LIKE ?1",
        )?;
        let rows = stmt.query_map(params![pattern], |row| Order::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Hard delete; logistics entries referencing the order are left
    /// untouched.
    pub fn delete_order(&self, id: i64) -> StoreResult<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM orders WHERE id = ?1", params![id])?)
    }

    /// (id, customer name) pairs for foreign-key selection.
    pub fn order_choices(&self) -> StoreResult<Vec<(i64, String)>> {
        let mut stmt = self.conn.prepare("SELECT id, customer_name FROM orders")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::supplier::SupplierFields;

    fn store_with_supplier() -> (Store, i64) {
        let store = Store::open_in_memory().unwrap();
        let supplier_id = store
            .add_supplier(&SupplierFields {
                name: "ABC Liquors".to_string(),
                contact_name: "John Doe".to_string(),
                contact_phone: "123-456-7890".to_string(),
                address: "123 Main Street".to_string(),
            })
            .unwrap();
        (store, supplier_id)
    }

    fn bar_and_grill(supplier_id: i64) -> OrderFields {
        OrderFields {
            customer_name: "XYZ Bar & Grill".to_string(),
            order_date: "2024-06-15".to_string(),
            total_amount: 500.00,
            supplier_id,
        }
    }

    #[test]
    fn test_create_leaves_status_unset() {
        let (store, supplier_id) = store_with_supplier();
        store.create_order(&bar_and_grill(supplier_id)).unwrap();
        let orders = store.list_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].customer_name, "XYZ Bar & Grill");
        assert_eq!(orders[0].status, None);
    }

    #[test]
    fn test_status_update_touches_only_status() {
        let (store, supplier_id) = store_with_supplier();
        let id = store.create_order(&bar_and_grill(supplier_id)).unwrap();

        assert_eq!(store.update_order_status(id, "Completed").unwrap(), 1);

        let orders = store.list_orders().unwrap();
        assert_eq!(orders[0].status.as_deref(), Some("Completed"));
        assert_eq!(orders[0].order_date.as_deref(), Some("2024-06-15"));
        assert_eq!(orders[0].total_amount, Some(500.00));
    }

    #[test]
    fn test_status_update_is_idempotent() {
        let (store, supplier_id) = store_with_supplier();
        let id = store.create_order(&bar_and_grill(supplier_id)).unwrap();
        store.update_order_status(id, "Completed").unwrap();
        let once = store.list_orders().unwrap();
        store.update_order_status(id, "Completed").unwrap();
        let twice = store.list_orders().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_by_customer_name() {
        let (store, supplier_id) = store_with_supplier();
        store.create_order(&bar_and_grill(supplier_id)).unwrap();
        let found = store.search_orders("xyz").unwrap();
        assert_eq!(found.len(), 1);
        assert!(store.search_orders("absent").unwrap().is_empty());
    }

    #[test]
    fn test_delete_by_id() {
        let (store, supplier_id) = store_with_supplier();
        let id = store.create_order(&bar_and_grill(supplier_id)).unwrap();
        assert_eq!(store.delete_order(id).unwrap(), 1);
        assert!(store.list_orders().unwrap().is_empty());
    }

    #[test]
    fn test_choices_pair_id_and_customer() {
        let (store, supplier_id) = store_with_supplier();
        let id = store.create_order(&bar_and_grill(supplier_id)).unwrap();
        let choices = store.order_choices().unwrap();
        assert_eq!(choices, vec![(id, "XYZ Bar & Grill".to_string())]);
    }
}
