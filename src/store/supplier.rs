//! Supplier queries

use rusqlite::params;

use crate::core::error::StoreResult;
use crate::entities::supplier::{Supplier, SupplierFields};

use super::Store;

impl Store {
    /// Insert a new supplier, returning its assigned id.
    pub fn add_supplier(&self, fields: &SupplierFields) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO suppliers (name, contact_name, contact_phone, address) VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.name,
                fields.contact_name,
                fields.contact_phone,
                fields.address
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrite every mutable field of a supplier. Returns rows affected.
    pub fn update_supplier(&self, id: i64, fields: &SupplierFields) -> StoreResult<usize> {
        Ok(self.conn.execute(
            "UPDATE suppliers SET name = ?1, contact_name = ?2, contact_phone = ?3, address = ?4 WHERE id = ?5",
            params![
                fields.name,
                fields.contact_name,
                fields.contact_phone,
                fields.address,
                id
            ],
        )?)
    }

    /// All suppliers in storage order.
    pub fn list_suppliers(&self) -> StoreResult<Vec<Supplier>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, contact_name, contact_phone, address FROM suppliers",
        )?;
        let rows = stmt.query_map([], |row| Supplier::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Case-insensitive substring match on name or contact name.
    pub fn search_suppliers(&self, keyword: &str) -> StoreResult<Vec<Supplier>> {
        let pattern = format!("%{}%", keyword);
        let mut stmt = self.conn.prepare(
            "SELECT id, name, contact_name, contact_phone, address FROM suppliers WHERE name LIKE ?1 OR contact_name LIKE ?2",
        )?;
        let rows = stmt.query_map(params![pattern, pattern], |row| Supplier::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Hard delete; dependent items, orders, and logistics entries are left
    /// untouched.
    pub fn delete_supplier(&self, id: i64) -> StoreResult<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM suppliers WHERE id = ?1", params![id])?)
    }

    /// (id, name) pairs for foreign-key selection.
    pub fn supplier_choices(&self) -> StoreResult<Vec<(i64, String)>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM suppliers")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_liquors() -> SupplierFields {
        SupplierFields {
            name: "ABC Liquors".to_string(),
            contact_name: "John Doe".to_string(),
            contact_phone: "123-456-7890".to_string(),
            address: "123 Main Street".to_string(),
        }
    }

    #[test]
    fn test_add_then_list_yields_one_row() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_supplier(&abc_liquors()).unwrap();
        let suppliers = store.list_suppliers().unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].id, id);
        assert_eq!(suppliers[0].name, "ABC Liquors");
    }

    #[test]
    fn test_ids_are_monotonic() {
        let store = Store::open_in_memory().unwrap();
        let first = store.add_supplier(&abc_liquors()).unwrap();
        let second = store.add_supplier(&abc_liquors()).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_duplicate_names_are_permitted() {
        let store = Store::open_in_memory().unwrap();
        store.add_supplier(&abc_liquors()).unwrap();
        store.add_supplier(&abc_liquors()).unwrap();
        assert_eq!(store.list_suppliers().unwrap().len(), 2);
    }

    #[test]
    fn test_update_overwrites_full_row() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_supplier(&abc_liquors()).unwrap();
        let fields = SupplierFields {
            name: "XYZ Distributors".to_string(),
            contact_name: "Jane Smith".to_string(),
            contact_phone: "987-654-3210".to_string(),
            address: "456 Elm Street".to_string(),
        };
        assert_eq!(store.update_supplier(id, &fields).unwrap(), 1);
        let suppliers = store.list_suppliers().unwrap();
        assert_eq!(suppliers[0].name, "XYZ Distributors");
        assert_eq!(suppliers[0].contact_name.as_deref(), Some("Jane Smith"));
    }

    #[test]
    fn test_update_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_supplier(&abc_liquors()).unwrap();
        let fields = SupplierFields {
            name: "XYZ Distributors".to_string(),
            contact_name: "Jane Smith".to_string(),
            contact_phone: "987-654-3210".to_string(),
            address: "456 Elm Street".to_string(),
        };
        store.update_supplier(id, &fields).unwrap();
        let once = store.list_suppliers().unwrap();
        store.update_supplier(id, &fields).unwrap();
        let twice = store.list_suppliers().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let store = Store::open_in_memory().unwrap();
        let first = store.add_supplier(&abc_liquors()).unwrap();
        let mut other = abc_liquors();
        other.name = "XYZ Distributors".to_string();
        let second = store.add_supplier(&other).unwrap();

        assert_eq!(store.delete_supplier(first).unwrap(), 1);
        let suppliers = store.list_suppliers().unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].id, second);
    }

    #[test]
    fn test_search_matches_name_and_contact() {
        let store = Store::open_in_memory().unwrap();
        store.add_supplier(&abc_liquors()).unwrap();

        let by_name = store.search_suppliers("ABC").unwrap();
        assert_eq!(by_name.len(), 1);

        let by_contact = store.search_suppliers("Doe").unwrap();
        assert_eq!(by_contact.len(), 1);

        assert!(store.search_suppliers("nothing").unwrap().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = Store::open_in_memory().unwrap();
        store.add_supplier(&abc_liquors()).unwrap();
        let found = store.search_suppliers("abc").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "ABC Liquors");
    }

    #[test]
    fn test_choices_pair_id_and_name() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_supplier(&abc_liquors()).unwrap();
        let choices = store.supplier_choices().unwrap();
        assert_eq!(choices, vec![(id, "ABC Liquors".to_string())]);
    }
}
