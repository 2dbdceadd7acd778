//! Item queries

use rusqlite::params;

use crate::core::error::StoreResult;
use crate::entities::item::{Item, ItemFields};

use super::Store;

impl Store {
    /// Insert a new item, returning its assigned id.
    pub fn add_item(&self, fields: &ItemFields) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO items (name, price, supplier_id) VALUES (?1, ?2, ?3)",
            params![fields.name, fields.price, fields.supplier_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrite every mutable field of an item. Returns rows affected.
    pub fn update_item(&self, id: i64, fields: &ItemFields) -> StoreResult<usize> {
        Ok(self.conn.execute(
            "UPDATE items SET name = ?1, price = ?2, supplier_id = ?3 WHERE id = ?4",
            params![fields.name, fields.price, fields.supplier_id, id],
        )?)
    }

    /// All items in storage order.
    pub fn list_items(&self) -> StoreResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, price, supplier_id FROM items")?;
        let rows = stmt.query_map([], |row| Item::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Case-insensitive substring match on the item name.
    pub fn search_items(&self, keyword: &str) -> StoreResult<Vec<Item>> {
        let pattern = format!("%{}%", keyword);
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, price, supplier_id FROM items WHERE name LIKE ?1")?;
        let rows = stmt.query_map(params![pattern], |row| Item::from_row(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Hard delete by id.
    pub fn delete_item(&self, id: i64) -> StoreResult<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?)
    }
}
