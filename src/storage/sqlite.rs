use anyhow::Context;
use diesel::prelude::*;

use super::StorageBackend;
use crate::schema::storage_items;

#[derive(Insertable)]
#[diesel(table_name = storage_items)]
struct NewStorageItem<'a> {
    origin: &'a str,
    item_key: &'a str,
    item_value: &'a str,
}

/// Durable slots of one origin, stored as rows of `storage_items`.
///
/// Borrows the connection so that callers can run several reads and writes
/// inside one transaction.
pub struct SqliteBackend<'c> {
    conn: &'c mut SqliteConnection,
    origin: String,
}

impl<'c> SqliteBackend<'c> {
    pub fn new<S: Into<String>>(conn: &'c mut SqliteConnection, origin: S) -> Self {
        Self {
            conn,
            origin: origin.into(),
        }
    }
}

impl StorageBackend for SqliteBackend<'_> {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>> {
        storage_items::table
            .filter(storage_items::origin.eq(&self.origin))
            .filter(storage_items::item_key.eq(key))
            .select(storage_items::item_value)
            .first::<String>(&mut *self.conn)
            .optional()
            .context("DB error")
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let item = NewStorageItem {
            origin: &self.origin,
            item_key: key,
            item_value: value,
        };
        diesel::replace_into(storage_items::table)
            .values(item)
            .execute(&mut *self.conn)
            .context("DB error")?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()> {
        diesel::delete(
            storage_items::table
                .filter(storage_items::origin.eq(&self.origin))
                .filter(storage_items::item_key.eq(key)),
        )
        .execute(&mut *self.conn)
        .context("DB error")?;
        Ok(())
    }
}
