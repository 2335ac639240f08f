//! # Item Repository
//!
//! Database operations for items.
//!
//! ## Key Operations
//! - The shared CRUD + uniqueness surface
//! - Listings scoped by category (FK filter) and by tag (join through
//!   the association table), with matching counts
//! - `count_by_category` backing the category restrict-delete policy

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use crb_core::Item;

const COLUMNS: &str = "id, name, description, is_active, category_id, \
     minimum_threshold, stock_quantity, created_at, updated_at";

/// Repository for item database operations.
pub struct ItemRepository;

impl ItemRepository {
    /// Lists one page of active items, newest first.
    pub async fn list_active(
        conn: &mut SqliteConnection,
        offset: i64,
        limit: i64,
    ) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {COLUMNS} FROM item WHERE is_active = 1 \
             ORDER BY id DESC LIMIT ?1 OFFSET ?2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;

        Ok(items)
    }

    /// Counts all active items.
    pub async fn count_active(conn: &mut SqliteConnection) -> DbResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(id) FROM item WHERE is_active = 1")
            .fetch_one(conn)
            .await?;

        Ok(count)
    }

    /// Lists one page of a category's active items, newest first.
    pub async fn list_active_by_category(
        conn: &mut SqliteConnection,
        category_id: &str,
        offset: i64,
        limit: i64,
    ) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {COLUMNS} FROM item WHERE is_active = 1 AND category_id = ?1 \
             ORDER BY id DESC LIMIT ?2 OFFSET ?3"
        ))
        .bind(category_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;

        Ok(items)
    }

    /// Counts a category's active items.
    pub async fn count_active_by_category(
        conn: &mut SqliteConnection,
        category_id: &str,
    ) -> DbResult<i64> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(id) FROM item WHERE is_active = 1 AND category_id = ?1",
        )
        .bind(category_id)
        .fetch_one(conn)
        .await?;

        Ok(count)
    }

    /// Counts every item referencing a category, active or not.
    ///
    /// Backs the restrict-delete policy: a category with any items
    /// cannot be deleted.
    pub async fn count_by_category(
        conn: &mut SqliteConnection,
        category_id: &str,
    ) -> DbResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(id) FROM item WHERE category_id = ?1")
            .bind(category_id)
            .fetch_one(conn)
            .await?;

        Ok(count)
    }

    /// Lists one page of active items carrying a tag, newest first.
    pub async fn list_active_by_tag(
        conn: &mut SqliteConnection,
        tag_id: &str,
        offset: i64,
        limit: i64,
    ) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT i.id, i.name, i.description, i.is_active, i.category_id, \
                    i.minimum_threshold, i.stock_quantity, i.created_at, i.updated_at \
             FROM item i \
             INNER JOIN item_tag_association a ON a.item_id = i.id \
             WHERE i.is_active = 1 AND a.tag_id = ?1 \
             ORDER BY i.id DESC LIMIT ?2 OFFSET ?3"
        ))
        .bind(tag_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;

        Ok(items)
    }

    /// Counts the active items carrying a tag.
    pub async fn count_active_by_tag(conn: &mut SqliteConnection, tag_id: &str) -> DbResult<i64> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(i.id) FROM item i \
             INNER JOIN item_tag_association a ON a.item_id = i.id \
             WHERE i.is_active = 1 AND a.tag_id = ?1",
        )
        .bind(tag_id)
        .fetch_one(conn)
        .await?;

        Ok(count)
    }

    /// Finds an item by id, active or not.
    pub async fn find_by_id(conn: &mut SqliteConnection, id: &str) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!("SELECT {COLUMNS} FROM item WHERE id = ?1"))
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(item)
    }

    /// Finds an item by name, active or not.
    pub async fn find_by_name(conn: &mut SqliteConnection, name: &str) -> DbResult<Option<Item>> {
        let item =
            sqlx::query_as::<_, Item>(&format!("SELECT {COLUMNS} FROM item WHERE name = ?1"))
                .bind(name)
                .fetch_optional(conn)
                .await?;

        Ok(item)
    }

    /// Inserts a new item.
    pub async fn insert(conn: &mut SqliteConnection, item: &Item) -> DbResult<()> {
        debug!(id = %item.id, name = %item.name, "Inserting item");

        sqlx::query(
            "INSERT INTO item (id, name, description, is_active, category_id, \
                               minimum_threshold, stock_quantity, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.is_active)
        .bind(&item.category_id)
        .bind(item.minimum_threshold)
        .bind(item.stock_quantity)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Overwrites all mutable fields of an existing item.
    pub async fn update(conn: &mut SqliteConnection, item: &Item) -> DbResult<()> {
        debug!(id = %item.id, "Updating item");

        sqlx::query(
            "UPDATE item SET name = ?2, description = ?3, is_active = ?4, category_id = ?5, \
                             minimum_threshold = ?6, stock_quantity = ?7, updated_at = ?8 \
             WHERE id = ?1",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.is_active)
        .bind(&item.category_id)
        .bind(item.minimum_threshold)
        .bind(item.stock_quantity)
        .bind(item.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Hard-deletes an item row. Association rows cascade.
    pub async fn delete(conn: &mut SqliteConnection, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting item");

        sqlx::query("DELETE FROM item WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
