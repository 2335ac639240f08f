//! # Item-Tag Association Repository
//!
//! The item<->tag many-to-many relation, modeled as its own two-column
//! table with a composite primary key: each (item, tag) pair occurs at
//! most once.
//!
//! Membership is checked with a direct existence query rather than by
//! loading the item's whole tag set; run inside the same transaction
//! as the following insert/delete, it stays race-safe.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use crb_core::Tag;

/// Repository for the item<->tag association table.
pub struct ItemTagRepository;

impl ItemTagRepository {
    /// Returns all tags currently linked to an item, newest first.
    pub async fn tags_for_item(conn: &mut SqliteConnection, item_id: &str) -> DbResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.description, t.is_active, t.created_at, t.updated_at \
             FROM tag t \
             INNER JOIN item_tag_association a ON a.tag_id = t.id \
             WHERE a.item_id = ?1 \
             ORDER BY t.id DESC",
        )
        .bind(item_id)
        .fetch_all(conn)
        .await?;

        Ok(tags)
    }

    /// Checks whether the (item, tag) pair exists.
    pub async fn exists(
        conn: &mut SqliteConnection,
        item_id: &str,
        tag_id: &str,
    ) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM item_tag_association WHERE item_id = ?1 AND tag_id = ?2",
        )
        .bind(item_id)
        .bind(tag_id)
        .fetch_one(conn)
        .await?;

        Ok(count > 0)
    }

    /// Inserts the (item, tag) pair.
    ///
    /// The composite primary key rejects duplicates should two
    /// concurrent adds race past the existence check.
    pub async fn insert(conn: &mut SqliteConnection, item_id: &str, tag_id: &str) -> DbResult<()> {
        debug!(item_id = %item_id, tag_id = %tag_id, "Linking tag to item");

        sqlx::query("INSERT INTO item_tag_association (item_id, tag_id) VALUES (?1, ?2)")
            .bind(item_id)
            .bind(tag_id)
            .execute(conn)
            .await?;

        Ok(())
    }

    /// Deletes the (item, tag) pair.
    pub async fn delete(conn: &mut SqliteConnection, item_id: &str, tag_id: &str) -> DbResult<()> {
        debug!(item_id = %item_id, tag_id = %tag_id, "Unlinking tag from item");

        sqlx::query("DELETE FROM item_tag_association WHERE item_id = ?1 AND tag_id = ?2")
            .bind(item_id)
            .bind(tag_id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
