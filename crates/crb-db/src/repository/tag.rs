//! # Tag Repository
//!
//! Database operations for tags. Same shape as the category
//! repository; the item<->tag association lives in
//! [`crate::repository::item_tag`].

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use crb_core::Tag;

const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// Repository for tag database operations.
pub struct TagRepository;

impl TagRepository {
    /// Lists one page of active tags, newest first.
    pub async fn list_active(
        conn: &mut SqliteConnection,
        offset: i64,
        limit: i64,
    ) -> DbResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(&format!(
            "SELECT {COLUMNS} FROM tag WHERE is_active = 1 \
             ORDER BY id DESC LIMIT ?1 OFFSET ?2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;

        Ok(tags)
    }

    /// Counts all active tags.
    pub async fn count_active(conn: &mut SqliteConnection) -> DbResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(id) FROM tag WHERE is_active = 1")
            .fetch_one(conn)
            .await?;

        Ok(count)
    }

    /// Finds a tag by id, active or not.
    pub async fn find_by_id(conn: &mut SqliteConnection, id: &str) -> DbResult<Option<Tag>> {
        let tag = sqlx::query_as::<_, Tag>(&format!("SELECT {COLUMNS} FROM tag WHERE id = ?1"))
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(tag)
    }

    /// Finds a tag by name, active or not.
    pub async fn find_by_name(conn: &mut SqliteConnection, name: &str) -> DbResult<Option<Tag>> {
        let tag = sqlx::query_as::<_, Tag>(&format!("SELECT {COLUMNS} FROM tag WHERE name = ?1"))
            .bind(name)
            .fetch_optional(conn)
            .await?;

        Ok(tag)
    }

    /// Inserts a new tag.
    pub async fn insert(conn: &mut SqliteConnection, tag: &Tag) -> DbResult<()> {
        debug!(id = %tag.id, name = %tag.name, "Inserting tag");

        sqlx::query(
            "INSERT INTO tag (id, name, description, is_active, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(&tag.description)
        .bind(tag.is_active)
        .bind(tag.created_at)
        .bind(tag.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Overwrites all mutable fields of an existing tag.
    pub async fn update(conn: &mut SqliteConnection, tag: &Tag) -> DbResult<()> {
        debug!(id = %tag.id, "Updating tag");

        sqlx::query(
            "UPDATE tag SET name = ?2, description = ?3, is_active = ?4, updated_at = ?5 \
             WHERE id = ?1",
        )
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(&tag.description)
        .bind(tag.is_active)
        .bind(tag.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Hard-deletes a tag row. Association rows cascade.
    pub async fn delete(conn: &mut SqliteConnection, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting tag");

        sqlx::query("DELETE FROM tag WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
