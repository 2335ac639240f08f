//! # Category Repository
//!
//! Database operations for categories.
//!
//! ## Key Operations
//! - Paginated active listing (`ORDER BY id DESC`, newest-first)
//! - Lookup by id (active or not) and by name (uniqueness checks)
//! - CRUD with caller-supplied timestamps

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use crb_core::Category;

const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// Repository for category database operations.
///
/// All methods take an explicit connection so the service layer decides
/// the transaction boundary.
pub struct CategoryRepository;

impl CategoryRepository {
    /// Lists one page of active categories, newest first.
    pub async fn list_active(
        conn: &mut SqliteConnection,
        offset: i64,
        limit: i64,
    ) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM category WHERE is_active = 1 \
             ORDER BY id DESC LIMIT ?1 OFFSET ?2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;

        Ok(categories)
    }

    /// Counts all active categories (the `total` of list responses).
    pub async fn count_active(conn: &mut SqliteConnection) -> DbResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(id) FROM category WHERE is_active = 1")
            .fetch_one(conn)
            .await?;

        Ok(count)
    }

    /// Finds a category by id. Inactive rows are still returned; the
    /// active filter applies only to listings.
    pub async fn find_by_id(conn: &mut SqliteConnection, id: &str) -> DbResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM category WHERE id = ?1"))
                .bind(id)
                .fetch_optional(conn)
                .await?;

        Ok(category)
    }

    /// Finds a category by name, active or not. Both count toward
    /// name uniqueness.
    pub async fn find_by_name(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM category WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(conn)
        .await?;

        Ok(category)
    }

    /// Inserts a new category.
    pub async fn insert(conn: &mut SqliteConnection, category: &Category) -> DbResult<()> {
        debug!(id = %category.id, name = %category.name, "Inserting category");

        sqlx::query(
            "INSERT INTO category (id, name, description, is_active, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.is_active)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Overwrites all mutable fields of an existing category.
    pub async fn update(conn: &mut SqliteConnection, category: &Category) -> DbResult<()> {
        debug!(id = %category.id, "Updating category");

        sqlx::query(
            "UPDATE category SET name = ?2, description = ?3, is_active = ?4, updated_at = ?5 \
             WHERE id = ?1",
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.is_active)
        .bind(category.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Hard-deletes a category row.
    pub async fn delete(conn: &mut SqliteConnection, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting category");

        sqlx::query("DELETE FROM category WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
