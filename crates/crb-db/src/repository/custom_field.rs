//! # Custom Field Repository
//!
//! Database operations for custom field definitions. Custom fields are
//! standalone: no relations in the current scope, so this is the plain
//! CRUD + uniqueness surface.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use crb_core::CustomField;

const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// Repository for custom field database operations.
pub struct CustomFieldRepository;

impl CustomFieldRepository {
    /// Lists one page of active custom fields, newest first.
    pub async fn list_active(
        conn: &mut SqliteConnection,
        offset: i64,
        limit: i64,
    ) -> DbResult<Vec<CustomField>> {
        let fields = sqlx::query_as::<_, CustomField>(&format!(
            "SELECT {COLUMNS} FROM custom_field WHERE is_active = 1 \
             ORDER BY id DESC LIMIT ?1 OFFSET ?2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(conn)
        .await?;

        Ok(fields)
    }

    /// Counts all active custom fields.
    pub async fn count_active(conn: &mut SqliteConnection) -> DbResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(id) FROM custom_field WHERE is_active = 1")
            .fetch_one(conn)
            .await?;

        Ok(count)
    }

    /// Finds a custom field by id, active or not.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: &str,
    ) -> DbResult<Option<CustomField>> {
        let field = sqlx::query_as::<_, CustomField>(&format!(
            "SELECT {COLUMNS} FROM custom_field WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(field)
    }

    /// Finds a custom field by name, active or not.
    pub async fn find_by_name(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> DbResult<Option<CustomField>> {
        let field = sqlx::query_as::<_, CustomField>(&format!(
            "SELECT {COLUMNS} FROM custom_field WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(conn)
        .await?;

        Ok(field)
    }

    /// Inserts a new custom field.
    pub async fn insert(conn: &mut SqliteConnection, field: &CustomField) -> DbResult<()> {
        debug!(id = %field.id, name = %field.name, "Inserting custom field");

        sqlx::query(
            "INSERT INTO custom_field (id, name, description, is_active, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&field.id)
        .bind(&field.name)
        .bind(&field.description)
        .bind(field.is_active)
        .bind(field.created_at)
        .bind(field.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Overwrites all mutable fields of an existing custom field.
    pub async fn update(conn: &mut SqliteConnection, field: &CustomField) -> DbResult<()> {
        debug!(id = %field.id, "Updating custom field");

        sqlx::query(
            "UPDATE custom_field SET name = ?2, description = ?3, is_active = ?4, updated_at = ?5 \
             WHERE id = ?1",
        )
        .bind(&field.id)
        .bind(&field.name)
        .bind(&field.description)
        .bind(field.is_active)
        .bind(field.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }

    /// Hard-deletes a custom field row.
    pub async fn delete(conn: &mut SqliteConnection, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting custom field");

        sqlx::query("DELETE FROM custom_field WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }
}
