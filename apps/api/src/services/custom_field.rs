//! # Custom Field Service
//!
//! Same CRUD shape as tags, with the underscore-separated name policy
//! and its own uniqueness error.

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::info;

use crb_core::validation::{validate_custom_field_name, validate_uuid};
use crb_core::{
    generate_resource_id, AppResource, CustomField, DomainError, DomainResult, ListResponse,
    NamedResourceCreateRequest, NamedResourcePatchRequest, NamedResourceUpdateRequest, Pagination,
    ResourceDeletedMessage, ResourceResponse,
};
use crb_db::{CustomFieldRepository, Database, DbError};

/// Lists one page of active custom fields, newest first.
pub async fn read_custom_fields(
    db: &Database,
    pagination: Pagination,
) -> DomainResult<ListResponse<CustomField>> {
    let pagination = pagination.normalized();

    let mut tx = db.begin().await?;
    let total = CustomFieldRepository::count_active(&mut tx).await?;
    let fields =
        CustomFieldRepository::list_active(&mut tx, pagination.offset(), pagination.limit())
            .await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ListResponse {
        result: fields,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
    })
}

/// Fetches one custom field by id.
pub async fn read_custom_field(
    db: &Database,
    custom_field_id: &str,
) -> DomainResult<ResourceResponse<CustomField>> {
    validate_uuid(custom_field_id)?;

    let mut tx = db.begin().await?;
    let field = check_custom_field_exists(&mut tx, custom_field_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: field })
}

/// Creates a custom field with an underscore-separated lowercase name.
pub async fn create_custom_field(
    db: &Database,
    body: NamedResourceCreateRequest,
) -> DomainResult<ResourceResponse<CustomField>> {
    validate_custom_field_name(&body.name)?;

    let mut tx = db.begin().await?;
    check_custom_field_name_available(&mut tx, &body.name, None).await?;

    let now = Utc::now();
    let field = CustomField {
        id: generate_resource_id(),
        name: body.name,
        description: body.description,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    CustomFieldRepository::insert(&mut tx, &field).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %field.id, name = %field.name, "Custom field created");
    Ok(ResourceResponse { result: field })
}

/// Full-replace update.
pub async fn update_custom_field(
    db: &Database,
    custom_field_id: &str,
    body: NamedResourceUpdateRequest,
) -> DomainResult<ResourceResponse<CustomField>> {
    validate_uuid(custom_field_id)?;
    validate_custom_field_name(&body.name)?;

    let mut tx = db.begin().await?;
    let mut field = check_custom_field_exists(&mut tx, custom_field_id).await?;
    check_custom_field_name_available(&mut tx, &body.name, Some(custom_field_id)).await?;

    field.name = body.name;
    field.description = body.description;
    field.is_active = body.is_active;
    field.updated_at = Utc::now();

    CustomFieldRepository::update(&mut tx, &field).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: field })
}

/// Partial update: only present fields change.
pub async fn patch_custom_field(
    db: &Database,
    custom_field_id: &str,
    body: NamedResourcePatchRequest,
) -> DomainResult<ResourceResponse<CustomField>> {
    validate_uuid(custom_field_id)?;

    let mut tx = db.begin().await?;
    let mut field = check_custom_field_exists(&mut tx, custom_field_id).await?;

    if let Some(name) = body.name {
        validate_custom_field_name(&name)?;
        check_custom_field_name_available(&mut tx, &name, Some(custom_field_id)).await?;
        field.name = name;
    }

    if let Some(description) = body.description {
        field.description = Some(description);
    }

    if let Some(is_active) = body.is_active {
        field.is_active = is_active;
    }

    field.updated_at = Utc::now();

    CustomFieldRepository::update(&mut tx, &field).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: field })
}

/// Hard-deletes a custom field.
pub async fn delete_custom_field(
    db: &Database,
    custom_field_id: &str,
) -> DomainResult<ResourceDeletedMessage> {
    validate_uuid(custom_field_id)?;

    let mut tx = db.begin().await?;
    let field = check_custom_field_exists(&mut tx, custom_field_id).await?;

    CustomFieldRepository::delete(&mut tx, custom_field_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %field.id, "Custom field deleted");
    Ok(ResourceDeletedMessage::new(field.id, AppResource::CustomField))
}

/// Fetches a custom field or fails with `ResourceNotFound`.
pub(crate) async fn check_custom_field_exists(
    conn: &mut SqliteConnection,
    custom_field_id: &str,
) -> DomainResult<CustomField> {
    CustomFieldRepository::find_by_id(conn, custom_field_id)
        .await?
        .ok_or(DomainError::not_found(AppResource::CustomField))
}

/// Fails with `CustomFieldNameAlreadyExists` when the name belongs to
/// a different record.
async fn check_custom_field_name_available(
    conn: &mut SqliteConnection,
    name: &str,
    previous_custom_field_id: Option<&str>,
) -> DomainResult<()> {
    if let Some(existing) = CustomFieldRepository::find_by_name(conn, name).await? {
        if previous_custom_field_id != Some(existing.id.as_str()) {
            return Err(DomainError::CustomFieldNameAlreadyExists);
        }
    }

    Ok(())
}
