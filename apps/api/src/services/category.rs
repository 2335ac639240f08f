//! # Category Service
//!
//! Business rules for categories: free-text unique names, and the
//! restrict-delete policy toward items.

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::info;

use crb_core::validation::{validate_resource_name, validate_uuid};
use crb_core::{
    generate_resource_id, AppResource, Category, DomainError, DomainResult, ListResponse,
    NamedResourceCreateRequest, NamedResourcePatchRequest, NamedResourceUpdateRequest, Pagination,
    ResourceDeletedMessage, ResourceResponse,
};
use crb_db::{CategoryRepository, Database, DbError, ItemRepository};

/// Lists one page of active categories, newest first, with the total
/// active count.
pub async fn read_categories(
    db: &Database,
    pagination: Pagination,
) -> DomainResult<ListResponse<Category>> {
    let pagination = pagination.normalized();

    let mut tx = db.begin().await?;
    let total = CategoryRepository::count_active(&mut tx).await?;
    let categories =
        CategoryRepository::list_active(&mut tx, pagination.offset(), pagination.limit()).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ListResponse {
        result: categories,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
    })
}

/// Fetches one category by id. Inactive categories are still
/// reachable here.
pub async fn read_category(
    db: &Database,
    category_id: &str,
) -> DomainResult<ResourceResponse<Category>> {
    validate_uuid(category_id)?;

    let mut tx = db.begin().await?;
    let category = check_category_exists(&mut tx, category_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: category })
}

/// Creates a category with a generated id, `is_active = true`, and
/// identical creation/update timestamps.
pub async fn create_category(
    db: &Database,
    body: NamedResourceCreateRequest,
) -> DomainResult<ResourceResponse<Category>> {
    validate_resource_name(&body.name)?;

    let mut tx = db.begin().await?;
    check_category_name_available(&mut tx, &body.name, None).await?;

    let now = Utc::now();
    let category = Category {
        id: generate_resource_id(),
        name: body.name,
        description: body.description,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    CategoryRepository::insert(&mut tx, &category).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %category.id, name = %category.name, "Category created");
    Ok(ResourceResponse { result: category })
}

/// Full-replace update: overwrites every mutable field, including
/// `is_active`.
pub async fn update_category(
    db: &Database,
    category_id: &str,
    body: NamedResourceUpdateRequest,
) -> DomainResult<ResourceResponse<Category>> {
    validate_uuid(category_id)?;
    validate_resource_name(&body.name)?;

    let mut tx = db.begin().await?;
    let mut category = check_category_exists(&mut tx, category_id).await?;
    check_category_name_available(&mut tx, &body.name, Some(category_id)).await?;

    category.name = body.name;
    category.description = body.description;
    category.is_active = body.is_active;
    category.updated_at = Utc::now();

    CategoryRepository::update(&mut tx, &category).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: category })
}

/// Partial update: only present fields change, each re-validated the
/// same way as in a full update.
pub async fn patch_category(
    db: &Database,
    category_id: &str,
    body: NamedResourcePatchRequest,
) -> DomainResult<ResourceResponse<Category>> {
    validate_uuid(category_id)?;

    let mut tx = db.begin().await?;
    let mut category = check_category_exists(&mut tx, category_id).await?;

    if let Some(name) = body.name {
        validate_resource_name(&name)?;
        check_category_name_available(&mut tx, &name, Some(category_id)).await?;
        category.name = name;
    }

    if let Some(description) = body.description {
        category.description = Some(description);
    }

    if let Some(is_active) = body.is_active {
        category.is_active = is_active;
    }

    category.updated_at = Utc::now();

    CategoryRepository::update(&mut tx, &category).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: category })
}

/// Hard-deletes a category.
///
/// Restrict policy: a category still referenced by items cannot be
/// deleted; the items must move or go first.
pub async fn delete_category(
    db: &Database,
    category_id: &str,
) -> DomainResult<ResourceDeletedMessage> {
    validate_uuid(category_id)?;

    let mut tx = db.begin().await?;
    let category = check_category_exists(&mut tx, category_id).await?;

    let item_count = ItemRepository::count_by_category(&mut tx, category_id).await?;
    if item_count > 0 {
        return Err(DomainError::CategoryHasItems {
            id: category_id.to_string(),
        });
    }

    CategoryRepository::delete(&mut tx, category_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %category.id, "Category deleted");
    Ok(ResourceDeletedMessage::new(category.id, AppResource::Category))
}

/// Fetches a category or fails with `ResourceNotFound`.
pub(crate) async fn check_category_exists(
    conn: &mut SqliteConnection,
    category_id: &str,
) -> DomainResult<Category> {
    CategoryRepository::find_by_id(conn, category_id)
        .await?
        .ok_or(DomainError::not_found(AppResource::Category))
}

/// Fails with `CategoryNameAlreadyExists` when the name is taken by a
/// different record. The exclusion compares ids, never names, so
/// re-submitting a record's own name stays legal.
async fn check_category_name_available(
    conn: &mut SqliteConnection,
    name: &str,
    previous_category_id: Option<&str>,
) -> DomainResult<()> {
    if let Some(existing) = CategoryRepository::find_by_name(conn, name).await? {
        if previous_category_id != Some(existing.id.as_str()) {
            return Err(DomainError::CategoryNameAlreadyExists);
        }
    }

    Ok(())
}
