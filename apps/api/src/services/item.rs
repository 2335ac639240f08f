//! # Item Service
//!
//! Items are the richest resource: they reference a category, carry
//! stock counters, and are listable through their category or any of
//! their tags.

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::info;

use crb_core::validation::{validate_non_negative, validate_resource_name, validate_uuid};
use crb_core::{
    generate_resource_id, AppResource, DomainError, DomainResult, Item, ItemCreateRequest,
    ItemPatchRequest, ItemUpdateRequest, ListResponse, Pagination, ResourceDeletedMessage,
    ResourceResponse,
};
use crb_db::{Database, DbError, ItemRepository};

use super::category::check_category_exists;
use super::tag::check_tag_exists;

/// Lists one page of active items, newest first.
pub async fn read_items(db: &Database, pagination: Pagination) -> DomainResult<ListResponse<Item>> {
    let pagination = pagination.normalized();

    let mut tx = db.begin().await?;
    let total = ItemRepository::count_active(&mut tx).await?;
    let items =
        ItemRepository::list_active(&mut tx, pagination.offset(), pagination.limit()).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ListResponse {
        result: items,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
    })
}

/// Lists active items belonging to one category. The category must
/// exist, active or not.
pub async fn read_items_by_category(
    db: &Database,
    category_id: &str,
    pagination: Pagination,
) -> DomainResult<ListResponse<Item>> {
    validate_uuid(category_id)?;
    let pagination = pagination.normalized();

    let mut tx = db.begin().await?;
    check_category_exists(&mut tx, category_id).await?;
    let total = ItemRepository::count_active_by_category(&mut tx, category_id).await?;
    let items = ItemRepository::list_active_by_category(
        &mut tx,
        category_id,
        pagination.offset(),
        pagination.limit(),
    )
    .await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ListResponse {
        result: items,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
    })
}

/// Lists active items carrying one tag. The tag must exist.
pub async fn read_items_by_tag(
    db: &Database,
    tag_id: &str,
    pagination: Pagination,
) -> DomainResult<ListResponse<Item>> {
    validate_uuid(tag_id)?;
    let pagination = pagination.normalized();

    let mut tx = db.begin().await?;
    check_tag_exists(&mut tx, tag_id).await?;
    let total = ItemRepository::count_active_by_tag(&mut tx, tag_id).await?;
    let items = ItemRepository::list_active_by_tag(
        &mut tx,
        tag_id,
        pagination.offset(),
        pagination.limit(),
    )
    .await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ListResponse {
        result: items,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
    })
}

/// Fetches one item by id.
pub async fn read_item(db: &Database, item_id: &str) -> DomainResult<ResourceResponse<Item>> {
    validate_uuid(item_id)?;

    let mut tx = db.begin().await?;
    let item = check_item_exists(&mut tx, item_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: item })
}

/// Creates an item. The referenced category must exist; omitted
/// counters default to zero.
pub async fn create_item(
    db: &Database,
    body: ItemCreateRequest,
) -> DomainResult<ResourceResponse<Item>> {
    validate_resource_name(&body.name)?;
    validate_uuid(&body.category_id)?;

    let minimum_threshold = body.minimum_threshold.unwrap_or(0);
    let stock_quantity = body.stock_quantity.unwrap_or(0);
    validate_non_negative("minimum_threshold", minimum_threshold)?;
    validate_non_negative("stock_quantity", stock_quantity)?;

    let mut tx = db.begin().await?;
    check_category_exists(&mut tx, &body.category_id).await?;
    check_item_name_available(&mut tx, &body.name, None).await?;

    let now = Utc::now();
    let item = Item {
        id: generate_resource_id(),
        name: body.name,
        description: body.description,
        is_active: true,
        category_id: body.category_id,
        minimum_threshold,
        stock_quantity,
        created_at: now,
        updated_at: now,
    };

    ItemRepository::insert(&mut tx, &item).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %item.id, name = %item.name, "Item created");
    Ok(ResourceResponse { result: item })
}

/// Full-replace update. Re-validates the category reference and both
/// counters.
pub async fn update_item(
    db: &Database,
    item_id: &str,
    body: ItemUpdateRequest,
) -> DomainResult<ResourceResponse<Item>> {
    validate_uuid(item_id)?;
    validate_resource_name(&body.name)?;
    validate_uuid(&body.category_id)?;
    validate_non_negative("minimum_threshold", body.minimum_threshold)?;
    validate_non_negative("stock_quantity", body.stock_quantity)?;

    let mut tx = db.begin().await?;
    let mut item = check_item_exists(&mut tx, item_id).await?;
    check_category_exists(&mut tx, &body.category_id).await?;
    check_item_name_available(&mut tx, &body.name, Some(item_id)).await?;

    item.name = body.name;
    item.description = body.description;
    item.is_active = body.is_active;
    item.category_id = body.category_id;
    item.minimum_threshold = body.minimum_threshold;
    item.stock_quantity = body.stock_quantity;
    item.updated_at = Utc::now();

    ItemRepository::update(&mut tx, &item).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: item })
}

/// Partial update: only present fields change, each with the same
/// validation it gets on create.
pub async fn patch_item(
    db: &Database,
    item_id: &str,
    body: ItemPatchRequest,
) -> DomainResult<ResourceResponse<Item>> {
    validate_uuid(item_id)?;

    let mut tx = db.begin().await?;
    let mut item = check_item_exists(&mut tx, item_id).await?;

    if let Some(name) = body.name {
        validate_resource_name(&name)?;
        check_item_name_available(&mut tx, &name, Some(item_id)).await?;
        item.name = name;
    }

    if let Some(description) = body.description {
        item.description = Some(description);
    }

    if let Some(is_active) = body.is_active {
        item.is_active = is_active;
    }

    if let Some(category_id) = body.category_id {
        validate_uuid(&category_id)?;
        check_category_exists(&mut tx, &category_id).await?;
        item.category_id = category_id;
    }

    if let Some(minimum_threshold) = body.minimum_threshold {
        validate_non_negative("minimum_threshold", minimum_threshold)?;
        item.minimum_threshold = minimum_threshold;
    }

    if let Some(stock_quantity) = body.stock_quantity {
        validate_non_negative("stock_quantity", stock_quantity)?;
        item.stock_quantity = stock_quantity;
    }

    item.updated_at = Utc::now();

    ItemRepository::update(&mut tx, &item).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: item })
}

/// Hard-deletes an item. Its tag associations cascade away.
pub async fn delete_item(db: &Database, item_id: &str) -> DomainResult<ResourceDeletedMessage> {
    validate_uuid(item_id)?;

    let mut tx = db.begin().await?;
    let item = check_item_exists(&mut tx, item_id).await?;

    ItemRepository::delete(&mut tx, item_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %item.id, "Item deleted");
    Ok(ResourceDeletedMessage::new(item.id, AppResource::Item))
}

/// Fetches an item or fails with `ResourceNotFound`.
pub(crate) async fn check_item_exists(
    conn: &mut SqliteConnection,
    item_id: &str,
) -> DomainResult<Item> {
    ItemRepository::find_by_id(conn, item_id)
        .await?
        .ok_or(DomainError::not_found(AppResource::Item))
}

/// Fails with `ItemNameAlreadyExists` when the name belongs to a
/// different record.
async fn check_item_name_available(
    conn: &mut SqliteConnection,
    name: &str,
    previous_item_id: Option<&str>,
) -> DomainResult<()> {
    if let Some(existing) = ItemRepository::find_by_name(conn, name).await? {
        if previous_item_id != Some(existing.id.as_str()) {
            return Err(DomainError::ItemNameAlreadyExists);
        }
    }

    Ok(())
}
