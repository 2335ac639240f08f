//! # Item-Tag Association Service
//!
//! Links and unlinks tags on items. Both endpoints verify both
//! resources before touching the association table, so a bad pair
//! fails with a not-found rather than a silent no-op.

use sqlx::SqliteConnection;
use tracing::info;

use crb_core::validation::validate_uuid;
use crb_core::{DomainError, DomainResult, ItemTagAddMessage, ItemTagDeleteMessage,
    ItemTagListResponse};
use crb_db::{Database, DbError, ItemTagRepository};

use super::item::check_item_exists;
use super::tag::check_tag_exists;

/// Lists every tag linked to one item, newest first.
pub async fn read_item_tags(db: &Database, item_id: &str) -> DomainResult<ItemTagListResponse> {
    validate_uuid(item_id)?;

    let mut tx = db.begin().await?;
    check_item_exists(&mut tx, item_id).await?;
    let tags = ItemTagRepository::tags_for_item(&mut tx, item_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    let total = tags.len() as i64;
    Ok(ItemTagListResponse { result: tags, total })
}

/// Links a tag to an item. Fails when the pair already exists.
pub async fn add_tag_to_item(
    db: &Database,
    item_id: &str,
    tag_id: &str,
) -> DomainResult<ItemTagAddMessage> {
    validate_uuid(item_id)?;
    validate_uuid(tag_id)?;

    let mut tx = db.begin().await?;
    check_item_exists(&mut tx, item_id).await?;
    check_tag_exists(&mut tx, tag_id).await?;
    check_association_absent(&mut tx, item_id, tag_id).await?;

    ItemTagRepository::insert(&mut tx, item_id, tag_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(item_id, tag_id, "Tag added to item");
    Ok(ItemTagAddMessage::new(item_id, tag_id))
}

/// Unlinks a tag from an item. Fails when the pair does not exist.
pub async fn delete_tag_from_item(
    db: &Database,
    item_id: &str,
    tag_id: &str,
) -> DomainResult<ItemTagDeleteMessage> {
    validate_uuid(item_id)?;
    validate_uuid(tag_id)?;

    let mut tx = db.begin().await?;
    check_item_exists(&mut tx, item_id).await?;
    check_tag_exists(&mut tx, tag_id).await?;
    check_association_present(&mut tx, item_id, tag_id).await?;

    ItemTagRepository::delete(&mut tx, item_id, tag_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(item_id, tag_id, "Tag removed from item");
    Ok(ItemTagDeleteMessage::new(item_id, tag_id))
}

async fn check_association_absent(
    conn: &mut SqliteConnection,
    item_id: &str,
    tag_id: &str,
) -> DomainResult<()> {
    if ItemTagRepository::exists(conn, item_id, tag_id).await? {
        return Err(DomainError::TagAlreadyAssociatedWithItem);
    }
    Ok(())
}

async fn check_association_present(
    conn: &mut SqliteConnection,
    item_id: &str,
    tag_id: &str,
) -> DomainResult<()> {
    if !ItemTagRepository::exists(conn, item_id, tag_id).await? {
        return Err(DomainError::TagNotAssociatedWithItem);
    }
    Ok(())
}
