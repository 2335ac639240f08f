//! # Tag Service
//!
//! Business rules for tags: hyphenated-lowercase names, unique across
//! active and inactive rows alike.

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::info;

use crb_core::validation::{validate_tag_name, validate_uuid};
use crb_core::{
    generate_resource_id, AppResource, DomainError, DomainResult, ListResponse,
    NamedResourceCreateRequest, NamedResourcePatchRequest, NamedResourceUpdateRequest, Pagination,
    ResourceDeletedMessage, ResourceResponse, Tag,
};
use crb_db::{Database, DbError, TagRepository};

/// Lists one page of active tags, newest first.
pub async fn read_tags(db: &Database, pagination: Pagination) -> DomainResult<ListResponse<Tag>> {
    let pagination = pagination.normalized();

    let mut tx = db.begin().await?;
    let total = TagRepository::count_active(&mut tx).await?;
    let tags = TagRepository::list_active(&mut tx, pagination.offset(), pagination.limit()).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ListResponse {
        result: tags,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
    })
}

/// Fetches one tag by id.
pub async fn read_tag(db: &Database, tag_id: &str) -> DomainResult<ResourceResponse<Tag>> {
    validate_uuid(tag_id)?;

    let mut tx = db.begin().await?;
    let tag = check_tag_exists(&mut tx, tag_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: tag })
}

/// Creates a tag. The name must satisfy the hyphenated-lowercase
/// format before uniqueness is even considered.
pub async fn create_tag(
    db: &Database,
    body: NamedResourceCreateRequest,
) -> DomainResult<ResourceResponse<Tag>> {
    validate_tag_name(&body.name)?;

    let mut tx = db.begin().await?;
    check_tag_name_available(&mut tx, &body.name, None).await?;

    let now = Utc::now();
    let tag = Tag {
        id: generate_resource_id(),
        name: body.name,
        description: body.description,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    TagRepository::insert(&mut tx, &tag).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %tag.id, name = %tag.name, "Tag created");
    Ok(ResourceResponse { result: tag })
}

/// Full-replace update.
pub async fn update_tag(
    db: &Database,
    tag_id: &str,
    body: NamedResourceUpdateRequest,
) -> DomainResult<ResourceResponse<Tag>> {
    validate_uuid(tag_id)?;
    validate_tag_name(&body.name)?;

    let mut tx = db.begin().await?;
    let mut tag = check_tag_exists(&mut tx, tag_id).await?;
    check_tag_name_available(&mut tx, &body.name, Some(tag_id)).await?;

    tag.name = body.name;
    tag.description = body.description;
    tag.is_active = body.is_active;
    tag.updated_at = Utc::now();

    TagRepository::update(&mut tx, &tag).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: tag })
}

/// Partial update: only present fields change.
pub async fn patch_tag(
    db: &Database,
    tag_id: &str,
    body: NamedResourcePatchRequest,
) -> DomainResult<ResourceResponse<Tag>> {
    validate_uuid(tag_id)?;

    let mut tx = db.begin().await?;
    let mut tag = check_tag_exists(&mut tx, tag_id).await?;

    if let Some(name) = body.name {
        validate_tag_name(&name)?;
        check_tag_name_available(&mut tx, &name, Some(tag_id)).await?;
        tag.name = name;
    }

    if let Some(description) = body.description {
        tag.description = Some(description);
    }

    if let Some(is_active) = body.is_active {
        tag.is_active = is_active;
    }

    tag.updated_at = Utc::now();

    TagRepository::update(&mut tx, &tag).await?;
    tx.commit().await.map_err(DbError::from)?;

    Ok(ResourceResponse { result: tag })
}

/// Hard-deletes a tag. Its association rows cascade away with it.
pub async fn delete_tag(db: &Database, tag_id: &str) -> DomainResult<ResourceDeletedMessage> {
    validate_uuid(tag_id)?;

    let mut tx = db.begin().await?;
    let tag = check_tag_exists(&mut tx, tag_id).await?;

    TagRepository::delete(&mut tx, tag_id).await?;
    tx.commit().await.map_err(DbError::from)?;

    info!(id = %tag.id, "Tag deleted");
    Ok(ResourceDeletedMessage::new(tag.id, AppResource::Tag))
}

/// Fetches a tag or fails with `ResourceNotFound`.
pub(crate) async fn check_tag_exists(
    conn: &mut SqliteConnection,
    tag_id: &str,
) -> DomainResult<Tag> {
    TagRepository::find_by_id(conn, tag_id)
        .await?
        .ok_or(DomainError::not_found(AppResource::Tag))
}

/// Fails with `TagNameAlreadyExists` when the name belongs to a
/// different record (id comparison, never name comparison).
async fn check_tag_name_available(
    conn: &mut SqliteConnection,
    name: &str,
    previous_tag_id: Option<&str>,
) -> DomainResult<()> {
    if let Some(existing) = TagRepository::find_by_name(conn, name).await? {
        if previous_tag_id != Some(existing.id.as_str()) {
            return Err(DomainError::TagNameAlreadyExists);
        }
    }

    Ok(())
}
