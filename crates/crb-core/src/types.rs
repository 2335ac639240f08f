//! # Domain Types
//!
//! Core domain types used throughout CRB Inventory.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │      Tag        │   │   CustomField   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID v7)   │   │  id (UUID v7)   │   │  id (UUID v7)   │       │
//! │  │  name (unique)  │   │  name (unique)  │   │  name (unique)  │       │
//! │  │  is_active      │   │  is_active      │   │  is_active      │       │
//! │  └────────┬────────┘   └────────┬────────┘   └─────────────────┘       │
//! │           │ 1:N                 │ N:M (item_tag_association)           │
//! │  ┌────────▼────────────────────▼────────┐                              │
//! │  │                Item                   │                              │
//! │  │  ─────────────────────────────────── │                              │
//! │  │  id, name (unique), category_id      │                              │
//! │  │  minimum_threshold, stock_quantity   │                              │
//! │  └──────────────────────────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every entity shares the same envelope: opaque UUID id, unique name,
//! optional description, `is_active` soft-activation flag, and
//! `created_at`/`updated_at` timestamps written by the storage layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// =============================================================================
// Resource Kinds
// =============================================================================

/// The four resource kinds managed by the API.
///
/// Serialized with the wire names used in deletion messages and
/// not-found details (`"category"`, `"tag"`, `"custom_field"`, `"item"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppResource {
    Category,
    Tag,
    CustomField,
    Item,
}

impl AppResource {
    /// Wire name of the resource kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppResource::Category => "category",
            AppResource::Tag => "tag",
            AppResource::CustomField => "custom_field",
            AppResource::Item => "item",
        }
    }
}

impl fmt::Display for AppResource {
    /// Human-readable, capitalized form used in error details.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppResource::Category => "Category",
            AppResource::Tag => "Tag",
            AppResource::CustomField => "Custom field",
            AppResource::Item => "Item",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Identifier Generation
// =============================================================================

/// Generates a new resource identifier.
///
/// ## Why UUID v7?
/// v7 identifiers are time-ordered, so the canonical listing order
/// (`ORDER BY id DESC`) returns the most recently created rows first
/// without a separate sort column.
pub fn generate_resource_id() -> String {
    Uuid::now_v7().to_string()
}

// =============================================================================
// Entities
// =============================================================================

/// An inventory category. Owns zero-or-more items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Unique identifier (UUID v7).
    pub id: String,

    /// Unique display name.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Whether the category appears in default list views.
    pub is_active: bool,

    /// When the category was created.
    pub created_at: DateTime<Utc>,

    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A tag. Participates in a many-to-many relation with items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Tag {
    /// Unique identifier (UUID v7).
    pub id: String,

    /// Unique name, lowercase alphanumeric separated by hyphens.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Whether the tag appears in default list views.
    pub is_active: bool,

    /// When the tag was created.
    pub created_at: DateTime<Utc>,

    /// When the tag was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A custom field definition. Standalone, no relations in current scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomField {
    /// Unique identifier (UUID v7).
    pub id: String,

    /// Unique name, lowercase alphanumeric separated by underscores.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Whether the custom field appears in default list views.
    pub is_active: bool,

    /// When the custom field was created.
    pub created_at: DateTime<Utc>,

    /// When the custom field was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An inventory item. Belongs to exactly one category and holds a set
/// of tags (unordered, no duplicates).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Unique identifier (UUID v7).
    pub id: String,

    /// Unique display name.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Whether the item appears in default list views.
    pub is_active: bool,

    /// Category this item belongs to.
    pub category_id: String,

    /// Restock alert threshold, never negative.
    pub minimum_threshold: i64,

    /// Current stock level, never negative.
    pub stock_quantity: i64,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Pagination
// =============================================================================

/// Pagination query parameters for list endpoints.
///
/// Defaults: `page=1`, `page_size=10`. Values outside the accepted
/// ranges (`page >= 1`, `1 <= page_size <= 100`) are clamped by
/// [`Pagination::normalized`] rather than rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "Pagination::default_page")]
    pub page: u32,

    #[serde(default = "Pagination::default_page_size")]
    pub page_size: u32,
}

impl Pagination {
    fn default_page() -> u32 {
        DEFAULT_PAGE
    }

    fn default_page_size() -> u32 {
        DEFAULT_PAGE_SIZE
    }

    /// Returns the pagination with both fields clamped into range.
    pub fn normalized(self) -> Pagination {
        Pagination {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Row offset of the first result on this page.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    /// Row limit for this page.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Envelope for single-entity responses: `{"result": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse<T> {
    pub result: T,
}

/// Envelope for paginated list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub result: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

/// Acknowledgment returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDeletedMessage {
    pub message: String,
    pub id: String,
    pub resource: AppResource,
}

impl ResourceDeletedMessage {
    pub fn new(id: impl Into<String>, resource: AppResource) -> Self {
        ResourceDeletedMessage {
            message: "Resource deleted successfully.".to_string(),
            id: id.into(),
            resource,
        }
    }
}

/// Tags currently linked to an item, with their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTagListResponse {
    pub result: Vec<Tag>,
    pub total: i64,
}

/// Acknowledgment for adding a tag to an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTagAddMessage {
    pub message: String,
    pub item_id: String,
    pub tag_id: String,
}

impl ItemTagAddMessage {
    pub fn new(item_id: impl Into<String>, tag_id: impl Into<String>) -> Self {
        ItemTagAddMessage {
            message: "Tag added to item successfully.".to_string(),
            item_id: item_id.into(),
            tag_id: tag_id.into(),
        }
    }
}

/// Acknowledgment for removing a tag from an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTagDeleteMessage {
    pub message: String,
    pub item_id: String,
    pub tag_id: String,
}

impl ItemTagDeleteMessage {
    pub fn new(item_id: impl Into<String>, tag_id: impl Into<String>) -> Self {
        ItemTagDeleteMessage {
            message: "Tag removed from item successfully.".to_string(),
            item_id: item_id.into(),
            tag_id: tag_id.into(),
        }
    }
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Create request shared by Category, Tag, and CustomField.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResourceCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Full-replace update request shared by Category, Tag, and CustomField.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResourceUpdateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
}

/// Partial update request shared by Category, Tag, and CustomField.
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedResourcePatchRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Item create request. Counters default to 0 when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: String,
    #[serde(default)]
    pub minimum_threshold: Option<i64>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
}

/// Item full-replace update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemUpdateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub category_id: String,
    pub minimum_threshold: i64,
    pub stock_quantity: i64,
}

/// Item partial update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatchRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub minimum_threshold: Option<i64>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================
