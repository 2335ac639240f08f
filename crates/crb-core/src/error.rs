//! # Error Taxonomy
//!
//! Domain error types for CRB Inventory.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  crb-core errors (this file)                                           │
//! │  └── DomainError      - Business rule violations, stable codes         │
//! │                                                                         │
//! │  crb-db errors (separate crate)                                        │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - HTTP envelope with status + X-Error-Code       │
//! │                                                                         │
//! │  Flow: DbError → DomainError → ApiError → Client                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each kind carries a fixed 3-digit `error_code` for client branching
//! 4. The Display string is the user-facing `detail` message

use thiserror::Error;

use crate::types::AppResource;
use crate::validation::{CUSTOM_FIELD_NAME_EXPECTED, TAG_NAME_EXPECTED};

// =============================================================================
// Domain Error
// =============================================================================

/// Domain errors surfaced by the service layer.
///
/// Every variant maps to exactly one stable error code and one HTTP
/// status; the mapping to a transport response happens once, at the
/// API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The requested resource does not exist.
    ///
    /// ## When This Occurs
    /// - Lookup by id finds no row
    /// - An item create/update references an unknown category
    /// - An association operation names an unknown item or tag
    #[error("{resource} not found.")]
    ResourceNotFound { resource: AppResource },

    /// A path or body identifier is not a well-formed UUID.
    ///
    /// Raised before any repository call is made.
    #[error("Invalid id. Received: {value}. Expected: A valid UUID.")]
    InvalidId { value: String },

    /// Category name collides with an existing category.
    #[error("Category name already exists.")]
    CategoryNameAlreadyExists,

    /// Tag name collides with an existing tag.
    #[error("Tag name already exists.")]
    TagNameAlreadyExists,

    /// Tag name violates the hyphenated-lowercase format.
    #[error("Invalid tag name. Received: {value}. Expected: {TAG_NAME_EXPECTED}")]
    InvalidTagName { value: String },

    /// Custom field name collides with an existing custom field.
    #[error("Custom field name already exists.")]
    CustomFieldNameAlreadyExists,

    /// Item name collides with an existing item.
    #[error("Item name already exists.")]
    ItemNameAlreadyExists,

    /// Custom field name violates the underscored-lowercase format.
    #[error("Invalid custom field name. Received: {value}. Expected: {CUSTOM_FIELD_NAME_EXPECTED}")]
    InvalidCustomFieldName { value: String },

    /// Category still has items referencing it (restrict-delete policy).
    #[error("Category {id} has items and cannot be deleted.")]
    CategoryHasItems { id: String },

    /// A request body field failed validation.
    #[error("Invalid value for {field}: {reason}")]
    ValidationFailed { field: String, reason: String },

    /// The (item, tag) pair does not exist.
    #[error("Tag is not associated with the item.")]
    TagNotAssociatedWithItem,

    /// The (item, tag) pair already exists.
    #[error("Tag is already associated with the item.")]
    TagAlreadyAssociatedWithItem,

    /// Unexpected failure (storage, serialization, ...). Never exposes
    /// internals beyond the message.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// Stable machine-readable error code.
    ///
    /// Codes are part of the public contract; clients branch on them.
    /// `099` is reserved for unhandled failures.
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::ResourceNotFound { .. } => "001",
            DomainError::InvalidId { .. } => "002",
            DomainError::CategoryNameAlreadyExists => "003",
            DomainError::TagNameAlreadyExists => "004",
            DomainError::InvalidTagName { .. } => "005",
            DomainError::CustomFieldNameAlreadyExists => "006",
            DomainError::ItemNameAlreadyExists => "007",
            DomainError::InvalidCustomFieldName { .. } => "008",
            DomainError::CategoryHasItems { .. } => "009",
            DomainError::ValidationFailed { .. } => "010",
            DomainError::TagNotAssociatedWithItem => "040",
            DomainError::TagAlreadyAssociatedWithItem => "041",
            DomainError::Internal(_) => "099",
        }
    }

    /// Error kind name, reported as `exc` in the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::ResourceNotFound { .. } => "ResourceNotFound",
            DomainError::InvalidId { .. } => "InvalidId",
            DomainError::CategoryNameAlreadyExists => "CategoryNameAlreadyExists",
            DomainError::TagNameAlreadyExists => "TagNameAlreadyExists",
            DomainError::InvalidTagName { .. } => "InvalidTagName",
            DomainError::CustomFieldNameAlreadyExists => "CustomFieldNameAlreadyExists",
            DomainError::ItemNameAlreadyExists => "ItemNameAlreadyExists",
            DomainError::InvalidCustomFieldName { .. } => "InvalidCustomFieldName",
            DomainError::CategoryHasItems { .. } => "CategoryHasItems",
            DomainError::ValidationFailed { .. } => "ValidationFailed",
            DomainError::TagNotAssociatedWithItem => "TagNotAssociatedWithItem",
            DomainError::TagAlreadyAssociatedWithItem => "TagAlreadyAssociatedWithItem",
            DomainError::Internal(_) => "Internal",
        }
    }

    /// Shorthand for a not-found error of the given resource kind.
    pub fn not_found(resource: AppResource) -> Self {
        DomainError::ResourceNotFound { resource }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DomainError.
pub type DomainResult<T> = Result<T, DomainError>;

// =============================================================================
// Unit Tests
// =============================================================================
