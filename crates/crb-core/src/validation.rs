//! # Validation Module
//!
//! Name and identifier validation rules for CRB Inventory.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Request boundary (axum)                                      │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Pagination defaults and clamping                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service orchestration                                        │
//! │  └── THIS MODULE: id format, name format, value ranges                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraints (uniqueness backstop)                          │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use crb_core::validation::{validate_tag_name, validate_uuid};
//!
//! validate_tag_name("valid-tag-1").unwrap();
//! assert!(validate_uuid("not-a-uuid").is_err());
//! ```

use crate::error::{DomainError, DomainResult};
use crate::{MAX_CUSTOM_FIELD_NAME_LENGTH, MAX_TAG_NAME_LENGTH};

/// Expectation string carried by `InvalidTagName` details.
pub const TAG_NAME_EXPECTED: &str = "Lowercase alphanumeric characters separated by hyphens \
     with a max length of 50 characters.";

/// Expectation string carried by `InvalidCustomFieldName` details.
pub const CUSTOM_FIELD_NAME_EXPECTED: &str = "Lowercase alphanumeric characters separated by \
     underscores with a max length of 30 characters.";

// =============================================================================
// Identifier Validation
// =============================================================================

/// Validates an externally supplied identifier.
///
/// ## Rules
/// - Must parse as a UUID (any version)
///
/// Used as the request-boundary guard for path parameters and before
/// association lookups, so a malformed id never reaches a repository.
///
/// ## Example
/// ```rust
/// use crb_core::validation::validate_uuid;
///
/// assert!(validate_uuid("0191c6a8-5a12-7cc3-ba9f-d7ac11b5ca4e").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(value: &str) -> DomainResult<()> {
    uuid::Uuid::parse_str(value).map_err(|_| DomainError::InvalidId {
        value: value.to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Name Policy
// =============================================================================

/// Checks a "lowercase alphanumeric runs joined by a separator" grammar:
/// no leading/trailing separator, no doubled separator, nothing outside
/// `[a-z0-9]` and the separator itself.
fn is_separated_lowercase(value: &str, separator: char) -> bool {
    let mut expect_run = true;

    for c in value.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            expect_run = false;
        } else if c == separator && !expect_run {
            expect_run = true;
        } else {
            return false;
        }
    }

    // Empty input or a trailing separator leaves a run unfinished.
    !expect_run
}

/// Validates a tag name.
///
/// ## Rules
/// - Lowercase alphanumeric runs separated by single hyphens
/// - Max length 50 characters
///
/// ## Example
/// ```rust
/// use crb_core::validation::validate_tag_name;
///
/// assert!(validate_tag_name("valid-tag-1").is_ok());
/// assert!(validate_tag_name("Invalid_Name").is_err());
/// ```
pub fn validate_tag_name(value: &str) -> DomainResult<()> {
    if value.len() > MAX_TAG_NAME_LENGTH || !is_separated_lowercase(value, '-') {
        return Err(DomainError::InvalidTagName {
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Validates a custom field name.
///
/// ## Rules
/// - Lowercase alphanumeric runs separated by single underscores
/// - Max length 30 characters
///
/// ## Example
/// ```rust
/// use crb_core::validation::validate_custom_field_name;
///
/// assert!(validate_custom_field_name("serial_number").is_ok());
/// assert!(validate_custom_field_name("Serial-Number").is_err());
/// ```
pub fn validate_custom_field_name(value: &str) -> DomainResult<()> {
    if value.len() > MAX_CUSTOM_FIELD_NAME_LENGTH || !is_separated_lowercase(value, '_') {
        return Err(DomainError::InvalidCustomFieldName {
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Validates a category or item name.
///
/// ## Rules
/// - Non-empty after trimming; uniqueness is checked separately against
///   the repository
pub fn validate_resource_name(value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationFailed {
            field: "name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validation
// =============================================================================

/// Validates a counter field (`minimum_threshold`, `stock_quantity`).
///
/// ## Rules
/// - Must be greater than or equal to 0
pub fn validate_non_negative(field: &str, value: i64) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::ValidationFailed {
            field: field.to_string(),
            reason: "must be greater than or equal to 0".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        // v4 and v7 both parse; the validator is version-agnostic.
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("0191c6a8-5a12-7cc3-ba9f-d7ac11b5ca4e").is_ok());

        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }

    #[test]
    fn test_invalid_uuid_error_carries_value() {
        let err = validate_uuid("invalid-id").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId { ref value } if value == "invalid-id"));
    }

    #[test]
    fn test_validate_tag_name() {
        assert!(validate_tag_name("tag").is_ok());
        assert!(validate_tag_name("valid-tag-1").is_ok());
        assert!(validate_tag_name("a1-b2-c3").is_ok());

        // Uppercase and underscores are rejected
        assert!(validate_tag_name("Invalid_Name").is_err());
        assert!(validate_tag_name("UPPER").is_err());
        // Separator placement
        assert!(validate_tag_name("-leading").is_err());
        assert!(validate_tag_name("trailing-").is_err());
        assert!(validate_tag_name("double--hyphen").is_err());
        // Empty and oversized
        assert!(validate_tag_name("").is_err());
        assert!(validate_tag_name(&"a".repeat(51)).is_err());
        assert!(validate_tag_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_custom_field_name() {
        assert!(validate_custom_field_name("serial_number").is_ok());
        assert!(validate_custom_field_name("f1").is_ok());

        // Hyphens belong to tag names, not custom fields
        assert!(validate_custom_field_name("serial-number").is_err());
        assert!(validate_custom_field_name("Invalid_Name").is_err());
        assert!(validate_custom_field_name("_leading").is_err());
        assert!(validate_custom_field_name("trailing_").is_err());
        assert!(validate_custom_field_name("").is_err());
        assert!(validate_custom_field_name(&"a".repeat(31)).is_err());
        assert!(validate_custom_field_name(&"a".repeat(30)).is_ok());
    }

    #[test]
    fn test_validate_resource_name() {
        assert!(validate_resource_name("Warehouse A").is_ok());
        assert!(validate_resource_name("").is_err());
        assert!(validate_resource_name("   ").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("stock_quantity", 0).is_ok());
        assert!(validate_non_negative("stock_quantity", 42).is_ok());
        assert!(validate_non_negative("minimum_threshold", -1).is_err());
    }
}
