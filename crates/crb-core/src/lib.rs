//! # crb-core: Pure Domain Logic for CRB Inventory
//!
//! This crate is the **heart** of CRB Inventory. It contains the domain
//! types, validation rules, and error taxonomy as pure code with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CRB Inventory Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients                                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/api (axum + services)                      │   │
//! │  │    list / get / create / update / patch / delete per resource  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ crb-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐    │   │
//! │  │   │   types   │  │ validation│  │         error           │    │   │
//! │  │   │ Category  │  │ uuid      │  │  DomainError + stable   │    │   │
//! │  │   │ Tag, Item │  │ tag name  │  │  3-digit error codes    │    │   │
//! │  │   └───────────┘  └───────────┘  └─────────────────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    crb-db (Database Layer)                      │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, Tag, CustomField, Item, DTOs)
//! - [`error`] - Domain error taxonomy with stable error codes
//! - [`validation`] - Name and identifier validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Stable Codes**: Each error kind carries a fixed machine-readable code

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use crb_core::DomainError` instead of
// `use crb_core::error::DomainError`

pub use error::{DomainError, DomainResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default page number for list endpoints.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size accepted by list endpoints.
///
/// ## Business Reason
/// Keeps a single listing request bounded; clients page through larger
/// result sets instead of fetching everything at once.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Maximum length of a tag name.
pub const MAX_TAG_NAME_LENGTH: usize = 50;

/// Maximum length of a custom field name.
pub const MAX_CUSTOM_FIELD_NAME_LENGTH: usize = 30;
