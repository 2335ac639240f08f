//! # crb-db: Database Layer for CRB Inventory
//!
//! This crate provides database access for the CRB Inventory system.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CRB Inventory Data Flow                             │
//! │                                                                         │
//! │  Service operation (create_category, add_tag_to_item, ...)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      crb-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (category.rs,  │    │  (embedded)  │  │   │
//! │  │   │               │    │  tag.rs, ...)  │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ one per table  │    │ 001_init.sql │  │   │
//! │  │   │ begin() tx    │    │ + association  │    │              │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (file or :memory: in tests)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation, configuration, transactions
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (one per table)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crb_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./crb_inventory.db")).await?;
//!
//! let mut tx = db.begin().await?;
//! let category = CategoryRepository::find_by_id(&mut tx, &id).await?;
//! tx.commit().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::custom_field::CustomFieldRepository;
pub use repository::item::ItemRepository;
pub use repository::item_tag::ItemTagRepository;
pub use repository::tag::TagRepository;
