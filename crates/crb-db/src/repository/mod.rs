//! # Repository Module
//!
//! Database repository implementations for CRB Inventory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Service operation                                                     │
//! │       │                                                                 │
//! │       │  let mut tx = db.begin().await?;                               │
//! │       │  CategoryRepository::find_by_name(&mut tx, name)               │
//! │       │  CategoryRepository::insert(&mut tx, &category)                │
//! │       │  tx.commit().await?;                                           │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Every method takes a `&mut SqliteConnection`, so checks and           │
//! │  mutations of one request share a single transaction and roll          │
//! │  back together on any error.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`] - Category CRUD + name uniqueness queries
//! - [`TagRepository`] - Tag CRUD + name uniqueness queries
//! - [`CustomFieldRepository`] - Custom field CRUD + name uniqueness queries
//! - [`ItemRepository`] - Item CRUD + category/tag scoped listings
//! - [`ItemTagRepository`] - The item<->tag association table

pub mod category;
pub mod custom_field;
pub mod item;
pub mod item_tag;
pub mod tag;

pub use category::CategoryRepository;
pub use custom_field::CustomFieldRepository;
pub use item::ItemRepository;
pub use item_tag::ItemTagRepository;
pub use tag::TagRepository;
