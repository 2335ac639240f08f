//! # CRB Inventory API
//!
//! HTTP server for inventory management: categories, tags, custom
//! fields, items, and item-tag associations.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Inventory API                                  │
//! │                                                                         │
//! │  Client ───► HTTP (8000) ───► http handlers ───► services ───► SQLite  │
//! │                                    │                 │                  │
//! │                                    │                 └── one tx per     │
//! │                                    │                     request        │
//! │                                    └── error envelope middleware        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The handlers in [`http`] deserialize and route; all business rules
//! live in [`services`]; storage access goes through the repositories
//! in `crb-db`.

pub mod config;
pub mod http;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use state::AppState;
