//! # Service Layer
//!
//! The locus of business rules: each operation validates its inputs,
//! runs existence/uniqueness checks, and performs the repository
//! mutation, all inside a single transaction.
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              One Unit of Work Per Operation                             │
//! │                                                                         │
//! │  handler ──► service fn                                                │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │             validate ids / name format / value ranges                  │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │             db.begin()  ←── transaction opens                          │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │             existence + uniqueness checks (same tx)                    │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │             repository mutation (same tx)                              │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │             tx.commit()  ── or rollback-on-drop on any `?`             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The uniqueness checks here exist to produce clean typed errors; the
//! schema-level UNIQUE constraints remain the authoritative guarantee
//! under concurrent creation.

pub mod category;
pub mod custom_field;
pub mod item;
pub mod item_tag;
pub mod tag;
