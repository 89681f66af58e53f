//! viktor-core — the physics formula explorer's logical core.
//!
//! This crate holds everything that is not HTTP: the formula catalog and
//! the four read-only operations layered over it, plus configuration.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Search
//!    │
//!    └──► (by id) ──► Relationships ──► Layout
//!                └──► Explain
//! ```
//!
//! The catalog is built once at startup and never mutated. Every operation
//! is a synchronous in-memory computation; the only non-determinism is the
//! random source handed to [`layout::layout`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod explain;
pub mod layout;
pub mod relationships;
pub mod search;
pub mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use types::{ExplanationRecord, FormulaRecord, RelationshipEntry, SearchResult};
