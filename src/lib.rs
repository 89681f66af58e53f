//! viktor — physics formula explorer.
//!
//! A small JSON API over a fixed catalog of physics formulas: keyword
//! search, detail lookup, a mock relationship graph with 3D coordinates,
//! and canned explanations. This crate re-exports the two layers so that
//! integration tests and benches can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! HTTP (viktor-api) ──► Search / Relationships / Explain / Layout ──► Catalog
//!                                   (viktor-core)
//! ```
//!
//! The catalog is loaded once at startup and shared read-only behind an
//! `Arc`; every request is an independent in-memory computation.

pub use viktor_api;
pub use viktor_core;

pub use viktor_core::{
    Catalog, CatalogError, ExplanationRecord, FormulaRecord, RelationshipEntry, SearchResult,
};
