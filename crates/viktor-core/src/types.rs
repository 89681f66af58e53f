//! Core types for viktor-core.
//!
//! This module defines the data structures shared across the catalog, the
//! search engine and the HTTP layer: the immutable [`FormulaRecord`], the
//! transient [`SearchResult`] and [`RelationshipEntry`], and the static
//! [`ExplanationRecord`].

use serde::{Deserialize, Serialize};

/// A single physics formula in the catalog.
///
/// Records are loaded once at startup and never mutated. Everything outside
/// the [`Catalog`](crate::catalog::Catalog) only ever sees `&FormulaRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRecord {
    /// Identifier, unique within a catalog (e.g. `newton_second`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// The equation as printable text.
    pub equation: String,
    /// Domain category (e.g. `Classical Mechanics`).
    pub domain: String,
    /// Free-text description.
    pub description: String,
    /// Variable symbols, in the order they are presented.
    #[serde(default)]
    pub variables: Vec<String>,
    /// Application areas, in the order they are presented.
    #[serde(default)]
    pub applications: Vec<String>,
}

/// A catalog record paired with its relevance score for one query.
///
/// Serializes as the record's fields flattened alongside `relevance_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub formula: &'a FormulaRecord,
    pub relevance_score: u32,
}

/// A related formula placed in 3D space for visualization.
///
/// Regenerated on every request; two layouts of the same id list are not
/// expected to agree on `z` or `connection_strength`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipEntry {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// In `[0.3, 1.0)`.
    pub connection_strength: f64,
}

/// Canned explanation text for a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExplanationRecord {
    pub explanation: &'static str,
    pub intuition: &'static str,
    pub applications: &'static str,
}
