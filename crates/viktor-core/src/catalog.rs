//! Formula catalog — the write-once, read-many set of [`FormulaRecord`]s.
//!
//! The catalog is built once at startup, either from the embedded sample
//! dataset ([`Catalog::builtin`]) or from a JSON file on disk
//! ([`Catalog::from_path`]), and is shared read-only afterwards.

use crate::error::CatalogError;
use crate::types::FormulaRecord;
use std::collections::HashSet;
use std::path::Path;

/// Ordered, immutable collection of formulas with unique identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    formulas: Vec<FormulaRecord>,
}

impl Catalog {
    /// Build a catalog from records, preserving their order.
    pub fn from_records(formulas: Vec<FormulaRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(formulas.len());
        for formula in &formulas {
            if !seen.insert(formula.id.as_str()) {
                return Err(CatalogError::DuplicateId(formula.id.clone()));
            }
        }
        Ok(Self { formulas })
    }

    /// Load a JSON array of formula records from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let formulas: Vec<FormulaRecord> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_records(formulas)?;
        tracing::info!(
            "loaded {} formulas from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The embedded three-formula sample dataset.
    pub fn builtin() -> Self {
        Self {
            formulas: sample_formulas(),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&FormulaRecord> {
        self.formulas.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormulaRecord> {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Number of distinct domain strings (exact comparison).
    pub fn domains_covered(&self) -> usize {
        self.formulas
            .iter()
            .map(|f| f.domain.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

fn sample_formulas() -> Vec<FormulaRecord> {
    // (id, name, equation, domain, description, variables, applications)
    type Row = (
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static [&'static str],
        &'static [&'static str],
    );
    const SAMPLE: &[Row] = &[
        (
            "newton_second",
            "Newton's Second Law",
            "F = ma",
            "Classical Mechanics",
            "Force equals mass times acceleration",
            &["F", "m", "a"],
            &["Motion analysis", "Engineering design"],
        ),
        (
            "energy_mass",
            "Mass-Energy Equivalence",
            "E = mc²",
            "Relativity",
            "Energy and mass are interchangeable",
            &["E", "m", "c"],
            &["Nuclear physics", "Particle physics"],
        ),
        (
            "schrodinger",
            "Schrödinger Equation",
            "iℏ ∂ψ/∂t = Ĥψ",
            "Quantum Mechanics",
            "Fundamental equation of quantum mechanics",
            &["ψ", "t", "Ĥ", "ℏ"],
            &["Quantum systems", "Wave functions"],
        ),
    ];

    let to_owned =
        |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

    SAMPLE
        .iter()
        .map(
            |&(id, name, equation, domain, description, variables, applications)| FormulaRecord {
                id: id.to_string(),
                name: name.to_string(),
                equation: equation.to_string(),
                domain: domain.to_string(),
                description: description.to_string(),
                variables: to_owned(variables),
                applications: to_owned(applications),
            },
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
