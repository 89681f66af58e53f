//! Test builders — ergonomic constructors for `FormulaRecord` and `Catalog`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use viktor_core::{Catalog, FormulaRecord};

// ---------------------------------------------------------------------------
// FormulaBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FormulaRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let ohm = FormulaBuilder::new("ohm")
///     .name("Ohm's Law")
///     .domain("Electromagnetism")
///     .description("Voltage equals current times resistance")
///     .build();
/// ```
pub struct FormulaBuilder {
    id: String,
    name: String,
    equation: String,
    domain: String,
    description: String,
    variables: Vec<String>,
    applications: Vec<String>,
}

impl FormulaBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Formula {id}"),
            id,
            equation: "x = y".to_string(),
            domain: "Uncategorized".to_string(),
            description: String::new(),
            variables: vec![],
            applications: vec![],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn equation(mut self, equation: impl Into<String>) -> Self {
        self.equation = equation.into();
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn variable(mut self, symbol: impl Into<String>) -> Self {
        self.variables.push(symbol.into());
        self
    }

    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.applications.push(application.into());
        self
    }

    pub fn build(self) -> FormulaRecord {
        FormulaRecord {
            id: self.id,
            name: self.name,
            equation: self.equation,
            domain: self.domain,
            description: self.description,
            variables: self.variables,
            applications: self.applications,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// Build a catalog from records, panicking on duplicate ids.
pub fn catalog_of(records: Vec<FormulaRecord>) -> Catalog {
    Catalog::from_records(records).expect("test catalog ids must be unique")
}

/// Build a catalog of `n` records cycling through a few domains, where every
/// fifth record mentions "energy" in its description.
pub fn build_catalog(n: usize) -> Catalog {
    const DOMAINS: &[&str] = &[
        "Classical Mechanics",
        "Thermodynamics",
        "Electromagnetism",
        "Quantum Mechanics",
    ];
    let records = (0..n)
        .map(|i| {
            let description = if i % 5 == 0 {
                format!("conservation of energy, case {i}")
            } else {
                format!("relation number {i}")
            };
            FormulaBuilder::new(format!("formula_{i}"))
                .name(format!("Law {i}"))
                .domain(DOMAINS[i % DOMAINS.len()])
                .description(description)
                .build()
        })
        .collect();
    catalog_of(records)
}
