//! Static fixtures used across harnesses.

use viktor_core::FormulaRecord;

/// Queries worth running against the builtin catalog, hits and misses alike.
pub const SAMPLE_QUERIES: &[&str] = &[
    "Newton",
    "mechanics",
    "energy",
    "quantum",
    "law",
    "E",
    "relativity",
    "xyzzy",
    "",
];

/// Ids with a curated explanation and relationship entry.
pub const CURATED_IDS: &[&str] = &["newton_second", "energy_mass"];

/// A JSON catalog in the on-disk format, with two electromagnetism formulas.
pub const CATALOG_JSON: &str = r#"[
  {
    "id": "ohm",
    "name": "Ohm's Law",
    "equation": "V = IR",
    "domain": "Electromagnetism",
    "description": "Voltage equals current times resistance",
    "variables": ["V", "I", "R"],
    "applications": ["Circuit design"]
  },
  {
    "id": "coulomb",
    "name": "Coulomb's Law",
    "equation": "F = k q1 q2 / r²",
    "domain": "Electromagnetism",
    "description": "Force between two point charges"
  }
]"#;

/// Write `records` as a JSON catalog into `dir`, returning the file path.
pub fn write_catalog(dir: &std::path::Path, records: &[FormulaRecord]) -> std::path::PathBuf {
    let path = dir.join("formulas.json");
    std::fs::write(&path, serde_json::to_string_pretty(records).unwrap()).unwrap();
    path
}

/// Write [`CATALOG_JSON`] into `dir`, returning the file path.
pub fn write_catalog_json(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("formulas.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();
    path
}
