//! Relationship resolver — static table of conceptually related formulas.
//!
//! Related ids need not exist in the catalog; the table is consulted on its
//! own and an unknown id simply has no relations.

static RELATIONSHIPS: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "newton_second" => &["energy_kinetic", "momentum_conservation"],
    "energy_mass" => &["energy_kinetic", "momentum_relativistic"],
    "schrodinger" => &["wave_equation", "uncertainty_principle"],
};

/// Ids related to `formula_id`, in table order. Empty when unmapped.
pub fn related_ids(formula_id: &str) -> &'static [&'static str] {
    RELATIONSHIPS.get(formula_id).copied().unwrap_or(&[])
}
