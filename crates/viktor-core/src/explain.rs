//! Explanation generator — curated explanation text keyed by formula id.
//!
//! Ids outside the curated table all receive the same [`FALLBACK`] record.

use crate::types::ExplanationRecord;

/// Returned for every id without a curated explanation.
pub const FALLBACK: ExplanationRecord = ExplanationRecord {
    explanation: "This formula represents a fundamental relationship in physics.",
    intuition: "Each variable plays a crucial role in describing the physical phenomenon.",
    applications: "Used across multiple domains in physics and engineering.",
};

static EXPLANATIONS: phf::Map<&'static str, ExplanationRecord> = phf::phf_map! {
    "newton_second" => ExplanationRecord {
        explanation: "Newton's Second Law is fundamental to classical mechanics. It tells us \
            that the force acting on an object is directly proportional to its acceleration and mass.",
        intuition: "Think of pushing a shopping cart - the harder you push (more force), the \
            faster it accelerates. A heavier cart needs more force for the same acceleration.",
        applications: "Used in engineering design, vehicle dynamics, robotics, and anywhere we \
            need to predict motion.",
    },
    "energy_mass" => ExplanationRecord {
        explanation: "Einstein's famous equation shows that mass and energy are two forms of the \
            same thing. A small amount of mass can be converted to enormous energy.",
        intuition: "This is why nuclear reactions are so powerful - even tiny amounts of matter \
            release huge energy when converted.",
        applications: "Nuclear power, particle accelerators, understanding stellar processes, and \
            modern physics.",
    },
};

pub fn explain(formula_id: &str) -> ExplanationRecord {
    EXPLANATIONS.get(formula_id).copied().unwrap_or(FALLBACK)
}

/// Whether `formula_id` has a curated entry rather than the fallback.
pub fn is_curated(formula_id: &str) -> bool {
    EXPLANATIONS.contains_key(formula_id)
}
