//! Coordinate synthesizer — places related formulas around a circle for the
//! 3D relationship view.
//!
//! Entry `i` of `n` sits at angle `2π·i/n` on a circle of radius
//! [`RADIUS`] in the x/y plane. Depth and connection strength are random
//! so the visualization does not look flat.

use crate::types::RelationshipEntry;
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::{Range, RangeInclusive};

pub const RADIUS: f64 = 20.0;
pub const DEPTH_RANGE: RangeInclusive<f64> = -10.0..=10.0;
pub const STRENGTH_RANGE: Range<f64> = 0.3..1.0;

/// Lay out `related_ids` using `rng` for depth and strength.
///
/// Output order matches input order. An empty input yields an empty layout.
pub fn layout<S, R>(related_ids: &[S], rng: &mut R) -> Vec<RelationshipEntry>
where
    S: AsRef<str>,
    R: Rng,
{
    let n = related_ids.len() as f64;

    related_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let angle = (i as f64 / n) * TAU;
            RelationshipEntry {
                id: id.as_ref().to_string(),
                x: RADIUS * angle.cos(),
                y: RADIUS * angle.sin(),
                z: rng.gen_range(DEPTH_RANGE),
                connection_strength: rng.gen_range(STRENGTH_RANGE),
            }
        })
        .collect()
}
