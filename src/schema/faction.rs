/// Political factions, their pairwise relation matrix, and active tensions.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a faction sits on three moral axes, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoralAlignment {
    pub order: f64,
    pub mercy: f64,
    pub ambition: f64,
}

impl MoralAlignment {
    /// Sum of absolute per-axis differences, the distance used by relation
    /// scoring.
    pub fn distance(&self, other: &MoralAlignment) -> f64 {
        (self.order - other.order).abs()
            + (self.mercy - other.mercy).abs()
            + (self.ambition - other.ambition).abs()
    }
}

/// One simulated faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub id: String,
    pub name: String,
    pub ideology: String,
    pub alignment: MoralAlignment,
    /// In `[10, 95]` at creation; evolution may later push the simulated
    /// value anywhere in `[1, 120]`.
    pub power_level: i32,
    pub home_region_id: String,
    pub goals: Vec<String>,
}

/// Factions plus their symmetric relation matrix and ranked tensions.
///
/// The matrix stores every ordered pair (both directions plus self) so
/// lookups need no ordering convention; self-relation is fixed at 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionGraph {
    pub factions: Vec<Faction>,
    pub relations: BTreeMap<String, BTreeMap<String, i32>>,
    pub active_tensions: Vec<String>,
}

impl FactionGraph {
    pub fn faction(&self, id: &str) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id == id)
    }

    pub fn relation(&self, a: &str, b: &str) -> Option<i32> {
        self.relations.get(a).and_then(|row| row.get(b)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_distance_is_symmetric() {
        let a = MoralAlignment {
            order: 0.5,
            mercy: -0.25,
            ambition: 0.75,
        };
        let b = MoralAlignment {
            order: -0.5,
            mercy: 0.25,
            ambition: 0.0,
        };
        assert!((a.distance(&b) - b.distance(&a)).abs() < f64::EPSILON);
        assert!((a.distance(&b) - 2.25).abs() < 1e-9);
        assert_eq!(a.distance(&a), 0.0);
    }
}
