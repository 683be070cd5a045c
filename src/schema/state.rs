/// The mutable, tick-advancing simulation snapshot and the player actions
/// that drive it.
use serde::{Deserialize, Serialize};

/// Rumors kept in the active window.
pub const MAX_RUMORS: usize = 40;
/// Collapsed dungeons kept in the active window.
pub const MAX_DUNGEONS: usize = 40;
/// History entries retained.
pub const MAX_HISTORY: usize = 120;
/// Villain escalation ceiling.
pub const MAX_ESCALATION: i32 = 999;

/// Per-faction running totals tracked by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionState {
    pub faction_id: String,
    /// In `[1, 120]`.
    pub power_level: i32,
    /// In `[-100, 100]`.
    pub trust_delta: i32,
    pub last_action_tick: u32,
}

/// Impact scalars carried by a player action. Callers are responsible for
/// sane magnitudes; results are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ActionImpact {
    pub moral: f64,
    pub generosity: f64,
    pub chaos: f64,
    pub brutality: f64,
}

impl ActionImpact {
    pub fn is_finite(&self) -> bool {
        self.moral.is_finite()
            && self.generosity.is_finite()
            && self.chaos.is_finite()
            && self.brutality.is_finite()
    }
}

/// One discrete player action fed to world evolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerWorldAction {
    pub action_type: String,
    pub summary: String,
    #[serde(default)]
    pub target_faction_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub impact: ActionImpact,
}

/// A structured record of one evolution tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub tick: u32,
    pub action_type: String,
    pub summary: String,
    pub impact: ActionImpact,
}

/// Simulated world snapshot. Created once per campaign by the assembler and
/// replaced, never mutated in place, by world evolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub seed_number: u32,
    pub world_name: String,
    /// Monotonic, starts at 0.
    pub tick: u32,
    pub active_towns: Vec<String>,
    /// Capped to the last [`MAX_RUMORS`] entries.
    pub active_rumors: Vec<String>,
    /// Deduplicated, capped to the last [`MAX_DUNGEONS`] entries.
    pub collapsed_dungeons: Vec<String>,
    /// In `[0, 999]`.
    pub villain_escalation: i32,
    pub factions: Vec<FactionState>,
    /// Capped to the last [`MAX_HISTORY`] entries.
    pub history: Vec<HistoryEntry>,
}

impl WorldState {
    pub fn faction(&self, id: &str) -> Option<&FactionState> {
        self.factions.iter().find(|f| f.faction_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_finiteness() {
        assert!(ActionImpact::default().is_finite());
        let bad = ActionImpact {
            chaos: f64::NAN,
            ..ActionImpact::default()
        };
        assert!(!bad.is_finite());
    }

    #[test]
    fn world_state_ron_round_trip() {
        let state = WorldState {
            seed_number: 812_450_331,
            world_name: "Vaelmar".to_string(),
            tick: 3,
            active_towns: vec!["Harrow Mere".to_string()],
            active_rumors: vec!["Tavern talk insists the pass is open.".to_string()],
            collapsed_dungeons: vec!["Sunken Undercroft".to_string()],
            villain_escalation: 17,
            factions: vec![FactionState {
                faction_id: "faction-1".to_string(),
                power_level: 48,
                trust_delta: -6,
                last_action_tick: 3,
            }],
            history: vec![HistoryEntry {
                tick: 3,
                action_type: "deed".to_string(),
                summary: "opened the pass".to_string(),
                impact: ActionImpact::default(),
            }],
        };
        let serialized = ron::to_string(&state).unwrap();
        let deserialized: WorldState = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, state);
    }
}
