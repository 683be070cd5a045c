/// Character creation input and the bindings the forge derives from a world.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller wishes for a new character. Every field optional; unset fields are
/// derived from the campaign's tone and seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CharacterForgeInput {
    #[serde(default)]
    pub name: Option<String>,
    /// Region id or name fragment, matched case-insensitively.
    #[serde(default)]
    pub origin_region: Option<String>,
    /// Faction id or name fragment, matched case-insensitively.
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    /// Honored when it has at least two entries.
    #[serde(default)]
    pub personality_traits: Vec<String>,
    /// In `[-1, 1]`.
    #[serde(default)]
    pub moral_leaning: Option<f64>,
}

/// How a new character binds into an existing world: origin, allegiance,
/// starting relationships. The caller merges this into its own runtime state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterForgeOutput {
    pub origin_region_id: String,
    pub origin_region_name: String,
    pub faction_alignment_id: String,
    pub faction_alignment_name: String,
    pub background: String,
    pub personality_traits: Vec<String>,
    /// In `[-1, 1]`.
    pub moral_leaning: f64,
    pub starting_town: String,
    /// NPC name to relationship score in `[-100, 100]`. Always 3 entries.
    pub starting_npc_relationships: BTreeMap<String, i32>,
    /// Faction id to trust score in `[-100, 100]`, one entry per faction.
    pub initial_faction_trust: BTreeMap<String, i32>,
    /// At most 6 entries.
    pub starting_rumors: Vec<String>,
    /// At most 10 entries.
    pub starting_flags: Vec<String>,
}
