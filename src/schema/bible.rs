/// Narrative reference material generated once per world.
use serde::{Deserialize, Serialize};

/// One biome paired with its flavor phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeNote {
    pub biome: String,
    pub flavor: String,
}

/// Cosmology, conflicts, naming material, and prose style for a world.
/// A pure function of the world seed; every list is ordered and stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBible {
    pub world_name: String,
    pub cosmology: Vec<String>,
    pub magic_flavor: String,
    pub core_conflicts: Vec<String>,
    /// Narrative faction name lists. These counts are independent of the
    /// simulated faction count; the faction graph consumes these names first
    /// and generates fresh ones for any remainder.
    pub dominant_factions: Vec<String>,
    pub minor_factions: Vec<String>,
    pub biomes: Vec<BiomeNote>,
    pub creature_archetypes: Vec<String>,
    pub npc_speech_style: String,
    pub naming_rules: Vec<String>,
    pub loot_flavor: Vec<String>,
    pub moral_climate: String,
}
