/// The top-level campaign aggregate and the flat derived records it carries.
use serde::{Deserialize, Serialize};

use super::bible::WorldBible;
use super::biome::BiomeMap;
use super::faction::FactionGraph;
use super::input::MagicDensity;
use super::seed::WorldSeed;
use super::state::WorldState;

/// Version tag embedded in every persisted campaign document.
pub const CONTEXT_VERSION: &str = "worldforge/1";

/// Creature rosters by threat band, derived from the bible's archetypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreaturePools {
    pub common: Vec<String>,
    pub elite: Vec<String>,
    pub apex: Vec<String>,
}

/// How NPCs talk and carry themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcStyleRules {
    pub speech_style: String,
    /// In `[0, 1]`.
    pub formality: f64,
    /// In `[0, 1]`.
    pub superstition: f64,
    /// In `[0, 1]`.
    pub humor: f64,
    pub address_styles: Vec<String>,
}

/// Loot description material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootFlavorProfile {
    pub descriptors: Vec<String>,
    pub materials: Vec<String>,
    /// Bias toward strange or storied items, in `[0, 1]`.
    pub rarity_bias: f64,
}

/// How magic behaves in this world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicRules {
    pub flavor: String,
    pub density: MagicDensity,
    pub schools: Vec<String>,
    pub casting_toll: String,
    /// Chance of a surge side effect, in `[0, 1]`.
    pub wild_surge_chance: f64,
}

/// Bias vector consumed by narrative logic outside this engine. Derived from
/// tone alone; every axis in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DmBehaviorProfile {
    pub aggression: f64,
    pub leniency: f64,
    pub humor: f64,
    pub grimness: f64,
    pub spectacle: f64,
    pub improvisation: f64,
}

/// Everything generated about the world itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldContext {
    pub bible: WorldBible,
    pub biome_map: BiomeMap,
    pub faction_graph: FactionGraph,
    pub creature_pools: CreaturePools,
    pub npc_style_rules: NpcStyleRules,
    pub loot_flavor: LootFlavorProfile,
    pub magic_rules: MagicRules,
    pub world_state: WorldState,
}

/// Everything the DM layer needs to run the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmContext {
    pub world_seed: WorldSeed,
    pub behavior: DmBehaviorProfile,
    pub narrative_directives: Vec<String>,
    pub tactical_directives: Vec<String>,
}

/// The full aggregate returned by generation. Built once by the assembler;
/// evolution and the character forge read it and return new validated copies.
/// Persisted verbatim as an opaque JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignContext {
    pub version: String,
    pub title: String,
    pub description: String,
    pub seed: WorldSeed,
    pub world: WorldContext,
    pub dm: DmContext,
}
