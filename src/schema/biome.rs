/// Spatial partition of the world into regions with danger and density
/// attributes.
use serde::{Deserialize, Serialize};

use super::input::WorldSize;

/// One region of the generated world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub dominant_biome: String,
    /// In `[0, 1]`.
    pub corruption: f64,
    /// In `[0, 1]`.
    pub dungeon_density: f64,
    /// In `[0, 1]`.
    pub town_density: f64,
    pub capital_town: String,
    pub tags: Vec<String>,
}

/// A region whose corruption is high enough to surface narratively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorruptionZone {
    pub region_id: String,
    pub name: String,
    pub severity: f64,
}

/// The full spatial model: ordered regions plus derived summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeMap {
    pub world_size: WorldSize,
    pub regions: Vec<Region>,
    /// Severity-sorted, the top third of regions with corruption >= 0.55.
    pub corruption_zones: Vec<CorruptionZone>,
    pub capital_towns: Vec<String>,
    pub mean_dungeon_density: f64,
}

impl BiomeMap {
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }
}
