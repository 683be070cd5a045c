/// Biome map generation: region partitioning with tone-weighted biome
/// selection and derived danger/density attributes.
use log::debug;

use crate::rng::{rng_01, rng_int, rng_pick, weighted_pick};
use crate::schema::biome::{BiomeMap, CorruptionZone, Region};
use crate::schema::input::WorldSize;
use crate::schema::seed::WorldSeed;
use crate::schema::tone::clamp01;

use super::pools::{
    BiomeMood, BIOMES, REGION_NAME_PREFIXES, REGION_NAME_SUFFIXES, TOWN_ROOTS, TOWN_SUFFIXES,
};

/// Regions at or past this corruption can become corruption zones.
const CORRUPTION_ZONE_THRESHOLD: f64 = 0.55;

/// Generate the spatial model for a world. Pure function of the seed; the
/// bible is not consulted, so biome notes and regions may disagree in
/// flavor, which is intended.
pub fn generate_biome_map(seed: &WorldSeed) -> BiomeMap {
    let s = seed.number();
    let tone = &seed.tone;
    let input = &seed.input;

    let region_count = match input.world_size {
        WorldSize::Small => rng_int(s, "biome:region-count", 5, 7),
        WorldSize::Medium => rng_int(s, "biome:region-count", 8, 10),
        WorldSize::Large => rng_int(s, "biome:region-count", 11, 14),
    } as usize;
    debug!("generating {region_count} regions");

    let weights = biome_weights(tone, &input.starting_region_hint);

    let corruption_term = 0.06 * f64::from(input.corruption_level);
    let regions: Vec<Region> = (0..region_count)
        .map(|i| {
            let id = format!("region-{}", i + 1);
            let biome = *weighted_pick(s, &format!("biome:{i}:pick"), &weights);
            let name = format!(
                "{} {}",
                rng_pick(s, &format!("biome:{i}:name-prefix"), REGION_NAME_PREFIXES),
                rng_pick(s, &format!("biome:{i}:name-suffix"), REGION_NAME_SUFFIXES),
            );
            let corruption = clamp01(
                0.55 * tone.darkness + corruption_term + 0.28 * rng_01(s, &format!("biome:{i}:corruption")),
            );
            let dungeon_density = clamp01(
                0.18 + 0.35 * tone.darkness + 0.24 * tone.brutality - 0.20 * tone.cozy
                    + (rng_01(s, &format!("biome:{i}:dungeons")) - 0.5) * 0.2,
            );
            let town_density = clamp01(
                0.58 - 0.35 * dungeon_density + 0.24 * tone.cozy + 0.14 * tone.heroic
                    - 0.10 * tone.darkness,
            );
            let capital_town = format!(
                "{} {}",
                rng_pick(s, &format!("biome:{i}:town-root"), TOWN_ROOTS),
                title_case(*rng_pick(s, &format!("biome:{i}:town-suffix"), TOWN_SUFFIXES)),
            );

            let mut tags = vec![slug(biome)];
            if corruption >= CORRUPTION_ZONE_THRESHOLD {
                tags.push("corrupted".to_string());
            }
            if dungeon_density >= 0.60 {
                tags.push("dungeon-rich".to_string());
            }
            if town_density >= 0.60 {
                tags.push("settled".to_string());
            }

            Region {
                id,
                name,
                dominant_biome: biome.to_string(),
                corruption,
                dungeon_density,
                town_density,
                capital_town,
                tags,
            }
        })
        .collect();

    let corruption_zones = corruption_zones(&regions);
    let capital_towns = regions.iter().map(|r| r.capital_town.clone()).collect();
    let mean_dungeon_density =
        regions.iter().map(|r| r.dungeon_density).sum::<f64>() / regions.len() as f64;

    BiomeMap {
        world_size: input.world_size,
        regions,
        corruption_zones,
        capital_towns,
        mean_dungeon_density,
    }
}

/// Tone-driven biome weights, shared by every region draw: base 5, a mood
/// bonus proportional to the matching tone axes, and a flat 6 when the
/// caller's starting-region hint textually matches the biome name.
pub(crate) fn biome_weights(
    tone: &crate::schema::tone::ToneVector,
    starting_region_hint: &str,
) -> Vec<(&'static str, f64)> {
    let hint = starting_region_hint.to_lowercase();
    BIOMES
        .iter()
        .map(|entry| {
            let mut weight = 5.0;
            weight += match entry.mood {
                BiomeMood::Dark => 4.0 * (tone.darkness + tone.brutality),
                BiomeMood::Cozy => 4.0 * (tone.cozy + tone.whimsy),
                BiomeMood::Exotic => 4.0 * (tone.cosmic + tone.absurdity),
                BiomeMood::Neutral => 0.0,
            };
            let name = entry.name.to_lowercase();
            if !hint.is_empty() && (name.contains(&hint) || hint.contains(&name)) {
                weight += 6.0;
            }
            (entry.name, weight)
        })
        .collect()
}

/// The top third of qualifying regions, most corrupted first; at least one
/// whenever any region qualifies.
fn corruption_zones(regions: &[Region]) -> Vec<CorruptionZone> {
    let mut qualifying: Vec<&Region> = regions
        .iter()
        .filter(|r| r.corruption >= CORRUPTION_ZONE_THRESHOLD)
        .collect();
    qualifying.sort_by(|a, b| {
        b.corruption
            .partial_cmp(&a.corruption)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    let keep = qualifying.len().div_ceil(3);
    qualifying
        .into_iter()
        .take(keep)
        .map(|r| CorruptionZone {
            region_id: r.id.clone(),
            name: r.name.clone(),
            severity: r.corruption,
        })
        .collect()
}

fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
