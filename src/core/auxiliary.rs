/// Auxiliary derivations layered on the bible, biome map, and tone: creature
/// rosters, NPC style, loot flavor, and magic rules.
use crate::rng::{rng_pick, sample_unique};
use crate::schema::bible::WorldBible;
use crate::schema::context::{CreaturePools, LootFlavorProfile, MagicRules, NpcStyleRules};
use crate::schema::input::MagicDensity;
use crate::schema::seed::WorldSeed;
use crate::schema::tone::clamp01;

use super::pools::{
    ADDRESS_STYLES, APEX_EPITHETS, CASTING_TOLLS, ELITE_EPITHETS, LOOT_ADJECTIVES, LOOT_MATERIALS,
    MAGIC_SCHOOLS,
};

/// Threat-banded creature rosters built from the bible's archetypes.
pub fn generate_creature_pools(seed: &WorldSeed, bible: &WorldBible) -> CreaturePools {
    let s = seed.number();
    let archetypes = &bible.creature_archetypes;

    let common = sample_unique(s, "aux:creatures:common", archetypes, 6.min(archetypes.len()));

    let elite: Vec<String> = sample_unique(s, "aux:creatures:elite", archetypes, 4.min(archetypes.len()))
        .into_iter()
        .enumerate()
        .map(|(i, base)| {
            format!(
                "{} {base}",
                rng_pick(s, &format!("aux:creatures:elite-epithet:{i}"), ELITE_EPITHETS)
            )
        })
        .collect();

    let apex: Vec<String> = sample_unique(s, "aux:creatures:apex", archetypes, 2.min(archetypes.len()))
        .into_iter()
        .enumerate()
        .map(|(i, base)| {
            format!(
                "The {} {}",
                rng_pick(s, &format!("aux:creatures:apex-epithet:{i}"), APEX_EPITHETS),
                title_case_each(&base),
            )
        })
        .collect();

    CreaturePools { common, elite, apex }
}

/// NPC style: the bible's speech register plus tone-derived scalars.
pub fn generate_npc_style(seed: &WorldSeed, bible: &WorldBible) -> NpcStyleRules {
    let s = seed.number();
    let tone = &seed.tone;
    NpcStyleRules {
        speech_style: bible.npc_speech_style.clone(),
        formality: clamp01(0.35 + 0.30 * tone.heroic + 0.15 * tone.darkness - 0.25 * tone.absurdity),
        superstition: clamp01(0.20 + 0.40 * tone.cosmic + 0.20 * tone.darkness),
        humor: clamp01(0.60 * tone.whimsy + 0.40 * tone.absurdity),
        address_styles: sample_unique(s, "aux:npc:address", ADDRESS_STYLES, 2)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Loot flavor: descriptors and materials drawn for this world, plus a
/// rarity bias leaning on the stranger tone axes.
pub fn generate_loot_flavor(seed: &WorldSeed) -> LootFlavorProfile {
    let s = seed.number();
    let tone = &seed.tone;
    LootFlavorProfile {
        descriptors: sample_unique(s, "aux:loot:adjectives", LOOT_ADJECTIVES, 5)
            .into_iter()
            .map(str::to_string)
            .collect(),
        materials: sample_unique(s, "aux:loot:materials", LOOT_MATERIALS, 4)
            .into_iter()
            .map(str::to_string)
            .collect(),
        rarity_bias: clamp01(0.30 + 0.30 * tone.cosmic + 0.20 * tone.darkness),
    }
}

/// Magic rules: flavor from the bible, mechanics from density and tone.
pub fn generate_magic_rules(seed: &WorldSeed, bible: &WorldBible) -> MagicRules {
    let s = seed.number();
    let density = seed.input.magic_density;
    let base_surge = match density {
        MagicDensity::Low => 0.02,
        MagicDensity::Neutral => 0.06,
        MagicDensity::High => 0.12,
        MagicDensity::Wild => 0.25,
    };
    MagicRules {
        flavor: bible.magic_flavor.clone(),
        density,
        schools: sample_unique(s, "aux:magic:schools", MAGIC_SCHOOLS, 4)
            .into_iter()
            .map(str::to_string)
            .collect(),
        casting_toll: rng_pick(s, "aux:magic:toll", CASTING_TOLLS).to_string(),
        wild_surge_chance: clamp01(base_surge + 0.10 * seed.tone.absurdity),
    }
}

fn title_case_each(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
