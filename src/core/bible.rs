/// World bible generation: cosmology, conflicts, naming material, and the
/// prose registers every later generator quotes from.
use log::debug;

use crate::rng::{rng_pick, sample_unique};
use crate::schema::bible::{BiomeNote, WorldBible};
use crate::schema::input::{FactionComplexity, WorldSize};
use crate::schema::seed::WorldSeed;
use crate::schema::tone::ToneVector;

use super::pools::{
    BIOMES, BIOME_FLAVORS, CONFLICT_POOL, COSMOLOGY_RULES, CREATURE_POOL, FACTION_ADJECTIVES,
    FACTION_NOUNS, LOOT_FLAVOR, MAGIC_FLAVORS, NAMING_RULES, WORLD_NAME_PREFIXES,
    WORLD_NAME_SUFFIXES,
};

/// Creature archetypes never exceed this count.
const MAX_ARCHETYPES: usize = 14;

/// Generate the narrative bible for a world. Pure function of the seed.
pub fn generate_bible(seed: &WorldSeed) -> WorldBible {
    let s = seed.number();
    let input = &seed.input;

    let world_name = format!(
        "{}{}",
        rng_pick(s, "bible:name:prefix", WORLD_NAME_PREFIXES),
        rng_pick(s, "bible:name:suffix", WORLD_NAME_SUFFIXES),
    );
    debug!("generating bible for {world_name}");

    let cosmology_count = match input.world_size {
        WorldSize::Large => 5,
        _ => 4,
    };
    let cosmology: Vec<String> =
        sample_unique(s, "bible:cosmology", COSMOLOGY_RULES, cosmology_count)
            .into_iter()
            .map(str::to_string)
            .collect();

    let conflict_count = match input.faction_complexity {
        FactionComplexity::Low => 3,
        FactionComplexity::Medium => 4,
        FactionComplexity::High => 6,
    };
    let core_conflicts: Vec<String> =
        sample_unique(s, "bible:conflicts", CONFLICT_POOL, conflict_count)
            .into_iter()
            .map(str::to_string)
            .collect();

    // Narrative name lists. Counts are independent of the simulated faction
    // count; the graph reuses these first and generates the remainder.
    let (dominant_count, minor_count) = match input.faction_complexity {
        FactionComplexity::Low => (3, 3),
        FactionComplexity::Medium => (4, 5),
        FactionComplexity::High => (6, 7),
    };
    let mut names = faction_names(s, dominant_count + minor_count);
    let minor_factions = names.split_off(dominant_count);
    let dominant_factions = names;

    let biome_count = match input.world_size {
        WorldSize::Small => 6,
        WorldSize::Medium => 8,
        WorldSize::Large => 10,
    };
    let biomes: Vec<BiomeNote> = sample_unique(s, "bible:biomes", BIOMES, biome_count)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| BiomeNote {
            biome: entry.name.to_string(),
            flavor: rng_pick(s, &format!("bible:biome-flavor:{i}"), BIOME_FLAVORS).to_string(),
        })
        .collect();

    let creature_archetypes = creature_archetypes(s, &input.creature_focus);

    WorldBible {
        world_name,
        cosmology,
        magic_flavor: rng_pick(s, "bible:magic", MAGIC_FLAVORS).to_string(),
        core_conflicts,
        dominant_factions,
        minor_factions,
        biomes,
        creature_archetypes,
        npc_speech_style: speech_style(&seed.tone).to_string(),
        naming_rules: sample_unique(s, "bible:naming", NAMING_RULES, 2)
            .into_iter()
            .map(str::to_string)
            .collect(),
        loot_flavor: sample_unique(s, "bible:loot", LOOT_FLAVOR, 6)
            .into_iter()
            .map(str::to_string)
            .collect(),
        moral_climate: moral_climate(&seed.tone).to_string(),
    }
}

/// Compose `count` unique faction names from the adjective and noun banks.
/// Adjectives are sampled uniquely, so names cannot collide.
pub(crate) fn faction_names(seed: u64, count: usize) -> Vec<String> {
    let adjectives = sample_unique(seed, "bible:faction-adj", FACTION_ADJECTIVES, count);
    let nouns = sample_unique(seed, "bible:faction-noun", FACTION_NOUNS, count);
    adjectives
        .into_iter()
        .zip(nouns)
        .map(|(adj, noun)| format!("The {adj} {noun}"))
        .collect()
}

fn creature_archetypes(seed: u64, focus: &[String]) -> Vec<String> {
    let mut archetypes: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !archetypes.iter().any(|a| a.eq_ignore_ascii_case(name)) {
            archetypes.push(name.to_string());
        }
    };
    for creature in focus {
        push(creature);
    }
    for creature in sample_unique(seed, "bible:creatures", CREATURE_POOL, 7) {
        push(creature);
    }
    archetypes.truncate(MAX_ARCHETYPES);
    archetypes
}

/// Speech style by tone thresholds; the first matching axis wins.
fn speech_style(tone: &ToneVector) -> &'static str {
    if tone.whimsy >= 0.60 {
        "Lilting and digressive, fond of riddles, allergic to a straight answer."
    } else if tone.darkness >= 0.62 {
        "Clipped and wary; names are withheld until trust is proven."
    } else if tone.absurdity >= 0.60 {
        "Cheerfully matter-of-fact about things that should not be possible."
    } else if tone.heroic >= 0.65 {
        "Formal and declarative, heavy with oaths and lineage."
    } else {
        "Plainspoken and pragmatic; flourish is for merchants and liars."
    }
}

/// Moral climate by tone thresholds; the first matching axis wins.
fn moral_climate(tone: &ToneVector) -> &'static str {
    if tone.darkness >= 0.66 {
        "Decency survives here the way moss survives winter: low, patient, and easily scraped away."
    } else if tone.heroic >= 0.62 {
        "People still believe one brave act can tip a scale, and often enough they are right."
    } else if tone.tragic >= 0.60 {
        "Everyone is paying for a choice someone else made, and the ledgers never quite close."
    } else if tone.cozy >= 0.60 {
        "Kindness is the local currency, hoarded by few and counterfeited by fewer."
    } else {
        "Most folk weigh right and wrong the way they weigh grain: carefully, and with a thumb on the scale when times are thin."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::resolve_input;
    use crate::core::seed::build_world_seed;
    use crate::core::tone::build_tone;
    use crate::schema::input::ForgeInput;

    fn seed_with(f: impl FnOnce(&mut ForgeInput)) -> WorldSeed {
        let mut input = ForgeInput::new("Ashline Covenant", "A failing pact.");
        f(&mut input);
        let resolved = resolve_input(&input).unwrap();
        let tone = build_tone(&resolved);
        build_world_seed(resolved, tone)
    }

    #[test]
    fn bible_is_deterministic() {
        let seed = seed_with(|_| {});
        assert_eq!(generate_bible(&seed), generate_bible(&seed));
    }

    #[test]
    fn cosmology_grows_for_large_worlds() {
        use crate::schema::input::WorldSize;
        let medium = generate_bible(&seed_with(|_| {}));
        let large = generate_bible(&seed_with(|i| i.world_size = Some(WorldSize::Large)));
        assert_eq!(medium.cosmology.len(), 4);
        assert_eq!(large.cosmology.len(), 5);
    }

    #[test]
    fn conflict_counts_follow_complexity() {
        use crate::schema::input::FactionComplexity;
        let low = generate_bible(&seed_with(|i| i.faction_complexity = Some(FactionComplexity::Low)));
        let high =
            generate_bible(&seed_with(|i| i.faction_complexity = Some(FactionComplexity::High)));
        assert_eq!(low.core_conflicts.len(), 3);
        assert_eq!(high.core_conflicts.len(), 6);
    }

    #[test]
    fn name_list_counts_follow_complexity() {
        use crate::schema::input::FactionComplexity;
        let high =
            generate_bible(&seed_with(|i| i.faction_complexity = Some(FactionComplexity::High)));
        assert_eq!(high.dominant_factions.len(), 6);
        assert_eq!(high.minor_factions.len(), 7);
        // No collisions across the two lists.
        for name in &high.dominant_factions {
            assert!(!high.minor_factions.contains(name));
        }
    }

    #[test]
    fn biome_counts_follow_world_size() {
        use crate::schema::input::WorldSize;
        let small = generate_bible(&seed_with(|i| i.world_size = Some(WorldSize::Small)));
        let large = generate_bible(&seed_with(|i| i.world_size = Some(WorldSize::Large)));
        assert_eq!(small.biomes.len(), 6);
        assert_eq!(large.biomes.len(), 10);
    }

    #[test]
    fn creature_focus_is_unioned_and_capped() {
        let bible = generate_bible(&seed_with(|i| {
            i.creature_focus = (0..12).map(|n| format!("beast-{n}")).collect()
        }));
        assert!(bible.creature_archetypes.len() <= 14);
        assert!(bible
            .creature_archetypes
            .iter()
            .any(|c| c.starts_with("beast-")));
    }

    #[test]
    fn whimsical_tone_selects_the_lilting_register() {
        let bible = generate_bible(&seed_with(|i| {
            i.tone_preset = Some("whimsical_fae".to_string());
            i.humor = Some(5);
        }));
        assert!(bible.npc_speech_style.starts_with("Lilting"));
    }
}
