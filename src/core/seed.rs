/// World seed construction: canonical input serialization, stable hashing,
/// and theme tag derivation.
use log::debug;

use crate::rng::stable_hash;
use crate::schema::input::ResolvedInput;
use crate::schema::seed::{WorldSeed, SEED_VERSION};
use crate::schema::tone::ToneVector;

use super::tone::resolve_trace;

/// Theme tags are capped here after case-insensitive deduplication.
const MAX_THEME_TAGS: usize = 36;

/// Build the immutable seed record for a resolved input. Identical resolved
/// input (including the manual seed token) always yields an identical seed.
pub fn build_world_seed(input: ResolvedInput, tone: ToneVector) -> WorldSeed {
    let canonical = canonical_form(&input);
    let full_hash = stable_hash(&canonical);

    // First 8 hex digits, folded into [1, 2^31 - 1].
    let raw = u32::from_str_radix(&full_hash[..8], 16).unwrap_or(1);
    let seed_number = (raw % 0x7fff_ffff) + 1;

    // The manual token rides along so two inputs differing only by manual
    // seed produce visibly different seed strings.
    let seed_string = format!("wf{SEED_VERSION}:{}:{}", input.manual_seed_token, full_hash);
    debug!("world seed {seed_string} ({seed_number})");

    let preset_trace = resolve_trace(&input);
    let theme_tags = build_theme_tags(&input, &tone, &preset_trace);

    WorldSeed {
        version: SEED_VERSION,
        seed_string,
        seed_number,
        theme_tags,
        tone,
        preset_trace,
        input,
    }
}

/// Canonical serialization of the resolved input: a fixed field order that
/// cannot drift with serializer versions, map entries already sorted by the
/// BTreeMap. Equal inputs produce equal strings and nothing else does.
fn canonical_form(input: &ResolvedInput) -> String {
    let toggles: Vec<String> = input
        .player_toggles
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    format!(
        "blend={};complexity={};corruption={};creatures={};description={};divine={};hint={};\
         humor={};lethality={};magic={};mode={};seed={};size={};tech={};title={};toggles={};villain={}",
        input.blend_presets.join(","),
        input.faction_complexity.as_str(),
        input.corruption_level,
        input.creature_focus.join(","),
        input.description,
        input.divine_interference,
        input.starting_region_hint,
        input.humor,
        input.lethality.as_str(),
        input.magic_density.as_str(),
        input.randomization.as_str(),
        input.manual_seed_token,
        input.world_size.as_str(),
        input.tech_level.as_str(),
        input.title,
        toggles.join(","),
        input.villain_archetype,
    )
}

fn build_theme_tags(input: &ResolvedInput, tone: &ToneVector, trace: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: &str| {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if !tags.iter().any(|t: &String| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    };

    for id in trace {
        push(id);
    }
    push(input.lethality.as_str());
    push(input.magic_density.as_str());
    push(input.tech_level.as_str());
    push(input.faction_complexity.as_str());
    push(input.world_size.as_str());
    push(&input.villain_archetype);
    for creature in &input.creature_focus {
        push(creature);
    }

    // Adjective tags for axes past their fixed thresholds.
    for (axis, threshold, tag) in [
        (tone.darkness, 0.72, "bleak"),
        (tone.cozy, 0.62, "cozy"),
        (tone.whimsy, 0.65, "whimsical"),
        (tone.brutality, 0.70, "savage"),
        (tone.cosmic, 0.60, "otherworldly"),
        (tone.heroic, 0.70, "valiant"),
        (tone.absurdity, 0.66, "surreal"),
        (tone.tragic, 0.68, "doomed"),
    ] {
        if axis >= threshold {
            push(tag);
        }
    }

    tags.truncate(MAX_THEME_TAGS);
    tags
}
