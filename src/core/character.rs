/// Character forge: binds a new character into an existing world through an
/// origin region, a faction alignment, and starting relationships.
use log::debug;
use std::collections::BTreeMap;

use crate::rng::{hash64, rng_01, rng_int, rng_pick, sample_unique};
use crate::schema::biome::Region;
use crate::schema::character::{CharacterForgeInput, CharacterForgeOutput};
use crate::schema::context::CampaignContext;
use crate::schema::faction::Faction;

use super::pools::{backgrounds, NPC_SYLLABLES_FIRST, NPC_SYLLABLES_SECOND, TRAIT_POOL};
use super::ForgeError;

const MAX_STARTING_RUMORS: usize = 6;
const MAX_STARTING_FLAGS: usize = 10;

/// Forge a character binding. Pure: the context is only read, and the same
/// context plus the same input always produces the same output.
pub fn forge_character(
    ctx: &CampaignContext,
    input: &CharacterForgeInput,
) -> Result<CharacterForgeOutput, ForgeError> {
    validate(input)?;

    // Per-character stream: the world seed crossed with the caller's wishes,
    // so two different characters in one world diverge.
    let s = u64::from(ctx.seed.seed_number) ^ hash64(&character_key(input));
    debug!("forging character into {}", ctx.world.bible.world_name);

    let tone = &ctx.seed.tone;
    let region = resolve_region(ctx, input, s);
    let faction = resolve_faction(ctx, input, s, &region.id);

    let background = match &input.background {
        Some(b) => b.clone(),
        None => rng_pick(s, "char:background", backgrounds(ctx.seed.input.tech_level)).to_string(),
    };

    let personality_traits: Vec<String> = if input.personality_traits.len() >= 2 {
        input.personality_traits.clone()
    } else {
        sample_unique(s, "char:traits", TRAIT_POOL, 3)
            .into_iter()
            .map(str::to_string)
            .collect()
    };

    let moral_leaning = match input.moral_leaning {
        Some(v) => v,
        None => {
            let base = 0.5 * ((tone.heroic + tone.cozy) - (tone.darkness + tone.brutality));
            (base + (rng_01(s, "char:moral") - 0.5) * 0.4).clamp(-1.0, 1.0)
        }
    };

    let starting_npc_relationships = npc_relationships(ctx, s, moral_leaning);
    let initial_faction_trust = faction_trust(ctx, &faction.id, moral_leaning);
    let starting_rumors = starting_rumors(ctx, faction, region);
    let starting_flags = starting_flags(region, faction, &background, moral_leaning, &personality_traits);

    Ok(CharacterForgeOutput {
        origin_region_id: region.id.clone(),
        origin_region_name: region.name.clone(),
        faction_alignment_id: faction.id.clone(),
        faction_alignment_name: faction.name.clone(),
        background,
        personality_traits,
        moral_leaning,
        starting_town: region.capital_town.clone(),
        starting_npc_relationships,
        initial_faction_trust,
        starting_rumors,
        starting_flags,
    })
}

/// Stable digest input for the per-character stream.
fn character_key(input: &CharacterForgeInput) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        input.name.as_deref().unwrap_or(""),
        input.origin_region.as_deref().unwrap_or(""),
        input.faction.as_deref().unwrap_or(""),
        input.background.as_deref().unwrap_or(""),
        input.personality_traits.join(","),
        input
            .moral_leaning
            .map(|v| format!("{v:.4}"))
            .unwrap_or_default(),
    )
}

/// Caller match (id equality or name substring, case-insensitive), else a
/// seeded uniform pick.
fn resolve_region<'a>(
    ctx: &'a CampaignContext,
    input: &CharacterForgeInput,
    s: u64,
) -> &'a Region {
    let regions = &ctx.world.biome_map.regions;
    if let Some(query) = &input.origin_region {
        let q = query.to_lowercase();
        if let Some(found) = regions.iter().find(|r| {
            r.id.eq_ignore_ascii_case(query)
                || r.name.to_lowercase().contains(&q)
                || q.contains(&r.name.to_lowercase())
        }) {
            return found;
        }
    }
    rng_pick(s, "char:origin", regions)
}

/// Caller match, else the faction at home in the origin region, else a
/// seeded uniform pick.
fn resolve_faction<'a>(
    ctx: &'a CampaignContext,
    input: &CharacterForgeInput,
    s: u64,
    region_id: &str,
) -> &'a Faction {
    let factions = &ctx.world.faction_graph.factions;
    if let Some(query) = &input.faction {
        let q = query.to_lowercase();
        if let Some(found) = factions.iter().find(|f| {
            f.id.eq_ignore_ascii_case(query) || f.name.to_lowercase().contains(&q)
        }) {
            return found;
        }
    }
    if let Some(local) = factions.iter().find(|f| f.home_region_id == region_id) {
        return local;
    }
    rng_pick(s, "char:faction", factions)
}

/// Exactly three seeded relationships. Scores lean on moral leaning and the
/// world's NPC disposition, with per-NPC jitter.
fn npc_relationships(
    ctx: &CampaignContext,
    s: u64,
    moral_leaning: f64,
) -> BTreeMap<String, i32> {
    let style = &ctx.world.npc_style_rules;
    let mut out = BTreeMap::new();
    let mut attempt = 0;
    while out.len() < 3 {
        let name = format!(
            "{}{}",
            rng_pick(s, &format!("char:npc:{attempt}:first"), NPC_SYLLABLES_FIRST),
            rng_pick(s, &format!("char:npc:{attempt}:second"), NPC_SYLLABLES_SECOND),
        );
        let base = 12.0 + 26.0 * moral_leaning + 10.0 * (style.humor - style.superstition);
        let jitter = rng_int(s, &format!("char:npc:{attempt}:jitter"), -20, 20);
        let score = (base.round() as i64 + jitter).clamp(-100, 100) as i32;
        out.entry(name).or_insert(score);
        attempt += 1;
    }
    out
}

/// One trust score per faction: the aligned faction starts warm, the rest
/// slightly cold, both shifted by moral leaning against the faction's own
/// mercy and ambition.
fn faction_trust(
    ctx: &CampaignContext,
    aligned_id: &str,
    moral_leaning: f64,
) -> BTreeMap<String, i32> {
    ctx.world
        .faction_graph
        .factions
        .iter()
        .map(|f| {
            let base: f64 = if f.id == aligned_id { 22.0 } else { -4.0 };
            let adjusted = base
                + 9.0 * moral_leaning
                + 8.0 * f.alignment.mercy
                - 6.0 * f.alignment.ambition;
            (f.id.clone(), (adjusted.round() as i64).clamp(-100, 100) as i32)
        })
        .collect()
}

/// Up to six rumors: what the world is already saying, the bible's
/// conflicts, and one line about the newcomer.
fn starting_rumors(ctx: &CampaignContext, faction: &Faction, region: &Region) -> Vec<String> {
    let mut rumors: Vec<String> = Vec::new();
    for rumor in ctx.world.world_state.active_rumors.iter().take(2) {
        rumors.push(rumor.clone());
    }
    for conflict in ctx.world.bible.core_conflicts.iter().take(3) {
        rumors.push(conflict.clone());
    }
    rumors.push(format!(
        "Word spreads that a newcomer tied to {} has arrived near {}.",
        faction.name, region.name
    ));
    rumors.truncate(MAX_STARTING_RUMORS);
    rumors
}

fn starting_flags(
    region: &Region,
    faction: &Faction,
    background: &str,
    moral_leaning: f64,
    traits: &[String],
) -> Vec<String> {
    let bucket = if moral_leaning >= 0.33 {
        "virtuous"
    } else if moral_leaning <= -0.33 {
        "ruthless"
    } else {
        "balanced"
    };
    let mut flags = vec![
        format!("origin:{}", region.id),
        format!("faction:{}", faction.id),
        format!("background:{}", slug(background)),
        format!("moral:{bucket}"),
    ];
    for t in traits {
        flags.push(format!("trait:{}", slug(t)));
    }
    flags.truncate(MAX_STARTING_FLAGS);
    flags
}

fn slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

fn validate(input: &CharacterForgeInput) -> Result<(), ForgeError> {
    if let Some(v) = input.moral_leaning {
        if !(-1.0..=1.0).contains(&v) || !v.is_finite() {
            return Err(ForgeError::invalid(
                "moral_leaning",
                format!("must be within [-1, 1], got {v}"),
            ));
        }
    }
    for (i, t) in input.personality_traits.iter().enumerate() {
        if t.trim().is_empty() {
            return Err(ForgeError::invalid(
                &format!("personality_traits[{i}]"),
                "must not be blank",
            ));
        }
    }
    Ok(())
}
