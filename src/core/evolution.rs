/// World state evolution: one player action advances the simulation by one
/// tick. Pure and total; the input state is never mutated.
use log::debug;

use crate::rng::{rng_01, rng_int, rng_pick};
use crate::schema::context::CampaignContext;
use crate::schema::state::{
    HistoryEntry, PlayerWorldAction, WorldState, MAX_DUNGEONS, MAX_ESCALATION, MAX_HISTORY,
    MAX_RUMORS,
};

use super::pools::{DUNGEON_PREFIXES, DUNGEON_SUFFIXES, RUMOR_OPENERS, TOWN_SUFFIXES};
use super::ForgeError;

/// A dungeon collapses when the tick's draw exceeds this.
const COLLAPSE_CHANCE: f64 = 0.86;
/// A town is renamed when the tick's draw exceeds this.
const RENAME_CHANCE: f64 = 0.90;

/// Advance a world state by one player action, returning the new state.
///
/// Every tracked faction is touched every tick; the targeted faction only
/// receives a bonus. Out-of-range impact magnitudes are absorbed by the
/// clamps, not rejected.
pub fn advance_world(state: &WorldState, action: &PlayerWorldAction) -> WorldState {
    let mut next = state.clone();
    let s = u64::from(state.seed_number);
    let tick = state.tick + 1;
    next.tick = tick;

    let impact = &action.impact;
    debug!(
        "tick {tick} for {}: {} ({})",
        state.world_name, action.action_type, action.summary
    );

    for faction in &mut next.factions {
        let id = &faction.faction_id;
        let targeted = action.target_faction_id.as_deref() == Some(id.as_str());
        let target_power = if targeted { 4.0 } else { 0.0 };
        let target_trust = if targeted { 3.0 } else { 0.0 };

        let power_delta = rng_int(s, &format!("tick:{tick}:power:{id}"), -3, 3)
            + (target_power + 3.0 * impact.brutality + 2.0 * impact.chaos
                - 2.0 * impact.generosity)
                .round() as i64;
        faction.power_level =
            (i64::from(faction.power_level) + power_delta).clamp(1, 120) as i32;

        let trust_delta = rng_int(s, &format!("tick:{tick}:trust:{id}"), -4, 4)
            + (target_trust + 8.0 * impact.moral + 6.0 * impact.generosity
                - 7.0 * impact.brutality)
                .round() as i64;
        faction.trust_delta =
            (i64::from(faction.trust_delta) + trust_delta).clamp(-100, 100) as i32;

        faction.last_action_tick = tick;
    }

    let escalation_delta = ((8.0 * impact.brutality).max(0.0) + (6.0 * impact.chaos).max(0.0)
        - (4.0 * impact.generosity).max(0.0))
    .round() as i64
        + rng_int(s, &format!("tick:{tick}:escalation"), 0, 3);
    next.villain_escalation = (i64::from(next.villain_escalation) + escalation_delta)
        .clamp(0, i64::from(MAX_ESCALATION)) as i32;

    // One rumor per tick, window capped.
    let opener = rng_pick(s, &format!("tick:{tick}:rumor"), RUMOR_OPENERS);
    next.active_rumors
        .push(format!("{opener} {}", action.summary));
    cap_back(&mut next.active_rumors, MAX_RUMORS);

    // Occasional dungeon collapse, always on an explicit collapse tag.
    let forced = action.tags.iter().any(|t| t.eq_ignore_ascii_case("collapse"));
    if forced || rng_01(s, &format!("tick:{tick}:collapse")) > COLLAPSE_CHANCE {
        let name = format!(
            "{} {}",
            rng_pick(s, &format!("tick:{tick}:dungeon-prefix"), DUNGEON_PREFIXES),
            rng_pick(s, &format!("tick:{tick}:dungeon-suffix"), DUNGEON_SUFFIXES),
        );
        if !next.collapsed_dungeons.contains(&name) {
            next.collapsed_dungeons.push(name);
        }
        cap_back(&mut next.collapsed_dungeons, MAX_DUNGEONS);
    }

    // Rare town rename: a new suffix on the first word of its name.
    if !next.active_towns.is_empty()
        && rng_01(s, &format!("tick:{tick}:rename")) > RENAME_CHANCE
    {
        let idx = rng_int(
            s,
            &format!("tick:{tick}:rename-town"),
            0,
            next.active_towns.len() as i64 - 1,
        ) as usize;
        let town = &next.active_towns[idx];
        let first = town
            .split_whitespace()
            .next()
            .unwrap_or(town.as_str())
            .to_string();
        let suffix = rng_pick(s, &format!("tick:{tick}:rename-suffix"), TOWN_SUFFIXES);
        next.active_towns[idx] = format!("{first}{suffix}");
    }

    next.history.push(HistoryEntry {
        tick,
        action_type: action.action_type.clone(),
        summary: action.summary.clone(),
        impact: *impact,
    });
    cap_back(&mut next.history, MAX_HISTORY);

    next
}

/// Advance a campaign context, replacing only its world state. Validates the
/// action first; no partial result on failure.
pub fn advance_campaign(
    ctx: &CampaignContext,
    action: &PlayerWorldAction,
) -> Result<CampaignContext, ForgeError> {
    validate_action(action)?;
    let mut next = ctx.clone();
    next.world.world_state = advance_world(&ctx.world.world_state, action);
    Ok(next)
}

fn validate_action(action: &PlayerWorldAction) -> Result<(), ForgeError> {
    if action.action_type.trim().is_empty() {
        return Err(ForgeError::invalid("action_type", "must not be empty"));
    }
    if action.summary.trim().is_empty() {
        return Err(ForgeError::invalid("summary", "must not be empty"));
    }
    if !action.impact.is_finite() {
        return Err(ForgeError::invalid("impact", "scalars must be finite"));
    }
    Ok(())
}

fn cap_back<T>(items: &mut Vec<T>, cap: usize) {
    if items.len() > cap {
        items.drain(..items.len() - cap);
    }
}
