/// Campaign context assembly: the primary generation entry point.
///
/// Runs the generators in dependency order (resolve, tone, seed, bible,
/// biome map, factions, auxiliaries, DM profile), builds the initial world
/// state, and composes the full context.
use log::debug;

use crate::schema::context::{CampaignContext, DmContext, WorldContext, CONTEXT_VERSION};
use crate::schema::input::ForgeInput;
use crate::schema::state::{FactionState, WorldState};

use super::pools::{NARRATIVE_DIRECTIVES, TACTICAL_DIRECTIVES};
use super::{auxiliary, bible, biome, dm, factions, resolver, seed, tone, ForgeError};

/// Forge a complete campaign from raw caller input.
///
/// Pure and deterministic: the same input (including the manual seed) always
/// yields a structurally identical, byte-identically serializable context.
pub fn forge_campaign(raw: &ForgeInput) -> Result<CampaignContext, ForgeError> {
    let resolved = resolver::resolve_input(raw)?;
    let tone = tone::build_tone(&resolved);
    let world_seed = seed::build_world_seed(resolved, tone);

    let bible = bible::generate_bible(&world_seed);
    let biome_map = biome::generate_biome_map(&world_seed);
    let faction_graph = factions::generate_faction_graph(&world_seed, &bible, &biome_map);
    let creature_pools = auxiliary::generate_creature_pools(&world_seed, &bible);
    let npc_style_rules = auxiliary::generate_npc_style(&world_seed, &bible);
    let loot_flavor = auxiliary::generate_loot_flavor(&world_seed);
    let magic_rules = auxiliary::generate_magic_rules(&world_seed, &bible);
    let behavior = dm::generate_behavior_profile(&world_seed.tone);

    let world_state = initial_world_state(&world_seed, &bible, &biome_map, &faction_graph);
    debug!(
        "forged campaign `{}`: {} regions, {} factions",
        bible.world_name,
        biome_map.regions.len(),
        faction_graph.factions.len()
    );

    Ok(CampaignContext {
        version: CONTEXT_VERSION.to_string(),
        title: world_seed.input.title.clone(),
        description: world_seed.input.description.clone(),
        seed: world_seed.clone(),
        world: WorldContext {
            bible,
            biome_map,
            faction_graph,
            creature_pools,
            npc_style_rules,
            loot_flavor,
            magic_rules,
            world_state,
        },
        dm: DmContext {
            world_seed,
            behavior,
            narrative_directives: NARRATIVE_DIRECTIVES.iter().map(|d| d.to_string()).collect(),
            tactical_directives: TACTICAL_DIRECTIVES.iter().map(|d| d.to_string()).collect(),
        },
    })
}

/// The tick-zero snapshot: capitals are active, nothing has collapsed yet,
/// faction totals seeded from the graph.
fn initial_world_state(
    world_seed: &crate::schema::seed::WorldSeed,
    bible: &crate::schema::bible::WorldBible,
    biome_map: &crate::schema::biome::BiomeMap,
    faction_graph: &crate::schema::faction::FactionGraph,
) -> WorldState {
    WorldState {
        seed_number: world_seed.seed_number,
        world_name: bible.world_name.clone(),
        tick: 0,
        active_towns: biome_map.capital_towns.clone(),
        active_rumors: Vec::new(),
        collapsed_dungeons: Vec::new(),
        villain_escalation: 0,
        factions: faction_graph
            .factions
            .iter()
            .map(|f| FactionState {
                faction_id: f.id.clone(),
                power_level: f.power_level.clamp(1, 120),
                trust_delta: 0,
                last_action_tick: 0,
            })
            .collect(),
        history: Vec::new(),
    }
}
