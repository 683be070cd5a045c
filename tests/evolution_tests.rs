/// Evolution and character-forge scenarios: monotonic ticks, capped windows,
/// targeted impacts, and idempotent runtime merges.
use serde_json::json;
use worldforge::schema::character::CharacterForgeInput;
use worldforge::schema::input::ForgeInput;
use worldforge::schema::state::{ActionImpact, PlayerWorldAction};
use worldforge::{advance_campaign, advance_world, forge_campaign, forge_character, merge_character};

fn campaign() -> worldforge::schema::context::CampaignContext {
    forge_campaign(&ForgeInput::new(
        "Ashline Covenant",
        "A failing pact on a cold frontier.",
    ))
    .unwrap()
}

fn action(summary: &str) -> PlayerWorldAction {
    PlayerWorldAction {
        action_type: "deed".to_string(),
        summary: summary.to_string(),
        target_faction_id: None,
        tags: Vec::new(),
        impact: ActionImpact::default(),
    }
}

#[test]
fn ticks_increase_strictly_by_one() {
    let ctx = campaign();
    let mut state = ctx.world.world_state.clone();
    for expected in 1..=10u32 {
        state = advance_world(&state, &action(&format!("deed {expected}")));
        assert_eq!(state.tick, expected);
    }
}

#[test]
fn windows_never_exceed_their_caps() {
    let ctx = campaign();
    let mut state = ctx.world.world_state.clone();
    let mut act = action("a long campaign season");
    act.impact.chaos = 1.0;
    for i in 0..200 {
        act.summary = format!("campaign event {i}");
        state = advance_world(&state, &act);
        assert!(state.active_rumors.len() <= 40);
        assert!(state.collapsed_dungeons.len() <= 40);
        assert!(state.history.len() <= 120);
    }
    assert_eq!(state.tick, 200);
    assert_eq!(state.history.len(), 120);
    assert_eq!(state.active_rumors.len(), 40);
}

#[test]
fn targeted_evolution_scenario() {
    let ctx = campaign();
    let state = &ctx.world.world_state;
    assert_eq!(state.tick, 0);
    let target = state.factions[0].faction_id.clone();

    let mut act = action("razed a watchtower");
    act.target_faction_id = Some(target.clone());
    act.impact.brutality = 1.0;

    let next = advance_world(state, &act);
    assert_eq!(next.tick, 1);
    assert!(next.villain_escalation >= state.villain_escalation);

    // The targeted faction takes a +4 bonus on top of the shared formula, so
    // its gain beats every non-targeted faction's gain by more than the
    // worst-case jitter spread allows it to lose.
    let gain = |id: &str| {
        i64::from(next.faction(id).unwrap().power_level)
            - i64::from(state.faction(id).unwrap().power_level)
    };
    let target_gain = gain(&target);
    assert!(target_gain >= 4 - 3 + 3); // bonus + round(3*brutality) + worst jitter
    for f in state.factions.iter().skip(1) {
        // Non-targeted: round(3*brutality) + jitter in [-3, 3].
        assert!(gain(&f.faction_id) <= 3 + 3);
    }
}

#[test]
fn faction_power_stays_in_simulation_band_over_long_runs() {
    let ctx = campaign();
    let mut state = ctx.world.world_state.clone();
    let mut act = action("the war grinds on");
    act.impact.brutality = 2.0;
    act.impact.chaos = 2.0;
    for i in 0..150 {
        act.summary = format!("war event {i}");
        state = advance_world(&state, &act);
    }
    for f in &state.factions {
        assert!((1..=120).contains(&f.power_level));
        assert!((-100..=100).contains(&f.trust_delta));
    }
    assert!((0..=999).contains(&state.villain_escalation));
}

#[test]
fn advance_campaign_keeps_everything_but_state() {
    let ctx = campaign();
    let next = advance_campaign(&ctx, &action("held a festival")).unwrap();
    assert_eq!(next.world.world_state.tick, 1);
    assert_eq!(next.seed, ctx.seed);
    assert_eq!(next.world.bible, ctx.world.bible);
    assert_eq!(next.world.biome_map, ctx.world.biome_map);
    assert_eq!(next.world.faction_graph, ctx.world.faction_graph);
    assert_eq!(next.dm, ctx.dm);
}

#[test]
fn character_forge_binds_into_the_world() {
    let ctx = campaign();
    let out = forge_character(&ctx, &CharacterForgeInput::default()).unwrap();
    assert!(ctx.world.biome_map.region(&out.origin_region_id).is_some());
    assert!(ctx
        .world
        .faction_graph
        .faction(&out.faction_alignment_id)
        .is_some());
    assert!((-1.0..=1.0).contains(&out.moral_leaning));
    assert_eq!(out.starting_npc_relationships.len(), 3);
    assert_eq!(
        out.initial_faction_trust.len(),
        ctx.world.faction_graph.factions.len()
    );
}

#[test]
fn merge_is_idempotent_for_rumors_and_flags() {
    let ctx = campaign();
    let out = forge_character(&ctx, &CharacterForgeInput::default()).unwrap();
    let state = json!({"rumors": ["an old rumor"], "flags": ["seen:docks"]});
    let once = merge_character(&state, &out);
    let twice = merge_character(&once, &out);
    assert_eq!(once, twice);
    // Pre-existing entries lead, additions follow, nothing duplicated.
    assert_eq!(once["rumors"][0], "an old rumor");
    assert_eq!(once["flags"][0], "seen:docks");
    let rumors = once["rumors"].as_array().unwrap();
    let mut deduped = rumors.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), rumors.len());
}

#[test]
fn evolved_world_still_forges_characters() {
    let ctx = campaign();
    let mut act = action("opened the mountain road");
    act.impact.generosity = 1.0;
    let evolved = advance_campaign(&ctx, &act).unwrap();
    let out = forge_character(&evolved, &CharacterForgeInput::default()).unwrap();
    // The world already has a rumor in the air; the character hears it.
    assert!(out
        .starting_rumors
        .iter()
        .any(|r| r.contains("opened the mountain road")));
}
