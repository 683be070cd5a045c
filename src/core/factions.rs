/// Faction graph generation: instantiation, the symmetric relation matrix,
/// and active tensions.
use log::debug;
use std::collections::BTreeMap;

use crate::rng::{rng_01, rng_int, rng_pick, sample_unique};
use crate::schema::biome::BiomeMap;
use crate::schema::bible::WorldBible;
use crate::schema::faction::{Faction, FactionGraph, MoralAlignment};
use crate::schema::input::FactionComplexity;
use crate::schema::seed::WorldSeed;
use crate::schema::tone::{clamp01, ToneVector};

use super::bible::faction_names;
use super::pools::{FACTION_GOALS, IDEOLOGIES};

/// Relations at or below this score surface as tensions.
const TENSION_THRESHOLD: i32 = -25;
/// Tensions kept before the rivalry backfill.
const TENSION_INITIAL_CAP: usize = 8;
/// Hard cap after backfill.
const TENSION_FINAL_CAP: usize = 12;
/// Whenever two factions exist, at least this many tensions do too.
const TENSION_FLOOR: usize = 2;

/// Generate the political layer. The simulated faction count is independent
/// of the bible's narrative name counts; bible names are consumed first and
/// fresh ones generated for the remainder.
pub fn generate_faction_graph(
    seed: &WorldSeed,
    bible: &WorldBible,
    biome_map: &BiomeMap,
) -> FactionGraph {
    let s = seed.number();
    let tone = &seed.tone;

    let count = match seed.input.faction_complexity {
        FactionComplexity::Low => 4,
        FactionComplexity::Medium => 6,
        FactionComplexity::High => 8,
    };
    debug!("generating {count} factions");

    let names = resolve_names(s, bible, count);
    let ideologies = sample_unique(s, "factions:ideology", IDEOLOGIES, count);

    let factions: Vec<Faction> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let id = format!("faction-{}", i + 1);
            let alignment = roll_alignment(s, &id, tone);
            let power_shift = (12.0 * tone.darkness - 10.0 * tone.cozy).round() as i64;
            let power = 35 + rng_int(s, &format!("factions:{id}:power"), 0, 50) + power_shift;
            Faction {
                home_region_id: biome_map.regions[i % biome_map.regions.len()].id.clone(),
                alignment,
                power_level: power.clamp(10, 95) as i32,
                ideology: ideologies[i].to_string(),
                goals: sample_unique(s, &format!("factions:{id}:goals"), FACTION_GOALS, 2)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                id,
                name,
            }
        })
        .collect();

    let relations = score_relations(s, &factions);
    let active_tensions = derive_tensions(s, &factions, &relations);

    FactionGraph {
        factions,
        relations,
        active_tensions,
    }
}

/// Bible names first (dominant, then minor), topped up with fresh
/// adjective+noun names, deduplicated case-insensitively.
fn resolve_names(seed: u64, bible: &WorldBible, count: usize) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(count);
    for name in bible.dominant_factions.iter().chain(&bible.minor_factions) {
        push_unique_name(&mut names, name, count);
    }
    if names.len() < count {
        // Fresh names; the generous overdraw absorbs collisions with the
        // bible lists.
        for name in faction_names(seed ^ 0x5eed, count * 2) {
            push_unique_name(&mut names, &name, count);
        }
    }
    names
}

fn push_unique_name(names: &mut Vec<String>, name: &str, cap: usize) {
    if names.len() < cap && !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        names.push(name.to_string());
    }
}

/// Roll one faction's moral alignment. Each axis starts from a tone-biased
/// center, takes seeded noise, and is squashed into [-1, 1].
fn roll_alignment(seed: u64, faction_id: &str, tone: &ToneVector) -> MoralAlignment {
    let noise = |axis: &str| (rng_01(seed, &format!("factions:{faction_id}:{axis}")) - 0.5) * 0.7;
    let squash = |x: f64| 2.0 * clamp01(x) - 1.0;
    MoralAlignment {
        order: squash(0.5 + 0.30 * (tone.heroic - tone.absurdity) + noise("order")),
        mercy: squash(0.5 + 0.25 * (tone.cozy + tone.heroic - tone.brutality) + noise("mercy")),
        ambition: squash(0.35 + 0.30 * (tone.brutality + tone.cosmic) + noise("ambition")),
    }
}

/// Score every unordered pair once, then mirror it; self-relation is 100.
fn score_relations(
    seed: u64,
    factions: &[Faction],
) -> BTreeMap<String, BTreeMap<String, i32>> {
    let mut relations: BTreeMap<String, BTreeMap<String, i32>> = BTreeMap::new();
    for f in factions {
        relations
            .entry(f.id.clone())
            .or_default()
            .insert(f.id.clone(), 100);
    }
    for (i, a) in factions.iter().enumerate() {
        for b in factions.iter().skip(i + 1) {
            let jitter = rng_int(seed, &format!("factions:rel:{}:{}", a.id, b.id), -24, 24) as f64;
            let score = (58.0 - 28.0 * a.alignment.distance(&b.alignment) + jitter).round() as i64;
            let score = score.clamp(-100, 100) as i32;
            relations
                .entry(a.id.clone())
                .or_default()
                .insert(b.id.clone(), score);
            relations
                .entry(b.id.clone())
                .or_default()
                .insert(a.id.clone(), score);
        }
    }
    relations
}

fn derive_tensions(
    seed: u64,
    factions: &[Faction],
    relations: &BTreeMap<String, BTreeMap<String, i32>>,
) -> Vec<String> {
    // Hostile pairs, most hostile first; ties broken by pair ids so the
    // ordering never depends on map iteration luck.
    let mut hostile: Vec<(i32, &Faction, &Faction)> = Vec::new();
    for (i, a) in factions.iter().enumerate() {
        for b in factions.iter().skip(i + 1) {
            if let Some(score) = relations.get(&a.id).and_then(|row| row.get(&b.id)) {
                if *score <= TENSION_THRESHOLD {
                    hostile.push((*score, a, b));
                }
            }
        }
    }
    hostile.sort_by(|x, y| x.0.cmp(&y.0).then_with(|| (x.1.id.as_str(), x.2.id.as_str()).cmp(&(y.1.id.as_str(), y.2.id.as_str()))));

    let mut tensions: Vec<String> = hostile
        .iter()
        .take(TENSION_INITIAL_CAP)
        .enumerate()
        .map(|(i, (score, a, b))| tension_sentence(seed, i, score, a, b))
        .collect();

    // Floor: whenever at least two factions exist, surface at least two
    // rivalries, padding with the first available pairs.
    if factions.len() >= 2 {
        let mut pairs = factions.iter().enumerate().flat_map(|(i, a)| {
            factions.iter().skip(i + 1).map(move |b| (a, b))
        });
        while tensions.len() < TENSION_FLOOR {
            match pairs.next() {
                Some((a, b)) => {
                    let line = format!(
                        "An uneasy rivalry simmers between {} and {}, neither side willing to name its cause.",
                        a.name, b.name
                    );
                    if !tensions.contains(&line) {
                        tensions.push(line);
                    }
                }
                None => break,
            }
        }
    }

    tensions.truncate(TENSION_FINAL_CAP);
    tensions
}

fn tension_sentence(seed: u64, index: usize, score: &i32, a: &Faction, b: &Faction) -> String {
    const TEMPLATES: &[&str] = &[
        "{a} and {b} are one insult away from open war.",
        "{a} undercuts {b} at every border post and shrine.",
        "Blood has already been spilled between {a} and {b}; only the scale is undecided.",
        "{a} calls {b} oathbreakers, and the feeling is returned with interest.",
    ];
    let template = rng_pick(seed, &format!("factions:tension:{index}:{score}"), TEMPLATES);
    template.replace("{a}", &a.name).replace("{b}", &b.name)
}
