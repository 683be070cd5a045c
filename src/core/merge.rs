/// Merge helper: folds a character binding into a caller-owned, loosely
/// typed runtime state bag.
///
/// This is the only place the engine touches caller-shaped state. It reads
/// and writes exactly the keys below and leaves everything else in the bag
/// untouched. Merging the same output twice is a no-op the second time.
use serde_json::{json, Map, Value};

use crate::schema::character::CharacterForgeOutput;

const RUMORS_KEY: &str = "rumors";
const FLAGS_KEY: &str = "flags";
const FACTION_PRESENCE_KEY: &str = "faction_presence";
const NPC_RELATIONSHIPS_KEY: &str = "npc_relationships";
const DISCOVERY_LOG_KEY: &str = "discovery_log";

/// Fold a forged character into the runtime state, returning the new state.
/// A non-object input is treated as an empty bag.
pub fn merge_character(state: &Value, output: &CharacterForgeOutput) -> Value {
    let mut bag: Map<String, Value> = state.as_object().cloned().unwrap_or_default();

    extend_string_set(&mut bag, RUMORS_KEY, &output.starting_rumors);
    extend_string_set(&mut bag, FLAGS_KEY, &output.starting_flags);
    extend_string_set(
        &mut bag,
        FACTION_PRESENCE_KEY,
        &[output.faction_alignment_id.clone()],
    );

    // Relationship scores overwrite: the forge output is authoritative for
    // the NPCs it introduces.
    let relationships = bag
        .entry(NPC_RELATIONSHIPS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(map) = relationships {
        for (name, score) in &output.starting_npc_relationships {
            map.insert(name.clone(), json!(score));
        }
    }

    let entry = json!({
        "kind": "character_forged",
        "origin_region": output.origin_region_id,
        "faction": output.faction_alignment_id,
        "town": output.starting_town,
    });
    let log = bag
        .entry(DISCOVERY_LOG_KEY)
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(entries) = log {
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }

    Value::Object(bag)
}

/// Append strings to an array-valued key, preserving order, skipping
/// entries already present.
fn extend_string_set(bag: &mut Map<String, Value>, key: &str, additions: &[String]) {
    let slot = bag.entry(key).or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(entries) = slot {
        for addition in additions {
            let value = Value::String(addition.clone());
            if !entries.contains(&value) {
                entries.push(value);
            }
        }
    }
}
