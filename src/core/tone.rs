/// Tone derivation: preset blending and toggle adjustments.
///
/// Presets pull the baseline toward their bias in trace order; toggles then
/// apply additive deltas in a fixed order, clamping after every step so the
/// order of application is observable at the extremes.
use crate::schema::input::{Lethality, MagicDensity, ResolvedInput, TechLevel};
use crate::schema::tone::{clamp01, ToneVector};

/// Weight kept from the accumulated vector at each preset blend step.
const BLEND_KEEP: f64 = 0.64;
/// Weight pulled from the preset's bias at each blend step.
const BLEND_PULL: f64 = 0.36;

/// A fixed tone preset: an id, a full bias vector, and the creature pool the
/// resolver falls back to when no focus is given.
#[derive(Debug, Clone, Copy)]
pub struct TonePreset {
    pub id: &'static str,
    pub bias: ToneVector,
    pub creature_bias: &'static [&'static str],
}

pub const PRESETS: &[TonePreset] = &[
    TonePreset {
        id: "high_fantasy",
        bias: ToneVector {
            darkness: 0.30, whimsy: 0.40, brutality: 0.25, absurdity: 0.20,
            cosmic: 0.30, heroic: 0.80, tragic: 0.30, cozy: 0.40,
        },
        creature_bias: &["ember drakes", "hollow knights", "storm harpies", "root trolls"],
    },
    TonePreset {
        id: "grimdark",
        bias: ToneVector {
            darkness: 0.85, whimsy: 0.05, brutality: 0.85, absurdity: 0.15,
            cosmic: 0.25, heroic: 0.25, tragic: 0.70, cozy: 0.05,
        },
        creature_bias: &["gravewights", "carrion apes", "plague rats", "barrow hounds"],
    },
    TonePreset {
        id: "gothic_horror",
        bias: ToneVector {
            darkness: 0.80, whimsy: 0.10, brutality: 0.55, absurdity: 0.15,
            cosmic: 0.45, heroic: 0.35, tragic: 0.75, cozy: 0.10,
        },
        creature_bias: &["lantern ghouls", "pale leeches", "mirror shades", "bone heralds"],
    },
    TonePreset {
        id: "whimsical_fae",
        bias: ToneVector {
            darkness: 0.20, whimsy: 0.90, brutality: 0.10, absurdity: 0.70,
            cosmic: 0.35, heroic: 0.45, tragic: 0.15, cozy: 0.65,
        },
        creature_bias: &["whisper moths", "glass spiders", "fen witches", "sky rays"],
    },
    TonePreset {
        id: "cosmic_horror",
        bias: ToneVector {
            darkness: 0.75, whimsy: 0.10, brutality: 0.45, absurdity: 0.55,
            cosmic: 0.95, heroic: 0.20, tragic: 0.60, cozy: 0.05,
        },
        creature_bias: &["mirror shades", "tunnel worms", "brine hags", "whisper moths"],
    },
    TonePreset {
        id: "mythic_tragedy",
        bias: ToneVector {
            darkness: 0.55, whimsy: 0.15, brutality: 0.50, absurdity: 0.10,
            cosmic: 0.50, heroic: 0.65, tragic: 0.95, cozy: 0.15,
        },
        creature_bias: &["frost revenants", "bone heralds", "storm harpies", "hollow knights"],
    },
    TonePreset {
        id: "cozy_hearth",
        bias: ToneVector {
            darkness: 0.10, whimsy: 0.60, brutality: 0.05, absurdity: 0.30,
            cosmic: 0.10, heroic: 0.45, tragic: 0.10, cozy: 0.95,
        },
        creature_bias: &["dire boars", "rust beetles", "whisper moths", "marsh serpents"],
    },
    TonePreset {
        id: "swashbuckling",
        bias: ToneVector {
            darkness: 0.25, whimsy: 0.55, brutality: 0.35, absurdity: 0.35,
            cosmic: 0.15, heroic: 0.85, tragic: 0.25, cozy: 0.35,
        },
        creature_bias: &["brine hags", "sky rays", "salt golems", "storm harpies"],
    },
    TonePreset {
        id: "weird_wilds",
        bias: ToneVector {
            darkness: 0.45, whimsy: 0.45, brutality: 0.35, absurdity: 0.85,
            cosmic: 0.65, heroic: 0.40, tragic: 0.30, cozy: 0.25,
        },
        creature_bias: &["clockwork crows", "glass spiders", "singing dunes wisps", "tunnel worms"],
    },
    TonePreset {
        id: "heroic_epic",
        bias: ToneVector {
            darkness: 0.40, whimsy: 0.25, brutality: 0.45, absurdity: 0.10,
            cosmic: 0.45, heroic: 0.95, tragic: 0.50, cozy: 0.20,
        },
        creature_bias: &["ember drakes", "frost revenants", "hollow knights", "dire boars"],
    },
];

/// Look up a preset by id.
pub fn preset(id: &str) -> Option<&'static TonePreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Fixed lookup from narrative template identifiers to preset ids, for
/// collaborators that only know about templates.
pub fn preset_for_template(template: &str) -> Option<&'static str> {
    let preset_id = match template {
        "gothic_horror" | "haunted_manor" | "vampire_court" => "gothic_horror",
        "dragon_quest" | "chosen_one" => "high_fantasy",
        "iron_war" | "mud_and_blood" => "grimdark",
        "fairy_court" | "talking_beasts" => "whimsical_fae",
        "eldritch_depths" | "stars_are_wrong" => "cosmic_horror",
        "doomed_dynasty" | "oath_and_ruin" => "mythic_tragedy",
        "tavern_hearth" | "harvest_festival" => "cozy_hearth",
        "pirate_coast" | "duel_at_dawn" => "swashbuckling",
        "spore_frontier" | "broken_physics" => "weird_wilds",
        "last_alliance" | "siege_of_ages" => "heroic_epic",
        _ => return None,
    };
    Some(preset_id)
}

/// The preset trace for a resolved input: the caller's tone preset first,
/// then blended presets in order, deduplicated, unknown ids dropped.
pub fn resolve_trace(input: &ResolvedInput) -> Vec<String> {
    let mut trace: Vec<String> = Vec::new();
    let mut push = |id: &str| {
        if preset(id).is_some() && !trace.iter().any(|t| t == id) {
            trace.push(id.to_string());
        }
    };
    push(&input.tone_preset);
    for id in &input.blend_presets {
        push(id);
    }
    trace
}

/// Derive the tone vector for a resolved input.
pub fn build_tone(input: &ResolvedInput) -> ToneVector {
    let mut tone = ToneVector::default();

    // Presets apply in trace order, each pulling 36% toward its own bias.
    for id in resolve_trace(input) {
        if let Some(p) = preset(&id) {
            tone = blend(tone, &p.bias).clamped();
        }
    }

    // Toggle adjustments, in this order. Clamping after each step means the
    // order is observable when axes saturate.
    tone = apply_humor(tone, input.humor).clamped();
    tone = apply_lethality(tone, input.lethality).clamped();
    tone = apply_magic_density(tone, input.magic_density).clamped();
    tone = apply_tech_level(tone, input.tech_level).clamped();
    tone = apply_corruption(tone, input.corruption_level).clamped();
    tone = apply_divine(tone, input.divine_interference).clamped();
    tone = apply_player_toggles(tone, input).clamped();

    tone
}

fn blend(old: ToneVector, bias: &ToneVector) -> ToneVector {
    let mix = |a: f64, b: f64| BLEND_KEEP * a + BLEND_PULL * b;
    ToneVector {
        darkness: mix(old.darkness, bias.darkness),
        whimsy: mix(old.whimsy, bias.whimsy),
        brutality: mix(old.brutality, bias.brutality),
        absurdity: mix(old.absurdity, bias.absurdity),
        cosmic: mix(old.cosmic, bias.cosmic),
        heroic: mix(old.heroic, bias.heroic),
        tragic: mix(old.tragic, bias.tragic),
        cozy: mix(old.cozy, bias.cozy),
    }
}

fn apply_humor(mut tone: ToneVector, humor: u8) -> ToneVector {
    let h = f64::from(humor.min(5)) / 5.0;
    tone.whimsy += 0.30 * h;
    tone.absurdity += 0.22 * h;
    tone.darkness -= 0.18 * h;
    tone.cozy += 0.12 * h;
    tone
}

fn apply_lethality(mut tone: ToneVector, lethality: Lethality) -> ToneVector {
    let (brutality, darkness, cozy) = match lethality {
        Lethality::Low => (-0.12, -0.08, 0.10),
        Lethality::Medium => (0.0, 0.0, 0.0),
        Lethality::High => (0.14, 0.10, -0.08),
        Lethality::Brutal => (0.26, 0.18, -0.16),
    };
    tone.brutality += brutality;
    tone.darkness += darkness;
    tone.cozy += cozy;
    tone
}

fn apply_magic_density(mut tone: ToneVector, density: MagicDensity) -> ToneVector {
    let (cosmic, absurdity) = match density {
        MagicDensity::Low => (-0.10, -0.04),
        MagicDensity::Neutral => (0.0, 0.0),
        MagicDensity::High => (0.12, 0.06),
        MagicDensity::Wild => (0.20, 0.16),
    };
    tone.cosmic += cosmic;
    tone.absurdity += absurdity;
    tone
}

fn apply_tech_level(mut tone: ToneVector, tech: TechLevel) -> ToneVector {
    let (cozy, heroic, cosmic, absurdity) = match tech {
        TechLevel::Primitive => (-0.06, 0.04, 0.02, 0.02),
        TechLevel::Medieval => (0.0, 0.0, 0.0, 0.0),
        TechLevel::Steampunk => (0.04, 0.02, 0.02, 0.06),
        TechLevel::Modern => (0.02, -0.02, 0.04, 0.04),
        TechLevel::Futuristic => (-0.02, 0.04, 0.12, 0.06),
    };
    tone.cozy += cozy;
    tone.heroic += heroic;
    tone.cosmic += cosmic;
    tone.absurdity += absurdity;
    tone
}

fn apply_corruption(mut tone: ToneVector, level: u8) -> ToneVector {
    let c = f64::from(level.min(5)) / 5.0;
    tone.darkness += 0.20 * c;
    tone.tragic += 0.16 * c;
    tone.cozy -= 0.14 * c;
    tone
}

fn apply_divine(mut tone: ToneVector, level: u8) -> ToneVector {
    let d = f64::from(level.min(5)) / 5.0;
    tone.cosmic += 0.18 * d;
    tone.heroic += 0.12 * d;
    tone.tragic += 0.08 * d;
    tone
}

fn apply_player_toggles(mut tone: ToneVector, input: &ResolvedInput) -> ToneVector {
    for (key, enabled) in &input.player_toggles {
        if !enabled {
            continue;
        }
        let key = key.to_lowercase();
        if key.contains("hard") || key.contains("nightmare") {
            tone.darkness = clamp01(tone.darkness + 0.08);
            tone.brutality = clamp01(tone.brutality + 0.08);
        }
        if key.contains("cozy") || key.contains("relax") {
            tone.cozy = clamp01(tone.cozy + 0.10);
            tone.darkness = clamp01(tone.darkness - 0.06);
        }
        if key.contains("chaos") || key.contains("wild") {
            tone.absurdity = clamp01(tone.absurdity + 0.08);
            tone.cosmic = clamp01(tone.cosmic + 0.06);
        }
        if key.contains("hero") || key.contains("story") {
            tone.heroic = clamp01(tone.heroic + 0.08);
            tone.tragic = clamp01(tone.tragic + 0.04);
        }
    }
    tone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::input::{FactionComplexity, RandomizationMode, WorldSize};
    use std::collections::BTreeMap;

    fn resolved_with_preset(preset_id: &str) -> ResolvedInput {
        ResolvedInput {
            title: "Test Realm".to_string(),
            description: "A quiet frontier.".to_string(),
            tone_preset: preset_id.to_string(),
            blend_presets: Vec::new(),
            humor: 2,
            lethality: Lethality::Medium,
            magic_density: MagicDensity::Neutral,
            tech_level: TechLevel::Medieval,
            faction_complexity: FactionComplexity::Medium,
            world_size: WorldSize::Medium,
            creature_focus: Vec::new(),
            starting_region_hint: String::new(),
            villain_archetype: "fallen_tyrant".to_string(),
            corruption_level: 1,
            divine_interference: 1,
            randomization: RandomizationMode::Fixed,
            player_toggles: BTreeMap::new(),
            manual_seed_token: "auto".to_string(),
        }
    }

    #[test]
    fn every_preset_bias_is_in_range() {
        for p in PRESETS {
            assert!(p.bias.in_range(), "preset {} bias out of range", p.id);
            assert!(!p.creature_bias.is_empty());
        }
    }

    #[test]
    fn grimdark_pulls_darker_than_cozy_hearth() {
        let grim = build_tone(&resolved_with_preset("grimdark"));
        let cozy = build_tone(&resolved_with_preset("cozy_hearth"));
        assert!(grim.darkness > cozy.darkness);
        assert!(cozy.cozy > grim.cozy);
        assert!(grim.in_range() && cozy.in_range());
    }

    #[test]
    fn blended_presets_apply_in_trace_order() {
        let mut input = resolved_with_preset("high_fantasy");
        input.blend_presets = vec!["grimdark".to_string()];
        let blended = build_tone(&input);
        let plain = build_tone(&resolved_with_preset("high_fantasy"));
        // The later grimdark pull must darken the result.
        assert!(blended.darkness > plain.darkness);
        assert!(blended.brutality > plain.brutality);
    }

    #[test]
    fn trace_dedups_and_keeps_caller_preset_first() {
        let mut input = resolved_with_preset("high_fantasy");
        input.blend_presets = vec![
            "high_fantasy".to_string(),
            "grimdark".to_string(),
            "grimdark".to_string(),
            "no_such_preset".to_string(),
        ];
        assert_eq!(resolve_trace(&input), vec!["high_fantasy", "grimdark"]);
    }

    #[test]
    fn humor_lifts_whimsy_and_cuts_darkness() {
        let mut dour = resolved_with_preset("grimdark");
        dour.humor = 0;
        let mut funny = resolved_with_preset("grimdark");
        funny.humor = 5;
        let dour_tone = build_tone(&dour);
        let funny_tone = build_tone(&funny);
        assert!(funny_tone.whimsy > dour_tone.whimsy);
        assert!(funny_tone.darkness < dour_tone.darkness);
    }

    #[test]
    fn brutal_lethality_saturates_within_range() {
        let mut input = resolved_with_preset("grimdark");
        input.lethality = Lethality::Brutal;
        input.corruption_level = 5;
        input.humor = 0;
        let tone = build_tone(&input);
        assert!(tone.in_range());
        assert!(tone.darkness > 0.9);
    }

    #[test]
    fn toggle_keywords_nudge_matching_axes() {
        let base = build_tone(&resolved_with_preset("high_fantasy"));
        let mut input = resolved_with_preset("high_fantasy");
        input.player_toggles.insert("nightmare_mode".to_string(), true);
        input.player_toggles.insert("wild_magic_zones".to_string(), true);
        input.player_toggles.insert("ignored_because_off".to_string(), false);
        let nudged = build_tone(&input);
        assert!(nudged.darkness > base.darkness);
        assert!(nudged.absurdity > base.absurdity);
    }

    #[test]
    fn template_lookup_maps_known_templates() {
        assert_eq!(preset_for_template("gothic_horror"), Some("gothic_horror"));
        assert_eq!(preset_for_template("pirate_coast"), Some("swashbuckling"));
        assert_eq!(preset_for_template("unmapped_template"), None);
    }
}
