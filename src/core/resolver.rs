/// Input resolution: validation, the prime seed, and per-mode defaults.
///
/// The prime seed is derived from title, description, and the manual seed
/// token alone. It is used only to resolve unset fields, never as the final
/// world seed, so adding a style knob later cannot reshuffle the fields a
/// caller left unset.
use log::debug;

use crate::core::pools::{BIOMES, CREATURE_POOL, VILLAIN_ARCHETYPES};
use crate::core::tone::{preset, PRESETS};
use crate::core::ForgeError;
use crate::rng::{hash64, rng_int, rng_pick, sample_unique};
use crate::schema::input::{
    FactionComplexity, ForgeInput, Lethality, MagicDensity, RandomizationMode, ResolvedInput,
    TechLevel, WorldSize,
};

const MAX_TITLE_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 4000;
const MAX_LEVEL: u8 = 5;

/// Validate a raw input and resolve every unset style field according to the
/// randomization mode.
pub fn resolve_input(raw: &ForgeInput) -> Result<ResolvedInput, ForgeError> {
    validate(raw)?;

    let manual_seed_token = raw
        .manual_seed
        .as_ref()
        .map(|s| s.token())
        .unwrap_or_else(|| "auto".to_string());

    // Prime seed: resolves unset fields only.
    let prime = hash64(&format!(
        "{}|{}|{}",
        raw.title, raw.description, manual_seed_token
    ));
    debug!(
        "resolving forge input `{}` in {:?} mode",
        raw.title, raw.randomization
    );

    let fully = raw.randomization == RandomizationMode::FullyRandom;
    let themed = raw.randomization == RandomizationMode::ThemeLockedRandom;
    let randomize = fully || themed;

    let tone_preset = pick_field(
        if fully { None } else { raw.tone_preset.clone() },
        randomize,
        "high_fantasy".to_string(),
        || rng_pick(prime, "resolve:preset", PRESETS).id.to_string(),
    );
    let blend_presets = if fully {
        Vec::new()
    } else {
        raw.blend_presets.clone()
    };

    let humor = pick_field(if fully { None } else { raw.humor }, randomize, 2, || {
        rng_int(prime, "resolve:humor", 0, 5) as u8
    });
    let lethality = pick_field(
        if fully { None } else { raw.lethality },
        randomize,
        Lethality::Medium,
        || {
            *rng_pick(
                prime,
                "resolve:lethality",
                &[
                    Lethality::Low,
                    Lethality::Medium,
                    Lethality::High,
                    Lethality::Brutal,
                ],
            )
        },
    );
    let magic_density = pick_field(
        if fully { None } else { raw.magic_density },
        randomize,
        MagicDensity::Neutral,
        || {
            *rng_pick(
                prime,
                "resolve:magic",
                &[
                    MagicDensity::Low,
                    MagicDensity::Neutral,
                    MagicDensity::High,
                    MagicDensity::Wild,
                ],
            )
        },
    );
    let tech_level = pick_field(
        if fully { None } else { raw.tech_level },
        randomize,
        TechLevel::Medieval,
        || {
            *rng_pick(
                prime,
                "resolve:tech",
                &[
                    TechLevel::Primitive,
                    TechLevel::Medieval,
                    TechLevel::Steampunk,
                    TechLevel::Modern,
                    TechLevel::Futuristic,
                ],
            )
        },
    );
    let faction_complexity = pick_field(
        if fully { None } else { raw.faction_complexity },
        randomize,
        FactionComplexity::Medium,
        || {
            *rng_pick(
                prime,
                "resolve:complexity",
                &[
                    FactionComplexity::Low,
                    FactionComplexity::Medium,
                    FactionComplexity::High,
                ],
            )
        },
    );
    let world_size = pick_field(
        if fully { None } else { raw.world_size },
        randomize,
        WorldSize::Medium,
        || {
            *rng_pick(
                prime,
                "resolve:size",
                &[WorldSize::Small, WorldSize::Medium, WorldSize::Large],
            )
        },
    );
    let corruption_level = pick_field(
        if fully { None } else { raw.corruption_level },
        randomize,
        1,
        || rng_int(prime, "resolve:corruption", 0, 5) as u8,
    );
    let divine_interference = pick_field(
        if fully { None } else { raw.divine_interference },
        randomize,
        1,
        || rng_int(prime, "resolve:divine", 0, 5) as u8,
    );
    let villain_archetype = pick_field(
        if fully { None } else { raw.villain_archetype.clone() },
        randomize,
        "fallen_tyrant".to_string(),
        || rng_pick(prime, "resolve:villain", VILLAIN_ARCHETYPES).to_string(),
    );
    let starting_region_hint = pick_field(
        if fully { None } else { raw.starting_region_hint.clone() },
        randomize,
        String::new(),
        || rng_pick(prime, "resolve:hint", BIOMES).name.to_string(),
    );

    let creature_focus = resolve_creature_focus(raw, prime, fully, randomize, &tone_preset);

    Ok(ResolvedInput {
        title: raw.title.trim().to_string(),
        description: raw.description.trim().to_string(),
        tone_preset,
        blend_presets,
        humor,
        lethality,
        magic_density,
        tech_level,
        faction_complexity,
        world_size,
        creature_focus,
        starting_region_hint,
        villain_archetype,
        corruption_level,
        divine_interference,
        randomization: raw.randomization,
        player_toggles: raw.player_toggles.clone(),
        manual_seed_token,
    })
}

/// Resolve one field: caller value wins (unless forced random), then a pool
/// draw in the random modes, then the static default.
fn pick_field<T>(caller: Option<T>, randomize: bool, default: T, draw: impl FnOnce() -> T) -> T {
    match caller {
        Some(v) => v,
        None if randomize => draw(),
        None => default,
    }
}

/// Creature focus priority: explicit list, then a random draw from the
/// global pool in the random modes, then the selected preset's bias pool.
fn resolve_creature_focus(
    raw: &ForgeInput,
    prime: u64,
    fully: bool,
    randomize: bool,
    tone_preset: &str,
) -> Vec<String> {
    let explicit: Vec<String> = raw
        .creature_focus
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if !explicit.is_empty() && !fully {
        let mut deduped: Vec<String> = Vec::new();
        for c in explicit {
            if !deduped.iter().any(|d| d.eq_ignore_ascii_case(&c)) {
                deduped.push(c);
            }
        }
        deduped.truncate(6);
        return deduped;
    }
    if randomize {
        return sample_unique(prime, "resolve:creatures", CREATURE_POOL, 3)
            .into_iter()
            .map(str::to_string)
            .collect();
    }
    preset(tone_preset)
        .map(|p| p.creature_bias.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default()
}

fn validate(raw: &ForgeInput) -> Result<(), ForgeError> {
    if raw.title.trim().is_empty() {
        return Err(ForgeError::invalid("title", "must not be empty"));
    }
    if raw.title.len() > MAX_TITLE_LEN {
        return Err(ForgeError::invalid(
            "title",
            format!("must be at most {MAX_TITLE_LEN} bytes"),
        ));
    }
    if raw.description.trim().is_empty() {
        return Err(ForgeError::invalid("description", "must not be empty"));
    }
    if raw.description.len() > MAX_DESCRIPTION_LEN {
        return Err(ForgeError::invalid(
            "description",
            format!("must be at most {MAX_DESCRIPTION_LEN} bytes"),
        ));
    }
    for (field, level) in [
        ("humor", raw.humor),
        ("corruption_level", raw.corruption_level),
        ("divine_interference", raw.divine_interference),
    ] {
        if let Some(level) = level {
            if level > MAX_LEVEL {
                return Err(ForgeError::invalid(
                    field,
                    format!("must be between 0 and {MAX_LEVEL}, got {level}"),
                ));
            }
        }
    }
    if let Some(id) = &raw.tone_preset {
        if preset(id).is_none() {
            return Err(ForgeError::invalid(
                "tone_preset",
                format!("unknown preset `{id}`"),
            ));
        }
    }
    for (i, id) in raw.blend_presets.iter().enumerate() {
        if preset(id).is_none() {
            return Err(ForgeError::invalid(
                &format!("blend_presets[{i}]"),
                format!("unknown preset `{id}`"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::input::SeedOverride;

    fn raw() -> ForgeInput {
        ForgeInput::new("Ashline Covenant", "A failing pact on a cold frontier.")
    }

    #[test]
    fn fixed_mode_fills_static_defaults() {
        let resolved = resolve_input(&raw()).unwrap();
        assert_eq!(resolved.tone_preset, "high_fantasy");
        assert_eq!(resolved.humor, 2);
        assert_eq!(resolved.lethality, Lethality::Medium);
        assert_eq!(resolved.world_size, WorldSize::Medium);
        assert_eq!(resolved.villain_archetype, "fallen_tyrant");
        assert_eq!(resolved.manual_seed_token, "auto");
        // Fixed mode with no focus falls back to the preset's bias pool.
        assert!(!resolved.creature_focus.is_empty());
    }

    #[test]
    fn caller_values_survive_fixed_and_theme_locked_modes() {
        let mut input = raw();
        input.lethality = Some(Lethality::Brutal);
        input.randomization = RandomizationMode::ThemeLockedRandom;
        let resolved = resolve_input(&input).unwrap();
        assert_eq!(resolved.lethality, Lethality::Brutal);
    }

    #[test]
    fn theme_locked_draws_are_input_deterministic() {
        let mut input = raw();
        input.randomization = RandomizationMode::ThemeLockedRandom;
        let a = resolve_input(&input).unwrap();
        let b = resolve_input(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fully_random_overrides_caller_style_fields() {
        let mut input = raw();
        input.randomization = RandomizationMode::FullyRandom;
        input.humor = Some(0);
        input.lethality = Some(Lethality::Low);
        let resolved = resolve_input(&input).unwrap();
        // Values come from the prime-seeded draws, so they are stable for
        // this title/description pair regardless of the caller's choices.
        let again = resolve_input(&input).unwrap();
        assert_eq!(resolved, again);
        assert_eq!(resolved.title, input.title);
    }

    #[test]
    fn manual_seed_changes_prime_resolution() {
        let mut a = raw();
        a.randomization = RandomizationMode::FullyRandom;
        let mut b = a.clone();
        b.manual_seed = Some(SeedOverride::Number(7));
        let ra = resolve_input(&a).unwrap();
        let rb = resolve_input(&b).unwrap();
        assert_eq!(rb.manual_seed_token, "7");
        assert_ne!(ra.manual_seed_token, rb.manual_seed_token);
    }

    #[test]
    fn explicit_creature_focus_wins_and_dedups() {
        let mut input = raw();
        input.creature_focus = vec![
            "Gravewights".to_string(),
            "gravewights".to_string(),
            "  ".to_string(),
            "salt golems".to_string(),
        ];
        let resolved = resolve_input(&input).unwrap();
        assert_eq!(resolved.creature_focus, vec!["Gravewights", "salt golems"]);
    }

    #[test]
    fn empty_title_is_rejected() {
        let input = ForgeInput::new("  ", "desc");
        let err = resolve_input(&input).unwrap_err();
        assert!(matches!(err, ForgeError::Validation { ref field, .. } if field == "title"));
    }

    #[test]
    fn out_of_range_humor_is_rejected() {
        let mut input = raw();
        input.humor = Some(6);
        let err = resolve_input(&input).unwrap_err();
        assert!(matches!(err, ForgeError::Validation { ref field, .. } if field == "humor"));
    }

    #[test]
    fn unknown_preset_is_rejected_with_path() {
        let mut input = raw();
        input.blend_presets = vec!["grimdark".to_string(), "nope".to_string()];
        let err = resolve_input(&input).unwrap_err();
        assert!(
            matches!(err, ForgeError::Validation { ref field, .. } if field == "blend_presets[1]")
        );
    }
}
