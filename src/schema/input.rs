/// Caller-supplied campaign seed and style options, raw and resolved forms.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How much freedom the resolver has when filling unset style fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RandomizationMode {
    /// Unset fields take static defaults.
    #[default]
    Fixed,
    /// Unset fields are drawn from their pools, deterministically off the
    /// input's prime seed.
    ThemeLockedRandom,
    /// Every style field is redrawn regardless of caller values, except
    /// title, description, and the manual seed override.
    FullyRandom,
}

impl RandomizationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::ThemeLockedRandom => "theme-locked",
            Self::FullyRandom => "fully-random",
        }
    }
}

/// How deadly encounters and the world at large should feel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lethality {
    Low,
    Medium,
    High,
    Brutal,
}

impl Lethality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Brutal => "brutal",
        }
    }
}

/// How saturated the world is with magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagicDensity {
    Low,
    Neutral,
    High,
    Wild,
}

impl MagicDensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Neutral => "neutral",
            Self::High => "high",
            Self::Wild => "wild",
        }
    }
}

/// The world's technology register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechLevel {
    Primitive,
    Medieval,
    Steampunk,
    Modern,
    Futuristic,
}

impl TechLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Medieval => "medieval",
            Self::Steampunk => "steampunk",
            Self::Modern => "modern",
            Self::Futuristic => "futuristic",
        }
    }
}

/// How many factions the simulation tracks and how tangled their politics are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactionComplexity {
    Low,
    Medium,
    High,
}

impl FactionComplexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Spatial extent of the generated world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldSize {
    Small,
    Medium,
    Large,
}

impl WorldSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Manual seed override: a number or an arbitrary string token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedOverride {
    Number(i64),
    Text(String),
}

impl SeedOverride {
    /// Token embedded into the seed string.
    pub fn token(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Raw caller input. Only `title` and `description` are required; every other
/// field is a style knob the resolver fills according to the randomization
/// mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgeInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tone_preset: Option<String>,
    #[serde(default)]
    pub blend_presets: Vec<String>,
    /// 0 to 5.
    #[serde(default)]
    pub humor: Option<u8>,
    #[serde(default)]
    pub lethality: Option<Lethality>,
    #[serde(default)]
    pub magic_density: Option<MagicDensity>,
    #[serde(default)]
    pub tech_level: Option<TechLevel>,
    #[serde(default)]
    pub faction_complexity: Option<FactionComplexity>,
    #[serde(default)]
    pub world_size: Option<WorldSize>,
    #[serde(default)]
    pub creature_focus: Vec<String>,
    #[serde(default)]
    pub starting_region_hint: Option<String>,
    #[serde(default)]
    pub villain_archetype: Option<String>,
    /// 0 to 5.
    #[serde(default)]
    pub corruption_level: Option<u8>,
    /// 0 to 5.
    #[serde(default)]
    pub divine_interference: Option<u8>,
    #[serde(default)]
    pub randomization: RandomizationMode,
    #[serde(default)]
    pub player_toggles: BTreeMap<String, bool>,
    #[serde(default)]
    pub manual_seed: Option<SeedOverride>,
}

impl ForgeInput {
    /// A raw input with every style knob unset.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone_preset: None,
            blend_presets: Vec::new(),
            humor: None,
            lethality: None,
            magic_density: None,
            tech_level: None,
            faction_complexity: None,
            world_size: None,
            creature_focus: Vec::new(),
            starting_region_hint: None,
            villain_archetype: None,
            corruption_level: None,
            divine_interference: None,
            randomization: RandomizationMode::Fixed,
            player_toggles: BTreeMap::new(),
            manual_seed: None,
        }
    }
}

/// Fully resolved input: every style field concrete. An empty
/// `starting_region_hint` means no hint was given or drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInput {
    pub title: String,
    pub description: String,
    pub tone_preset: String,
    pub blend_presets: Vec<String>,
    pub humor: u8,
    pub lethality: Lethality,
    pub magic_density: MagicDensity,
    pub tech_level: TechLevel,
    pub faction_complexity: FactionComplexity,
    pub world_size: WorldSize,
    pub creature_focus: Vec<String>,
    pub starting_region_hint: String,
    pub villain_archetype: String,
    pub corruption_level: u8,
    pub divine_interference: u8,
    pub randomization: RandomizationMode,
    pub player_toggles: BTreeMap<String, bool>,
    /// `"auto"` when no manual seed was supplied.
    pub manual_seed_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_input_has_no_style_fields_set() {
        let input = ForgeInput::new("Ashline Covenant", "A failing pact.");
        assert_eq!(input.title, "Ashline Covenant");
        assert!(input.tone_preset.is_none());
        assert!(input.creature_focus.is_empty());
        assert_eq!(input.randomization, RandomizationMode::Fixed);
        assert!(input.manual_seed.is_none());
    }

    #[test]
    fn seed_override_tokens() {
        assert_eq!(SeedOverride::Number(42).token(), "42");
        assert_eq!(SeedOverride::Text("moss".to_string()).token(), "moss");
    }

    #[test]
    fn seed_override_untagged_round_trip() {
        let n: SeedOverride = serde_json::from_str("42").unwrap();
        assert_eq!(n, SeedOverride::Number(42));
        let s: SeedOverride = serde_json::from_str("\"moss\"").unwrap();
        assert_eq!(s, SeedOverride::Text("moss".to_string()));
    }

    #[test]
    fn enum_tokens() {
        assert_eq!(Lethality::Brutal.as_str(), "brutal");
        assert_eq!(MagicDensity::Wild.as_str(), "wild");
        assert_eq!(TechLevel::Steampunk.as_str(), "steampunk");
        assert_eq!(WorldSize::Small.as_str(), "small");
        assert_eq!(RandomizationMode::ThemeLockedRandom.as_str(), "theme-locked");
    }

    #[test]
    fn forge_input_ron_round_trip() {
        let mut input = ForgeInput::new("Honey Circuit Uprising", "Bees, but electric.");
        input.humor = Some(4);
        input.lethality = Some(Lethality::High);
        let serialized = ron::to_string(&input).unwrap();
        let deserialized: ForgeInput = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, input);
    }

    #[test]
    fn forge_input_json_round_trip_with_manual_seed() {
        let mut input = ForgeInput::new("Honey Circuit Uprising", "Bees, but electric.");
        input.manual_seed = Some(SeedOverride::Text("hive".to_string()));
        let serialized = serde_json::to_string(&input).unwrap();
        let deserialized: ForgeInput = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, input);
    }
}
