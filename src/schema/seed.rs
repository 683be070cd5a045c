/// The resolved, hashed, deterministic seed record derived from a forge input.
use serde::{Deserialize, Serialize};

use super::input::ResolvedInput;
use super::tone::ToneVector;

/// Version tag for the seed record layout.
pub const SEED_VERSION: u32 = 1;

/// Everything downstream generation needs, resolved once and never mutated.
/// Identical resolved input (including the manual seed token) always yields
/// an identical `WorldSeed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSeed {
    pub version: u32,
    /// Embeds the manual-seed token (or `auto`) plus the full input hash, so
    /// two inputs differing only by manual seed still diverge.
    pub seed_string: String,
    /// In `[1, 2^31 - 1]`.
    pub seed_number: u32,
    /// Deduplicated case-insensitively, at most 36 entries.
    pub theme_tags: Vec<String>,
    pub tone: ToneVector,
    /// Ordered trace of tone presets applied.
    pub preset_trace: Vec<String>,
    pub input: ResolvedInput,
}

impl WorldSeed {
    /// The seed number widened for keyed draws.
    pub fn number(&self) -> u64 {
        u64::from(self.seed_number)
    }
}
