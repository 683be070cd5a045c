/// DM behavior profile: tone mapped into the bias vector consumed by
/// narrative logic outside this engine.
use crate::schema::context::DmBehaviorProfile;
use crate::schema::tone::{clamp01, ToneVector};

/// Derive the behavior bias from tone alone. No seeded draws; two worlds
/// with the same tone share a profile.
pub fn generate_behavior_profile(tone: &ToneVector) -> DmBehaviorProfile {
    DmBehaviorProfile {
        aggression: clamp01(0.25 + 0.45 * tone.brutality + 0.20 * tone.darkness - 0.15 * tone.cozy),
        leniency: clamp01(0.30 + 0.40 * tone.cozy + 0.25 * tone.heroic - 0.20 * tone.brutality),
        humor: clamp01(0.15 + 0.50 * tone.whimsy + 0.30 * tone.absurdity),
        grimness: clamp01(0.20 + 0.45 * tone.darkness + 0.30 * tone.tragic - 0.20 * tone.whimsy),
        spectacle: clamp01(0.20 + 0.40 * tone.cosmic + 0.25 * tone.absurdity + 0.10 * tone.heroic),
        improvisation: clamp01(0.30 + 0.30 * tone.absurdity + 0.20 * tone.whimsy),
    }
}
