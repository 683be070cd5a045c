/// The 8-axis tone vector that steers every downstream generator.
use serde::{Deserialize, Serialize};

/// Clamp a scalar to `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Emotional/aesthetic bias of a world. Every axis lives in `[0, 1]` and is
/// re-clamped after each derivation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneVector {
    pub darkness: f64,
    pub whimsy: f64,
    pub brutality: f64,
    pub absurdity: f64,
    pub cosmic: f64,
    pub heroic: f64,
    pub tragic: f64,
    pub cozy: f64,
}

impl ToneVector {
    /// Clamp every axis to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            darkness: clamp01(self.darkness),
            whimsy: clamp01(self.whimsy),
            brutality: clamp01(self.brutality),
            absurdity: clamp01(self.absurdity),
            cosmic: clamp01(self.cosmic),
            heroic: clamp01(self.heroic),
            tragic: clamp01(self.tragic),
            cozy: clamp01(self.cozy),
        }
    }

    /// Axes with their names, in declaration order.
    pub fn axes(&self) -> [(&'static str, f64); 8] {
        [
            ("darkness", self.darkness),
            ("whimsy", self.whimsy),
            ("brutality", self.brutality),
            ("absurdity", self.absurdity),
            ("cosmic", self.cosmic),
            ("heroic", self.heroic),
            ("tragic", self.tragic),
            ("cozy", self.cozy),
        ]
    }

    /// True when every axis is within `[0, 1]`.
    pub fn in_range(&self) -> bool {
        self.axes().iter().all(|(_, v)| (0.0..=1.0).contains(v))
    }
}

/// The fixed baseline every tone derivation starts from: mildly heroic,
/// neither grim nor saccharine.
impl Default for ToneVector {
    fn default() -> Self {
        Self {
            darkness: 0.35,
            whimsy: 0.30,
            brutality: 0.30,
            absurdity: 0.25,
            cosmic: 0.25,
            heroic: 0.55,
            tragic: 0.30,
            cozy: 0.35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_in_range() {
        assert!(ToneVector::default().in_range());
    }

    #[test]
    fn clamped_pins_out_of_range_axes() {
        let wild = ToneVector {
            darkness: 1.7,
            whimsy: -0.3,
            ..ToneVector::default()
        };
        let clamped = wild.clamped();
        assert_eq!(clamped.darkness, 1.0);
        assert_eq!(clamped.whimsy, 0.0);
        assert!(clamped.in_range());
    }

    #[test]
    fn axes_cover_all_eight() {
        let axes = ToneVector::default().axes();
        assert_eq!(axes.len(), 8);
        assert_eq!(axes[0].0, "darkness");
        assert_eq!(axes[7].0, "cozy");
    }
}
