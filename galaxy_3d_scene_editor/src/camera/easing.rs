/// Easing curves applied to normalized playback progress.

/// Quadratic easing curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Every easing kind
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    /// Remap progress `t` (clamped to `[0, 1]`). Every curve maps 0 → 0
    /// and 1 → 1 and is monotonic in between.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.max(0.0).min(1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "easing_tests.rs"]
mod tests;
