//! Speed levels and elapsed-time to tick-count conversion.
//!
//! A fixed ladder of discrete speed settings maps to integer tick
//! multipliers. [`ticks_for_speed`] converts the wall-clock time a frame
//! observed into the number of simulated days the host should request,
//! so fast-forward scales linearly with the multiplier without changing
//! tick-processor semantics.

/// Discrete simulation speed setting.
///
/// The multiplier table is fixed: ticks requested per elapsed interval
/// scale linearly with the multiplier, and [`SpeedLevel::Paused`] always
/// yields zero ticks regardless of elapsed time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpeedLevel {
    /// Simulation halted. No ticks are requested, ever.
    Paused,
    /// Real-time baseline (1x).
    #[default]
    Normal,
    /// Double speed (2x).
    Fast,
    /// Quintuple speed (5x).
    Faster,
    /// Twenty-fold speed (20x).
    Turbo,
    /// Hundred-fold speed (100x), the fast-forward ceiling.
    Maximum,
}

impl SpeedLevel {
    /// Integer tick multiplier for this speed setting.
    pub fn multiplier(self) -> u64 {
        match self {
            Self::Paused => 0,
            Self::Normal => 1,
            Self::Fast => 2,
            Self::Faster => 5,
            Self::Turbo => 20,
            Self::Maximum => 100,
        }
    }
}

/// Number of ticks a frame should request for the given speed setting.
///
/// Computes `floor(elapsed_ms / tick_interval_ms) * multiplier`.
/// [`SpeedLevel::Paused`] yields 0 regardless of elapsed time, as do
/// degenerate inputs (non-finite or non-positive interval, non-finite
/// or negative elapsed time) — bad values degrade to "no work" rather
/// than erroring.
pub fn ticks_for_speed(speed: SpeedLevel, elapsed_ms: f64, tick_interval_ms: f64) -> u64 {
    let multiplier = speed.multiplier();
    if multiplier == 0 {
        return 0;
    }
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0;
    }
    if !tick_interval_ms.is_finite() || tick_interval_ms <= 0.0 {
        return 0;
    }

    let intervals = (elapsed_ms / tick_interval_ms).floor();
    // A float at or above 2^64 would wrap through the cast; saturate.
    if intervals >= u64::MAX as f64 {
        return u64::MAX;
    }
    (intervals as u64).saturating_mul(multiplier)
}
