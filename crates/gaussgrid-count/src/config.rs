//! Counter and sweep configuration.

/// Configuration for incremental counting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CountConfig {
    /// Start a missing grid from the 2x2 seed `(0,0),(0,1),(1,0),(1,1)`
    /// instead of an empty grid. Counts are identical either way.
    /// Default: true.
    pub seed: bool,

    /// Reject counts whose per-axis coverage limit exceeds this value.
    /// Default: None (bounded only by the `i32` coordinate range).
    pub max_limit: Option<u64>,

    /// Extend rows on the rayon pool. Ignored unless the `parallel` feature
    /// is compiled in.
    /// Default: false.
    pub parallel: bool,
}

impl CountConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_limit(mut self, max_limit: u64) -> Self {
        self.max_limit = Some(max_limit);
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            seed: true,
            max_limit: None,
            parallel: false,
        }
    }
}

/// Configuration for a radius sweep.
///
/// Radii are `start + i * interval` for every `i` with the radius strictly
/// below `max_radius`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// First radius. Default: 0.0.
    pub start: f64,

    /// Exclusive upper end of the sweep. Default: 100.0.
    pub max_radius: f64,

    /// Step between radii. Default: 0.1.
    pub interval: f64,

    /// Counter settings for every step.
    pub count: CountConfig,
}

impl SweepConfig {
    /// Sweep `[0, max_radius)` with the default interval.
    #[must_use]
    pub fn new(max_radius: f64) -> Self {
        Self {
            max_radius,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: CountConfig) -> Self {
        self.count = count;
        self
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            max_radius: 100.0,
            interval: 0.1,
            count: CountConfig::default(),
        }
    }
}
