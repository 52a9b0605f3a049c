use std::time::Duration;

/// Tuning table for pointer handling, dive motion and iteration policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// Pointer travel below this many pixels turns a drag into a click.
    pub click_threshold_px: f64,
    pub click_zoom_factor: f64,
    /// Fraction of the remaining distance to the target covered per dive tick.
    pub dive_approach: f64,
    pub dive_zoom_per_tick: f64,
    pub dive_tick_interval: Duration,
    pub max_ticks_per_advance: u32,
    pub min_iteration_cap: u32,
    pub max_iteration_cap: u32,
}

impl NavigationLimits {
    /// Seconds per dive tick.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dive_tick_interval.as_secs_f64()
    }

    #[must_use]
    pub fn clamp_iteration_cap(&self, requested: u32) -> u32 {
        requested.clamp(self.min_iteration_cap, self.max_iteration_cap)
    }
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            click_threshold_px: 5.0,
            click_zoom_factor: 2.0,
            dive_approach: 0.2,
            dive_zoom_per_tick: 1.05,
            dive_tick_interval: Duration::from_millis(50),
            max_ticks_per_advance: 10,
            min_iteration_cap: 50,
            max_iteration_cap: 1000,
        }
    }
}
