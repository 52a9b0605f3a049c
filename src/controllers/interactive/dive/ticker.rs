use std::time::Duration;

use log::warn;

use crate::core::navigation::limits::NavigationLimits;
use crate::core::navigation::status::ViewportChange;

/// Turns wall-clock time into whole dive ticks.
///
/// Leftover time below one tick carries into the next call. A backlog larger
/// than `max_ticks_per_advance` is dropped rather than replayed, so a stalled
/// host does not lurch forward once it wakes up.
#[derive(Debug, Clone)]
pub struct DiveTicker {
    interval: Duration,
    max_ticks_per_advance: u32,
    accumulator: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    pub ticks_run: u32,
    pub dropped_backlog: bool,
    /// The change produced by the final tick, if any tick moved the view.
    pub last_change: Option<ViewportChange>,
}

impl TickReport {
    #[must_use]
    pub fn state_changed(&self) -> bool {
        self.last_change.is_some()
    }
}

impl DiveTicker {
    #[must_use]
    pub fn new(limits: &NavigationLimits) -> Self {
        Self {
            interval: limits.dive_tick_interval,
            max_ticks_per_advance: limits.max_ticks_per_advance,
            accumulator: Duration::ZERO,
        }
    }

    /// Adds `elapsed` to the accumulator and calls `tick` once per whole
    /// interval. Stops early and clears the carry when `tick` returns `None`.
    pub fn advance<T>(&mut self, elapsed: Duration, mut tick: T) -> TickReport
    where
        T: FnMut() -> Option<ViewportChange>,
    {
        let interval_nanos = self.interval.as_nanos();
        if interval_nanos == 0 {
            return TickReport::default();
        }

        self.accumulator = self.accumulator.saturating_add(elapsed);

        let ticks_available = self.accumulator.as_nanos() / interval_nanos;
        let max_ticks = u128::from(self.max_ticks_per_advance);
        let dropped_backlog = ticks_available > max_ticks;
        let ticks_due = ticks_available.min(max_ticks) as u32;

        let mut report = TickReport {
            dropped_backlog,
            ..TickReport::default()
        };

        for _ in 0..ticks_due {
            let Some(change) = tick() else {
                self.accumulator = Duration::ZERO;
                return report;
            };
            report.ticks_run += 1;
            report.last_change = Some(change);
        }

        if dropped_backlog {
            warn!(
                "dive fell behind by {} ticks; dropping backlog",
                ticks_available - max_ticks
            );
            self.accumulator = Duration::ZERO;
        } else {
            self.accumulator = self.accumulator.saturating_sub(self.interval * ticks_due);
        }

        report
    }

    /// Forgets any carried time, e.g. when a dive starts or stops.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }

    #[must_use]
    pub fn carried(&self) -> Duration {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;
    use crate::core::navigation::status::ZoomProgress;

    fn change() -> Option<ViewportChange> {
        Some(ViewportChange {
            viewport: Viewport::default(),
            progress: ZoomProgress {
                zoom: 1.0,
                max_zoom: 1.0,
            },
        })
    }

    fn ticker() -> DiveTicker {
        DiveTicker::new(&NavigationLimits::default())
    }

    #[test]
    fn exact_interval_runs_one_tick() {
        let mut ticker = ticker();
        let mut calls = 0;

        let report = ticker.advance(Duration::from_millis(50), || {
            calls += 1;
            change()
        });

        assert_eq!(report.ticks_run, 1);
        assert_eq!(calls, 1);
        assert!(report.state_changed());
        assert_eq!(ticker.carried(), Duration::ZERO);
    }

    #[test]
    fn multiple_intervals_run_multiple_ticks() {
        let mut ticker = ticker();
        let mut calls = 0;

        let report = ticker.advance(Duration::from_millis(150), || {
            calls += 1;
            change()
        });

        assert_eq!(report.ticks_run, 3);
        assert_eq!(calls, 3);
        assert!(!report.dropped_backlog);
    }

    #[test]
    fn fractional_elapsed_rolls_over_to_next_advance() {
        let mut ticker = ticker();

        let first = ticker.advance(Duration::from_millis(30), change);
        let second = ticker.advance(Duration::from_millis(30), change);

        assert_eq!(first.ticks_run, 0);
        assert_eq!(second.ticks_run, 1);
        assert_eq!(ticker.carried(), Duration::from_millis(10));
    }

    #[test]
    fn zero_elapsed_runs_no_ticks() {
        let mut ticker = ticker();
        let mut calls = 0;

        let report = ticker.advance(Duration::ZERO, || {
            calls += 1;
            change()
        });

        assert_eq!(report.ticks_run, 0);
        assert_eq!(calls, 0);
        assert!(!report.state_changed());
    }

    #[test]
    fn large_elapsed_is_capped_and_excess_time_is_dropped() {
        let mut ticker = ticker();
        let mut calls = 0;

        let capped = ticker.advance(Duration::from_secs(1), || {
            calls += 1;
            change()
        });

        assert_eq!(capped.ticks_run, 10);
        assert_eq!(calls, 10);
        assert!(capped.dropped_backlog);

        let after_drop = ticker.advance(Duration::ZERO, change);

        assert_eq!(after_drop.ticks_run, 0);
    }

    #[test]
    fn tick_returning_none_stops_and_clears_carry() {
        let mut ticker = ticker();
        let mut calls = 0;

        let report = ticker.advance(Duration::from_millis(220), || {
            calls += 1;
            if calls < 2 { change() } else { None }
        });

        assert_eq!(report.ticks_run, 1);
        assert_eq!(calls, 2);
        assert_eq!(ticker.carried(), Duration::ZERO);
    }

    #[test]
    fn zero_interval_never_ticks() {
        let limits = NavigationLimits {
            dive_tick_interval: Duration::ZERO,
            ..NavigationLimits::default()
        };
        let mut ticker = DiveTicker::new(&limits);

        let report = ticker.advance(Duration::from_secs(1), || panic!("must not tick"));

        assert_eq!(report, TickReport::default());
    }

    #[test]
    fn reset_discards_partial_interval() {
        let mut ticker = ticker();
        let _ = ticker.advance(Duration::from_millis(40), change);

        ticker.reset();
        let report = ticker.advance(Duration::from_millis(40), change);

        assert_eq!(report.ticks_run, 0);
    }
}
