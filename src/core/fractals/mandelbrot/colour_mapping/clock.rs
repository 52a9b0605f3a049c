use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time for the time-varying colour schemes.
pub trait Clock: Send + Sync {
    fn seconds(&self) -> f64;
}

/// Seconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seconds(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64())
    }
}

/// Always reports the same instant. Makes time-varying schemes reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn seconds(&self) -> f64 {
        self.0
    }
}
