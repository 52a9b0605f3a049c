use crate::core::navigation::status::ViewportChange;

/// Notified on every viewport change with the current and best zoom so far,
/// e.g. to drive achievements or a zoom readout.
pub trait NavigationObserver: Send + Sync {
    fn viewport_changed(&self, change: &ViewportChange);
}
