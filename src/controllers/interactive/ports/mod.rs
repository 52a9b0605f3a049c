//! Traits the interactive layer talks through: frames go out to a
//! [`FrameSink`], viewport changes go out to [`NavigationObserver`]s.

pub mod frame_sink;
pub mod navigation_observer;

pub use frame_sink::FrameSink;
pub use navigation_observer::NavigationObserver;
