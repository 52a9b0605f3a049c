pub mod commands;
pub mod controller;
pub mod dive;
pub mod limits;
pub mod pointer;
pub mod status;

pub use commands::NavigationError;
pub use controller::NavigationController;
pub use limits::NavigationLimits;
pub use pointer::{PointerEvent, PointerModifiers};
pub use status::{DragState, NavigationMode, ViewportChange, ZoomProgress};
