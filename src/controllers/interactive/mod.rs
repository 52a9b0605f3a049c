//! Interactive layer for real-time exploration.
//!
//! Ties the navigation state machine to a background render worker:
//! - **Input**: pointer events and view commands on [`ExplorerSession`]
//! - **Output**: frames through the [`FrameSink`] port, viewport changes
//!   through the [`NavigationObserver`] port
//! - **Timing**: the host calls [`ExplorerSession::advance`] with elapsed time
//!   and the [`DiveTicker`] turns it into fixed dive steps

pub mod data;
pub mod dive;
pub mod events;
pub mod ports;
mod session;
mod worker;

pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use dive::{DiveTicker, RenderScheduler, SchedulerAction, TickReport};
pub use events::render_event::RenderEvent;
pub use ports::{FrameSink, NavigationObserver};
pub use session::ExplorerSession;
pub use worker::RenderWorker;
