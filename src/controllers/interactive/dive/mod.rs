pub mod scheduler;
pub mod ticker;

pub use scheduler::{RenderScheduler, SchedulerAction};
pub use ticker::{DiveTicker, TickReport};
