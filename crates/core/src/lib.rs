#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod reading;
pub mod timer;

pub use error::Error;
pub use reading::ReadingProgress;
pub use timer::{CountdownTimer, ElapsedReport, TickOutcome, TimerError, TimerState, format_clock};
