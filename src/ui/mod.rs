//! Frame consumers for headless runs.

pub mod progress;
pub mod trace;

pub use progress::ProgressLog;
pub use trace::TraceRecorder;
