mod liveness;
mod loader;
mod outcome;
mod progress;

// Public API of the catalog subsystem.
pub use crate::error::{LoadError, SinkError};
pub use liveness::{CatalogSessions, GuardedSink, LivenessToken, SessionHandle, SessionId};
pub use loader::CatalogLoader;
pub use outcome::FetchOutcome;
pub use progress::{NoProgress, ProgressSink, SnapshotLog};
