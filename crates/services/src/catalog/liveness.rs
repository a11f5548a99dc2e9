use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use finder_core::model::{Record, Region};

use crate::catalog::progress::ProgressSink;
use crate::error::SinkError;

/// Shared flag telling whether a load session is still the current one.
#[derive(Clone, Debug)]
pub struct LivenessToken(Arc<AtomicBool>);

impl LivenessToken {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn invalidate(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic identifier of a load session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out load sessions; starting one retires the previous.
#[derive(Debug, Default)]
pub struct CatalogSessions {
    next_id: AtomicU64,
    current: Mutex<Option<LivenessToken>>,
}

impl CatalogSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `region`, invalidating whichever session was current.
    pub fn begin(&self, region: Region) -> SessionHandle {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::AcqRel) + 1);
        let token = LivenessToken::new();

        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.clone());
        if let Some(previous) = previous {
            previous.invalidate();
        }

        info!(session = %id, %region, "catalog session started");
        SessionHandle { id, region, token }
    }

    /// Invalidate the current session, if any. Used on teardown.
    pub fn shutdown(&self) {
        if let Some(token) = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            token.invalidate();
        }
    }
}

/// One load session. Dropping the handle does not invalidate it; call `dispose`.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    id: SessionId,
    region: Region,
    token: LivenessToken,
}

impl SessionHandle {
    /// A standalone session not tracked by any `CatalogSessions`.
    #[must_use]
    pub fn detached(region: Region) -> Self {
        Self {
            id: SessionId(0),
            region,
            token: LivenessToken::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.token.is_live()
    }

    #[must_use]
    pub fn token(&self) -> &LivenessToken {
        &self.token
    }

    /// Mark the session stale. Later callbacks become no-ops.
    pub fn dispose(&self) {
        debug!(session = %self.id, "catalog session disposed");
        self.token.invalidate();
    }

    /// Wrap `inner` so it only sees snapshots while this session is live.
    pub fn guard<'a, S: ProgressSink + ?Sized>(&self, inner: &'a mut S) -> GuardedSink<'a, S> {
        GuardedSink {
            session: self.id,
            token: self.token.clone(),
            inner,
        }
    }

    /// Hand `value` to `apply` only if the session is still live.
    ///
    /// Returns whether `apply` ran.
    pub fn finish<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_live() {
            debug!(session = %self.id, "discarding result of stale session");
            return false;
        }
        apply(value);
        true
    }
}

/// Progress sink that drops snapshots once its session is stale.
pub struct GuardedSink<'a, S: ProgressSink + ?Sized> {
    session: SessionId,
    token: LivenessToken,
    inner: &'a mut S,
}

impl<S: ProgressSink + ?Sized> ProgressSink for GuardedSink<'_, S> {
    fn on_progress(&mut self, snapshot: Vec<Record>) -> Result<(), SinkError> {
        if !self.token.is_live() {
            debug!(session = %self.session, size = snapshot.len(), "discarding stale snapshot");
            return Ok(());
        }
        self.inner.on_progress(snapshot)
    }
}
