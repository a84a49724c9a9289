//! Application state shared by every request

use std::sync::Arc;

use anysite_core::{Credentials, Upstream};

/// Immutable per-process state: the dispatcher and the credentials it
/// injects into management operations.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(upstream: impl Upstream + 'static, credentials: Credentials) -> Self {
        Self::from_arc(Arc::new(upstream), credentials)
    }

    /// Create an AppState from an already shared dispatcher
    pub fn from_arc(upstream: Arc<dyn Upstream>, credentials: Credentials) -> Self {
        Self {
            upstream,
            credentials: Arc::new(credentials),
        }
    }
}
