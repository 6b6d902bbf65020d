//! Dispatcher configuration — construction-time options recognized by the
//! SDK.

/// Production ingestion host used when no override is configured.
pub const DEFAULT_INGEST_HOST: &str = "collect.beacon.app";

/// Fixed collector route for track events.
pub const TRACK_ENDPOINT_PATH: &str = "/api/public/track/v1";

/// Construction-time options for [`EventDispatcher`].
///
/// [`EventDispatcher`]: crate::dispatcher::EventDispatcher
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Authenticates and buckets events at the collector. Required; never
    /// validated client-side.
    pub write_key: String,
    /// Ingestion host override. A bare host is reached over https; a value
    /// carrying its own scheme is used as-is.
    pub cdn_url: Option<String>,
    /// Static user identifier attached to every envelope for this
    /// dispatcher's lifetime.
    pub user_id: Option<String>,
}

impl DispatcherConfig {
    pub fn new(write_key: impl Into<String>) -> Self {
        Self {
            write_key: write_key.into(),
            cdn_url: None,
            user_id: None,
        }
    }

    pub fn cdn_url(mut self, cdn_url: impl Into<String>) -> Self {
        self.cdn_url = Some(cdn_url.into());
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}
