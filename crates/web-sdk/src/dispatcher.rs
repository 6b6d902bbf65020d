//! Event dispatch — the public entry point of the SDK. Holds client
//! identity, assembles the outbound envelope from caller-supplied data plus
//! the enrichment context, and POSTs it to the collection endpoint.

use std::sync::Arc;

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use beacon_core::{BeaconResult, EventEnvelope, EventProperties, EventType};

use crate::config::{DispatcherConfig, DEFAULT_INGEST_HOST, TRACK_ENDPOINT_PATH};
use crate::context::ContextBuilder;
use crate::environment::Environment;

/// Emits track events to the collection endpoint.
///
/// Identity fields are fixed at construction: the write key and optional
/// user id come from the configuration, the anonymous id is generated once
/// and stays stable for the dispatcher's lifetime. Every [`track`] call
/// builds and discards its own envelope, so concurrent calls interleave
/// freely; delivery order at the collector is not guaranteed.
///
/// [`track`]: EventDispatcher::track
pub struct EventDispatcher {
    write_key: String,
    user_id: Option<String>,
    anonymous_id: String,
    track_url: Url,
    http: reqwest::Client,
    context: ContextBuilder,
}

impl EventDispatcher {
    /// Create a dispatcher for the given configuration, reading ambient
    /// page state through `env`. Fails only when the configured ingestion
    /// host does not form a valid URL.
    pub fn new(config: DispatcherConfig, env: Arc<dyn Environment>) -> BeaconResult<Self> {
        let base = match config.cdn_url.as_deref() {
            Some(cdn) if cdn.contains("://") => cdn.to_string(),
            Some(cdn) => format!("https://{cdn}"),
            None => format!("https://{DEFAULT_INGEST_HOST}"),
        };
        let track_url = Url::parse(&base)?.join(TRACK_ENDPOINT_PATH)?;

        Ok(Self {
            write_key: config.write_key,
            user_id: config.user_id,
            anonymous_id: Uuid::new_v4().to_string(),
            track_url,
            http: reqwest::Client::new(),
            context: ContextBuilder::new(env),
        })
    }

    /// Anonymous identifier attached to every envelope from this instance.
    pub fn anonymous_id(&self) -> &str {
        &self.anonymous_id
    }

    /// Resolved collector URL that track events are POSTed to.
    pub fn track_url(&self) -> &Url {
        &self.track_url
    }

    /// Track a single event. Builds a timestamped envelope, enriches it
    /// with fresh context, and issues one HTTP POST.
    ///
    /// Awaiting the returned future surfaces transport failures (including
    /// non-2xx responses) uninspected. Fire-and-forget callers that drop
    /// the future still get a `warn` log on delivery failure; the event
    /// itself is lost. No retry, timeout, or queueing happens here.
    pub async fn track(
        &self,
        event_name: impl Into<String>,
        properties: Option<EventProperties>,
    ) -> BeaconResult<()> {
        let envelope = self.envelope(event_name.into(), EventType::Track, properties);
        let body = serde_json::to_vec(&envelope)?;

        debug!(
            event = %envelope.event,
            anonymous_id = %self.anonymous_id,
            target = %self.track_url,
            "dispatching track event"
        );

        let delivery = self
            .http
            .post(self.track_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match delivery {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(event = %envelope.event, error = %err, "track event delivery failed");
                Err(err.into())
            }
        }
    }

    fn envelope(
        &self,
        event: String,
        event_type: EventType,
        properties: Option<EventProperties>,
    ) -> EventEnvelope {
        // One instant for both stamps: the SDK does not distinguish "event
        // occurred" from "event was sent".
        let now = Utc::now();
        EventEnvelope {
            event,
            event_type,
            anonymous_id: self.anonymous_id.clone(),
            user_id: self.user_id.clone(),
            properties,
            write_key: self.write_key.clone(),
            timestamp: now,
            sent_at: now,
            context: self.context.build(),
        }
    }
}
