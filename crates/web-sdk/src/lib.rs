//! Beacon web SDK — browser-side event telemetry. Captures a single
//! `track(name, properties)` call, enriches it with ambient page, user,
//! and campaign-attribution context, and POSTs it as a JSON envelope to
//! the collection endpoint.
//!
//! # Modules
//!
//! - [`environment`] — injected provider of ambient page state
//! - [`campaign`] — UTM campaign-attribution parsing
//! - [`page`] — canonical URL/path resolution and the page snapshot
//! - [`context`] — execution-context assembly
//! - [`config`] / [`dispatcher`] — dispatcher configuration and the
//!   public `track` entry point
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use beacon_web_sdk::{DispatcherConfig, EventDispatcher, StaticEnvironment};
//!
//! # async fn run() -> beacon_core::BeaconResult<()> {
//! let env = Arc::new(StaticEnvironment {
//!     url: "https://example.com/pricing?utm_source=ads".into(),
//!     search: "?utm_source=ads".into(),
//!     title: "Pricing".into(),
//!     ..Default::default()
//! });
//!
//! let dispatcher = EventDispatcher::new(DispatcherConfig::new("wk-123"), env)?;
//! dispatcher.track("signup", None).await?;
//! # Ok(())
//! # }
//! ```

pub mod campaign;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod environment;
pub mod page;

pub use config::{DispatcherConfig, DEFAULT_INGEST_HOST, TRACK_ENDPOINT_PATH};
pub use context::ContextBuilder;
pub use dispatcher::EventDispatcher;
pub use environment::{Environment, StaticEnvironment};

pub use beacon_core::{
    BeaconError, BeaconResult, CampaignAttribution, EventEnvelope, EventProperties, EventType,
    ExecutionContext, LibraryInfo, PageContext, ReferrerInfo,
};
