//! Core wire contract for the Beacon event-telemetry SDK — the envelope
//! posted to the collection endpoint, the context records nested inside it,
//! and the shared error type.

pub mod error;
pub mod types;

pub use error::{BeaconError, BeaconResult};
pub use types::{
    CampaignAttribution, EventEnvelope, EventProperties, EventType, ExecutionContext, LibraryInfo,
    PageContext, ReferrerInfo,
};
