//! Wire types for the collection endpoint — the event envelope and the
//! enrichment context nested inside it. Field names follow the collector's
//! JSON contract (camelCase, optional fields omitted rather than null).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arbitrary JSON properties supplied by the caller with each event.
pub type EventProperties = HashMap<String, serde_json::Value>;

/// Event category on the wire. Only `Track` is emitted by this SDK; the
/// collector's contract also enumerates page and screen events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Track,
    Page,
    Screen,
}

/// UTM campaign attribution parsed from the page's query string.
///
/// `utm_campaign` surfaces as `name`; fields missing from the query string
/// are absent, not empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignAttribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CampaignAttribution {
    /// True when no UTM parameter was present in the query string.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.term.is_none()
            && self.source.is_none()
            && self.medium.is_none()
            && self.content.is_none()
    }
}

/// Snapshot of the current page, taken at envelope-construction time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContext {
    pub path: String,
    pub referrer: String,
    pub search: String,
    pub title: String,
    pub url: String,
}

/// Identity of the emitting library, reported under `context.library`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
}

/// Referral metadata. Reserved in the wire contract; this SDK always emits
/// it as an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferrerInfo {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub referrer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Ambient enrichment attached to every envelope: locale, page snapshot,
/// user agent, library identity, and campaign attribution.
///
/// `extra` carries forward-compatible fields the core contract does not
/// model; they are flattened into the context object on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionContext {
    pub locale: String,
    pub page: PageContext,
    pub user_agent: String,
    pub library: LibraryInfo,
    pub campaign: CampaignAttribution,
    pub referrer: ReferrerInfo,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// The complete event record POSTed to the collection endpoint. Built once
/// per `track()` call, transmitted, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub event: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub anonymous_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<EventProperties>,
    pub write_key: String,
    /// When the event occurred. Stamped together with `sent_at` at
    /// construction; this SDK does not distinguish the two instants.
    pub timestamp: DateTime<Utc>,
    pub sent_at: DateTime<Utc>,
    pub context: ExecutionContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> ExecutionContext {
        ExecutionContext {
            locale: "en-US".into(),
            page: PageContext {
                path: "/pricing".into(),
                referrer: "https://news.example.com".into(),
                search: "?utm_source=newsletter".into(),
                title: "Pricing".into(),
                url: "https://example.com/pricing?utm_source=newsletter".into(),
            },
            user_agent: "Mozilla/5.0".into(),
            library: LibraryInfo {
                name: "beacon".into(),
                version: "0.1.0".into(),
            },
            campaign: CampaignAttribution {
                source: Some("newsletter".into()),
                ..Default::default()
            },
            referrer: ReferrerInfo::default(),
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_envelope_wire_field_names() {
        let envelope = EventEnvelope {
            event: "signup".into(),
            event_type: EventType::Track,
            anonymous_id: "anon-1".into(),
            user_id: Some("u-1".into()),
            properties: None,
            write_key: "wk-test".into(),
            timestamp: Utc::now(),
            sent_at: Utc::now(),
            context: sample_context(),
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["type"], "track");
        assert_eq!(value["anonymousId"], "anon-1");
        assert_eq!(value["userId"], "u-1");
        assert_eq!(value["writeKey"], "wk-test");
        assert!(value.get("sentAt").is_some());
        assert_eq!(value["context"]["userAgent"], "Mozilla/5.0");
        assert_eq!(value["context"]["campaign"]["source"], "newsletter");
        // Absent properties are omitted, not null.
        assert!(value.get("properties").is_none());
    }

    #[test]
    fn test_absent_user_id_is_omitted() {
        let envelope = EventEnvelope {
            event: "signup".into(),
            event_type: EventType::Track,
            anonymous_id: "anon-1".into(),
            user_id: None,
            properties: None,
            write_key: "wk-test".into(),
            timestamp: Utc::now(),
            sent_at: Utc::now(),
            context: sample_context(),
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.get("userId").is_none());
    }

    #[test]
    fn test_reserved_referrer_serializes_as_empty_object() {
        let value = serde_json::to_value(ReferrerInfo::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_campaign_absent_fields_are_omitted() {
        let campaign = CampaignAttribution {
            source: Some("foo".into()),
            medium: Some("bar".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&campaign).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"source": "foo", "medium": "bar"})
        );
        assert!(!campaign.is_empty());
        assert!(CampaignAttribution::default().is_empty());
    }

    #[test]
    fn test_context_extra_fields_flatten() {
        let mut context = sample_context();
        context
            .extra
            .insert("timezone".into(), serde_json::json!("UTC"));
        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["timezone"], "UTC");

        let parsed: ExecutionContext = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.extra["timezone"], serde_json::json!("UTC"));
    }

    #[test]
    fn test_envelope_round_trip() {
        let envelope = EventEnvelope {
            event: "purchase".into(),
            event_type: EventType::Track,
            anonymous_id: "anon-2".into(),
            user_id: None,
            properties: Some(HashMap::from([(
                "plan".to_string(),
                serde_json::json!("pro"),
            )])),
            write_key: "wk-test".into(),
            timestamp: Utc::now(),
            sent_at: Utc::now(),
            context: sample_context(),
        };

        let json = serde_json::to_string(&envelope).unwrap();
        let parsed: EventEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.event, "purchase");
        assert_eq!(parsed.event_type, EventType::Track);
        assert_eq!(parsed.properties.unwrap()["plan"], serde_json::json!("pro"));
    }
}
