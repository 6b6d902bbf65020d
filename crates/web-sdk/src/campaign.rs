//! Campaign attribution — extracts UTM-style parameters from a query
//! string into a fixed-shape [`CampaignAttribution`] record.

use beacon_core::CampaignAttribution;
use percent_encoding::percent_decode_str;

/// Parse UTM campaign parameters out of a raw query string.
///
/// Accepts the string with or without its leading `?`. Keys must carry a
/// non-empty suffix after the `utm_` prefix; `utm_campaign` surfaces as
/// `name`. When a key repeats, the last occurrence wins. Keys outside the
/// five known attributes are dropped.
pub fn parse(query: &str) -> CampaignAttribution {
    let query = query.strip_prefix('?').unwrap_or(query);
    // Malformed strings sometimes carry embedded '?' separators.
    let query = query.replace('?', "&");

    let mut campaign = CampaignAttribution::default();
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if !key.contains("utm_") || key.chars().count() <= 4 {
            continue;
        }
        let attribute: String = key.chars().skip(4).collect();
        let attribute = if attribute == "campaign" {
            "name".to_string()
        } else {
            attribute
        };

        let decoded = Some(graceful_decode(value));
        match attribute.as_str() {
            "name" => campaign.name = decoded,
            "term" => campaign.term = decoded,
            "source" => campaign.source = decoded,
            "medium" => campaign.medium = decoded,
            "content" => campaign.content = decoded,
            _ => {}
        }
    }
    campaign
}

/// Percent-decode a query-string value, treating literal `+` as a space.
///
/// Decoding is best-effort: a malformed escape or unescaped bytes that are
/// not valid UTF-8 return the original value unchanged, literal `+`
/// included.
fn graceful_decode(value: &str) -> String {
    if !escapes_are_valid(value) {
        return value.to_string();
    }
    let spaced = value.replace('+', " ");
    match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}

/// Every `%` must introduce exactly two hex digits.
fn escapes_are_valid(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_and_medium() {
        let campaign = parse("?utm_source=foo&utm_medium=bar");
        assert_eq!(campaign.source.as_deref(), Some("foo"));
        assert_eq!(campaign.medium.as_deref(), Some("bar"));
        assert!(campaign.name.is_none());
        assert!(campaign.term.is_none());
        assert!(campaign.content.is_none());
    }

    #[test]
    fn test_utm_campaign_surfaces_as_name() {
        let campaign = parse("utm_campaign=spring_sale");
        assert_eq!(campaign.name.as_deref(), Some("spring_sale"));
    }

    #[test]
    fn test_empty_query_yields_all_absent() {
        assert!(parse("").is_empty());
        assert!(parse("?").is_empty());
    }

    #[test]
    fn test_non_utm_keys_are_dropped() {
        let campaign = parse("?page=2&ref=home&q=utms");
        assert!(campaign.is_empty());
    }

    #[test]
    fn test_bare_utm_prefix_is_dropped() {
        assert!(parse("utm_=x").is_empty());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let campaign = parse("utm_source=first&utm_source=second");
        assert_eq!(campaign.source.as_deref(), Some("second"));
    }

    #[test]
    fn test_embedded_question_mark_normalized() {
        let campaign = parse("?utm_source=foo?utm_medium=bar");
        assert_eq!(campaign.source.as_deref(), Some("foo"));
        assert_eq!(campaign.medium.as_deref(), Some("bar"));
    }

    #[test]
    fn test_missing_value_defaults_to_empty() {
        let campaign = parse("utm_term");
        assert_eq!(campaign.term.as_deref(), Some(""));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let campaign = parse("utm_source=a+b");
        assert_eq!(campaign.source.as_deref(), Some("a b"));
    }

    #[test]
    fn test_percent_escape_decodes() {
        // '+' substitution happens before unescaping, so an escaped plus
        // survives as a literal plus.
        let campaign = parse("utm_source=a%2Bb");
        assert_eq!(campaign.source.as_deref(), Some("a+b"));

        let campaign = parse("utm_content=50%25+off");
        assert_eq!(campaign.content.as_deref(), Some("50% off"));
    }

    #[test]
    fn test_malformed_escape_falls_back_to_raw() {
        let campaign = parse("utm_source=%");
        assert_eq!(campaign.source.as_deref(), Some("%"));

        let campaign = parse("utm_source=%2");
        assert_eq!(campaign.source.as_deref(), Some("%2"));

        let campaign = parse("utm_source=%zz");
        assert_eq!(campaign.source.as_deref(), Some("%zz"));

        // Valid-looking escape that unescapes to invalid UTF-8.
        let campaign = parse("utm_source=%FF%FE");
        assert_eq!(campaign.source.as_deref(), Some("%FF%FE"));
    }

    #[test]
    fn test_malformed_escape_keeps_literal_plus() {
        // The '+' substitution must not leak into a value returned raw.
        let campaign = parse("utm_source=%+x");
        assert_eq!(campaign.source.as_deref(), Some("%+x"));
    }

    #[test]
    fn test_unknown_utm_suffix_is_dropped() {
        let campaign = parse("utm_id=abc123&utm_source=foo");
        assert_eq!(campaign.source.as_deref(), Some("foo"));
        assert!(campaign.name.is_none());
    }
}
