//! Canonical page identity — resolves the page's authoritative URL and
//! path, preferring an explicit `rel="canonical"` link over the address
//! bar, and assembles the [`PageContext`] snapshot.

use beacon_core::PageContext;
use url::Url;

use crate::environment::Environment;

/// The page's designated canonical href, when one exists. With multiple
/// canonical links the last one wins; an empty href counts as absent.
fn canonical(env: &dyn Environment) -> Option<String> {
    env.canonical_link_hrefs()
        .into_iter()
        .last()
        .filter(|href| !href.is_empty())
}

/// Canonical URL for the page, with the given `search` appended when the
/// canonical href has no query of its own. Without a canonical link, falls
/// back to the current address with any fragment truncated.
pub fn canonical_url(env: &dyn Environment, search: &str) -> String {
    if let Some(canon) = canonical(env) {
        if canon.contains('?') {
            return canon;
        }
        return format!("{canon}{search}");
    }

    let url = env.current_url();
    match url.find('#') {
        Some(i) => url[..i].to_string(),
        None => url,
    }
}

/// Canonical path for the page. Without a canonical link, falls back to
/// the current address's path.
pub fn canonical_path(env: &dyn Environment) -> String {
    let Some(canon) = canonical(env) else {
        return current_path(env);
    };

    // Relative hrefs resolve against the current address, the way the
    // host would resolve them.
    let parsed = Url::parse(&canon)
        .or_else(|_| Url::parse(&env.current_url()).and_then(|base| base.join(&canon)));

    match parsed {
        Ok(resolved) => ensure_leading_slash(resolved.path()),
        Err(_) => {
            // Unresolvable href: keep only its path portion.
            let end = canon.find(['?', '#']).unwrap_or(canon.len());
            ensure_leading_slash(&canon[..end])
        }
    }
}

/// Some environments yield paths without a leading `/`; normalize so the
/// collector always sees rooted paths.
fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn current_path(env: &dyn Environment) -> String {
    Url::parse(&env.current_url())
        .map(|url| url.path().to_string())
        .unwrap_or_else(|_| "/".to_string())
}

/// Snapshot of the current page for `context.page`. Pure function of
/// ambient state at call time; navigation requires a fresh build.
pub fn page_context(env: &dyn Environment) -> PageContext {
    let search = env.current_search();
    PageContext {
        path: canonical_path(env),
        referrer: env.document_referrer(),
        search: search.clone(),
        title: env.document_title(),
        url: canonical_url(env, &search),
    }
}
