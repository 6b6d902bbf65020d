//! Execution-context assembly — composes locale, page snapshot, user
//! agent, library identity, and campaign attribution into the enrichment
//! record attached to every envelope.

use std::collections::HashMap;
use std::sync::Arc;

use beacon_core::{ExecutionContext, LibraryInfo, ReferrerInfo};

use crate::campaign;
use crate::environment::Environment;
use crate::page;

/// Name reported under `context.library.name`.
pub const LIBRARY_NAME: &str = "beacon";

/// Builds a fresh [`ExecutionContext`] on every dispatch. Holds the
/// injected environment and the library identity; the build-time version
/// is an explicit constructor input rather than a free global.
pub struct ContextBuilder {
    env: Arc<dyn Environment>,
    library: LibraryInfo,
}

impl ContextBuilder {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self::with_library(
            env,
            LibraryInfo {
                name: LIBRARY_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        )
    }

    pub fn with_library(env: Arc<dyn Environment>, library: LibraryInfo) -> Self {
        Self { env, library }
    }

    /// Compose the enrichment record from current ambient state. Every
    /// read is best-effort; there are no error paths. `referrer` is
    /// deliberately emitted empty (deferred functionality).
    pub fn build(&self) -> ExecutionContext {
        let env = self.env.as_ref();
        ExecutionContext {
            locale: env.preferred_locale().unwrap_or_else(|| env.language()),
            page: page::page_context(env),
            user_agent: env.user_agent(),
            library: self.library.clone(),
            campaign: campaign::parse(&env.current_search()),
            referrer: ReferrerInfo::default(),
            extra: HashMap::new(),
        }
    }
}
