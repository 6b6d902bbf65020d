//! Injected ambient-state provider — the single seam between the
//! enrichment pipeline and the host page.
//!
//! Context building reads location, document, and navigator state through
//! an [`Environment`] rather than touching globals, so embedders bind the
//! real host here and tests bind a fixed [`StaticEnvironment`].

/// Read-only view of the host page's ambient state. Every read is
/// best-effort and queried fresh on each context build; none can fail.
pub trait Environment: Send + Sync {
    /// Full address of the current page, including any fragment.
    fn current_url(&self) -> String;

    /// Raw query string of the current page, leading `?` included when
    /// present. Empty when the page has no query string.
    fn current_search(&self) -> String;

    /// Title of the current document.
    fn document_title(&self) -> String;

    /// Address of the document that linked here, empty when direct.
    fn document_referrer(&self) -> String;

    /// User agent string of the host.
    fn user_agent(&self) -> String;

    /// `href` values of the document's `rel="canonical"` link elements, in
    /// document order.
    fn canonical_link_hrefs(&self) -> Vec<String>;

    /// Legacy user-language field, when the host exposes one.
    fn preferred_locale(&self) -> Option<String>;

    /// Standard language field.
    fn language(&self) -> String;
}

/// Plain-struct [`Environment`] carrying a fixed snapshot. Serves as the
/// binding point for embedders that capture page state themselves, and as
/// the fixture for tests.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    pub url: String,
    pub search: String,
    pub title: String,
    pub referrer: String,
    pub user_agent: String,
    pub canonical_links: Vec<String>,
    pub preferred_locale: Option<String>,
    pub language: String,
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self {
            url: String::new(),
            search: String::new(),
            title: String::new(),
            referrer: String::new(),
            user_agent: String::new(),
            canonical_links: Vec::new(),
            preferred_locale: None,
            language: "en-US".to_string(),
        }
    }
}

impl Environment for StaticEnvironment {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn current_search(&self) -> String {
        self.search.clone()
    }

    fn document_title(&self) -> String {
        self.title.clone()
    }

    fn document_referrer(&self) -> String {
        self.referrer.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn canonical_link_hrefs(&self) -> Vec<String> {
        self.canonical_links.clone()
    }

    fn preferred_locale(&self) -> Option<String> {
        self.preferred_locale.clone()
    }

    fn language(&self) -> String {
        self.language.clone()
    }
}
