//! Parameter name prefixing

use serde::{Deserialize, Serialize};

/// Query key carrying the 1-based page number
pub const CURRENT_PAGE_PARAM: &str = "currentPage";

/// Query key carrying the token for the current fetch
pub const PAGE_TOKEN_PARAM: &str = "pageToken";

/// Query key carrying the JSON token history
pub const TOKEN_HISTORY_PARAM: &str = "tokenHistory";

/// Query key carrying the page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Prefix convention isolating one pager's query keys from another's
///
/// `"products"` turns `pageToken` into `products_pageToken`. A missing,
/// empty, or whitespace-only prefix leaves names unchanged. Uniqueness of
/// prefixes across pagers is the caller's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct ParameterNamespace {
    prefix: Option<String>,
}

impl ParameterNamespace {
    /// Create a namespace from an optional prefix
    pub fn new(prefix: Option<&str>) -> Self {
        let prefix = prefix
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        Self { prefix }
    }

    /// Namespace with a prefix
    pub fn prefixed(prefix: &str) -> Self {
        Self::new(Some(prefix))
    }

    /// Namespace without a prefix
    pub fn none() -> Self {
        Self::default()
    }

    /// The effective prefix
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Apply the prefix to a base parameter name
    pub fn name(&self, param: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}_{param}"),
            None => param.to_string(),
        }
    }

    /// Prefixed `currentPage`
    pub fn current_page(&self) -> String {
        self.name(CURRENT_PAGE_PARAM)
    }

    /// Prefixed `pageToken`
    pub fn page_token(&self) -> String {
        self.name(PAGE_TOKEN_PARAM)
    }

    /// Prefixed `tokenHistory`
    pub fn token_history(&self) -> String {
        self.name(TOKEN_HISTORY_PARAM)
    }

    /// Prefixed `pageSize`
    pub fn page_size(&self) -> String {
        self.name(PAGE_SIZE_PARAM)
    }

    /// Check whether `key` is one of this pager's own parameters
    pub fn owns(&self, key: &str) -> bool {
        [
            CURRENT_PAGE_PARAM,
            PAGE_TOKEN_PARAM,
            TOKEN_HISTORY_PARAM,
            PAGE_SIZE_PARAM,
        ]
        .iter()
        .any(|param| self.name(param) == key)
    }
}

impl From<Option<String>> for ParameterNamespace {
    fn from(prefix: Option<String>) -> Self {
        Self::new(prefix.as_deref())
    }
}

impl From<ParameterNamespace> for Option<String> {
    fn from(namespace: ParameterNamespace) -> Self {
        namespace.prefix
    }
}
