//! Filter Configuration
//!
//! Element ids, endpoint, and behavior switches. JS callers may pass a
//! partial camelCase object; missing fields fall back to the admin defaults.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use crate::models::CategoryId;

/// Characters left unescaped in the query value (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Attribute on the category selector that overrides the endpoint
pub const ENDPOINT_ATTR: &str = "data-items-url";
/// Attribute on the category selector that overrides the items selector id
pub const TARGET_ATTR: &str = "data-items-target";

/// What to do with a response that arrives after a newer request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StalePolicy {
    /// Apply responses as they complete; a late stale response wins
    #[default]
    CompletionOrder,
    /// Drop any response whose request is no longer the latest
    LatestRequest,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub category_select_id: String,
    pub items_select_id: String,
    pub endpoint: String,
    pub query_param: String,
    pub stale_policy: StalePolicy,
    /// Rebuild Django's `SelectBox` cache after replacing options
    pub refresh_select_box: bool,
    /// `log` level name for console output
    pub log_level: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            category_select_id: "id_category".to_string(),
            items_select_id: "id_items_from".to_string(),
            endpoint: "/admin/get-items-by-category/".to_string(),
            query_param: "category_id".to_string(),
            stale_policy: StalePolicy::default(),
            refresh_select_box: true,
            log_level: "warn".to_string(),
        }
    }
}

impl FilterConfig {
    /// Request URL for a category
    pub fn items_url(&self, category: &CategoryId) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.endpoint,
            separator,
            utf8_percent_encode(&self.query_param, QUERY_VALUE),
            utf8_percent_encode(category.as_str(), QUERY_VALUE),
        )
    }

    /// Apply `data-*` overrides read from the category selector.
    /// Empty attribute values are ignored.
    pub fn apply_overrides<F>(&mut self, attribute: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| attribute(name).filter(|v| !v.trim().is_empty());
        if let Some(endpoint) = non_empty(ENDPOINT_ATTR) {
            self.endpoint = endpoint;
        }
        if let Some(target) = non_empty(TARGET_ATTR) {
            self.items_select_id = target;
        }
    }

    /// Parsed log level; unknown names fall back to `Warn`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
