//! Category → Items Sync
//!
//! Reacts to category changes by fetching the category's items and
//! replacing the options of the items selector.
//!
//! The fetch and the selector are traits so the browser bindings
//! (`gloo-net`, `web-sys`) stay out of the core.

use std::cell::Cell;

use async_trait::async_trait;

use crate::config::{FilterConfig, StalePolicy};
use crate::error::{SyncError, SyncResult};
use crate::models::{CategoryId, ItemOption};

/// Async source of item options for a category
#[async_trait(?Send)]
pub trait ItemSource {
    async fn fetch_items(&self, category: &CategoryId) -> SyncResult<Vec<ItemOption>>;
}

/// Selector whose options get replaced
pub trait ItemsSink {
    /// Replace every option with `options`, in order.
    /// On error the selector must be left as it was.
    fn replace_options(&self, options: &[ItemOption]) -> SyncResult<()>;
}

/// Token identifying one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonic request counter
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn issue(&self) -> RequestToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestToken(next)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest.get()
    }
}

/// Result of handling one change notification
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Empty selection; nothing fetched, selector untouched
    Skipped,
    /// Selector now holds `count` options for `category`
    Applied { category: CategoryId, count: usize },
    /// Response arrived after a newer request and was dropped
    Discarded { category: CategoryId },
    /// Fetch, decode, or DOM update failed; selector untouched
    Failed { category: CategoryId, error: SyncError },
}

pub struct CategoryItemSync<S, K> {
    source: S,
    sink: K,
    policy: StalePolicy,
    requests: RequestTracker,
}

impl<S, K> CategoryItemSync<S, K>
where
    S: ItemSource,
    K: ItemsSink,
{
    pub fn new(source: S, sink: K, policy: StalePolicy) -> Self {
        Self {
            source,
            sink,
            policy,
            requests: RequestTracker::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Handle a change of the category selector to `raw`.
    pub async fn handle_change(&self, raw: &str) -> SyncOutcome {
        let Some(category) = CategoryId::parse(raw) else {
            // Clearing still supersedes any fetch in flight
            self.requests.issue();
            log::debug!("Category cleared, leaving items untouched");
            return SyncOutcome::Skipped;
        };

        let token = self.requests.issue();
        log::debug!("Fetching items for category {} ({:?})", category, token);

        let options = match self.source.fetch_items(&category).await {
            Ok(options) => options,
            Err(error) => {
                log::warn!("Failed to load items for category {}: {}", category, error);
                return SyncOutcome::Failed { category, error };
            }
        };

        if self.policy == StalePolicy::LatestRequest && !self.requests.is_latest(token) {
            log::debug!("Dropping stale items for category {} ({:?})", category, token);
            return SyncOutcome::Discarded { category };
        }

        match self.sink.replace_options(&options) {
            Ok(()) => {
                log::info!("Loaded {} items for category {}", options.len(), category);
                SyncOutcome::Applied { category, count: options.len() }
            }
            Err(error) => {
                log::warn!("Failed to show items for category {}: {}", category, error);
                SyncOutcome::Failed { category, error }
            }
        }
    }
}

/// A category selector with the sync bound to it
pub struct Prepared<E, S, K> {
    pub category_select: E,
    pub config: FilterConfig,
    pub sync: CategoryItemSync<S, K>,
}

/// Find the category selector, apply its `data-*` overrides and build the
/// sync. Returns `None` before `build` runs when the page has no selector,
/// so such a page never gets an item source.
pub fn prepare<E, S, K, F, A, B>(
    mut config: FilterConfig,
    find_category: F,
    attribute: A,
    build: B,
) -> Option<Prepared<E, S, K>>
where
    S: ItemSource,
    K: ItemsSink,
    F: FnOnce(&str) -> Option<E>,
    A: Fn(&E, &str) -> Option<String>,
    B: FnOnce(&FilterConfig) -> (S, K),
{
    let Some(category_select) = find_category(&config.category_select_id) else {
        log::debug!("No #{} on this page, category filter disabled", config.category_select_id);
        return None;
    };
    config.apply_overrides(|name| attribute(&category_select, name));

    let (source, sink) = build(&config);
    let sync = CategoryItemSync::new(source, sink, config.stale_policy);
    Some(Prepared {
        category_select,
        config,
        sync,
    })
}
