//! Item Endpoint Client
//!
//! Fetches a category's items from the admin endpoint with `gloo-net`.
//! Authentication rides on the browser session (same-origin cookies).

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::FilterConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::{decode_items, CategoryId, ItemOption};
use crate::sync::ItemSource;

pub struct HttpItemSource {
    config: FilterConfig,
}

impl HttpItemSource {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ItemSource for HttpItemSource {
    async fn fetch_items(&self, category: &CategoryId) -> SyncResult<Vec<ItemOption>> {
        let url = self.config.items_url(category);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SyncError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        decode_items(&body)
    }
}
