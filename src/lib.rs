//! Lot Item Filter
//!
//! Keeps the lot form's item picker in step with its category:
//! choosing a category fetches that category's items and replaces
//! the options of the items selector.
//!
//! Layers:
//! - models / config / error: plain data, no browser types
//! - sync: the change → fetch → replace flow, generic over its seams
//! - http / dom / binding / component / logging: browser bindings (wasm32 only)

mod config;
mod error;
mod models;
mod sync;

#[cfg(target_arch = "wasm32")]
mod binding;
#[cfg(target_arch = "wasm32")]
mod component;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod http;
#[cfg(target_arch = "wasm32")]
mod logging;

pub use config::{FilterConfig, StalePolicy, ENDPOINT_ATTR, TARGET_ATTR};
pub use error::{SyncError, SyncResult};
pub use models::{decode_items, CategoryId, ItemOption};
pub use sync::{prepare, CategoryItemSync, ItemSource, ItemsSink, Prepared, RequestToken, RequestTracker, SyncOutcome};

#[cfg(target_arch = "wasm32")]
pub use binding::{attach, attach_default, attach_with_options, detach, install, on_document_ready, Binding};
#[cfg(target_arch = "wasm32")]
pub use component::CategoryItemFilter;
#[cfg(target_arch = "wasm32")]
pub use dom::DomItemsSelect;
#[cfg(target_arch = "wasm32")]
pub use http::HttpItemSource;

/// Module entry: bind with the admin defaults once the page has parsed
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = leptos::task::Executor::init_wasm_bindgen();
    on_document_ready(|| {
        install(FilterConfig::default());
    });
}
