//! Category Item Filter Component
//!
//! Leptos wrapper: takes over the page-wide binding after mount and
//! releases it on cleanup.

use leptos::prelude::*;

use crate::binding::{detach, install};
use crate::config::FilterConfig;

/// Binds the filter to selectors rendered elsewhere on the page.
/// Renders nothing itself.
#[component]
pub fn CategoryItemFilter(#[prop(optional)] config: Option<FilterConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    // Effects run after mount, so sibling selectors exist by now
    Effect::new(move |_| {
        install(config.clone());
    });

    on_cleanup(|| {
        detach();
    });
}
