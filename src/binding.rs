//! Filter Lifecycle
//!
//! Attaches the category `change` listener and removes it again.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlSelectElement};

use crate::config::FilterConfig;
use crate::dom::{self, DomItemsSelect};
use crate::http::HttpItemSource;
use crate::logging;
use crate::sync::{prepare, Prepared};

/// Live listener on a category selector; dropping it detaches
pub struct Binding {
    select: HtmlSelectElement,
    listener: Closure<dyn FnMut(Event)>,
}

impl Binding {
    pub fn detach(self) {}
}

impl Drop for Binding {
    fn drop(&mut self) {
        let _ = self
            .select
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
        log::debug!("Category filter detached from #{}", self.select.id());
    }
}

/// Bind the filter to the page. Returns `None` when the page has no
/// category selector, in which case nothing is ever fetched.
pub fn attach(config: FilterConfig) -> Option<Binding> {
    let Prepared {
        category_select,
        config,
        sync,
    } = prepare(
        config,
        dom::find_select,
        |select: &HtmlSelectElement, name| select.get_attribute(name),
        |config| (HttpItemSource::new(config), DomItemsSelect::new(config)),
    )?;
    let sync = Rc::new(sync);

    let target = category_select.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        let value = target.value();
        let sync = sync.clone();
        spawn_local(async move {
            sync.handle_change(&value).await;
        });
    });

    if let Err(err) = category_select
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
    {
        log::error!("Failed to listen on #{}: {:?}", config.category_select_id, err);
        return None;
    }

    log::info!(
        "Category filter attached: #{} -> #{} via {}",
        config.category_select_id,
        config.items_select_id,
        config.endpoint
    );
    Some(Binding {
        select: category_select,
        listener,
    })
}

/// Run `f` once the document has parsed
pub fn on_document_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = dom::document() else { return };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", err);
    }
}

// ========================
// Page-wide binding (JS API)
// ========================

thread_local! {
    static ACTIVE: RefCell<Option<Binding>> = const { RefCell::new(None) };
}

/// Replace the page-wide binding. There is at most one per page, so the
/// start-up binding and a mounted `CategoryItemFilter` never both listen.
pub fn install(config: FilterConfig) -> bool {
    ACTIVE.with(|slot| slot.borrow_mut().take());
    logging::init(config.level_filter());
    let binding = attach(config);
    let attached = binding.is_some();
    ACTIVE.with(|slot| *slot.borrow_mut() = binding);
    attached
}

/// Attach with the admin defaults
#[wasm_bindgen(js_name = attach)]
pub fn attach_default() -> bool {
    install(FilterConfig::default())
}

/// Attach with a (partial) options object
#[wasm_bindgen(js_name = attachWithOptions)]
pub fn attach_with_options(options: JsValue) -> Result<bool, JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        FilterConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    Ok(install(config))
}

/// Remove the page-wide binding; `false` when there was none
#[wasm_bindgen]
pub fn detach() -> bool {
    ACTIVE.with(|slot| slot.borrow_mut().take()).is_some()
}
