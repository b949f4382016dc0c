//! DOM Helpers
//!
//! Element lookup and the `<select>` implementation of `ItemsSink`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

use crate::config::FilterConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::ItemOption;
use crate::sync::ItemsSink;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Find a `<select>` by id; anything else counts as absent
pub fn find_select(id: &str) -> Option<HtmlSelectElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlSelectElement>()
        .ok()
}

pub fn js_error(err: JsValue) -> SyncError {
    SyncError::Dom(format!("{:?}", err))
}

/// Items selector, looked up by id on every write
pub struct DomItemsSelect {
    element_id: String,
    refresh_select_box: bool,
}

impl DomItemsSelect {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            element_id: config.items_select_id.clone(),
            refresh_select_box: config.refresh_select_box,
        }
    }
}

impl ItemsSink for DomItemsSelect {
    fn replace_options(&self, options: &[ItemOption]) -> SyncResult<()> {
        let select = find_select(&self.element_id)
            .ok_or_else(|| SyncError::MissingElement(self.element_id.clone()))?;

        // Build off-document, then swap in one step
        let fragment = document()
            .ok_or_else(|| SyncError::Dom("no document".to_string()))?
            .create_document_fragment();
        for option in options {
            let element = HtmlOptionElement::new_with_text_and_value(&option.text, &option.id)
                .map_err(js_error)?;
            fragment.append_child(&element).map_err(js_error)?;
        }
        select.replace_children_with_node_1(&fragment).map_err(js_error)?;

        if self.refresh_select_box {
            refresh_select_box(&self.element_id);
        }
        Ok(())
    }
}

/// Rebuild Django admin's `SelectBox` cache (filter_horizontal widget) so
/// its filter input and move buttons see the new options.
fn refresh_select_box(element_id: &str) {
    let Some(window) = web_sys::window() else { return };
    let select_box = match js_sys::Reflect::get(&window, &JsValue::from_str("SelectBox")) {
        Ok(value) if value.is_object() => value,
        _ => return,
    };
    let Some(init) = js_sys::Reflect::get(&select_box, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        return;
    };

    if let Err(err) = init.call1(&select_box, &JsValue::from_str(element_id)) {
        log::warn!("SelectBox.init failed for #{}: {:?}", element_id, err);
    }
}
