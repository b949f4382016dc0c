//! Browser tests for the DOM bindings.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use lot_item_filter::{attach, detach, install, DomItemsSelect, FilterConfig, ItemOption, ItemsSink, SyncError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make_select(id: &str, options: &[(&str, &str)]) -> HtmlSelectElement {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let select: HtmlSelectElement = doc.create_element("select").unwrap().dyn_into().unwrap();
    select.set_id(id);
    for (value, text) in options {
        let option = HtmlOptionElement::new_with_text_and_value(text, value).unwrap();
        select.append_child(&option).unwrap();
    }
    doc.body().unwrap().append_child(&select).unwrap();
    select
}

fn options_of(select: &HtmlSelectElement) -> Vec<(String, String)> {
    (0..select.length())
        .filter_map(|i| select.item(i))
        .map(|el| {
            let option: HtmlOptionElement = el.dyn_into().unwrap();
            (option.value(), option.text())
        })
        .collect()
}

fn items_config(items_id: &str, refresh_select_box: bool) -> FilterConfig {
    FilterConfig {
        items_select_id: items_id.to_string(),
        refresh_select_box,
        ..Default::default()
    }
}

#[wasm_bindgen_test]
fn test_replace_options_swaps_whole_list() {
    let select = make_select("id_items_swap", &[("99", "Old item")]);
    let sink = DomItemsSelect::new(&items_config("id_items_swap", false));

    sink.replace_options(&[ItemOption::new("1", "Widget"), ItemOption::new("2", "Gadget")])
        .unwrap();

    assert_eq!(
        options_of(&select),
        vec![
            ("1".to_string(), "Widget".to_string()),
            ("2".to_string(), "Gadget".to_string()),
        ]
    );
}

#[wasm_bindgen_test]
fn test_replace_options_with_empty_list_clears() {
    let select = make_select("id_items_clear", &[("99", "Old item")]);
    let sink = DomItemsSelect::new(&items_config("id_items_clear", false));

    sink.replace_options(&[]).unwrap();

    assert!(options_of(&select).is_empty());
}

#[wasm_bindgen_test]
fn test_missing_items_select_is_reported() {
    let sink = DomItemsSelect::new(&items_config("id_items_absent", false));

    assert_eq!(
        sink.replace_options(&[ItemOption::new("1", "Widget")]),
        Err(SyncError::MissingElement("id_items_absent".to_string()))
    );
}

#[wasm_bindgen_test]
fn test_select_box_cache_is_rebuilt() {
    let window = web_sys::window().unwrap();
    let select_box = js_sys::Object::new();
    let init = js_sys::Function::new_with_args("id", "this.initialized = id;");
    js_sys::Reflect::set(&select_box, &JsValue::from_str("init"), &init).unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("SelectBox"), &select_box).unwrap();

    make_select("id_items_cached", &[]);
    let sink = DomItemsSelect::new(&items_config("id_items_cached", true));
    sink.replace_options(&[ItemOption::new("1", "Widget")]).unwrap();

    let initialized = js_sys::Reflect::get(&select_box, &JsValue::from_str("initialized")).unwrap();
    js_sys::Reflect::delete_property(&window, &JsValue::from_str("SelectBox")).unwrap();
    assert_eq!(initialized.as_string().as_deref(), Some("id_items_cached"));
}

#[wasm_bindgen_test]
fn test_attach_without_category_select_is_noop() {
    let config = FilterConfig {
        category_select_id: "id_category_absent".to_string(),
        ..Default::default()
    };

    assert!(attach(config).is_none());
}

#[wasm_bindgen_test]
fn test_attach_binds_existing_category_select() {
    make_select("id_category_bound", &[("", "---------"), ("5", "Furniture")]);
    let config = FilterConfig {
        category_select_id: "id_category_bound".to_string(),
        ..Default::default()
    };

    let binding = attach(config);

    assert!(binding.is_some());
    binding.unwrap().detach();
}

#[wasm_bindgen_test]
fn test_install_keeps_one_binding_per_page() {
    make_select("id_category_page", &[("", "---------"), ("5", "Furniture")]);
    let config = FilterConfig {
        category_select_id: "id_category_page".to_string(),
        ..Default::default()
    };

    // Start-up binding, then a mounted component taking over
    assert!(install(config.clone()));
    assert!(install(config));

    assert!(detach());
    assert!(!detach());
}
