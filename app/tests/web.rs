//! Browser tests for the code that touches the real document.
//!
//! Run with: wasm-pack test --headless --chrome app

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use muslink::components::{document_event, DropdownEvent};
use muslink::document::{DocumentEffects, DomDocument};
use muslink::i18n::Locale;
use muslink::theme::Theme;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    gloo::utils::document()
}

fn theme_meta(doc: &Document) -> Element {
    if let Some(meta) = doc.query_selector("meta[name=\"theme-color\"]").unwrap() {
        return meta;
    }
    let meta = doc.create_element("meta").unwrap();
    meta.set_attribute("name", "theme-color").unwrap();
    doc.body().unwrap().append_child(&meta).unwrap();
    meta
}

fn theme_classes(doc: &Document) -> Vec<String> {
    let classes = doc.document_element().unwrap().class_list();
    ["light", "dark"]
        .into_iter()
        .filter(|c| classes.contains(c))
        .map(str::to_string)
        .collect()
}

fn bubbling(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn theme_class_and_meta_follow_each_switch() {
    let doc = document();
    let meta = theme_meta(&doc);

    DomDocument.apply_theme(Theme::Light);
    assert_eq!(theme_classes(&doc), vec!["light"]);
    assert_eq!(meta.get_attribute("content").as_deref(), Some("#ffffff"));

    DomDocument.apply_theme(Theme::Dark);
    assert_eq!(theme_classes(&doc), vec!["dark"]);
    assert_eq!(meta.get_attribute("content").as_deref(), Some("#0a0a0a"));
}

#[wasm_bindgen_test]
fn language_sets_html_lang() {
    let doc = document();
    DomDocument.apply_language(Locale::Ru);
    let root = doc.document_element().unwrap();
    assert_eq!(root.get_attribute("lang").as_deref(), Some("ru"));
    DomDocument.apply_language(Locale::Es);
    assert_eq!(root.get_attribute("lang").as_deref(), Some("es"));
}

#[wasm_bindgen_test]
fn pointer_down_closes_only_from_outside() {
    let doc = document();
    let body = doc.body().unwrap();
    let root = doc.create_element("div").unwrap();
    let inside = doc.create_element("button").unwrap();
    let outside = doc.create_element("div").unwrap();
    root.append_child(&inside).unwrap();
    body.append_child(&root).unwrap();
    body.append_child(&outside).unwrap();

    let seen: Rc<Cell<Option<Option<DropdownEvent>>>> = Rc::new(Cell::new(None));
    let _listener = {
        let seen = seen.clone();
        let root = root.clone();
        EventListener::new(&doc, "mousedown", move |event| {
            seen.set(Some(document_event(&root, event)));
        })
    };

    inside.dispatch_event(&bubbling("mousedown")).unwrap();
    assert_eq!(seen.get(), Some(None));

    outside.dispatch_event(&bubbling("mousedown")).unwrap();
    assert_eq!(seen.get(), Some(Some(DropdownEvent::PointerDownOutside)));

    body.remove_child(&root).unwrap();
    body.remove_child(&outside).unwrap();
}

#[wasm_bindgen_test]
fn only_escape_closes_from_the_keyboard() {
    let root = document().create_element("div").unwrap();
    let key = |name: &str| {
        let init = KeyboardEventInit::new();
        init.set_key(name);
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
    };

    assert_eq!(document_event(&root, &key("Escape")), Some(DropdownEvent::Escape));
    assert_eq!(document_event(&root, &key("Enter")), None);
}
