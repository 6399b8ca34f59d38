//! Language picker: compact (sidebar), inline chips, or the default
//! dropdown. The open dropdown closes on a pointer-down outside it or on
//! Escape.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent, Node};
use yew::prelude::*;

use crate::i18n::{use_language, LanguageAction, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitcherVariant {
    Compact,
    Inline,
    #[default]
    Dropdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    Toggle,
    PointerDownOutside,
    Escape,
    Selected,
}

/// Open state after `event`.
pub fn next_open(open: bool, event: DropdownEvent) -> bool {
    match event {
        DropdownEvent::Toggle => !open,
        DropdownEvent::PointerDownOutside | DropdownEvent::Escape | DropdownEvent::Selected => false,
    }
}

/// How a document-level `mousedown` or `keydown` bears on a dropdown rooted
/// at `root`. `None` means the event leaves it as it is.
pub fn document_event(root: &Node, event: &Event) -> Option<DropdownEvent> {
    match event.type_().as_str() {
        "mousedown" => {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            (!root.contains(target.as_ref())).then_some(DropdownEvent::PointerDownOutside)
        }
        "keydown" => event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|k| k.key() == "Escape")
            .then_some(DropdownEvent::Escape),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    #[prop_or_default]
    pub variant: SwitcherVariant,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    let i18n = use_language();
    let open = use_state(|| false);
    let root = use_node_ref();

    // Document listeners live exactly as long as the component.
    {
        let open = open.clone();
        let root = root.clone();
        use_effect_with((), move |_| {
            let listeners = window().and_then(|w| w.document()).map(|doc| {
                ["mousedown", "keydown"].map(|kind| {
                    let open = open.clone();
                    let root = root.clone();
                    EventListener::new(&doc, kind, move |event| {
                        let Some(root) = root.cast::<Node>() else {
                            return;
                        };
                        if let Some(e) = document_event(&root, event) {
                            open.set(next_open(*open, e));
                        }
                    })
                })
            });
            move || drop(listeners)
        });
    }

    let current = i18n.language();

    let select = {
        let i18n = i18n.clone();
        let open = open.clone();
        Callback::from(move |locale: Locale| {
            i18n.dispatch(LanguageAction::Set(locale));
            open.set(next_open(*open, DropdownEvent::Selected));
        })
    };

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(next_open(*open, DropdownEvent::Toggle)))
    };

    let chip = |locale: Locale| {
        let active = locale == current;
        html! {
            <span class={classes!("lang-chip", active.then_some("active"))}>{ locale.code() }</span>
        }
    };

    let option = |locale: Locale| {
        let onclick = {
            let select = select.clone();
            Callback::from(move |_: MouseEvent| select.emit(locale))
        };
        let active = locale == current;
        html! {
            <button key={locale.code()} class={classes!("lang-option", active.then_some("active"))} {onclick}>
                { chip(locale) }
                <span>{ locale.native_name() }</span>
                if active {
                    <span class="lang-check">{ "\u{2713}" }</span>
                }
            </button>
        }
    };

    match props.variant {
        SwitcherVariant::Inline => html! {
            <div class={classes!("lang-inline", props.class.clone())}>
                { for Locale::ALL.into_iter().map(|locale| {
                    let onclick = {
                        let i18n = i18n.clone();
                        Callback::from(move |_: MouseEvent| i18n.dispatch(LanguageAction::Set(locale)))
                    };
                    html! {
                        <button key={locale.code()} class={classes!("lang-chip", (locale == current).then_some("active"))} {onclick}>
                            { locale.code() }
                        </button>
                    }
                }) }
            </div>
        },
        SwitcherVariant::Compact => html! {
            <div class={classes!("lang-switcher", "compact", props.class.clone())} ref={root}>
                <button
                    class="lang-trigger"
                    onclick={on_toggle}
                    aria-label={i18n.t("common", "selectLanguage")}
                    aria-expanded={(*open).to_string()}
                >
                    <span class="lang-globe">{ "\u{1F310}" }</span>
                    { chip(current) }
                    <span class={classes!("chevron", open.then_some("up"))}>{ "\u{25BE}" }</span>
                </button>
                if *open {
                    <div class="lang-menu drop-up">
                        { for Locale::ALL.into_iter().map(option) }
                    </div>
                }
            </div>
        },
        SwitcherVariant::Dropdown => html! {
            <div class={classes!("lang-switcher", props.class.clone())} ref={root}>
                <button
                    class="lang-trigger"
                    onclick={on_toggle}
                    aria-label={i18n.t("common", "selectLanguage")}
                    aria-expanded={(*open).to_string()}
                >
                    { chip(current) }
                    <span class="lang-name">{ current.native_name() }</span>
                    <span class={classes!("chevron", open.then_some("up"))}>{ "\u{25BE}" }</span>
                </button>
                if *open {
                    <div class="lang-menu">
                        { for Locale::ALL.into_iter().map(option) }
                    </div>
                }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        assert!(next_open(false, DropdownEvent::Toggle));
        assert!(!next_open(true, DropdownEvent::Toggle));
    }

    #[test]
    fn everything_else_closes() {
        for event in [
            DropdownEvent::PointerDownOutside,
            DropdownEvent::Escape,
            DropdownEvent::Selected,
        ] {
            assert!(!next_open(true, event));
            assert!(!next_open(false, event));
        }
    }
}
