use yew::prelude::*;

use crate::faq::{AccordionState, FaqItem, ItemId};

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub category: usize,
    pub items: &'static [FaqItem],
}

/// One FAQ category: single open item, collapsible.
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let state = use_state(AccordionState::default);

    html! {
        <div class="accordion">
            { for props.items.iter().enumerate().map(|(i, item)| {
                let id: ItemId = (props.category, i);
                let open = state.is_open(id);
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| state.set(state.toggle(id)))
                };
                html! {
                    <div key={i} class={classes!("accordion-item", open.then_some("open"))}>
                        <button class="accordion-trigger" {onclick} aria-expanded={open.to_string()}>
                            { item.question }
                        </button>
                        if open {
                            <div class="accordion-content">{ item.answer }</div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
