//! Transient notifications. Each toast removes itself after a timeout.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use gloo::timers::callback::Timeout;
use yew::prelude::*;

const TOAST_MS: u32 = 3_500;
const MAX_VISIBLE: usize = 4;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => {
                toasts.push(toast);
                if toasts.len() > MAX_VISIBLE {
                    toasts.remove(0);
                }
            }
            ToastAction::Dismiss(id) => {
                let before = toasts.len();
                toasts.retain(|t| t.id != id);
                if toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(ToastQueue { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct Toaster {
    queue: UseReducerHandle<ToastQueue>,
}

impl Toaster {
    fn push(&self, kind: ToastKind, message: String) {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        self.queue.dispatch(ToastAction::Push(Toast { id, kind, message }));
        let queue = self.queue.clone();
        Timeout::new(TOAST_MS, move || queue.dispatch(ToastAction::Dismiss(id))).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster {
        queue: queue.clone(),
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { props.children.clone() }
            <div class="toasts" role="status" aria-live="polite">
                { for queue.toasts.iter().map(|t| {
                    let class = match t.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let onclick = {
                        let queue = queue.clone();
                        let id = t.id;
                        Callback::from(move |_: MouseEvent| queue.dispatch(ToastAction::Dismiss(id)))
                    };
                    html! { <div key={t.id} {class} {onclick}>{ t.message.clone() }</div> }
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("use_toaster must be used within a ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            kind: ToastKind::Error,
            message: format!("t{id}"),
        }
    }

    #[test]
    fn push_caps_visible_toasts() {
        let mut q = Rc::new(ToastQueue::default());
        for id in 1..=6 {
            q = q.reduce(ToastAction::Push(toast(id)));
        }
        let ids: Vec<u64> = q.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
    }

    #[test]
    fn dismissing_unknown_id_keeps_state() {
        let q = Rc::new(ToastQueue::default()).reduce(ToastAction::Push(toast(1)));
        let same = q.clone().reduce(ToastAction::Dismiss(99));
        assert!(Rc::ptr_eq(&q, &same));
        let empty = q.reduce(ToastAction::Dismiss(1));
        assert!(empty.toasts.is_empty());
    }
}
