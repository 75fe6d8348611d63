use std::time::Duration;

use dioxus::prelude::*;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

/// Transient notifications rendered by `ToastStack`.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    #[must_use]
    pub fn new(items: Signal<Vec<Toast>>, next_id: Signal<u64>) -> Self {
        Self { items, next_id }
    }

    pub fn success(self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), body.into());
    }

    pub fn error(self, body: impl Into<String>) {
        self.push(ToastKind::Error, "Error".to_string(), body.into());
    }

    fn push(mut self, kind: ToastKind, title: String, body: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.items.write().push(Toast {
            id,
            kind,
            title,
            body,
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn items(&self) -> Vec<Toast> {
        (self.items)()
    }
}

pub fn use_toasts_provider() -> Toasts {
    let items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0_u64);
    use_context_provider(|| Toasts::new(items, next_id))
}

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_context::<Toasts>();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts.items() {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let toasts = use_context::<Toasts>();
    let id = toast.id;
    use_future(move || async move {
        tokio::time::sleep(TOAST_TTL).await;
        toasts.dismiss(id);
    });

    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    rsx! {
        div { class, role: "status",
            p { class: "toast-title", "{toast.title}" }
            p { class: "toast-body", "{toast.body}" }
            button {
                class: "toast-close",
                r#type: "button",
                onclick: move |_| toasts.dismiss(id),
                "×"
            }
        }
    }
}
