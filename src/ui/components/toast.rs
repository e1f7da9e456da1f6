use std::time::{Duration, Instant};

use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_SWEEP_INTERVAL: Duration = Duration::from_millis(250);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
    pub expires_at: Instant,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
            expires_at: Instant::now() + TOAST_AUTO_DISMISS,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Appends a toast, evicting the oldest once `MAX_TOASTS` are showing.
pub fn enqueue_toast(entries: &mut Vec<ToastMessage>, kind: ToastKind, text: String) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(ToastMessage::new(kind, text));
}

/// Drops every toast whose dismiss deadline has passed. Returns whether any were removed.
pub fn drop_expired(entries: &mut Vec<ToastMessage>, now: Instant) -> bool {
    let before = entries.len();
    entries.retain(|toast| !toast.is_expired(now));
    entries.len() != before
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| enqueue_toast(entries, kind, text));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // A single sweep dismisses the whole stack; cards hold no timers.
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        async move {
            loop {
                tokio::time::sleep(TOAST_SWEEP_INTERVAL).await;
                let now = Instant::now();
                let any_expired = toasts.peek().iter().any(|toast| toast.is_expired(now));
                if any_expired {
                    toasts.with_mut(|items| drop_expired(items, now));
                }
            }
        }
    });

    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for (toast_key, message) in messages.into_iter().map(|m| (m.id.clone(), m)) {
                    ToastCard { key: "{toast_key}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let dismiss_id = message.id.clone();
    rsx! {
        li {
            class: "{theme::toast_class(message.kind)}",
            span { class: "toast-icon", "{message.kind.icon()}" }
            p { class: "toast-text", "{message.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| {
                    let mut toasts = toasts;
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_five_newest() {
        let mut entries = Vec::new();
        for idx in 0..7 {
            enqueue_toast(&mut entries, ToastKind::Info, format!("message {idx}"));
        }
        let texts: Vec<_> = entries.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["message 2", "message 3", "message 4", "message 5", "message 6"]
        );
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_evicted_queue_still_expires_newest_toast() {
        let mut entries = Vec::new();
        for idx in 0..6 {
            enqueue_toast(&mut entries, ToastKind::Info, format!("message {idx}"));
        }
        let newest = entries.last().unwrap().clone();
        assert_eq!(entries.len(), MAX_TOASTS);

        assert!(!drop_expired(&mut entries, Instant::now()));
        assert_eq!(entries.len(), MAX_TOASTS);

        assert!(drop_expired(&mut entries, newest.expires_at));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_drop_expired_keeps_fresh_toasts() {
        let now = Instant::now();
        let mut stale = ToastMessage::new(ToastKind::Error, "stale");
        stale.expires_at = now;
        let fresh = ToastMessage::new(ToastKind::Success, "fresh");
        let mut entries = vec![stale, fresh.clone()];

        assert!(drop_expired(&mut entries, now));
        assert_eq!(entries, vec![fresh]);
    }
}
