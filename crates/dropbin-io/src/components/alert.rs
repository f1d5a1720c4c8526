//! Dismissible status alert for submission results.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdX;
use dropbin_core::{Locale, Message, StatusKind};

/// Props for the [`Alert`] component.
#[derive(Props, Clone, PartialEq)]
pub struct AlertProps {
    /// Visual kind; [`StatusKind::Idle`] hides the alert.
    kind: StatusKind,
    /// Text to show; empty hides the alert.
    message: String,
    /// Language of the close button label.
    #[props(default)]
    locale: Locale,
}

/// A colored status box with a close button.
///
/// Closing only hides this instance; give the alert a new `key` to
/// show it again for a later status.
#[component]
pub fn Alert(props: AlertProps) -> Element {
    let mut closed = use_signal(|| false);

    if props.kind == StatusKind::Idle || props.message.is_empty() || closed() {
        return rsx! {};
    }

    let (box_class, button_class) = match props.kind {
        StatusKind::Success => (
            "text-green-800 bg-green-50 border border-green-500",
            "text-green-800 bg-green-50 hover:bg-green-200",
        ),
        StatusKind::Warning => (
            "text-yellow-800 bg-yellow-50 border border-yellow-500",
            "text-yellow-800 bg-yellow-50 hover:bg-yellow-200",
        ),
        StatusKind::Danger | StatusKind::Idle => (
            "text-red-800 bg-red-50 border border-red-500",
            "text-red-800 bg-red-50 hover:bg-red-200",
        ),
    };
    let close_label = props.locale.text(Message::Close);

    rsx! {
        div { class: "w-full py-4",
            div {
                class: "flex items-center p-4 text-sm rounded-lg {box_class}",
                role: "alert",
                "data-kind": props.kind.as_str(),
                div { class: "ms-3 text-sm font-normal", "{props.message}" }
                button {
                    r#type: "button",
                    class: "ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex items-center justify-center h-8 w-8 {button_class}",
                    aria_label: close_label,
                    onclick: move |_| closed.set(true),
                    span { class: "sr-only", "{close_label}" }
                    Icon { width: 12, height: 12, icon: LdX }
                }
            }
        }
    }
}
