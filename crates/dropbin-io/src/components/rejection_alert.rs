//! Warning list of files rejected from the latest batch.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdInfo, LdX};
use dropbin_core::{Locale, Message, Rejection};

/// Props for the [`RejectionAlert`] component.
#[derive(Props, Clone, PartialEq)]
pub struct RejectionAlertProps {
    /// Rejections to list; empty renders nothing.
    rejections: Vec<Rejection>,
    /// Display language.
    locale: Locale,
    /// Fired when the user dismisses the list.
    on_dismiss: EventHandler<()>,
}

/// Lists one message per rejected file of the latest selection.
#[component]
pub fn RejectionAlert(props: RejectionAlertProps) -> Element {
    if props.rejections.is_empty() {
        return rsx! {};
    }

    let locale = props.locale;
    let on_dismiss = props.on_dismiss;
    let info_label = locale.text(Message::Info);
    let heading = locale.text(Message::RejectedHeading);

    rsx! {
        div {
            class: "flex p-4 mb-4 text-sm text-yellow-800 rounded-lg bg-yellow-50",
            role: "alert",
            span { class: "flex-shrink-0 inline w-4 h-4 me-3 mt-[2px]",
                Icon { width: 16, height: 16, icon: LdInfo }
            }
            span { class: "sr-only", "{info_label}" }
            div { class: "flex-1",
                span { class: "font-medium", "{heading}" }
                ul { class: "mt-1.5 list-disc list-inside",
                    for (i, rejection) in props.rejections.iter().enumerate() {
                        li { key: "{i}", "{rejection.message}" }
                    }
                }
            }
            button {
                r#type: "button",
                class: "ms-auto -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8 items-center justify-center hover:bg-yellow-200",
                aria_label: locale.text(Message::Close),
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    evt.stop_propagation();
                    on_dismiss.call(());
                },
                Icon { width: 12, height: 12, icon: LdX }
            }
        }
    }
}
