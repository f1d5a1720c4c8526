//! Form submit button with a pending spinner.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdLoader;
use dropbin_core::{Locale, Message};

/// Props for the [`SubmitButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    /// Disables the button and shows the spinner.
    pending: bool,
    /// Display language.
    locale: Locale,
}

/// Full-width submit button; disabled while a submission is in flight.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let cursor = if props.pending {
        "cursor-not-allowed opacity-75"
    } else {
        "cursor-pointer"
    };

    let label = props.locale.text(Message::Submit);

    rsx! {
        div { class: "border-b border-gray-900/10 py-4 mb-4",
            button {
                r#type: "submit",
                class: "w-full inline-flex items-center justify-center bg-indigo-500 hover:bg-indigo-600 text-sm text-white p-3 rounded-md {cursor}",
                disabled: props.pending,
                "aria-busy": "{props.pending}",
                if props.pending {
                    span { class: "animate-spin -ml-1 mr-3 h-5 w-5 text-white",
                        Icon { width: 20, height: 20, icon: LdLoader }
                    }
                }
                "{label}"
            }
        }
    }
}
