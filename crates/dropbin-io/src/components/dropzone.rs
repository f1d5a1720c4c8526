//! Drop Surface: drag-and-drop zone with a file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dropbin_core::{FileCollection, Locale, Message, Rejection, UploadLimits};

use super::{FileGrid, FileTypeIcon, RejectionAlert};
use crate::file::BrowserFile;

/// Props for the [`Dropzone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropzoneProps {
    /// Currently selected files.
    files: FileCollection<BrowserFile>,
    /// Rejections of the latest selection.
    rejections: Vec<Rejection>,
    /// Size and type limits (for the hints and the picker filter).
    limits: UploadLimits,
    /// Display language.
    locale: Locale,
    /// Ignore drops and picks and disable removal (a submission is
    /// in flight).
    #[props(default)]
    disabled: bool,
    /// Fired with every file of a drop or picker selection, unvalidated.
    on_select: EventHandler<Vec<FileData>>,
    /// Fired with the position of a file to remove.
    on_remove: EventHandler<usize>,
    /// Fired when the rejection list is dismissed.
    on_dismiss_rejections: EventHandler<()>,
}

/// A dashed drop target that doubles as a picker button.
///
/// Shows one icon per allowed extension while empty, and the preview
/// grid once files are selected.
#[component]
pub fn Dropzone(props: DropzoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let on_select = props.on_select;
    let disabled = props.disabled;

    let handle_files = move |evt: FormEvent| {
        if !disabled {
            on_select.call(evt.files());
        }
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        if !disabled {
            on_select.call(evt.files());
        }
    };

    let border_class = if disabled {
        "border-gray-200 bg-gray-50 opacity-60 cursor-not-allowed"
    } else if dragging() {
        "border-indigo-500 bg-indigo-50 hover:border-indigo-500 cursor-pointer"
    } else {
        "border-gray-200 bg-gray-50 hover:border-indigo-500 cursor-pointer"
    };
    let accept = props.limits.accept_attribute();
    let locale = props.locale;
    let drop_hint = locale.text(Message::DropHint);
    let max_size_hint = locale.max_size_hint(props.limits.max_size_bytes());

    rsx! {
        div { class: "flex flex-col",
            RejectionAlert {
                rejections: props.rejections.clone(),
                locale: locale,
                on_dismiss: props.on_dismiss_rejections,
            }

            label {
                class: "flex flex-col items-center p-4 border-dashed border-2 text-gray-500 transition-colors {border_class}",
                "aria-disabled": "{disabled}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(!disabled);
                },
                ondragleave: move |_| {
                    dragging.set(false);
                },
                ondrop: handle_drop,

                input {
                    r#type: "file",
                    multiple: true,
                    accept: "{accept}",
                    disabled: disabled,
                    class: "hidden",
                    onchange: handle_files,
                }

                if props.files.is_empty() {
                    div { class: "my-4 flex flex-col items-center",
                        div { class: "flex flex-wrap gap-3 justify-center text-gray-400",
                            for ext in props.limits.allowed_extensions() {
                                FileTypeIcon { key: "{ext}", ext: ext.clone() }
                            }
                        }
                        p { class: "mt-4 text-sm", "{drop_hint}" }
                        em { class: "mt-2 text-sm text-indigo-500", "{max_size_hint}" }
                    }
                } else {
                    FileGrid {
                        files: props.files.clone(),
                        locale: locale,
                        disabled: disabled,
                        on_remove: props.on_remove,
                    }
                }
            }
        }
    }
}
