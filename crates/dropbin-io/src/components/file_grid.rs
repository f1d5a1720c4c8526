//! Preview grid of the selected files.

use dioxus::prelude::*;
use dropbin_core::{FileCollection, FileMeta, Locale, Message, format};

use crate::file::BrowserFile;

/// Props for the [`FileGrid`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileGridProps {
    /// Files to preview, in selection order.
    files: FileCollection<BrowserFile>,
    /// Display language.
    locale: Locale,
    /// Disable the remove buttons.
    #[props(default)]
    disabled: bool,
    /// Fired with the position of the file to remove.
    on_remove: EventHandler<usize>,
}

/// Wrapping grid of thumbnails, each with a remove action and a hover
/// tooltip giving its size and name.
#[component]
pub fn FileGrid(props: FileGridProps) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 justify-center p-4",
            for (index, file) in props.files.iter().enumerate() {
                {render_item(index, file, props.locale, props.disabled, props.on_remove)}
            }
        }
    }
}

/// Render one grid cell.
///
/// Clicks inside the cell are swallowed so they do not reach the
/// surrounding drop zone and reopen the file picker.
fn render_item(
    index: usize,
    file: &BrowserFile,
    locale: Locale,
    disabled: bool,
    on_remove: EventHandler<usize>,
) -> Element {
    let name = file.name().to_owned();
    let size = format::megabytes(file.size(), 2);
    let url = file.preview_url().to_owned();
    let is_image = file.is_image();
    let remove_label = locale.text(Message::RemoveFile);

    rsx! {
        div {
            key: "{url}",
            class: "group relative flex flex-col justify-center",
            title: "{name}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                evt.stop_propagation();
            },

            div { class: "relative w-[120px] h-[120px] overflow-hidden",
                if is_image {
                    img {
                        src: "{url}",
                        alt: "{name}",
                        class: "w-full h-full object-cover brightness-90 transition hover:brightness-100 cursor-default rounded border",
                    }
                } else {
                    {render_placeholder()}
                }
            }

            // Tooltip
            div { class: "absolute bottom-36 scale-0 p-2 bg-white rounded border group-hover:scale-100 cursor-default",
                p { class: "text-xs text-gray-900 font-semibold", "{size} MB" }
                p { class: "text-xs text-gray-900 whitespace-nowrap", "{name}" }
            }

            button {
                r#type: "button",
                class: "flex justify-center mt-1 bg-red-50 text-red-800 text-xs rounded border border-red-800 hover:bg-red-100 cursor-default disabled:opacity-50",
                disabled: disabled,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    evt.stop_propagation();
                    if !disabled {
                        on_remove.call(index);
                    }
                },
                "{remove_label}"
            }
        }
    }
}

/// Skeleton block standing in for non-image files.
fn render_placeholder() -> Element {
    rsx! {
        div { class: "w-full h-full brightness-90 transition hover:brightness-100 cursor-default rounded border px-4 py-2",
            div { class: "flex-1 space-y-5 py-1",
                div { class: "h-2 bg-gray-400 rounded" }
                for _ in 0..2 {
                    div { class: "space-y-2",
                        div { class: "grid grid-cols-3 gap-4",
                            div { class: "h-2 bg-gray-400 rounded col-span-2" }
                            div { class: "h-2 bg-gray-400 rounded col-span-1" }
                        }
                        div { class: "h-2 bg-gray-400 rounded" }
                    }
                }
            }
        }
    }
}
