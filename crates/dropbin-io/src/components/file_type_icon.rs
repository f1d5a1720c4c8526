//! Icon for one allowed file extension, shown in the empty drop zone.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFile, LdFileImage, LdFileText};
use dropbin_core::FileKind;

/// Props for the [`FileTypeIcon`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileTypeIconProps {
    /// Normalized extension without the dot (e.g. `"png"`).
    ext: String,
}

/// A file glyph matching the extension's category, labeled `.ext`.
#[component]
pub fn FileTypeIcon(props: FileTypeIconProps) -> Element {
    let glyph = match FileKind::of_extension(&props.ext) {
        FileKind::Image => rsx! { Icon { width: 36, height: 36, icon: LdFileImage } },
        FileKind::Document => rsx! { Icon { width: 36, height: 36, icon: LdFileText } },
        FileKind::Other => rsx! { Icon { width: 36, height: 36, icon: LdFile } },
    };

    rsx! {
        div { class: "flex flex-col items-center gap-1",
            {glyph}
            span { class: "text-xs uppercase", ".{props.ext}" }
        }
    }
}
