use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use dropbin_core::UploadLimits;
use dropbin_io::UploadForm;

/// Per-file size limit: 4.5 MiB.
const MAX_FILE_SIZE: u64 = 4_718_592;

/// Extensions accepted by the form.
const ALLOWED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Upload endpoint, overridable at build time.
const UPLOAD_ENDPOINT: &str = match option_env!("DROPBIN_UPLOAD_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:3000/api/upload",
};

fn main() {
    dioxus::launch(app);
}

/// Root application component: a single upload form.
fn app() -> Element {
    let limits = use_hook(|| {
        info!(endpoint = UPLOAD_ENDPOINT, "starting dropbin");
        UploadLimits::new(MAX_FILE_SIZE, &ALLOWED_EXTENSIONS)
    });

    rsx! {
        // Compiled by build.rs via npx @tailwindcss/cli.
        style { dangerous_inner_html: include_str!(env!("TAILWIND_CSS_PATH")) }

        div { class: "min-h-screen bg-white text-gray-900 flex flex-col",
            header { class: "px-6 py-4 border-b border-gray-200",
                h1 { class: "text-2xl font-semibold", "dropbin" }
            }

            main { class: "flex-1 flex justify-center p-6",
                div { class: "w-full max-w-2xl",
                    UploadForm { limits: limits, endpoint: UPLOAD_ENDPOINT.to_owned() }
                }
            }
        }
    }
}
