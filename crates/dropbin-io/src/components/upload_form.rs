//! Submission Controller wiring: the complete upload form.

use std::rc::Rc;

use dioxus::html::FileData;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use dropbin_core::{Locale, Settlement, UploadLimits, UploadSession};

use super::{Alert, Dropzone, SubmitButton};
use crate::file::{BrowserFile, PendingFile};
use crate::upload::HttpUploader;

/// Props for the [`UploadForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadFormProps {
    /// Per-file size limit and allowed extensions.
    limits: UploadLimits,
    /// URL of the upload endpoint.
    endpoint: String,
    /// Display language.
    #[props(default)]
    locale: Locale,
}

/// Status alert, drop zone, and submit button around one
/// [`UploadSession`].
///
/// The session lives in this component's scope, so every form on the
/// page has its own selection. `limits`, `endpoint` and `locale` are
/// read once at mount.
#[component]
pub fn UploadForm(props: UploadFormProps) -> Element {
    let mut session =
        use_signal(|| UploadSession::<BrowserFile>::new(props.limits.clone(), props.locale));
    let uploader = use_hook(|| Rc::new(HttpUploader::new(props.endpoint.clone())));
    // Bumped per attempt so a dismissed status alert reappears.
    let mut attempt = use_signal(|| 0u64);
    // Selections whose accepted files are still being read.
    let mut loading = use_signal(|| 0usize);

    use_drop(move || {
        if let Ok(mut s) = session.try_write() {
            s.abandon();
        }
    });

    // --- Selection handler ---
    // Validate on metadata alone, then read only the accepted files.
    let on_select = move |files: Vec<FileData>| {
        let screened = session
            .write()
            .screen(files.into_iter().map(PendingFile::new));
        let accepted = match screened {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("selection ignored: {e}");
                return;
            }
        };

        for rejection in session.read().rejections() {
            warn!(
                file = %rejection.file.name,
                code = ?rejection.code,
                "file rejected"
            );
        }

        if accepted.is_empty() {
            return;
        }

        loading += 1;
        spawn(async move {
            let mut loaded = Vec::with_capacity(accepted.len());
            for pending in accepted {
                match BrowserFile::load(pending).await {
                    Ok(file) => loaded.push(file),
                    Err(e) => error!("skipping unreadable file: {e}"),
                }
            }
            // The form may have been unmounted while reading.
            if let Ok(mut n) = loading.try_write() {
                *n = n.saturating_sub(1);
            }
            if let Ok(mut s) = session.try_write()
                && let Err(e) = s.add(loaded)
            {
                error!("loaded files dropped: {e}");
            }
        });
    };

    let on_remove = move |index: usize| {
        if let Err(e) = session.write().remove(index) {
            error!("remove ignored: {e}");
        }
    };

    // --- Submit handler ---
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *loading.peek() > 0 {
            return;
        }

        let Some((ticket, batch)) = session.write().begin_submit() else {
            return;
        };
        attempt += 1;

        let uploader = Rc::clone(&uploader);
        info!(
            files = batch.len(),
            endpoint = uploader.endpoint(),
            "submitting upload"
        );

        spawn(async move {
            // Yield so the disabled button and spinner paint first.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = uploader.upload(batch.as_slice()).await;

            let Ok(mut s) = session.try_write() else {
                return;
            };
            match s.complete(ticket, outcome) {
                Some(Settlement::Succeeded(blobs)) => info!("{} files saved", blobs.len()),
                Some(Settlement::Failed(e)) => error!("upload failed: {e}"),
                None => warn!("discarding stale upload result"),
            }
        });
    };

    let (state, files, rejections, limits, locale, pending) = {
        let s = session.read();
        (
            s.state().clone(),
            s.files().clone(),
            s.rejections().to_vec(),
            s.limits().clone(),
            s.locale(),
            s.is_pending(),
        )
    };

    rsx! {
        div { class: "w-full flex flex-col",
            form {
                onsubmit: on_submit,

                Alert {
                    key: "{attempt}",
                    kind: state.kind,
                    message: state.message,
                    locale: locale,
                }

                Dropzone {
                    files: files,
                    rejections: rejections,
                    limits: limits,
                    locale: locale,
                    disabled: pending,
                    on_select: on_select,
                    on_remove: on_remove,
                    on_dismiss_rejections: move |()| session.write().clear_rejections(),
                }

                SubmitButton { pending: pending || loading() > 0, locale: locale }
            }
        }
    }
}
