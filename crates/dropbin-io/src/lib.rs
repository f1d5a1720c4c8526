//! dropbin-io: Browser I/O and Dioxus component library.
//!
//! Reads dropped and picked files into blobs, manages their object-URL
//! previews, posts batches to the upload endpoint, and provides the UI
//! components of the dropbin upload widget.

pub mod components;
pub mod file;
pub mod preview;
pub mod upload;

pub use components::{Alert, Dropzone, FileGrid, RejectionAlert, SubmitButton, UploadForm};
pub use file::{BrowserFile, FileError, PendingFile};
pub use preview::PreviewUrl;
pub use upload::HttpUploader;
