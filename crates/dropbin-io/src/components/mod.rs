//! Dioxus UI components for dropbin.
//!
//! Provides the upload form, the drag-and-drop zone with its preview
//! grid and per-extension icons, the rejected-files list, the status
//! alert and the submit button.

mod alert;
mod dropzone;
mod file_grid;
mod file_type_icon;
mod rejection_alert;
mod submit_button;
mod upload_form;

pub use alert::Alert;
pub use dropzone::Dropzone;
pub use file_grid::FileGrid;
pub use file_type_icon::FileTypeIcon;
pub use rejection_alert::RejectionAlert;
pub use submit_button::SubmitButton;
pub use upload_form::UploadForm;
