//! dropbin-core: file selection, validation and submission lifecycle (sans-IO).
//!
//! Holds the state behind the dropbin upload widget: the ordered
//! collection of selected files, the validator that accepts or rejects
//! each candidate, and the controller that tracks a submission from
//! idle through pending to success or failure.
//!
//! This crate has **no I/O dependencies**. Files are only seen through
//! the [`FileMeta`] trait and the upload itself is performed by the
//! caller. All browser interaction lives in `dropbin-io`.

pub mod collection;
pub mod format;
pub mod messages;
pub mod mime;
pub mod session;
pub mod submission;
pub mod types;
pub mod validate;

pub use collection::{CollectionError, FileCollection, FileStore};
pub use messages::{Locale, Message};
pub use mime::FileKind;
pub use session::UploadSession;
pub use submission::{Phase, Settlement, SubmissionController, SubmitTicket};
pub use types::{
    FileMeta, FileSummary, StatusKind, SubmissionState, UploadError, UploadedBlobMeta,
};
pub use validate::{Partition, Rejection, RejectionCode, UploadLimits, partition, validate};

/// Multipart field name carrying every selected file.
pub const FILES_FIELD: &str = "dz-files";
