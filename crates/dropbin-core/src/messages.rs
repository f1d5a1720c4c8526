//! User-facing strings as a per-locale lookup table.

use serde::{Deserialize, Serialize};

use crate::format;

/// Display language of the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Spanish (default).
    #[default]
    Es,
    /// English.
    En,
}

/// Fixed strings of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Status after a stored batch.
    UploadSucceeded,
    /// Status after a failed batch.
    UploadFailed,
    /// Heading of the rejected-files alert.
    RejectedHeading,
    /// Empty-state hint of the drop zone.
    DropHint,
    /// Per-item remove action.
    RemoveFile,
    /// Submit button label.
    Submit,
    /// Screen-reader label of alert close buttons.
    Close,
    /// Screen-reader label of the info icon.
    Info,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    /// Look up a fixed string.
    #[must_use]
    pub const fn text(self, message: Message) -> &'static str {
        match (self, message) {
            (Self::Es, Message::UploadSucceeded) => "Archivos cargados con éxito.",
            (Self::Es, Message::UploadFailed) => "Error al cargar los archivos.",
            (Self::Es, Message::RejectedHeading) => "Los siguientes archivos no fueron cargados:",
            (Self::Es, Message::DropHint) => "Arrastra aquí el o los archivos a subir",
            (Self::Es, Message::RemoveFile) => "Eliminar",
            (Self::Es, Message::Submit) => "SUBIR ARCHIVOS",
            (Self::Es, Message::Close) => "Cerrar",
            (Self::Es, Message::Info) => "Información",
            (Self::En, Message::UploadSucceeded) => "Files uploaded successfully.",
            (Self::En, Message::UploadFailed) => "Failed to upload the files.",
            (Self::En, Message::RejectedHeading) => "The following files were not added:",
            (Self::En, Message::DropHint) => "Drop the file or files to upload here",
            (Self::En, Message::RemoveFile) => "Remove",
            (Self::En, Message::Submit) => "UPLOAD FILES",
            (Self::En, Message::Close) => "Close",
            (Self::En, Message::Info) => "Info",
        }
    }

    /// Rejection message for a file over the size limit.
    #[must_use]
    pub fn too_large(self, name: &str, max_size_bytes: u64) -> String {
        let limit = format::megabytes(max_size_bytes, 1);
        match self {
            Self::Es => format!("El archivo {name} supera el tamaño permitido de {limit} MB"),
            Self::En => format!("The file {name} exceeds the allowed size of {limit} MB"),
        }
    }

    /// Rejection message for a file whose type is not allowed.
    #[must_use]
    pub fn invalid_type(self, name: &str) -> String {
        match self {
            Self::Es => format!("El archivo {name} tiene una extensión no permitida"),
            Self::En => format!("The file {name} has a file type that is not allowed"),
        }
    }

    /// Drop-zone hint showing the per-file size limit.
    #[must_use]
    pub fn max_size_hint(self, max_size_bytes: u64) -> String {
        let limit = format::megabytes(max_size_bytes, 1);
        match self {
            Self::Es => format!("Tamaño máximo por archivo {limit} MB"),
            Self::En => format!("Maximum size per file {limit} MB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MESSAGES: [Message; 8] = [
        Message::UploadSucceeded,
        Message::UploadFailed,
        Message::RejectedHeading,
        Message::DropHint,
        Message::RemoveFile,
        Message::Submit,
        Message::Close,
        Message::Info,
    ];

    #[test]
    fn every_message_has_text_in_every_locale() {
        for locale in Locale::ALL {
            for message in ALL_MESSAGES {
                assert!(
                    !locale.text(message).is_empty(),
                    "{locale:?} has no text for {message:?}"
                );
            }
        }
    }

    #[test]
    fn spanish_is_the_default() {
        assert_eq!(Locale::default(), Locale::Es);
        assert_eq!(
            Locale::default().text(Message::UploadSucceeded),
            "Archivos cargados con éxito."
        );
    }

    #[test]
    fn too_large_formats_limit_with_one_decimal() {
        let msg = Locale::Es.too_large("big.png", 4 * 1024 * 1024 + 512 * 1024);
        assert_eq!(
            msg,
            "El archivo big.png supera el tamaño permitido de 4.5 MB"
        );
        let msg = Locale::En.too_large("big.png", 1024 * 1024);
        assert!(msg.contains("1.0 MB"), "{msg}");
    }

    #[test]
    fn invalid_type_names_the_file() {
        assert!(Locale::Es.invalid_type("doc.exe").contains("doc.exe"));
        assert!(Locale::En.invalid_type("doc.exe").contains("doc.exe"));
    }

    #[test]
    fn max_size_hint() {
        assert_eq!(
            Locale::Es.max_size_hint(1024 * 1024),
            "Tamaño máximo por archivo 1.0 MB"
        );
    }
}
