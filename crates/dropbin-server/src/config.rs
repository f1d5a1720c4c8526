//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use dropbin_core::FILES_FIELD;

/// Default request body limit: 50 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Accept multipart uploads and serve the stored files back publicly.
///
/// Every flag can also be set through its `DROPBIN_*` environment
/// variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "dropbin-server", version)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "DROPBIN_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Directory holding the stored files. Created on startup.
    #[arg(long, env = "DROPBIN_STORAGE_DIR", default_value = "./blobs")]
    pub storage_dir: PathBuf,

    /// Base URL under which the storage directory is publicly reachable.
    ///
    /// Returned blob URLs are this base plus the percent-encoded name.
    #[arg(
        long,
        env = "DROPBIN_PUBLIC_BASE_URL",
        default_value = "http://127.0.0.1:3000/blobs"
    )]
    pub public_base_url: String,

    /// Largest accepted request body, in bytes.
    #[arg(long, env = "DROPBIN_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Multipart field carrying the files.
    #[arg(long, env = "DROPBIN_FIELD_NAME", default_value = FILES_FIELD)]
    pub field_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        ServerConfig::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "dropbin-server",
            "--listen",
            "0.0.0.0:8080",
            "--storage-dir",
            "/srv/blobs",
            "--public-base-url",
            "https://cdn.example.com/blobs",
            "--max-body-bytes",
            "1024",
            "--field-name",
            "files",
        ])
        .unwrap();

        assert_eq!(config.listen, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.storage_dir, PathBuf::from("/srv/blobs"));
        assert_eq!(config.public_base_url, "https://cdn.example.com/blobs");
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.field_name, "files");
    }

    #[test]
    fn rejects_unparseable_listen_address() {
        let result = ServerConfig::try_parse_from(["dropbin-server", "--listen", "not-an-addr"]);
        assert!(result.is_err());
    }
}
