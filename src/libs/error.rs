// The error type shared by every helper in `libs`. Each variant corresponds
// to one way an install can fail; all of them abort the pipeline at the point
// of detection, there is no retry and no rollback of completed steps.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InstallError>;

/// Everything that can go wrong between "resolve the platform" and
/// "publish the bin symlink".
#[derive(Debug, Error)]
pub enum InstallError {
    /// The archive file name does not end in a recognized extension.
    /// Supported kinds are zip, tar+gzip and tar+xz.
    #[error("unsupported archive format: {0}")]
    UnsupportedFormat(String),

    /// The tool's release naming scheme has no entry for the resolved
    /// OS/architecture pair. Raised by the per-tool commands, not by the
    /// shared helpers, since only the command knows its URL template.
    #[error("no {tool} release is published for platform {os} ({arch})")]
    PlatformUnsupported {
        tool: String,
        os: String,
        arch: String,
    },

    /// The bin directory entry we want to publish exists and is not a
    /// symlink. We never delete user-owned files, so this requires manual
    /// removal before re-running.
    #[error("{} exists and is not a symlink; remove it manually and re-run", .0.display())]
    InstallConflict(PathBuf),

    /// Single-member extraction named an entry the archive does not contain.
    #[error("archive {} has no member '{member}'", archive.display())]
    MissingMember { archive: PathBuf, member: String },

    /// The HTTP request itself failed. A download that dies mid-stream shows
    /// up as `Io` instead and may leave a truncated file in the cache.
    #[error("download failed for {url}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Malformed zip data.
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    /// Filesystem and stream errors, propagated uninterpreted.
    #[error(transparent)]
    Io(#[from] io::Error),
}
