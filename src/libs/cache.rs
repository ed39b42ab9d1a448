// The download cache. Each tool gets one directory under the cache root and
// each archive is fetched at most once: if the destination file exists the
// download is skipped entirely. Existence is the only validity signal, no
// checksum or size is recorded, so an interrupted download can leave a
// truncated archive behind that later runs will happily reuse. `--force` is
// the recovery path for that.

// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;
// Our custom logging macros.
use crate::{log_debug, log_info};
// For creating the cache directory and the destination file.
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::libs::error::{InstallError, Result};
use crate::libs::paths::InstallPaths;

/// Read granularity for the streaming download, and the block size reported
/// to the progress sink.
const BLOCK_SIZE: usize = 8192;

/// A progress sink, called once per block with
/// `(bytes_transferred_so_far, block_size, total_size)`. The total is absent
/// when the server sends no Content-Length. Reporting is a side effect only;
/// the download neither slows down nor fails because of anything the sink
/// does.
pub type ProgressSink<'a> = &'a mut dyn FnMut(u64, u64, Option<u64>);

/// Downloads a file into the cache, or returns the cached copy.
///
/// Ensures `<cache root>/<cache_dir_name>` exists, then checks for the
/// destination file. If it is present and `force_download` is false the
/// function returns without any network access. Otherwise the URL is
/// streamed to the destination, truncating whatever was there.
///
/// # Arguments
/// * `paths`: The install layout to resolve the cache directory against.
/// * `url`: The URL of the archive to download.
/// * `cache_dir_name`: Name of the per-tool cache directory.
/// * `file_name`: Name of the archive file inside that directory.
/// * `force_download`: Re-download even if the file is already cached.
/// * `progress`: Optional progress sink, called once per block.
///
/// # Returns
/// * `Ok(PathBuf)` with the path of the cached archive.
/// * `InstallError::Http` if the request fails outright; `Io` errors from
///   the stream or the filesystem propagate uninterpreted. A download that
///   dies mid-stream may leave a truncated file at the destination.
pub fn fetch(
    paths: &InstallPaths,
    url: &str,
    cache_dir_name: &str,
    file_name: &str,
    force_download: bool,
    mut progress: Option<ProgressSink<'_>>,
) -> Result<PathBuf> {
    let cache_dir = paths.tool_cache_dir(cache_dir_name);
    fs::create_dir_all(&cache_dir)?;

    let dest = cache_dir.join(file_name);
    if dest.exists() && !force_download {
        log_debug!(
            "[Cache] {} already cached, skipping download",
            dest.display().to_string().green()
        );
        return Ok(dest);
    }

    log_info!("[Cache] Downloading {}", url.blue());
    let response = ureq::get(url).call().map_err(|e| InstallError::Http {
        url: url.to_string(),
        source: Box::new(e),
    })?;

    let total_size = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok());
    let mut reader = response.into_reader();

    // Truncates any previous (possibly stale or partial) copy.
    let mut file = File::create(&dest)?;
    let mut buf = [0u8; BLOCK_SIZE];
    let mut transferred: u64 = 0;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])?;
        transferred += n as u64;
        if let Some(report) = progress.as_mut() {
            report(transferred, BLOCK_SIZE as u64, total_size);
        }
    }

    log_debug!(
        "[Cache] Downloaded {} ({} bytes)",
        dest.display().to_string().green(),
        transferred
    );
    Ok(dest)
}
