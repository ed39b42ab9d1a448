// The install step: turning a cached archive into something runnable on
// `$PATH`. Two modes cover the tool scripts we ship:
//
// - full-tree: the archive becomes `<opt>/<tool>/<version>/` and a symlink
//   in the bin directory points at one file inside it. Re-running with a
//   different version just repoints the symlink, so versions switch without
//   touching the extracted trees.
// - single-binary: one member of the archive is written straight into the
//   bin directory. No opt tree, no symlink.

// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;
// Our custom logging macros.
use crate::{log_debug, log_info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::libs::archive;
use crate::libs::cache::{self, ProgressSink};
use crate::libs::error::Result;
use crate::libs::paths::InstallPaths;

/// Adds the owner-execute bit to an existing file, leaving every other
/// permission bit alone (0o644 becomes 0o744). Archives do not always carry
/// executable modes, and downloads never do, so this runs on every published
/// binary.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o100);
    fs::set_permissions(path, perms)?;
    log_debug!(
        "[Install] Marked {} executable",
        path.display().to_string().green()
    );
    Ok(())
}

// Executability is not a permission bit on non-Unix platforms, so there is
// nothing to do there.
#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Publishes `<bin>/<bin_name>` as a symlink to a file inside the versioned
/// install directory of `(tool, version)`, marking the target executable
/// first.
///
/// An existing symlink at the bin path is removed and replaced, which is how
/// the "active" version of a tool is switched. An existing non-symlink file
/// is never deleted: that is someone else's data, and the call fails asking
/// for manual removal.
///
/// # Arguments
/// * `paths`: The install layout.
/// * `tool` / `version`: Select the versioned install directory.
/// * `bin_name`: Name of the symlink to publish in the bin directory.
/// * `relative_bin_path`: Path of the executable inside the install
///   directory (e.g. "bin/terraform" or just "rg").
///
/// # Returns
/// * `Ok(PathBuf)` with the path of the published symlink.
/// * `InstallError::InstallConflict` if the bin path is occupied by a
///   non-symlink.
#[cfg(unix)]
pub fn link_bin(
    paths: &InstallPaths,
    tool: &str,
    version: &str,
    bin_name: &str,
    relative_bin_path: &str,
) -> Result<PathBuf> {
    use crate::libs::error::InstallError;
    use std::io;
    use std::os::unix::fs::symlink;

    let target = paths.tool_opt_dir(tool, version).join(relative_bin_path);
    make_executable(&target)?;

    fs::create_dir_all(&paths.bin_root)?;
    let link = paths.bin_path(bin_name);

    // `symlink_metadata` does not follow the link, so a dangling symlink is
    // still detected and replaced rather than treated as absent.
    match fs::symlink_metadata(&link) {
        Ok(meta) if meta.file_type().is_symlink() => {
            log_debug!(
                "[Install] Replacing existing symlink {}",
                link.display().to_string().yellow()
            );
            fs::remove_file(&link)?;
        }
        Ok(_) => return Err(InstallError::InstallConflict(link)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    symlink(&target, &link)?;
    log_info!(
        "[Install] {} -> {}",
        link.display().to_string().cyan(),
        target.display().to_string().green()
    );
    Ok(link)
}

#[cfg(not(unix))]
pub fn link_bin(
    _paths: &InstallPaths,
    _tool: &str,
    _version: &str,
    _bin_name: &str,
    _relative_bin_path: &str,
) -> Result<PathBuf> {
    use crate::libs::error::InstallError;
    use std::io;

    Err(InstallError::Io(io::Error::new(
        io::ErrorKind::Unsupported,
        "bin symlinks are only supported on Unix",
    )))
}

/// Full-tree mode: fetch the archive (or reuse the cached copy) and extract
/// it into `<opt>/<tool>/<version>`, optionally stripping a single leading
/// path component. Extraction is skipped when that directory already exists
/// and `force_download` is false; the opt tree is never mutated after a
/// completed extraction, so its existence means the version is in place.
///
/// # Returns
/// * `Ok(PathBuf)` with the versioned install directory.
pub fn install_tool(
    paths: &InstallPaths,
    url: &str,
    cache_file_name: &str,
    tool: &str,
    version: &str,
    strip_subdir: Option<&str>,
    force_download: bool,
    progress: Option<ProgressSink<'_>>,
) -> Result<PathBuf> {
    let archive_path = cache::fetch(paths, url, tool, cache_file_name, force_download, progress)?;

    let opt_dir = paths.tool_opt_dir(tool, version);
    if opt_dir.is_dir() && !force_download {
        log_debug!(
            "[Install] {} already extracted, skipping",
            opt_dir.display().to_string().green()
        );
        return Ok(opt_dir);
    }

    fs::create_dir_all(&opt_dir)?;
    archive::extract(&archive_path, &opt_dir, strip_subdir)?;
    log_info!(
        "[Install] Extracted {} {} to {}",
        tool.bold(),
        version,
        opt_dir.display().to_string().green()
    );
    Ok(opt_dir)
}

/// Single-binary mode: fetch the archive (or reuse the cached copy), pull
/// one named member straight into the bin directory and mark it executable.
/// Used for tools whose archive holds exactly one interesting file.
///
/// # Returns
/// * `Ok(PathBuf)` with the installed binary path.
pub fn install_single_binary(
    paths: &InstallPaths,
    url: &str,
    cache_dir_name: &str,
    cache_file_name: &str,
    member: &str,
    bin_name: &str,
    force_download: bool,
    progress: Option<ProgressSink<'_>>,
) -> Result<PathBuf> {
    let archive_path = cache::fetch(
        paths,
        url,
        cache_dir_name,
        cache_file_name,
        force_download,
        progress,
    )?;

    let dest = paths.bin_path(bin_name);
    archive::extract_member(&archive_path, member, &dest)?;
    make_executable(&dest)?;
    log_info!(
        "[Install] Installed {} to {}",
        bin_name.bold(),
        dest.display().to_string().green()
    );
    Ok(dest)
}
