// Installs shellcheck. Its tar.xz carries a whole folder but only the
// `shellcheck` binary matters, so this uses single-binary mode: one member
// straight into the bin directory, no opt tree and no symlink.

use crate::commands::show_progress;
use crate::libs::error::Result;
use crate::libs::paths::InstallPaths;
use crate::libs::{install, platform};

/// The pinned shellcheck version installed when `--version` is not given.
pub const DEFAULT_VERSION: &str = "0.10.0";

/// Downloads shellcheck and extracts its binary, then prints the installed
/// path.
pub fn run(paths: &InstallPaths, version: &str, force_download: bool) -> Result<()> {
    let system = platform::resolve_os(&platform::host_os(), "linux,darwin");
    let arch = platform::resolve_arch(&platform::host_arch(), "x86_64,aarch64");

    let cache_file_name = format!("shellcheck-v{version}.{system}.{arch}.tar.xz");
    let download_url = format!(
        "https://github.com/koalaman/shellcheck/releases/download/v{version}/{cache_file_name}"
    );
    let path_in_archive = format!("shellcheck-v{version}/shellcheck");

    let mut progress = show_progress;
    let dest_bin_path = install::install_single_binary(
        paths,
        &download_url,
        "shellcheck",
        &cache_file_name,
        &path_in_archive,
        "shellcheck",
        force_download,
        Some(&mut progress),
    )?;

    println!(
        "Shellcheck v{version} for {system} ({arch}) has been installed to {}",
        dest_bin_path.display()
    );
    Ok(())
}
