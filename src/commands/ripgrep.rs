// Installs ripgrep from its GitHub release archives. The archives wrap
// everything in a version-named folder, so extraction strips that folder
// and the `rg` binary ends up at the top of the versioned install
// directory.

use crate::commands::show_progress;
use crate::libs::error::{InstallError, Result};
use crate::libs::paths::InstallPaths;
use crate::libs::{install, platform};

/// The pinned ripgrep version installed when `--version` is not given.
pub const DEFAULT_VERSION: &str = "14.1.0";

/// Downloads, extracts and links ripgrep, then prints the installed path.
pub fn run(paths: &InstallPaths, version: &str, force_download: bool) -> Result<()> {
    let system = platform::resolve_os(&platform::host_os(), "linux,darwin");
    let arch = platform::resolve_arch(&platform::host_arch(), "x86_64,aarch64");

    // ripgrep names its archives after the full target triple.
    let triple = match system.as_str() {
        "linux" => "unknown-linux",
        "darwin" => "apple-darwin",
        "windows" => "pc-windows",
        _ => {
            return Err(InstallError::PlatformUnsupported {
                tool: "ripgrep".to_string(),
                os: system,
                arch,
            });
        }
    };

    let cache_file_name = format!("ripgrep-{version}-{arch}-{triple}.tar.gz");
    let download_url = format!(
        "https://github.com/BurntSushi/ripgrep/releases/download/{version}/{cache_file_name}"
    );
    let subdir = format!("ripgrep-{version}-{arch}-{triple}");

    let mut progress = show_progress;
    install::install_tool(
        paths,
        &download_url,
        &cache_file_name,
        "ripgrep",
        version,
        Some(&subdir),
        force_download,
        Some(&mut progress),
    )?;
    let dest_bin_path = install::link_bin(paths, "ripgrep", version, "rg", "rg")?;

    println!(
        "Ripgrep v{version} for {system} ({arch}) has been installed to {}",
        dest_bin_path.display()
    );
    Ok(())
}
