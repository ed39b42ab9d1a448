// Installs terraform from HashiCorp's release zips. The zip holds the
// binary at its root, so no subdirectory stripping is needed; the versioned
// install directory gets linked as `terraform`.

use crate::commands::show_progress;
use crate::libs::error::Result;
use crate::libs::paths::InstallPaths;
use crate::libs::{install, platform};

/// The pinned terraform version installed when `--version` is not given.
pub const DEFAULT_VERSION: &str = "1.9.3";

/// Downloads, extracts and links terraform, then prints the installed path.
pub fn run(paths: &InstallPaths, version: &str, force_download: bool) -> Result<()> {
    let system = platform::resolve_os(&platform::host_os(), "linux,darwin");
    // HashiCorp spells architectures the Go way.
    let arch = platform::resolve_arch(&platform::host_arch(), "amd64,arm64");

    let cache_file_name = format!("terraform_{version}_{system}_{arch}.zip");
    let download_url =
        format!("https://releases.hashicorp.com/terraform/{version}/{cache_file_name}");

    let mut progress = show_progress;
    install::install_tool(
        paths,
        &download_url,
        &cache_file_name,
        "terraform",
        version,
        None,
        force_download,
        Some(&mut progress),
    )?;
    let dest_bin_path = install::link_bin(paths, "terraform", version, "terraform", "terraform")?;

    println!(
        "Terraform version {version} for {system} ({arch}) has been installed to {}",
        dest_bin_path.display()
    );
    Ok(())
}
