// Installs the terraform language server. Identical release scheme to
// terraform itself, just a different product name.

use crate::commands::show_progress;
use crate::libs::error::Result;
use crate::libs::paths::InstallPaths;
use crate::libs::{install, platform};

/// The pinned terraform-ls version installed when `--version` is not given.
pub const DEFAULT_VERSION: &str = "0.34.2";

/// Downloads, extracts and links terraform-ls, then prints the installed
/// path.
pub fn run(paths: &InstallPaths, version: &str, force_download: bool) -> Result<()> {
    let system = platform::resolve_os(&platform::host_os(), "linux,darwin");
    let arch = platform::resolve_arch(&platform::host_arch(), "amd64,arm64");

    let cache_file_name = format!("terraform-ls_{version}_{system}_{arch}.zip");
    let download_url =
        format!("https://releases.hashicorp.com/terraform-ls/{version}/{cache_file_name}");

    let mut progress = show_progress;
    install::install_tool(
        paths,
        &download_url,
        &cache_file_name,
        "terraform-ls",
        version,
        None,
        force_download,
        Some(&mut progress),
    )?;
    let dest_bin_path =
        install::link_bin(paths, "terraform-ls", version, "terraform-ls", "terraform-ls")?;

    println!(
        "Terraform Language Server v{version} for {system} ({arch}) has been installed to {}",
        dest_bin_path.display()
    );
    Ok(())
}
