// Register application subcommands. Each tool module carries its pinned
// default version and the URL/file-name template of its release archives;
// the shared pipeline in `libs` does everything else.

// ripgrep, published as `rg` via the opt tree.
pub mod ripgrep;
// shellcheck, a single binary pulled out of its tar.xz.
pub mod shellcheck;
// terraform, from HashiCorp's release zips.
pub mod terraform;
// terraform-ls, same release scheme as terraform.
pub mod terraform_ls;
// Displays the binup version.
pub mod version;

/// Download progress hook shared by all tool commands: writes the completed
/// percentage to stderr, rewriting the same line. Quiet when the server
/// sends no Content-Length.
pub(crate) fn show_progress(transferred: u64, _block_size: u64, total_size: Option<u64>) {
    if let Some(total) = total_size.filter(|t| *t > 0) {
        eprint!("{:.2}\r", transferred as f64 / total as f64 * 100.0);
    }
}
