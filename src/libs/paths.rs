// Resolves the on-disk layout every other module works against. The original
// helpers reached for the home directory wherever they happened to need it;
// here the whole layout lives in one `InstallPaths` value that is built once
// in `main` and threaded through every call, so tests can point it at a
// throwaway directory instead of the real ~/.local.

// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;
// Our custom logging macros.
use crate::log_debug;
// `std::path::PathBuf` provides an OS-agnostic way to build and manipulate file paths.
use std::io;
use std::path::PathBuf;

use crate::libs::error::{InstallError, Result};

/// The three roots of the install layout, all anchored under `<home>/.local`:
///
/// - `cache_root`: downloaded archives, one subdirectory per tool
/// - `opt_root`: extracted payloads, one subdirectory per (tool, version)
/// - `bin_root`: stable-named symlinks, the single entry point on `$PATH`
#[derive(Debug, Clone)]
pub struct InstallPaths {
    pub home: PathBuf,
    pub cache_root: PathBuf,
    pub opt_root: PathBuf,
    pub bin_root: PathBuf,
}

impl InstallPaths {
    /// Derives the standard layout from an explicit home directory.
    ///
    /// # Arguments
    /// * `home`: The directory that plays the role of `~`. Tests pass a
    ///   temporary directory here; production code uses `discover()`.
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let local = home.join(".local");
        InstallPaths {
            cache_root: local.join("cache"),
            opt_root: local.join("opt"),
            bin_root: local.join("bin"),
            home,
        }
    }

    /// Locates the current user's home directory and derives the layout
    /// from it.
    ///
    /// # Returns
    /// * `Ok(InstallPaths)` anchored at the real home directory.
    /// * An error if the home directory cannot be determined, since without
    ///   it there is nowhere sensible to install anything.
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            InstallError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the home directory",
            ))
        })?;
        let paths = Self::from_home(home);
        log_debug!(
            "[Paths] Install layout anchored at {}",
            paths.home.display().to_string().cyan()
        );
        Ok(paths)
    }

    /// Cache directory for one tool: `<cache root>/<tool>`.
    /// Created lazily by the cache manager, never pruned.
    pub fn tool_cache_dir(&self, tool: &str) -> PathBuf {
        self.cache_root.join(tool)
    }

    /// Versioned install directory for one tool: `<opt root>/<tool>/<version>`.
    /// Multiple versions of the same tool coexist side by side.
    pub fn tool_opt_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.opt_root.join(tool).join(version)
    }

    /// Bin directory entry for a command name: `<bin root>/<name>`.
    pub fn bin_path(&self, name: &str) -> PathBuf {
        self.bin_root.join(name)
    }
}
