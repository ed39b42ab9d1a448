// Maps the host operating system and CPU architecture onto the spelling a
// particular tool's release naming scheme expects. Release archives for the
// same platform are named wildly inconsistently across vendors ("darwin" vs
// "macos", "amd64" vs "x86_64"), so each caller passes a "flavor" string
// listing the spellings its tool uses, and the resolver honors it.

/// Returns the host operating system in its uname-style vendor spelling
/// (`darwin`, `linux`, `windows`). This is the raw token that `resolve_os`
/// takes as input; Rust reports macOS as "macos", which no release archive
/// uses unasked, so it is mapped back to "darwin" here.
pub fn host_os() -> String {
    match std::env::consts::OS {
        "macos" => "darwin".to_string(),
        other => other.to_lowercase(),
    }
}

/// Returns the host CPU architecture as reported by the toolchain
/// (`x86_64`, `aarch64`, ...), lowercased.
pub fn host_arch() -> String {
    std::env::consts::ARCH.to_lowercase()
}

/// Resolves an operating system token against a flavor set.
///
/// The flavor is a comma-separated list of the spellings the caller's tool
/// uses in its release file names. Only two renames exist: `darwin` becomes
/// `macos` and `windows` becomes `win32`, and each happens only when the
/// flavor set asks for that spelling. Everything else passes through
/// lowercased, so the same function yields `darwin` for one tool and
/// `macos` for another.
///
/// # Arguments
/// * `raw`: The OS identifier reported by the host (e.g. "darwin").
/// * `flavor`: Comma-separated spellings wanted by the caller
///   (e.g. "linux,macos").
///
/// # Returns
/// * `String`: The token to substitute into the tool's URL template. There
///   are no error cases; unrecognized systems degrade to pass-through and
///   callers that only support specific platforms reject the rest
///   themselves.
pub fn resolve_os(raw: &str, flavor: &str) -> String {
    let system = raw.to_lowercase();
    if system == "darwin" && flavor_contains(flavor, "macos") {
        "macos".to_string()
    } else if system == "windows" && flavor_contains(flavor, "win32") {
        "win32".to_string()
    } else {
        system
    }
}

/// Resolves a CPU architecture token against a flavor set.
///
/// Defaults follow the most common release naming: `x86_64` becomes `amd64`
/// unless the flavor asks for `x86_64` verbatim, and the ARM spellings
/// (`aarch64`, `arm64`) fold to `aarch64` unless the flavor asks for
/// `arm64`. Anything else passes through lowercased.
pub fn resolve_arch(raw: &str, flavor: &str) -> String {
    let arch = raw.to_lowercase();
    match arch.as_str() {
        "x86_64" => {
            if flavor_contains(flavor, "x86_64") {
                "x86_64".to_string()
            } else {
                "amd64".to_string()
            }
        }
        // "arm64" wins when a flavor lists both ARM spellings.
        "aarch64" | "arm64" => {
            if flavor_contains(flavor, "arm64") {
                "arm64".to_string()
            } else {
                "aarch64".to_string()
            }
        }
        _ => arch,
    }
}

fn flavor_contains(flavor: &str, wanted: &str) -> bool {
    flavor.split(',').any(|token| token.trim() == wanted)
}
