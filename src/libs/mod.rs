// Shared helper library behind the per-tool commands. The pipeline runs
// left to right: platform -> cache -> archive -> install, with `paths`
// supplying the layout and `error` the failure taxonomy for all of them.

// Extracts zip and tar archives, whole or one member at a time.
pub mod archive;
// Downloads release archives at most once per file.
pub mod cache;
// The error type every helper returns.
pub mod error;
// Publishes extracted payloads on $PATH.
pub mod install;
// Resolves the ~/.local install layout.
pub mod paths;
// Maps host OS/arch onto each tool's naming scheme.
pub mod platform;
