// Command-line interface definitions.

// The clap parser and subcommand enums.
pub mod cmd_enums;
