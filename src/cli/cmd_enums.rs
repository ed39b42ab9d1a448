use crate::commands::{ripgrep, shellcheck, terraform, terraform_ls};
use clap::{Parser, Subcommand};

/// Defines the command-line interface (CLI) for 'binup'.
/// `#[derive(Parser)]` automatically generates argument parsing code via `clap`.
#[derive(Parser)]
#[command(name = "binup")]
#[command(about = "Download pinned developer CLI tools into ~/.local", long_about = None)]
pub struct Cli {
    /// Enables detailed debug output for troubleshooting.
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Defines available subcommands, one per tool plus `version`.
    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per supported tool. Every tool takes the same pair of
/// options: a version to install (defaulting to the pinned one) and a flag
/// to force a re-download of the cached archive.
#[derive(Subcommand)]
pub enum Commands {
    /// Print version information.
    Version,
    /// Install ripgrep and publish it as `rg`.
    Ripgrep {
        /// Version of ripgrep to download.
        #[arg(long, default_value = ripgrep::DEFAULT_VERSION)]
        version: String,
        /// Force re-download of the file.
        #[arg(long)]
        force: bool,
    },
    /// Install the shellcheck binary.
    Shellcheck {
        /// Version of shellcheck to download.
        #[arg(long, default_value = shellcheck::DEFAULT_VERSION)]
        version: String,
        /// Force re-download of the file.
        #[arg(long)]
        force: bool,
    },
    /// Install terraform.
    Terraform {
        /// Version of terraform to download.
        #[arg(long, default_value = terraform::DEFAULT_VERSION)]
        version: String,
        /// Force re-download of the file.
        #[arg(long)]
        force: bool,
    },
    /// Install the terraform language server.
    TerraformLs {
        /// Version of terraform-ls to download.
        #[arg(long, default_value = terraform_ls::DEFAULT_VERSION)]
        version: String,
        /// Force re-download of the file.
        #[arg(long)]
        force: bool,
    },
}
