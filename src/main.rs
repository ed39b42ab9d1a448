mod cli;
mod commands;
mod libs;
mod logger;

use clap::Parser;
use cli::cmd_enums::{Cli, Commands};
use colored::Colorize;
use libs::error::Result;
use libs::paths::InstallPaths;
use std::error::Error;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    if let Err(err) = dispatch(cli.command) {
        crate::log_error!("{err}");
        if let Some(source) = err.source() {
            crate::log_error!("caused by: {source}");
        }
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Ripgrep { version, force } => {
            let paths = InstallPaths::discover()?;
            commands::ripgrep::run(&paths, &version, force)
        }
        Commands::Shellcheck { version, force } => {
            let paths = InstallPaths::discover()?;
            commands::shellcheck::run(&paths, &version, force)
        }
        Commands::Terraform { version, force } => {
            let paths = InstallPaths::discover()?;
            commands::terraform::run(&paths, &version, force)
        }
        Commands::TerraformLs { version, force } => {
            let paths = InstallPaths::discover()?;
            commands::terraform_ls::run(&paths, &version, force)
        }
    }
}
