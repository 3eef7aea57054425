mod agents;
mod cli;
mod error;
mod utils;
mod version;
mod workflow;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use colored::Colorize;
use error::BumpError;
use std::process;
use workflow::BumpOptions;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    if cli.verbose {
        unsafe {
            std::env::set_var(utils::VERBOSE_ENV, "1");
        }
    }

    let options = BumpOptions {
        dry_run: cli.dry_run,
        strict: cli.strict,
        branch: cli.branch,
        show_hints: !cli.no_hints,
    };

    let result = workflow::execute_bump(&cli.path, cli.new_version.as_deref(), &options);

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if e.is_usage_error() {
            print_usage(&e);
        }
        process::exit(1);
    }
}

fn print_usage(error: &BumpError) {
    if matches!(error, BumpError::InvalidFormat(_)) {
        eprintln!("Version should be in format: X.Y.Z or X.Y.Z-beta.1");
    }
    eprintln!("Usage: tauri-bump <version>");
    eprintln!("Example: tauri-bump 0.2.0");
}
