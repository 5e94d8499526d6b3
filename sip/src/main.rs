//! `sip` — inspect the test declarations of a Sip package.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sip::exit_codes;
use sip::io::package::package_snapshot;
use sip::logging;
use sip::sipfile::Sipfile;

#[derive(Parser)]
#[command(
    name = "sip",
    version,
    about = "Resolve the static and generated tests declared in a Sipfile"
)]
struct Cli {
    /// Package root directory.
    #[arg(long, global = true, default_value = ".")]
    package: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every declared test with its origin.
    Tests {
        /// Print the loaded Sipfile as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Report input files whose tests the Sipfile does not declare.
    Check,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Tests { json } => cmd_tests(&cli.package, json),
        Command::Check => cmd_check(&cli.package),
    }
}

fn cmd_tests(root: &Path, json: bool) -> Result<i32> {
    let sipfile = Sipfile::load(root)?;
    if json {
        let payload = serde_json::to_string_pretty(&sipfile).context("serialize json")?;
        println!("{payload}");
        return Ok(exit_codes::OK);
    }
    for test in &sipfile.static_tests {
        println!("static {test}");
    }
    for (test, recipe) in &sipfile.gen_tests {
        if recipe.args.is_empty() {
            println!("gen {test} {}", recipe.generator);
        } else {
            println!("gen {test} {} {}", recipe.generator, recipe.args);
        }
    }
    Ok(exit_codes::OK)
}

fn cmd_check(root: &Path) -> Result<i32> {
    let files = package_snapshot(root)?;
    let sipfile = Sipfile::load_with_files(root, &files)?;
    let unspecified = sipfile.unspecified_tests(files.files());
    if unspecified.is_empty() {
        return Ok(exit_codes::OK);
    }
    for test in &unspecified {
        println!("test `{test}` is specified neither as static nor as generated");
    }
    Ok(exit_codes::UNSPECIFIED_TESTS)
}
