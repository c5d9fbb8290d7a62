//! stylecast: a utility-first styling compiler.
//!
//! The library surface is the compilation pipeline (`Compiler`), the
//! standalone conflict-aware class merger (`merge`), and the scanner and
//! config collaborators feeding them. The CLI wraps these behind `scan`
//! and `build` subcommands.

pub mod arbitrary;
pub mod compiler;
pub mod config;
pub mod merge;
pub mod resolvers;
pub mod scanner;
pub mod variants;

pub use compiler::{CacheStats, Compiler, CompilerOptions};
pub use config::Config;
pub use merge::{Merger, merge};

use log::info;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scan {
        inputs: Vec<String>,
        ignore: Vec<String>,
    },
    Build {
        inputs: Vec<String>,
        out: Option<String>,
        minify: bool,
        config: Option<String>,
        ignore: Vec<String>,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    pub message: String,
}

pub fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Scan { inputs, ignore } => run_scan(inputs, ignore),
        Command::Build {
            inputs,
            out,
            minify,
            config,
            ignore,
        } => run_build(inputs, out, minify, config, ignore),
        Command::Help => {
            print_help();
            Ok(())
        }
    }
}

pub fn run_from_env() -> Result<(), CliError> {
    let command = parse_args(env::args().skip(1))?;
    run(command)
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let Some(cmd) = iter.next() else {
        return Ok(Command::Help);
    };

    match cmd.as_str() {
        "scan" => parse_scan_args(iter.collect()),
        "build" => parse_build_args(iter.collect()),
        "-h" | "--help" | "help" => Ok(Command::Help),
        _ => Err(CliError {
            message: format!("unknown command: {}", cmd),
        }),
    }
}

fn parse_scan_args(args: Vec<String>) -> Result<Command, CliError> {
    let mut inputs = Vec::new();
    let mut ignore = Vec::new();
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "--ignore" | "-I" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "scan requires a value for --ignore".to_string(),
                    });
                }
                ignore.push(args[idx].clone());
            }
            value => {
                inputs.push(value.to_string());
            }
        }
        idx += 1;
    }

    if inputs.is_empty() {
        return Err(CliError {
            message: "scan requires at least one path or glob pattern".to_string(),
        });
    }

    Ok(Command::Scan { inputs, ignore })
}

fn parse_build_args(args: Vec<String>) -> Result<Command, CliError> {
    let mut inputs = Vec::new();
    let mut out = None;
    let mut minify = false;
    let mut config = None;
    let mut ignore = Vec::new();
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "--out" | "--output" | "-o" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "build requires a value for --output".to_string(),
                    });
                }
                out = Some(args[idx].clone());
            }
            "--config" | "-c" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "build requires a value for --config".to_string(),
                    });
                }
                config = Some(args[idx].clone());
            }
            "--ignore" | "-I" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "build requires a value for --ignore".to_string(),
                    });
                }
                ignore.push(args[idx].clone());
            }
            "--minify" => {
                minify = true;
            }
            value => {
                inputs.push(value.to_string());
            }
        }
        idx += 1;
    }

    if inputs.is_empty() {
        return Err(CliError {
            message: "build requires at least one path or glob pattern".to_string(),
        });
    }

    Ok(Command::Build {
        inputs,
        out,
        minify,
        config,
        ignore,
    })
}

fn run_scan(inputs: Vec<String>, ignore: Vec<String>) -> Result<(), CliError> {
    let mut result =
        scanner::scan_globs_with_ignore(&inputs, &ignore).map_err(|err| CliError {
            message: err.message,
        })?;

    result.classes.sort();
    result.classes.dedup();

    for class in &result.classes {
        println!("{}", class);
    }

    info!(
        "scanned {} files, found {} classes",
        result.files_scanned,
        result.classes.len()
    );

    Ok(())
}

fn run_build(
    inputs: Vec<String>,
    out: Option<String>,
    minify: bool,
    config_path: Option<String>,
    ignore: Vec<String>,
) -> Result<(), CliError> {
    let mut effective_ignore = ignore;
    if let Some(out_path) = out.as_ref() {
        // The emitted stylesheet must not feed its own classes back in.
        effective_ignore.push(out_path.clone());
    }

    let mut scan = scanner::scan_globs_with_ignore(&inputs, &effective_ignore).map_err(|err| {
        CliError {
            message: err.message,
        }
    })?;
    scan.classes.sort();
    scan.classes.dedup();

    let config = match config_path {
        Some(path) => config::load(Path::new(&path)).map_err(|err| CliError {
            message: err.message,
        })?,
        None => Config::default(),
    };

    let options = CompilerOptions {
        cache_enabled: true,
        minify,
    };
    let mut compiler = Compiler::new(config, options);
    let css = compiler.compile(&scan.classes);

    if let Some(out_path) = out {
        fs::write(&out_path, &css).map_err(|err| CliError {
            message: format!("failed to write output {}: {}", out_path, err),
        })?;
    } else {
        print!("{}", css);
    }

    info!(
        "scanned {} files, compiled {} classes",
        scan.files_scanned,
        scan.classes.len()
    );

    Ok(())
}

fn print_help() {
    println!("stylecast");
    println!();
    println!("USAGE:");
    println!("  stylecast scan [--ignore <glob>] <glob...>");
    println!(
        "  stylecast build [--output <path>] [--minify] [--config <path>] [--ignore <glob>] <glob...>"
    );
    println!();
    println!("EXAMPLES:");
    println!("  stylecast scan \"src/**/*.{{html,tsx}}\"");
    println!("  stylecast build --output dist/app.css \"src/**/*.{{html,tsx}}\"");
    println!("  stylecast build -c stylecast.toml --minify \"src/**/*.{{html,tsx}}\"");
    println!("  stylecast build -I \"**/generated/**\" \"src/**/*.{{html,tsx}}\"");
}
