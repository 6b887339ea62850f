// SPDX-License-Identifier: MIT
//
// fpipes — pipe editor selections through deterministic text filters.
//
// This binary is the stand-in for an editor plugin host: the editor hands
// it the selected text on stdin, it applies one named filter, and writes
// the replacement text to stdout. The flow is:
//
//   stdin → registry lookup → filter construction → apply → stdout
//
// On any error nothing is written to stdout, a notice lands on stderr,
// and the exit code is nonzero — so a caller that substitutes the
// selection with our output will leave the original text unchanged.
//
// Usage:
//
//   fpipes <filter> [key=value ...]   apply a filter to stdin
//   fpipes --list                     list available filter names
//   fpipes --help                     show usage

use std::env;
use std::io::{self, Read, Write};
use std::process;

use fp_filters::options::Options;
use fp_filters::registry::Registry;
use fp_filters::FilterError;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let registry = Registry::with_builtins();

    match args.first().map(String::as_str) {
        None | Some("--help" | "-h") => {
            usage(&registry);
            if args.is_empty() {
                process::exit(2);
            }
        }
        Some("--list") => {
            for name in registry.names() {
                println!("{name}");
            }
        }
        Some(name) => match run(&registry, name, &args[1..]) {
            Ok(output) => {
                if let Err(err) = io::stdout().write_all(output.as_bytes()) {
                    log::error!("writing output: {err}");
                    process::exit(1);
                }
            }
            Err(err) => {
                log::error!("{name}: {err}");
                eprintln!("fpipes: {name}: {err}");
                process::exit(1);
            }
        },
    }
}

/// Build the named filter and apply it to all of stdin.
fn run(registry: &Registry, name: &str, opt_args: &[String]) -> Result<String, FilterError> {
    let opts = Options::parse(opt_args);
    let filter = registry.build(name, &opts)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    log::debug!("{name}: {} bytes in", input.len());

    let output = filter.apply(&input)?;
    log::debug!("{name}: {} bytes out", output.len());
    Ok(output)
}

fn usage(registry: &Registry) {
    eprintln!("usage: fpipes <filter> [key=value ...] < selection");
    eprintln!("       fpipes --list");
    eprintln!();
    eprintln!("filters:");
    for name in registry.names() {
        eprintln!("  {name}");
    }
}
