//! Interactive driver: hash each line read from stdin and print its digest
//! and art.

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use vihash::{Digest, HashAlg, Mode};

const USAGE: &str = "Usage: vihash [ALGORITHM] [--mode symbols|color-symbols|colors]";

/// Parsed command line: hash algorithm and render mode.
///
/// Returns `Ok(None)` when help was requested.
fn parse_args() -> Result<Option<(HashAlg, Mode)>, String> {
    let mut algorithm = HashAlg::default();
    let mut mode = Mode::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--mode" => {
                let id = args.next().ok_or("--mode requires a value")?;
                mode = Mode::new(&id).map_err(|err| format!("{err}: '{id}'"))?;
            }
            id => {
                algorithm = HashAlg::new(id).map_err(|err| format!("{err}: '{id}'"))?;
            }
        }
    }

    Ok(Some((algorithm, mode)))
}

fn main() -> ExitCode {
    let (algorithm, mode) = match parse_args() {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        };

        match Digest::new(algorithm, line.as_bytes()) {
            Ok(digest) => {
                println!("{algorithm}: {digest}");
                println!("{}", digest.to_art(mode));
            }
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
