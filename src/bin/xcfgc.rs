// xcfg translator
//
//  Copyright (C) 2026 The xcfg Authors.
//
//  This file is part of xcfg.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! This is the configuration translator.
//!
//! `xcfgc` reads an XML declaration document and writes its translation
//!   into the target configuration language
//!     (see [`xcfg::translate`]).
//! Input is read from `input.xml` in the working directory unless
//!   another path is given with `--input`;
//!     the path `-` reads standard input.

extern crate xcfg;

use getopts::{Fail, Options};
use std::{
    env,
    error::Error,
    fmt::{self, Display},
    fs,
    io::{self, Read},
};
use tracing::{debug, level_filters::LevelFilter};
use xcfg::TranslateError;

/// Input path used when none is provided.
const DEFAULT_INPUT: &str = "input.xml";

/// Types of commands
#[derive(Debug, PartialEq)]
enum Command {
    Translate {
        input: Input,
        output: String,
        verbose: bool,
    },
    Usage,
}

/// Source of the document to translate.
#[derive(Debug, PartialEq)]
enum Input {
    Stdin,
    Path(String),
}

impl Input {
    fn read(&self) -> Result<String, XcfgcError> {
        match self {
            Self::Stdin => {
                let mut src = String::new();
                io::stdin()
                    .read_to_string(&mut src)
                    .map_err(|e| XcfgcError::Io("<stdin>".into(), e))?;

                Ok(src)
            }

            Self::Path(path) => fs::read_to_string(path)
                .map_err(|e| XcfgcError::Io(path.clone(), e)),
        }
    }
}

impl From<String> for Input {
    fn from(path: String) -> Self {
        if path == "-" {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }
}

/// Translate `input`,
///   writing to the provided destination path.
///
/// Nothing is written if translation fails.
fn translate(input: &Input, dest_path: &str) -> Result<(), XcfgcError> {
    let src = input.read()?;
    debug!(?input, bytes = src.len(), "read input");

    let out = xcfg::translate(&src)?;

    fs::write(dest_path, out)
        .map_err(|e| XcfgcError::Io(dest_path.to_string(), e))?;
    debug!(dest_path, "wrote output");

    Ok(())
}

/// Install a stderr log subscriber.
///
/// Only warnings are logged unless `verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

/// Entrypoint for the translator
pub fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("xcfgc", String::as_str);
    let opts = get_opts();
    let usage =
        opts.usage(&format!("Usage: {} [OPTIONS] OUTPUT", program));

    match parse_options(opts, &args) {
        Ok(Command::Translate {
            input,
            output,
            verbose,
        }) => {
            init_logging(verbose);

            if let Err(e) = translate(&input, &output) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Ok(Command::Usage) => {
            println!("{}", usage);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("{}", e);
            println!("{}", usage);
            std::process::exit(exitcode::USAGE);
        }
    }
}

/// Get 'Options'
fn get_opts() -> Options {
    let mut opts = Options::new();
    opts.optopt(
        "i",
        "input",
        "read input from FILE (`-` for stdin; default `input.xml`)",
        "FILE",
    );
    opts.optflag("v", "verbose", "log translation progress to stderr");
    opts.optflag("h", "help", "print this help menu");

    opts
}

/// Option parser
fn parse_options(opts: Options, args: &[String]) -> Result<Command, Fail> {
    let matches = opts.parse(args.iter().skip(1))?;

    if matches.opt_present("h") {
        return Ok(Command::Usage);
    }

    let output = match matches.free.len() {
        0 => return Err(Fail::OptionMissing(String::from("OUTPUT"))),
        1 => matches.free[0].clone(),
        _ => return Err(Fail::UnrecognizedOption(matches.free[1].clone())),
    };

    let input = matches
        .opt_str("i")
        .unwrap_or_else(|| DEFAULT_INPUT.to_string())
        .into();

    Ok(Command::Translate {
        input,
        output,
        verbose: matches.opt_present("v"),
    })
}

/// Translator (`xcfgc`) error.
#[derive(Debug)]
enum XcfgcError {
    /// I/O failure on the given path.
    Io(String, io::Error),
    Translate(TranslateError),
}

impl From<TranslateError> for XcfgcError {
    fn from(e: TranslateError) -> Self {
        Self::Translate(e)
    }
}

impl Display for XcfgcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "{path}: {e}"),
            Self::Translate(e) => Display::fmt(e, f),
        }
    }
}

impl Error for XcfgcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Translate(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("program")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_options_help() {
        let result = parse_options(get_opts(), &args(&["-h"]));

        assert_eq!(result, Ok(Command::Usage));
    }

    #[test]
    fn parse_options_help_long() {
        let result = parse_options(get_opts(), &args(&["--help", "out"]));

        assert_eq!(result, Ok(Command::Usage));
    }

    #[test]
    fn parse_options_invalid() {
        match parse_options(get_opts(), &args(&["-q"])) {
            Err(Fail::UnrecognizedOption(_)) => {}
            _ => panic!("Invalid option not caught"),
        }
    }

    #[test]
    fn parse_options_missing_output() {
        match parse_options(get_opts(), &args(&[])) {
            Err(Fail::OptionMissing(message)) => {
                assert_eq!("OUTPUT", message);
            }
            _ => panic!("Missing output not caught"),
        }
    }

    #[test]
    fn parse_options_too_many_args() {
        match parse_options(get_opts(), &args(&["out", "extra"])) {
            Err(Fail::UnrecognizedOption(arg)) => assert_eq!("extra", arg),
            _ => panic!("Extra argument not caught"),
        }
    }

    #[test]
    fn parse_options_default_input() {
        assert_eq!(
            parse_options(get_opts(), &args(&["out.conf"])),
            Ok(Command::Translate {
                input: Input::Path("input.xml".into()),
                output: "out.conf".into(),
                verbose: false,
            }),
        );
    }

    #[test]
    fn parse_options_input_path_and_verbose() {
        assert_eq!(
            parse_options(
                get_opts(),
                &args(&["-v", "--input", "src.xml", "out.conf"])
            ),
            Ok(Command::Translate {
                input: Input::Path("src.xml".into()),
                output: "out.conf".into(),
                verbose: true,
            }),
        );
    }

    #[test]
    fn parse_options_stdin_input() {
        assert_eq!(
            parse_options(get_opts(), &args(&["-i", "-", "out.conf"])),
            Ok(Command::Translate {
                input: Input::Stdin,
                output: "out.conf".into(),
                verbose: false,
            }),
        );
    }
}
