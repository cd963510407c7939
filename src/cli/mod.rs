// SPDX-FileCopyrightText: (C) 2025 Jason Ish <jason@codemonkey.net>
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::path::PathBuf;

use crate::cli::prelude::*;
use crate::prelude::*;

pub(crate) mod prelude;

/// Write the byte length of a file to an output file.
#[derive(Debug, Parser)]
#[command(name = "bytelen", version, about)]
pub struct Args {
    /// File to count the bytes of
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// File to write "bytes: <N>" to
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Don't print the progress line to stdout
    #[arg(short, long, env = "BYTELEN_QUIET", value_parser = BoolishValueParser::new())]
    pub quiet: bool,
}

pub fn progress_line(count: crate::count::ByteCount, input: &std::path::Path) -> String {
    format!("Read {} bytes from {}", count, input.display())
}

pub fn main(args: Args) -> Result<()> {
    let stdout = std::io::stdout();
    run(args, &mut stdout.lock())
}

/// Run the command, writing the progress line to `out` unless quiet.
pub fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let count = crate::count::run(&args.input, &args.output)?;
    info!(
        "Wrote byte count for {} to {}",
        args.input.display(),
        args.output.display()
    );
    if !args.quiet {
        writeln!(out, "{}", progress_line(count, &args.input))
            .and_then(|_| out.flush())
            .context("failed to write progress line")?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_args() {
        let args =
            Args::try_parse_from(["bytelen", "--input", "in.bin", "--output", "out.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.bin"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_parse_args_any_order() {
        let args = Args::try_parse_from([
            "bytelen", "--output", "out.txt", "-vv", "--input", "in.bin", "-q",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("in.bin"));
        assert_eq!(args.verbose, 2);
        assert!(args.quiet);
    }

    #[test]
    fn test_missing_input() {
        let err = Args::try_parse_from(["bytelen", "--output", "out.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_output() {
        let err = Args::try_parse_from(["bytelen", "--input", "in.bin"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_both() {
        let err = Args::try_parse_from(["bytelen"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_flag_requires_value() {
        assert!(Args::try_parse_from(["bytelen", "--output", "out.txt", "--input"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_main() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        let output = dir.path().join("output");
        std::fs::write(&input, vec![0u8; 4096]).unwrap();

        let args = Args {
            input: input.clone(),
            output: output.clone(),
            verbose: 0,
            quiet: false,
        };
        let mut out = Vec::new();
        run(args, &mut out).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "bytes: 4096\n");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Read 4096 bytes from {}\n", input.display())
        );
    }

    #[test]
    fn test_main_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        let output = dir.path().join("output");
        std::fs::write(&input, b"abc").unwrap();

        let args = Args {
            input,
            output: output.clone(),
            verbose: 0,
            quiet: true,
        };
        let mut out = Vec::new();
        run(args, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "bytes: 3\n");
    }

    #[test]
    fn test_quiet_from_env() {
        // The only test touching BYTELEN_QUIET, so it can't race with another.
        let parse = || Args::try_parse_from(["bytelen", "--input", "a", "--output", "b"]);
        for (value, expected) in [
            ("1", true),
            ("yes", true),
            ("true", true),
            ("on", true),
            ("0", false),
            ("no", false),
            ("false", false),
        ] {
            std::env::set_var("BYTELEN_QUIET", value);
            let args = parse();
            std::env::remove_var("BYTELEN_QUIET");
            assert_eq!(args.unwrap().quiet, expected, "BYTELEN_QUIET={value}");
        }
    }

    #[test]
    fn test_main_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            input: dir.path().join("missing"),
            output: dir.path().join("output"),
            verbose: 0,
            quiet: true,
        };
        let mut out = Vec::new();
        let err = run(args, &mut out).unwrap_err();
        assert!(err.downcast_ref::<CountError>().is_some());
        assert!(!dir.path().join("output").exists());
        assert!(out.is_empty());
    }

    #[test]
    fn test_progress_line() {
        let line = progress_line(crate::count::ByteCount::new(12), std::path::Path::new("a.txt"));
        assert_eq!(line, "Read 12 bytes from a.txt");
    }
}
