use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::debug;

use crate::error::{Error, Result};

pub const USAGE: &str = "Usage: ipp-parse [--help]
Reads IPPcode24 source code from standard input, checks it for lexical and \
syntactic correctness and prints its XML representation to standard output.";

#[derive(Parser, Debug)]
#[command(name = "ipp-parse", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Print usage and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Cli {
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| Error::Usage(e.to_string().trim_end().to_owned()))
    }
}

/// Translates stdin to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    crate::translate(stdin, stdout)
}

/// Parses the process arguments, runs, and maps the outcome to an exit code.
pub fn execute() -> ExitCode {
    let res = Cli::from_args(std::env::args_os()).and_then(|cli| {
        debug!(?cli, "arguments parsed");
        run(&cli)
    });

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(code = e.exit_code(), "aborting");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::from_args(["ipp-parse"]).unwrap();
        assert!(!cli.help);
    }

    #[test]
    fn help_flag() {
        let cli = Cli::from_args(["ipp-parse", "--help"]).unwrap();
        assert!(cli.help);
    }

    #[test]
    fn rejects_other_arguments() {
        for args in [
            &["ipp-parse", "-h"][..],
            &["ipp-parse", "--version"],
            &["ipp-parse", "--source=x"],
            &["ipp-parse", "file.src"],
            &["ipp-parse", "--help", "--help"],
            &["ipp-parse", "--help", "extra"],
        ] {
            let err = Cli::from_args(args.iter().copied()).unwrap_err();
            assert_eq!(err.exit_code(), 10, "{args:?}");
        }
    }
}
