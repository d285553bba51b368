use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use picolang::config::{DEFAULT_MAX_LEXEME_LEN, DEFAULT_MAX_VARIABLES};
use picolang::Limits;

/// Runs a picolang program
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to execute
    file: PathBuf,

    /// Maximum number of distinct variables
    #[arg(long, default_value_t = DEFAULT_MAX_VARIABLES)]
    max_vars: usize,

    /// Maximum length of an identifier or number
    #[arg(long, default_value_t = DEFAULT_MAX_LEXEME_LEN)]
    max_lexeme_len: usize,

    /// Print the token stream instead of running the program
    #[arg(long)]
    tokens: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<()> {
    let source = read_source(&args.file)?;
    let limits = Limits {
        max_variables: args.max_vars,
        max_lexeme_len: args.max_lexeme_len,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.tokens {
        for token in picolang::tokenize(&source, limits)? {
            writeln!(out, "{}", token)?;
        }
        return Ok(());
    }

    if args.verbose {
        eprintln!("Running {}...", args.file.display());
    }

    let symbols = picolang::run(&source, limits, &mut out)?;

    if args.verbose {
        eprintln!(
            "Finished. {} of {} variables declared.",
            symbols.len(),
            symbols.limit()
        );
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}
