//! Contains the command-line driver of the Rill scanner: it reads a script file or interactive
//! prompt lines, prints every scanned token, and selects the process exit code.

use std::{
    cell::Cell,
    fmt::Display,
    fs::File,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use rill_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::SourceFile,
};
use rill_lexical::token_sequence::TokenSequence;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "rill",
    about = "Rill programming language scanner.",
    author = "Rill Team"
)]
pub struct Argument {
    /// The script file to scan; reads lines from the standard input when omitted.
    pub file: Option<PathBuf>,
}

/// The exit code used when the scanned script contained malformed lexemes.
const DATA_ERROR_EXIT_CODE: u8 = 65;

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Scans the source file and prints every token, one per line, in the
/// `{kind} {lexeme} {literal}` rendering.
fn scan_and_print(source_file: &Arc<SourceFile>, printer: &Printer) {
    let token_sequence = TokenSequence::scan(source_file, printer);

    for token in token_sequence.iter() {
        println!("{token}");
    }
}

fn run_file(path: PathBuf) -> ExitCode {
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(error) => {
            let msg = Message::new(Severity::Error, format!("{}: {error}", path.display()));

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let source_file = match SourceFile::load(file, path.clone()) {
        Ok(source_file) => source_file,
        Err(error) => {
            let msg = Message::new(Severity::Error, format!("{}: {error}", path.display()));

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer::new();
    scan_and_print(&source_file, &printer);

    if printer.has_printed() {
        ExitCode::from(DATA_ERROR_EXIT_CODE)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_prompt() -> ExitCode {
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(error) => {
                let msg = Message::new(Severity::Error, error.to_string());

                eprintln!("{msg}");
                return ExitCode::FAILURE;
            }
        }

        let source_file = match SourceFile::temp(line.trim_end_matches(&['\n', '\r'][..])) {
            Ok(source_file) => source_file,
            Err(error) => {
                let msg = Message::new(Severity::Error, error.to_string());

                eprintln!("{msg}");
                return ExitCode::FAILURE;
            }
        };

        // a fresh printer per prompt line: the had-error state resets between lines
        let printer = Printer::new();
        scan_and_print(&source_file, &printer);
    }
}

/// Runs the driver with the given arguments.
#[must_use]
pub fn run(argument: Argument) -> ExitCode {
    argument.file.map_or_else(run_prompt, run_file)
}
