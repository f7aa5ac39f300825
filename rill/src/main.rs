use std::process::ExitCode;

use rill_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    rill_driver::run(argument)
}
