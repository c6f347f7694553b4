#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    batterytech_cli::main_entry()
}
