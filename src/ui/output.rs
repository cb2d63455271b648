//! Output and exit status for the road status checker.

use std::process::ExitCode;

/// Printed when no road name was given on the command line.
pub const MISSING_ROAD_NAME: &str = "Road name is not specified";

/// Prints the lookup message and maps its validity to the process exit code.
pub fn report(message: &str, is_valid: bool) -> ExitCode {
    println!("{}", message);
    exit_code(is_valid)
}

pub fn exit_code(is_valid: bool) -> ExitCode {
    if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn report_missing_road_name() -> ExitCode {
    eprintln!("{}", MISSING_ROAD_NAME);
    ExitCode::FAILURE
}
