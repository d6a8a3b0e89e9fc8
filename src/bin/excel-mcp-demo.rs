//! Prints example Excel MCP Server tool invocations.
use std::{io, process::ExitCode};

use clap::Parser;
use excel_mcp_companion::{
    cli::{run_demo_command, DemoArgs, RuntimeExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = DemoArgs::parse();
    let mut stdout = io::stdout().lock();
    run_demo_command(&args, &mut stdout)
}
