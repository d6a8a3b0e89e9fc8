//! Smoke-tests that the Excel MCP Server advertises its new tools.
use std::{io, process::ExitCode};

use clap::Parser;
use excel_mcp_companion::{
    cli::{run_check_command, CheckArgs, RuntimeExit},
    lib::telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<bool, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = CheckArgs::parse();
    let mut stdout = io::stdout();
    run_check_command(&args, &mut stdout).await
}
