//! Command implementations shared by the `excel-mcp-demo` and `excel-mcp-check` binaries.
use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};

use crate::{
    check::{report, RegistrationCheck, ServerLaunch},
    config::{CheckConfig, CheckSection},
    demo,
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::{CheckArgs, DemoArgs};
pub use exit::RuntimeExit;
pub use profile::{discovery_candidates, resolve_server_launch, ServerSource, SERVER_PATH_ENV};

/// Print the examples selected by `args`.
pub fn run_demo_command(args: &DemoArgs, out: &mut impl Write) -> Result<(), RuntimeExit> {
    demo::run_demo(args.mode(), out)
        .and_then(|_| out.flush())
        .context("failed to write examples")
        .map_err(RuntimeExit::from_error)
}

/// Load configuration, run the registration check, and print the verdict.
///
/// Returns `Ok(false)` for a failed check; `Err` only for setup failures.
pub async fn run_check_command(
    _args: &CheckArgs,
    out: &mut impl Write,
) -> Result<bool, RuntimeExit> {
    report::write_banner(out)
        .context("failed to write report")
        .map_err(RuntimeExit::from_error)?;

    let (launch, settings) = match prepare_check() {
        Ok(prepared) => prepared,
        Err(err) => {
            if let Err(write_err) = report::write_verdict(out, false).and_then(|_| out.flush()) {
                warn!(target: "excel_mcp::check", error = %write_err, "Failed to write report");
            }
            return Err(RuntimeExit::from_error(err));
        }
    };

    let check = RegistrationCheck::new(launch, settings);
    let passed = check.run(out).await;

    report::write_verdict(out, passed)
        .and_then(|_| out.flush())
        .context("failed to write report")
        .map_err(RuntimeExit::from_error)?;
    Ok(passed)
}

fn prepare_check() -> anyhow::Result<(ServerLaunch, CheckSection)> {
    let config = CheckConfig::load_from_env_or_default()?;
    let (launch, source) = resolve_server_launch(&config.server)?;
    info!(
        target: "excel_mcp::check",
        program = %launch.program.display(),
        source = ?source,
        "Resolved server executable"
    );
    Ok((launch, config.check))
}
