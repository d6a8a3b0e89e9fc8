//! Smoke test that launches the Excel MCP Server and checks its advertised tools.
pub mod protocol;
pub mod report;
pub mod session;

use std::io::{self, Write};

use tracing::{info, warn, Instrument};

use crate::{
    config::CheckSection,
    lib::{errors::CheckError, telemetry::CheckSpan},
};

pub use report::{CheckOutcome, FoundTool, ToolReport};
pub use session::{ServerLaunch, ServerSession, ShutdownKind};

/// One run against one server executable.
#[derive(Debug, Clone)]
pub struct RegistrationCheck {
    launch: ServerLaunch,
    settings: CheckSection,
}

impl RegistrationCheck {
    pub fn new(launch: ServerLaunch, settings: CheckSection) -> Self {
        Self { launch, settings }
    }

    pub fn launch(&self) -> &ServerLaunch {
        &self.launch
    }

    /// Run the check, writing the report to `out`. Returns whether it passed.
    ///
    /// Every failure is reported on `out` and folded into `false`.
    pub async fn run(&self, out: &mut impl Write) -> bool {
        let span = CheckSpan::start(&self.launch.program.display().to_string());
        let result = self.exchange(out).instrument(span.span().clone()).await;

        let (passed, outcome_label, missing) = match result {
            Ok(outcome) => {
                if let Err(err) = report::write_outcome(out, &outcome) {
                    warn!(target: "excel_mcp::check", error = %err, "Failed to write report");
                }
                let label = if outcome.passed() { "passed" } else { "failed" };
                (outcome.passed(), label, outcome.missing_count())
            }
            Err(err) => {
                if let Err(write_err) = report::write_error(out, &err) {
                    warn!(target: "excel_mcp::check", error = %write_err, "Failed to write report");
                }
                (false, "error", 0)
            }
        };

        span.finish(outcome_label, missing);
        passed
    }

    async fn exchange(&self, out: &mut impl Write) -> Result<CheckOutcome, CheckError> {
        let mut session = ServerSession::spawn(&self.launch, self.settings.response_timeout)?;
        let result = self.talk(&mut session, out).await;

        match session.shutdown(self.settings.shutdown_timeout).await {
            Ok(kind) => info!(target: "excel_mcp::check", ?kind, "Server stopped"),
            Err(err) => warn!(target: "excel_mcp::check", error = %err, "Failed to stop server"),
        }
        result
    }

    async fn talk(
        &self,
        session: &mut ServerSession,
        out: &mut impl Write,
    ) -> Result<CheckOutcome, CheckError> {
        let initialized = session.call(&protocol::initialize_request()).await?;
        report::write_response(out, "Initialize response received:", &initialized.raw)
            .map_err(report_io_error)?;
        initialized.into_result(protocol::INITIALIZE)?;

        let listed = session.call(&protocol::tools_list_request()).await?;
        report::write_response(out, "Tools list response:", &listed.raw)
            .map_err(report_io_error)?;
        let listed = listed.into_result(protocol::TOOLS_LIST)?;

        Ok(match protocol::advertised_tools(&listed)? {
            Some(tools) => {
                CheckOutcome::Listed(ToolReport::evaluate(&self.settings.expected_tools, &tools))
            }
            None => CheckOutcome::NoToolsListed,
        })
    }
}

fn report_io_error(source: io::Error) -> CheckError {
    CheckError::Io {
        action: "writing the report",
        source,
    }
}
