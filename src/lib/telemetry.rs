//! Telemetry initialization and registration-check span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` on stderr; stdout is reserved for the CLI report.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one registration check.
pub struct CheckSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl CheckSpan {
    /// Start a check span for the given server executable.
    pub fn start(server: &str) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "excel_mcp::check",
            "registration_check",
            %run_id,
            server
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording the outcome.
    pub fn finish(self, outcome: &'static str, missing_tools: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "excel_mcp::check",
            run_id = %self.run_id,
            outcome,
            missing_tools,
            elapsed_ms,
            "Completed registration check"
        );
    }
}
