//! Server executable naming and candidate lookup.

use std::{env::consts::EXE_SUFFIX, path::PathBuf};

/// Base name of the server executable, without platform suffix.
pub const SERVER_EXECUTABLE_STEM: &str = "excel-mcp-server";

/// Server file name for the current platform (`excel-mcp-server.exe` on Windows).
pub fn server_file_name() -> String {
    format!("{SERVER_EXECUTABLE_STEM}{EXE_SUFFIX}")
}

/// Pick the first existing candidate, falling back to the last one so the
/// launch error names a concrete path.
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .or_else(|| candidates.last())
        .cloned()
}
