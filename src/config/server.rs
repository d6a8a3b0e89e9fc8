use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// How to launch the server under test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSection {
    /// Explicit executable path; `None` falls back to discovery.
    pub path: Option<PathBuf>,
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServerSection {
    pub path: Option<PathBuf>,
    pub args: Option<Vec<String>>,
}

pub fn parse_server_section(
    raw: Option<RawServerSection>,
    source: &Path,
) -> Result<ServerSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let path = match raw.path {
        Some(path) if path.as_os_str().is_empty() => {
            return Err(ConfigError::InvalidField {
                path: source.to_path_buf(),
                field: "server.path",
                message: "Remove the key or point it at the server executable".into(),
            })
        }
        other => other,
    };

    Ok(ServerSection {
        path,
        args: raw.args.unwrap_or_default(),
    })
}
