//! Server executable resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    check::ServerLaunch,
    config::ServerSection,
    lib::paths::{first_existing, server_file_name},
};

pub const SERVER_PATH_ENV: &str = "EXCEL_MCP_SERVER_PATH";

/// Where the executable path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerSource {
    Env,
    Config,
    Discovered,
}

/// Resolve the server in the order: env var → config → discovery.
pub fn resolve_server_launch(server: &ServerSection) -> Result<(ServerLaunch, ServerSource)> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    let from_env = env::var_os(SERVER_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    let (program, source) = match (from_env, &server.path) {
        (Some(path), _) => (path, ServerSource::Env),
        (None, Some(path)) => (path.clone(), ServerSource::Config),
        (None, None) => {
            let exe_dir = env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf));
            let candidates = discovery_candidates(exe_dir.as_deref(), &cwd);
            let program = first_existing(&candidates)
                .unwrap_or_else(|| cwd.join(server_file_name()));
            (program, ServerSource::Discovered)
        }
    };

    Ok((
        ServerLaunch {
            program: absolutize(program, &cwd),
            args: server.args.clone(),
        },
        source,
    ))
}

/// Next to this binary, one level up, then the working directory.
pub fn discovery_candidates(exe_dir: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    let file_name = server_file_name();
    let mut candidates = Vec::new();
    if let Some(dir) = exe_dir {
        candidates.push(dir.join(&file_name));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(&file_name));
        }
    }
    candidates.push(cwd.join(file_name));
    candidates
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() || path.components().count() == 1 {
        // Bare names stay as-is so the OS searches PATH.
        return path;
    }
    cwd.join(path)
}
