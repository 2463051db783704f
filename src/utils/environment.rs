use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Environment variable that overrides the history file location
pub const HISTORY_ENV_VAR: &str = "BASE_CONVERTER_HISTORY";

const APP_DIR: &str = "base-converter";
const HISTORY_FILENAME: &str = "history.json";

/// Resolve the history file path
///
/// Precedence: explicit flag, then `BASE_CONVERTER_HISTORY`, then the
/// platform data directory (`~/.local/share/base-converter/history.json` on
/// Linux), then `$HOME/.base-converter/history.json`.
pub fn get_history_path(flag: Option<&Path>) -> Result<PathBuf> {
    resolve_history_path(
        flag,
        env::var_os(HISTORY_ENV_VAR).map(PathBuf::from),
        dirs::data_dir(),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_history_path(
    flag: Option<&Path>,
    env_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }

    if let Some(dir) = data_dir {
        return Ok(dir.join(APP_DIR).join(HISTORY_FILENAME));
    }

    match home {
        Some(home) if !home.as_os_str().is_empty() => {
            Ok(home.join(format!(".{}", APP_DIR)).join(HISTORY_FILENAME))
        }
        _ => bail!(
            "Cannot locate a history file: set {} or pass --history-file",
            HISTORY_ENV_VAR
        ),
    }
}
