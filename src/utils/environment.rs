use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the data directory
pub const HOME_ENV_VAR: &str = "QR_STUDIO_HOME";

const APP_DIR_NAME: &str = "qr-studio";

/// Directory holding the persisted history (`$QR_STUDIO_HOME`, else the
/// platform data directory)
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(HOME_ENV_VAR).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
