//! Tunable constants for the preview pipeline.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEBOUNCE_ENV_VAR: &str = "QR_STUDIO_DEBOUNCE_MS";
pub const EXPORT_SIZE_ENV_VAR: &str = "QR_STUDIO_EXPORT_SIZE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Quiet period before payload and style edits reach the renderer
    pub debounce_ms: u64,
    /// Edge length of the on-screen render, in pixels
    pub display_size: u32,
    /// Edge length of raster exports, in pixels
    pub export_size: u32,
    /// Largest accepted logo upload, in bytes
    pub logo_max_bytes: u64,
    /// Drawn instead of an empty payload so the preview is never blank
    pub placeholder_payload: String,
    /// Export file name without extension
    pub export_base_name: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            display_size: 280,
            export_size: 560,
            logo_max_bytes: 2 * 1024 * 1024,
            placeholder_payload: "https://frontsail.ai".to_string(),
            export_base_name: "qr-code".to_string(),
        }
    }
}

impl StudioConfig {
    /// Defaults with `QR_STUDIO_DEBOUNCE_MS` / `QR_STUDIO_EXPORT_SIZE` applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = read_env_number(DEBOUNCE_ENV_VAR) {
            config.debounce_ms = ms;
        }
        if let Some(size) = read_env_number(EXPORT_SIZE_ENV_VAR) {
            config.export_size = size;
        }
        config
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn read_env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {}={:?}", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
        assert_eq!(config.display_size, 280);
        assert_eq!(config.export_size, 560);
        assert_eq!(config.logo_max_bytes, 2_097_152);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StudioConfig = serde_json::from_str(r#"{"debounce_ms": 50}"#).unwrap();
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.export_base_name, "qr-code");
    }

    #[test]
    fn test_from_env_overrides() {
        let original_debounce = env::var_os(DEBOUNCE_ENV_VAR);
        let original_size = env::var_os(EXPORT_SIZE_ENV_VAR);

        // SAFETY: these variables are only read by this module's tests, and the
        // originals are restored below
        unsafe {
            env::set_var(DEBOUNCE_ENV_VAR, "120");
            env::set_var(EXPORT_SIZE_ENV_VAR, "not-a-number");
        }
        let config = StudioConfig::from_env();
        assert_eq!(config.debounce_ms, 120);
        assert_eq!(config.export_size, 560);

        unsafe {
            match original_debounce {
                Some(value) => env::set_var(DEBOUNCE_ENV_VAR, value),
                None => env::remove_var(DEBOUNCE_ENV_VAR),
            }
            match original_size {
                Some(value) => env::set_var(EXPORT_SIZE_ENV_VAR, value),
                None => env::remove_var(EXPORT_SIZE_ENV_VAR),
            }
        }
    }
}
