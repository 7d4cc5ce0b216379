//! Generator configuration
//!
//! The argument-free generator binaries always use [`IconConfig::default`].
//! The `qricon` tool layers environment variables and then command-line
//! flags on top of the defaults.

use std::path::{Path, PathBuf};

/// Payload encoded into every generated symbol
pub const DEFAULT_PAYLOAD: &str = "macQR";

/// Environment variable overriding the output directory
pub const OUTPUT_DIR_VAR: &str = "MACQR_OUTPUT_DIR";
/// Environment variable overriding the payload
pub const PAYLOAD_VAR: &str = "MACQR_PAYLOAD";

/// Where icons are written and what their symbols carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    /// Directory receiving the PNG files
    pub output_dir: PathBuf,
    /// Text encoded into the QR symbols
    pub payload: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            payload: DEFAULT_PAYLOAD.to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl IconConfig {
    /// Defaults overlaid with `MACQR_OUTPUT_DIR` and `MACQR_PAYLOAD`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup`
    ///
    /// Values are trimmed; missing or blank values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = non_empty(lookup(OUTPUT_DIR_VAR)) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(payload) = non_empty(lookup(PAYLOAD_VAR)) {
            config.payload = payload;
        }
        config
    }

    /// Replace the output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replace the payload
    pub fn with_payload<S: Into<String>>(mut self, payload: S) -> Self {
        self.payload = payload.into();
        self
    }

    /// Path of `file_name` inside the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = IconConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.payload, "macQR");
        assert_eq!(config.output_path("qrcode.png"), PathBuf::from("./qrcode.png"));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = IconConfig::from_lookup(lookup_from(&[
            (OUTPUT_DIR_VAR, " /tmp/icons "),
            (PAYLOAD_VAR, "hello"),
        ]));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/icons"));
        assert_eq!(config.payload, "hello");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = IconConfig::from_lookup(lookup_from(&[(OUTPUT_DIR_VAR, "   "), (PAYLOAD_VAR, "")]));
        assert_eq!(config, IconConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = IconConfig::default().with_output_dir("out").with_payload("x");
        assert_eq!(config.output_dir(), Path::new("out"));
        assert_eq!(config.payload, "x");
    }
}
