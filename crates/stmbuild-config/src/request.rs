//! Board build requests: the raw named-parameter form of a build.
//!
//! A request carries the parameters exactly as the user (or a board
//! `.toml` file) supplies them, before validation. Resolving a request
//! validates every field and delegates to [`resolve`](crate::resolve).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clock::ClockSource;
use crate::error::{ConfigError, Result};
use crate::flags::FlagSet;
use crate::float::FloatPolicy;
use crate::mcu::McuFamily;
use crate::mode::BuildMode;
use crate::resolve::resolve;

/// Unvalidated build parameters.
///
/// `examples` and `lto` are orchestration knobs: they are carried
/// through for the build driver but never influence the resolved
/// [`FlagSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildRequest {
    /// Optimization mode: `debug`, `fast`, or `small`.
    pub mode: String,
    /// MCU family alias or board identifier.
    pub mcu: String,
    /// External oscillator frequency in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hse: Option<u64>,
    /// Internal oscillator frequency in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsi: Option<u64>,
    /// Float ABI request; only `"hard"` has an effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float: Option<String>,
    /// Whether the driver should also build the example programs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<bool>,
    /// Whether the driver should enable link-time optimization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lto: Option<bool>,
}

impl BuildRequest {
    /// Validate every parameter and resolve the flag set.
    pub fn resolve(&self) -> Result<FlagSet> {
        let mode: BuildMode = self.mode.parse()?;
        let mcu = McuFamily::from_identifier(&self.mcu)?;
        let clock = ClockSource::from_options(self.hse, self.hsi)?;
        let float = FloatPolicy::from_option(self.float.as_deref());
        resolve(mode, mcu, clock, float)
    }

    /// Whether the driver should build the examples (default: yes).
    pub fn build_examples(&self) -> bool {
        self.examples.unwrap_or(true)
    }

    /// Whether the driver should enable LTO (default: no).
    pub fn lto(&self) -> bool {
        self.lto.unwrap_or(false)
    }
}

/// Load a build request from a board `.toml` file.
pub fn load_request_toml(path: &Path) -> Result<BuildRequest> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_request_toml(&content)
}

/// Parse a build request from a TOML string.
pub fn parse_request_toml(toml_str: &str) -> Result<BuildRequest> {
    let request: BuildRequest = toml::from_str(toml_str)?;
    Ok(request)
}

/// Serialize a build request to pretty TOML.
pub fn request_to_toml(request: &BuildRequest) -> Result<String> {
    let toml_str = toml::to_string_pretty(request)?;
    Ok(toml_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery_request() -> BuildRequest {
        BuildRequest {
            mode: "small".into(),
            mcu: "stm32f407".into(),
            hse: Some(8_000_000),
            hsi: None,
            float: Some("hard".into()),
            examples: None,
            lto: None,
        }
    }

    #[test]
    fn resolve_valid_request() {
        let flags = discovery_request().resolve().unwrap();
        assert!(flags.has_compiler_flag("-Os"));
        assert!(flags.has_compiler_flag("-mcpu=cortex-m4"));
        assert_eq!(flags.define("STM32PLUS_F407"), Some(""));
    }

    #[test]
    fn resolve_unknown_mcu_fails() {
        let mut request = discovery_request();
        request.mcu = "unknownchip".into();
        let err = request.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMcu { value } if value == "unknownchip"));
    }

    #[test]
    fn resolve_unknown_mode_fails() {
        let mut request = discovery_request();
        request.mode = "production".into();
        let err = request.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMode { .. }));
    }

    #[test]
    fn orchestration_defaults() {
        let request = discovery_request();
        assert!(request.build_examples());
        assert!(!request.lto());
    }

    #[test]
    fn round_trip_toml() {
        let original = discovery_request();
        let toml_str = request_to_toml(&original).unwrap();
        let parsed = parse_request_toml(&toml_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_minimal_toml() {
        let request = parse_request_toml(
            r#"
mode = "debug"
mcu = "f1cle"
hse = 25000000
"#,
        )
        .unwrap();
        assert_eq!(request.mode, "debug");
        assert_eq!(request.hse, Some(25_000_000));
        assert!(request.float.is_none());
    }

    #[test]
    fn parse_missing_field_fails() {
        assert!(parse_request_toml("mode = \"debug\"").is_err());
    }

    #[test]
    fn parse_unknown_field_fails() {
        let result = parse_request_toml(
            r#"
mode = "debug"
mcu = "f407"
hse = 8000000
instal = true
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_not_found() {
        let result = load_request_toml(Path::new("/nonexistent/board.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("discovery.toml");
        let toml_str = request_to_toml(&discovery_request()).unwrap();
        std::fs::write(&path, &toml_str).unwrap();

        let request = load_request_toml(&path).unwrap();
        assert_eq!(request, discovery_request());
    }
}
