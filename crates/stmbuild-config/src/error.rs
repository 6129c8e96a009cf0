//! Error types for build configuration resolution.

use std::path::PathBuf;

/// Errors raised while resolving a build configuration.
///
/// Every misconfiguration is fatal at this level: no partial flag set
/// is ever returned alongside an error. Each variant names the build
/// parameter at fault so the driver can surface an actionable message.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The `mode` parameter is not one of the closed enumeration.
    #[error("unsupported mode '{value}' (expected debug, fast, or small)")]
    UnknownMode {
        /// The rejected mode string.
        value: String,
    },

    /// The `mcu` parameter matched no supported family.
    #[error("unsupported mcu '{value}'")]
    UnknownMcu {
        /// The rejected MCU identifier.
        value: String,
    },

    /// Neither `hse` nor `hsi` was supplied.
    #[error("no clock source: exactly one of hse or hsi must be given")]
    MissingClock,

    /// Both `hse` and `hsi` were supplied.
    #[error("conflicting clock sources: hse={hse} and hsi={hsi} are mutually exclusive")]
    ConflictingClock {
        /// The supplied external oscillator frequency in Hz.
        hse: u64,
        /// The supplied internal oscillator frequency in Hz.
        hsi: u64,
    },

    /// `float=hard` was requested for a family without a hardware FPU.
    #[error("float=hard requested but mcu family '{family}' has no hardware FPU")]
    FloatUnsupported {
        /// Name of the family that lacks an FPU.
        family: String,
    },

    /// A preprocessor definition name was added twice.
    #[error("duplicate preprocessor definition '{name}'")]
    DuplicateDefine {
        /// The repeated definition name.
        name: String,
    },

    /// TOML deserialization error in a board configuration file.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading a board configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Board configuration file not found.
    #[error("board configuration not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
