//! Optimization mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The build optimization mode.
///
/// A closed enumeration: any other `mode` string is a configuration
/// error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    /// `-O0` with full debug info.
    Debug,
    /// `-O3`, optimized for speed.
    Fast,
    /// `-Os`, optimized for size.
    Small,
}

impl BuildMode {
    /// Compiler flags contributed by this mode.
    pub fn compiler_flags(self) -> &'static [&'static str] {
        match self {
            BuildMode::Debug => &["-O0", "-g3"],
            BuildMode::Fast => &["-O3"],
            BuildMode::Small => &["-Os"],
        }
    }

    /// The canonical parameter spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Fast => "fast",
            BuildMode::Small => "small",
        }
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(BuildMode::Debug),
            "fast" => Ok(BuildMode::Fast),
            "small" => Ok(BuildMode::Small),
            other => Err(ConfigError::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        assert_eq!("debug".parse::<BuildMode>().unwrap(), BuildMode::Debug);
        assert_eq!("fast".parse::<BuildMode>().unwrap(), BuildMode::Fast);
        assert_eq!("small".parse::<BuildMode>().unwrap(), BuildMode::Small);
    }

    #[test]
    fn parse_unknown_mode_fails() {
        let err = "release".parse::<BuildMode>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMode { value } if value == "release"));
    }

    #[test]
    fn optimization_flag_table() {
        assert_eq!(BuildMode::Debug.compiler_flags(), ["-O0", "-g3"]);
        assert_eq!(BuildMode::Fast.compiler_flags(), ["-O3"]);
        assert_eq!(BuildMode::Small.compiler_flags(), ["-Os"]);
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let opt = |m: BuildMode| m.compiler_flags()[0];
        assert_ne!(opt(BuildMode::Debug), opt(BuildMode::Fast));
        assert_ne!(opt(BuildMode::Fast), opt(BuildMode::Small));
        assert_ne!(opt(BuildMode::Small), opt(BuildMode::Debug));
    }
}
