//! The resolved flag set.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A single preprocessor definition.
///
/// An empty `value` emits a bare `-DNAME`; a non-empty one emits
/// `-DNAME=value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Define {
    /// Macro name.
    pub name: String,
    /// Macro value, possibly empty.
    pub value: String,
}

/// The complete output of a configuration resolution.
///
/// All sequences preserve append order; flag ordering is significant
/// to the linker, so consumers must not reorder them. A `FlagSet` is
/// constructed fresh per resolution and never mutated after being
/// returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FlagSet {
    /// Flags for the C/C++ compiler invocation.
    pub compiler_flags: Vec<String>,
    /// Flags for the assembler invocation.
    pub assembler_flags: Vec<String>,
    /// Flags for the linker invocation.
    pub linker_flags: Vec<String>,
    /// Preprocessor definitions, duplicate names rejected.
    pub defines: Vec<Define>,
}

impl FlagSet {
    /// An empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one compiler flag.
    pub fn push_compiler(&mut self, flag: impl Into<String>) {
        self.compiler_flags.push(flag.into());
    }

    /// Append one assembler flag.
    pub fn push_assembler(&mut self, flag: impl Into<String>) {
        self.assembler_flags.push(flag.into());
    }

    /// Append one linker flag.
    pub fn push_linker(&mut self, flag: impl Into<String>) {
        self.linker_flags.push(flag.into());
    }

    /// Append a preprocessor definition, rejecting duplicate names.
    pub fn push_define(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.define(&name).is_some() {
            return Err(ConfigError::DuplicateDefine { name });
        }
        self.defines.push(Define {
            name,
            value: value.into(),
        });
        Ok(())
    }

    /// Look up a definition value by name.
    pub fn define(&self, name: &str) -> Option<&str> {
        self.defines
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// Whether the compiler flag sequence contains `flag`.
    pub fn has_compiler_flag(&self, flag: &str) -> bool {
        self.compiler_flags.iter().any(|f| f == flag)
    }

    /// Whether the linker flag sequence contains `flag`.
    pub fn has_linker_flag(&self, flag: &str) -> bool {
        self.linker_flags.iter().any(|f| f == flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_order_is_preserved() {
        let mut flags = FlagSet::new();
        flags.push_linker("-Xlinker");
        flags.push_linker("--gc-sections");
        flags.push_linker("-mcpu=cortex-m4");
        assert_eq!(
            flags.linker_flags,
            ["-Xlinker", "--gc-sections", "-mcpu=cortex-m4"]
        );
    }

    #[test]
    fn duplicate_define_rejected() {
        let mut flags = FlagSet::new();
        flags.push_define("HSE_VALUE", "8000000").unwrap();
        let err = flags.push_define("HSE_VALUE", "25000000").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateDefine { name } if name == "HSE_VALUE"));
        // The original definition is untouched.
        assert_eq!(flags.define("HSE_VALUE"), Some("8000000"));
    }

    #[test]
    fn define_lookup() {
        let mut flags = FlagSet::new();
        flags.push_define("STM32PLUS_F407", "").unwrap();
        assert_eq!(flags.define("STM32PLUS_F407"), Some(""));
        assert_eq!(flags.define("STM32PLUS_F051"), None);
    }

    #[test]
    fn flag_lookups() {
        let mut flags = FlagSet::new();
        flags.push_compiler("-Os");
        flags.push_linker("-mfloat-abi=hard");
        assert!(flags.has_compiler_flag("-Os"));
        assert!(!flags.has_compiler_flag("-O0"));
        assert!(flags.has_linker_flag("-mfloat-abi=hard"));
    }
}
