//! Supported MCU families and their per-family toolchain attributes.
//!
//! Each family is one row in a closed table mapping to exactly one
//! Cortex core flag and one library preprocessor macro. Adding support
//! for a new family means adding a table row, not a new branch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A supported STM32 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum McuFamily {
    F030,
    F042,
    F051,
    /// STM32F103 high-density series.
    F1Hd,
    /// STM32F107 connectivity-line series.
    F1Cle,
    /// STM32F100 medium-density value line series.
    F1MdVl,
    F405,
    F407,
    F415,
    F417,
    F427,
    F429,
    F437,
    F439,
}

/// One row of the family table.
struct FamilySpec {
    family: McuFamily,
    /// Short parameter names, matched exactly (e.g. `f407`, `f1hd`).
    aliases: &'static [&'static str],
    /// Board identifier prefixes, matched by `starts_with`
    /// (e.g. `stm32f407` matches `stm32f407vg`).
    prefixes: &'static [&'static str],
    /// Cortex core suffix for `-mcpu=cortex-<core>`.
    core: &'static str,
    /// Suffix of the `STM32PLUS_<FAMILY>` library macro.
    macro_suffix: &'static str,
    has_fpu: bool,
}

/// The closed set of supported families.
///
/// F405 and F407 share the `F407` library macro: the peripheral
/// library treats the two as a single build.
const FAMILIES: &[FamilySpec] = &[
    FamilySpec {
        family: McuFamily::F030,
        aliases: &["f030"],
        prefixes: &["stm32f030"],
        core: "m0",
        macro_suffix: "F0_30",
        has_fpu: false,
    },
    FamilySpec {
        family: McuFamily::F042,
        aliases: &["f042"],
        prefixes: &["stm32f042"],
        core: "m0",
        macro_suffix: "F0_42",
        has_fpu: false,
    },
    FamilySpec {
        family: McuFamily::F051,
        aliases: &["f051"],
        prefixes: &["stm32f051"],
        core: "m0",
        macro_suffix: "F0_51",
        has_fpu: false,
    },
    FamilySpec {
        family: McuFamily::F1Hd,
        aliases: &["f1hd"],
        prefixes: &["stm32f103"],
        core: "m3",
        macro_suffix: "F1_HD",
        has_fpu: false,
    },
    FamilySpec {
        family: McuFamily::F1Cle,
        aliases: &["f1cle"],
        prefixes: &["stm32f107"],
        core: "m3",
        macro_suffix: "F1_CLE",
        has_fpu: false,
    },
    FamilySpec {
        family: McuFamily::F1MdVl,
        aliases: &["f1mdvl"],
        prefixes: &["stm32f100"],
        core: "m3",
        macro_suffix: "F1_MD_VL",
        has_fpu: false,
    },
    FamilySpec {
        family: McuFamily::F405,
        aliases: &["f405"],
        prefixes: &["stm32f405"],
        core: "m4",
        macro_suffix: "F407",
        has_fpu: true,
    },
    FamilySpec {
        family: McuFamily::F407,
        // "f4" is kept as an alias for backwards compatibility.
        aliases: &["f4", "f407"],
        prefixes: &["stm32f407"],
        core: "m4",
        macro_suffix: "F407",
        has_fpu: true,
    },
    FamilySpec {
        family: McuFamily::F415,
        aliases: &["f415"],
        prefixes: &["stm32f415"],
        core: "m4",
        macro_suffix: "F415",
        has_fpu: true,
    },
    FamilySpec {
        family: McuFamily::F417,
        aliases: &["f417"],
        prefixes: &["stm32f417"],
        core: "m4",
        macro_suffix: "F417",
        has_fpu: true,
    },
    FamilySpec {
        family: McuFamily::F427,
        aliases: &["f427"],
        prefixes: &["stm32f427"],
        core: "m4",
        macro_suffix: "F427",
        has_fpu: true,
    },
    FamilySpec {
        family: McuFamily::F429,
        aliases: &["f429"],
        prefixes: &["stm32f429"],
        core: "m4",
        macro_suffix: "F429",
        has_fpu: true,
    },
    FamilySpec {
        family: McuFamily::F437,
        aliases: &["f437"],
        prefixes: &["stm32f437"],
        core: "m4",
        macro_suffix: "F437",
        has_fpu: true,
    },
    FamilySpec {
        family: McuFamily::F439,
        aliases: &["f439"],
        prefixes: &["stm32f439"],
        core: "m4",
        macro_suffix: "F439",
        has_fpu: true,
    },
];

impl McuFamily {
    /// Resolve an MCU identifier to its family.
    ///
    /// Accepts either a short family alias (`f407`) or a full board
    /// identifier carrying a known prefix (`stm32f407vg`). Matching is
    /// case-insensitive. Unknown identifiers are a fatal error, never
    /// a fallback.
    pub fn from_identifier(id: &str) -> Result<Self, ConfigError> {
        let lowered = id.to_ascii_lowercase();
        for spec in FAMILIES {
            if spec.aliases.contains(&lowered.as_str()) {
                return Ok(spec.family);
            }
            if spec.prefixes.iter().any(|p| lowered.starts_with(p)) {
                return Ok(spec.family);
            }
        }
        Err(ConfigError::UnknownMcu {
            value: id.to_string(),
        })
    }

    /// Every supported family, in table order.
    pub fn all() -> impl Iterator<Item = McuFamily> {
        FAMILIES.iter().map(|spec| spec.family)
    }

    fn spec(self) -> &'static FamilySpec {
        FAMILIES
            .iter()
            .find(|spec| spec.family == self)
            .unwrap_or_else(|| unreachable!("family missing from table"))
    }

    /// Cortex core suffix (e.g. `m4`).
    pub fn core_name(self) -> &'static str {
        self.spec().core
    }

    /// The `-mcpu=cortex-<core>` flag for this family.
    pub fn cpu_flag(self) -> String {
        format!("-mcpu=cortex-{}", self.core_name())
    }

    /// The `STM32PLUS_<FAMILY>` library selection macro.
    pub fn family_macro(self) -> String {
        format!("STM32PLUS_{}", self.spec().macro_suffix)
    }

    /// Whether the family has a hardware floating-point unit.
    pub fn has_fpu(self) -> bool {
        self.spec().has_fpu
    }

    /// The canonical short name (last table alias, so `f407` rather
    /// than the legacy `f4`).
    pub fn name(self) -> &'static str {
        let aliases = self.spec().aliases;
        aliases[aliases.len() - 1]
    }

    /// Board identifier prefixes this family matches.
    pub fn board_prefixes(self) -> &'static [&'static str] {
        self.spec().prefixes
    }
}

impl FromStr for McuFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        McuFamily::from_identifier(s)
    }
}

impl fmt::Display for McuFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
