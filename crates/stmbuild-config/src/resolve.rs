//! The configuration resolver.
//!
//! A single pass over the validated inputs, assembling the complete
//! flag set by table lookup. No I/O, no shared state; safe to call
//! from any number of concurrent build invocations.

use crate::clock::ClockSource;
use crate::error::{ConfigError, Result};
use crate::flags::FlagSet;
use crate::float::FloatPolicy;
use crate::mcu::McuFamily;
use crate::mode::BuildMode;

/// Baseline compiler flags common to every configuration.
///
/// The ST library code does not survive the pedantic warning set, so
/// this stays at `-Wall -Werror` with targeted suppressions handled by
/// the orchestration layer.
const BASE_COMPILER_FLAGS: &[&str] = &[
    "-Wall",
    "-Werror",
    "-ffunction-sections",
    "-fdata-sections",
    "-fno-exceptions",
    "-mthumb",
    "-gdwarf-2",
    "-pipe",
];

const BASE_ASSEMBLER_FLAGS: &[&str] = &["-mthumb"];

/// `--gc-sections` must come before any library search flags the
/// orchestration appends later.
const BASE_LINKER_FLAGS: &[&str] = &["-Xlinker", "--gc-sections", "-mthumb", "-g3", "-gdwarf-2"];

/// Flags added by the hard-float ABI.
const HARD_FLOAT_ABI_FLAG: &str = "-mfloat-abi=hard";
const HARD_FLOAT_FPU_FLAG: &str = "-mfpu=fpv4-sp-d16";

/// Resolve the complete toolchain flag set for one build configuration.
///
/// The output contains, in order: the fixed baseline, the family's
/// `-mcpu` flag, float ABI flags when requested, and the mode's
/// optimization flags, plus the family macro and oscillator
/// definitions. Every failure mode is a [`ConfigError`]; no partial
/// flag set is returned.
pub fn resolve(
    mode: BuildMode,
    mcu: McuFamily,
    clock: ClockSource,
    float: FloatPolicy,
) -> Result<FlagSet> {
    if float == FloatPolicy::Hard && !mcu.has_fpu() {
        return Err(ConfigError::FloatUnsupported {
            family: mcu.name().to_string(),
        });
    }

    let mut flags = FlagSet::new();

    for flag in BASE_COMPILER_FLAGS {
        flags.push_compiler(*flag);
    }
    for flag in BASE_ASSEMBLER_FLAGS {
        flags.push_assembler(*flag);
    }
    for flag in BASE_LINKER_FLAGS {
        flags.push_linker(*flag);
    }

    // Family: one core flag across all three tools, one library macro.
    let cpu = mcu.cpu_flag();
    flags.push_compiler(cpu.clone());
    flags.push_assembler(cpu.clone());
    flags.push_linker(cpu);
    flags.push_define(mcu.family_macro(), "")?;

    if float == FloatPolicy::Hard {
        flags.push_compiler(HARD_FLOAT_ABI_FLAG);
        flags.push_linker(HARD_FLOAT_ABI_FLAG);
        flags.push_linker(HARD_FLOAT_FPU_FLAG);
    }

    for flag in mode.compiler_flags() {
        flags.push_compiler(*flag);
    }

    let (name, value) = clock.define();
    flags.push_define(name, value)?;

    Ok(flags)
}
