//! Build configuration resolver for STM32 cross-compilation.
//!
//! Turns symbolic build parameters (optimization mode, MCU family,
//! oscillator, float ABI policy) into the complete set of compiler,
//! assembler, and linker flags plus preprocessor definitions needed to
//! cross-compile the peripheral library for that configuration.
//!
//! The resolver is a pure function: it performs no I/O, invokes no
//! toolchain, and returns either a complete [`FlagSet`] or a
//! [`ConfigError`] naming the offending parameter. Applying the flags
//! to a build environment is the caller's job.

pub mod clock;
pub mod error;
pub mod flags;
pub mod float;
pub mod mcu;
pub mod mode;
pub mod request;
pub mod resolve;

pub use clock::ClockSource;
pub use error::{ConfigError, Result};
pub use flags::{Define, FlagSet};
pub use float::FloatPolicy;
pub use mcu::McuFamily;
pub use mode::BuildMode;
pub use request::BuildRequest;
pub use resolve::resolve;
