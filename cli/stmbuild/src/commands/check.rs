//! `stmbuild check` — board configuration file validation.

use std::path::Path;

use anyhow::{Context, Result};

use stmbuild_config::request::load_request_toml;

/// Load a board `.toml` file, resolve it, and report the outcome.
pub fn run(path: &Path) -> Result<()> {
    let request = load_request_toml(path)
        .with_context(|| format!("failed to load '{}'", path.display()))?;
    let flags = request
        .resolve()
        .with_context(|| format!("invalid board configuration '{}'", path.display()))?;

    println!(
        "ok: {} ({} compiler flags, {} linker flags, {} definitions)",
        path.display(),
        flags.compiler_flags.len(),
        flags.linker_flags.len(),
        flags.defines.len(),
    );
    Ok(())
}
