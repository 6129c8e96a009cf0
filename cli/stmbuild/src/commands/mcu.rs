//! `stmbuild mcu` — supported family listing and description.

use anyhow::Result;

use stmbuild_config::McuFamily;

/// List all supported MCU families.
pub fn list() -> Result<()> {
    println!("Supported MCU families:");
    println!();
    println!("  {:<8} {:<6} {:<18} {}", "family", "core", "macro", "fpu");
    for family in McuFamily::all() {
        println!(
            "  {:<8} {:<6} {:<18} {}",
            family.name(),
            format!("cortex-{}", family.core_name()),
            family.family_macro(),
            if family.has_fpu() { "yes" } else { "no" },
        );
    }
    println!();
    println!("Use 'stmbuild mcu describe <family>' for details.");
    Ok(())
}

/// Describe one family in detail.
pub fn describe(name: &str) -> Result<()> {
    let family = McuFamily::from_identifier(name)?;

    println!("=== Family: {} ===", family.name());
    println!("  Core:        cortex-{}", family.core_name());
    println!("  CPU flag:    {}", family.cpu_flag());
    println!("  Macro:       {}", family.family_macro());
    println!(
        "  FPU:         {}",
        if family.has_fpu() {
            "yes (float=hard supported)"
        } else {
            "no"
        }
    );
    println!("  Board match: {}", family.board_prefixes().join(", "));
    Ok(())
}
