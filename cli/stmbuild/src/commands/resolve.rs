//! `stmbuild resolve` — flag set resolution and printing.

use anyhow::{bail, Result};

use stmbuild_config::{BuildRequest, FlagSet};

/// Resolve a build request and print the flag set.
pub fn run(request: &BuildRequest, format: Option<&str>) -> Result<()> {
    let flags = request.resolve()?;
    match format.unwrap_or("human") {
        "human" => print_human(request, &flags),
        "json" => println!("{}", serde_json::to_string_pretty(&flags)?),
        other => bail!("unknown format '{other}' (expected human or json)"),
    }
    Ok(())
}

fn print_human(request: &BuildRequest, flags: &FlagSet) {
    println!("=== Build configuration: {} / {} ===", request.mode, request.mcu);
    println!();

    println!("--- Compiler flags ---");
    for flag in &flags.compiler_flags {
        println!("  {flag}");
    }
    println!();

    println!("--- Assembler flags ---");
    for flag in &flags.assembler_flags {
        println!("  {flag}");
    }
    println!();

    println!("--- Linker flags ---");
    for flag in &flags.linker_flags {
        println!("  {flag}");
    }
    println!();

    println!("--- Preprocessor definitions ---");
    for define in &flags.defines {
        if define.value.is_empty() {
            println!("  {}", define.name);
        } else {
            println!("  {}={}", define.name, define.value);
        }
    }
    println!();

    println!("--- Orchestration ---");
    println!(
        "  examples: {}",
        if request.build_examples() { "yes" } else { "no" }
    );
    println!("  lto:      {}", if request.lto() { "yes" } else { "no" });
}
