//! stmbuild CLI — resolve STM32 build parameters into toolchain flags.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use stmbuild_config::BuildRequest;

#[derive(Parser)]
#[command(name = "stmbuild", version, about = "STM32 build configuration resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve build parameters into a toolchain flag set
    Resolve {
        /// Optimization mode (debug, fast, small)
        #[arg(long)]
        mode: String,
        /// MCU family alias or board identifier (e.g., f407, stm32f407vg)
        #[arg(long)]
        mcu: String,
        /// External oscillator frequency in Hz
        #[arg(long)]
        hse: Option<u64>,
        /// Internal oscillator frequency in Hz
        #[arg(long)]
        hsi: Option<u64>,
        /// Float ABI policy ("hard" to use the hardware FPU)
        #[arg(long)]
        float: Option<String>,
        /// Skip building the example programs
        #[arg(long)]
        no_examples: bool,
        /// Enable link-time optimization in the driver
        #[arg(long)]
        lto: bool,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Inspect supported MCU families
    Mcu {
        #[command(subcommand)]
        action: McuAction,
    },
    /// Validate a board configuration file
    Check {
        /// Path to the board .toml file
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum McuAction {
    /// List supported families
    List,
    /// Show one family's core, macro, and FPU status
    Describe {
        /// Family alias or board identifier
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve {
            mode,
            mcu,
            hse,
            hsi,
            float,
            no_examples,
            lto,
            format,
        } => {
            let request = BuildRequest {
                mode,
                mcu,
                hse,
                hsi,
                float,
                examples: Some(!no_examples),
                lto: Some(lto),
            };
            commands::resolve::run(&request, format.as_deref())
        }

        Commands::Mcu { action } => match action {
            McuAction::List => commands::mcu::list(),
            McuAction::Describe { name } => commands::mcu::describe(&name),
        },

        Commands::Check { path } => commands::check::run(&path),
    }
}
