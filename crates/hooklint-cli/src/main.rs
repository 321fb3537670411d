// Hooklint
// Copyright (C) 2025 Hooklint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;

use anyhow::Result;

/// CLI for static render-loop analysis of hook-based components
#[derive(Parser, Debug)]
#[command(name = "hooklint", about = "Detect infinite re-render loops in component source")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the analyze command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Machine-readable JSON report
    Json,
}

/// Top-level commands for hooklint
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a component source file for re-render loops
    Analyze {
        /// Path to the component source file
        file: PathBuf,

        /// Report output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Dump the state and effect tokens extracted from a source file
    Tokens {
        /// Path to the component source file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, format } => {
            let cycle_found = commands::analyze(&file, format)?;
            if cycle_found {
                std::process::exit(1);
            }
        }
        Commands::Tokens { file } => {
            commands::dump_tokens(&file)?;
        }
    }

    Ok(())
}
