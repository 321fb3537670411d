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

//! Command implementations for the hooklint binary

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use hooklint_analysis::{
    JsonFormatter, RenderLoopEngine, ReportFormatter, TextFormatter, identify_effects, identify_states,
};

use crate::OutputFormat;

/// Read a component source file into memory
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read component source {}", path.display()))
}

/// Run the full analysis over a source file and print the report.
///
/// Returns whether a cycle was found, so the caller can map the verdict
/// onto the process exit code.
pub fn analyze(path: &Path, format: OutputFormat) -> Result<bool> {
    let source = read_source(path)?;
    debug!(path = %path.display(), bytes = source.len(), "analyzing component source");

    let mut engine = RenderLoopEngine::with_default_config();
    let report = engine.analyze(&source)?;

    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    print!("{}", formatter.format(&report)?);

    Ok(report.has_cycle)
}

/// Print the raw state and effect tokens extracted from a source file
pub fn dump_tokens(path: &Path) -> Result<()> {
    let source = read_source(path)?;

    let states = identify_states(&source);
    let effects = identify_effects(&source);

    println!("{} state declaration(s)", states.len());
    for state in &states {
        println!("  {} / {}: {}", state.state_name, state.setter_name, state.declaration_text.trim());
    }

    println!("{} effect registration(s)", effects.len());
    for (index, effect) in effects.iter().enumerate() {
        println!("  effect #{} deps [{}]", index + 1, effect.dependency_list_text);
        println!("    body: {}", effect.body.trim());
    }

    Ok(())
}
