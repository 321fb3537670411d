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

//! Formatting of analysis reports

use std::fmt::Write as _;
use thiserror::Error;

use crate::engine::RenderLoopAnalysis;

/// Output formats for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Error during formatting
#[derive(Debug, Error)]
#[error("report formatting failed: {0}")]
pub struct FormatError(pub String);

/// Trait for formatting analysis reports
pub trait ReportFormatter {
    fn format(&self, report: &RenderLoopAnalysis) -> Result<String, FormatError>;
    fn supported_formats(&self) -> &[ReportFormat];
}

/// Human-readable text formatter
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RenderLoopAnalysis) -> Result<String, FormatError> {
        let mut out = String::new();

        let verdict = if report.has_cycle {
            "potential infinite re-render loop detected"
        } else {
            "no re-render loop detected"
        };
        let _ = writeln!(out, "{verdict}");
        let _ = writeln!(
            out,
            "{} state declaration(s), {} effect(s), {} trigger edge(s)",
            report.states.len(),
            report.effects.len(),
            report.edge_count
        );

        for state in &report.states {
            let _ = writeln!(out, "  state {} (setter {})", state.state_name, state.setter_name);
        }
        for (index, effect) in report.effects.iter().enumerate() {
            let _ = writeln!(out, "  effect #{} deps [{}]", index + 1, effect.dependency_list_text);
        }

        Ok(out)
    }

    fn supported_formats(&self) -> &[ReportFormat] {
        &[ReportFormat::Text]
    }
}

/// JSON formatter
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RenderLoopAnalysis) -> Result<String, FormatError> {
        serde_json::to_string_pretty(report).map_err(|err| FormatError(err.to_string()))
    }

    fn supported_formats(&self) -> &[ReportFormat] {
        &[ReportFormat::Json]
    }
}
