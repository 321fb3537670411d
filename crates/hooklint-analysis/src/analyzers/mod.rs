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

//! Analyzer framework and common types for render-loop analysis
//!
//! Three analysis stages cooperate to decide whether a component's
//! state/effect wiring can loop:
//!
//! - **Token extraction** (`extraction`): recognizes state declarations
//!   and effect registrations in raw source text.
//! - **Trigger graph construction** (`trigger_graph`): one node per
//!   effect, edges meaning "running this effect may cause that effect
//!   to re-run".
//! - **Cycle detection** (`cycle`): Kahn's algorithm over the trigger
//!   graph, repurposed as a cycle test.
//!
//! Each stage is a pure function of its inputs; none of them retains
//! state between calls, so the stages can be tested independently and
//! composed freely.

pub mod cycle;
pub mod extraction;
pub mod trigger_graph;

// Common error and result types
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Empty input provided to analyzer")]
    EmptyInput,
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Common trait for all analyzers
pub trait Analyzer {
    /// The type of result this analyzer produces
    type Result;

    /// Analyze the given input and return the result
    fn analyze(&self, input: &str) -> AnalysisResult<Self::Result>;

    /// Get the name of this analyzer
    fn name(&self) -> &'static str;

    /// Check if this analyzer can handle the given input
    fn can_analyze(&self, input: &str) -> bool {
        !input.trim().is_empty()
    }
}

/// Analysis statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Number of state declarations extracted
    pub states_found: usize,
    /// Number of effect registrations extracted
    pub effects_found: usize,
    /// Number of trigger edges created
    pub edges_created: usize,
    /// Analysis duration in milliseconds
    pub duration_ms: u64,
}

impl AnalysisStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extracted state declarations
    pub fn add_states(&mut self, count: usize) {
        self.states_found += count;
    }

    /// Add extracted effect registrations
    pub fn add_effects(&mut self, count: usize) {
        self.effects_found += count;
    }

    /// Add created trigger edges
    pub fn add_edges(&mut self, count: usize) {
        self.edges_created += count;
    }

    /// Set analysis duration
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }
}
