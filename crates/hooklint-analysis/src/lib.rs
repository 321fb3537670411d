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

//! Static render-loop analysis for hook-based UI components
//!
//! This crate detects whether a component's state/effect wiring can
//! form an infinite re-render loop, from raw source text alone:
//!
//! - `useState` declarations and `useEffect` registrations are
//!   extracted lexically ([`identify_states`], [`identify_effects`]);
//! - a directed trigger graph is built between effects
//!   ([`build_graph`]): an edge means "this effect's state update can
//!   cause that effect to re-run";
//! - the graph is tested for directed cycles ([`has_cycle`]).
//!
//! No syntax tree is built and no scoping is resolved; the extractor
//! recognizes exactly two fixed syntactic shapes and name matching is
//! substring containment. The caller supplies source text and presents
//! the verdict; the crate performs no I/O.
//!
//! # Example Usage
//!
//! ```rust
//! use hooklint_analysis::quick_analyze;
//!
//! let source = r#"
//!     const [count, setCount] = useState(0);
//!     useEffect(() => {
//!         setCount(count + 1);
//!     }, [count]);
//! "#;
//!
//! let result = quick_analyze(source).unwrap();
//! assert!(result.has_cycle);
//! ```

pub mod analyzers;
pub mod config;
pub mod engine;
pub mod reporting;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use engine::{RenderLoopAnalysis, RenderLoopEngine};

// Re-export analyzer types
pub use analyzers::{
    AnalysisError, AnalysisResult, AnalysisStats, Analyzer,
    cycle::has_cycle,
    extraction::{EffectToken, HookExtractor, HookTokens, StateToken, identify_effects, identify_states},
    trigger_graph::{EffectNode, GraphBuilder, TriggerEdge, TriggerGraph, build_graph},
};

// Re-export reporting types
pub use reporting::{FormatError, JsonFormatter, ReportFormat, ReportFormatter, TextFormatter};

/// Create a render-loop engine with default configuration
pub fn create_default_engine() -> RenderLoopEngine {
    RenderLoopEngine::with_default_config()
}

/// Quick analysis function for simple use cases
///
/// Runs the complete pipeline with default settings over one component
/// source text.
pub fn quick_analyze(source: &str) -> AnalysisResult<RenderLoopAnalysis> {
    let mut engine = create_default_engine();
    engine.analyze(source)
}
