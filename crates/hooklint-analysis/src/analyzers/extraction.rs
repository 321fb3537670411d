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

//! Lexical extraction of state declarations and effect registrations
//!
//! The extractor recognizes exactly two fixed syntactic shapes and
//! nothing else: a `useState` destructuring declaration and a
//! `useEffect` registration whose callback is a zero-argument arrow
//! function followed by a dependency array literal. No syntax tree is
//! built and no scoping is resolved; matching is strict on these two
//! shapes, so malformed or partial occurrences are skipped rather than
//! recovered.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{AnalysisError, AnalysisResult, Analyzer};

/// Fixed shape of a state declaration: two identifiers destructured from
/// a `useState` call, with arbitrary whitespace between tokens and an
/// optional trailing semicolon.
const STATE_PATTERN: &str = r"const\s*\[\s*(\w+)\s*,\s*(\w+)\s*\]\s*=\s*useState\(.*\)\s*;?";

/// Fixed shape of an effect registration: a zero-argument arrow callback
/// body followed by a dependency array literal. The body capture stops
/// at the first `}` and the dependency capture at the first `]`.
const EFFECT_PATTERN: &str = r"useEffect\(\s*\(\s*\)\s*=>\s*\{\s*([^}]*)\}\s*,\s*\[\s*([^\]]*)\]\s*\)\s*;?";

/// One recognized state declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateToken {
    /// The exact matched source substring (diagnostic use)
    pub declaration_text: String,
    /// Identifier bound to the current value
    pub state_name: String,
    /// Identifier bound to the update function
    pub setter_name: String,
}

/// One recognized effect registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectToken {
    /// The exact matched source substring (diagnostic use)
    pub declaration_text: String,
    /// Raw text of the callback body, up to its first `}`
    pub body: String,
    /// Raw inner text of the dependency array; empty means no
    /// "consumes" edges can be derived from this effect
    pub dependency_list_text: String,
}

/// Scan source text for state declarations, in first-occurrence order.
///
/// Returns an empty vector when nothing matches; malformed declarations
/// (extra destructured names, missing brackets, a different callee) are
/// not matched. Stateless: repeated calls on identical text yield
/// field-for-field equal results.
pub fn identify_states(source: &str) -> Vec<StateToken> {
    let pattern = match Regex::new(STATE_PATTERN) {
        Ok(pattern) => pattern,
        Err(_) => return Vec::new(),
    };

    pattern
        .captures_iter(source)
        .map(|captures| StateToken {
            declaration_text: captures[0].to_string(),
            state_name: captures[1].to_string(),
            setter_name: captures[2].to_string(),
        })
        .collect()
}

/// Scan source text for effect registrations, in first-occurrence order.
///
/// The callback body and dependency list are captured as raw,
/// uninterpreted text. Matching is non-greedy: a callback body that
/// itself contains a `}` (a nested block) truncates the match at that
/// first `}`. This is a structural limit of single-pattern extraction,
/// not something deeper nesting support should be guessed around.
pub fn identify_effects(source: &str) -> Vec<EffectToken> {
    let pattern = match Regex::new(EFFECT_PATTERN) {
        Ok(pattern) => pattern,
        Err(_) => return Vec::new(),
    };

    pattern
        .captures_iter(source)
        .map(|captures| EffectToken {
            declaration_text: captures[0].to_string(),
            body: captures[1].to_string(),
            dependency_list_text: captures[2].to_string(),
        })
        .collect()
}

/// Both token sequences extracted from one source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookTokens {
    /// State declarations in first-occurrence order
    pub states: Vec<StateToken>,
    /// Effect registrations in first-occurrence order
    pub effects: Vec<EffectToken>,
}

/// Analyzer wrapper around the two extraction functions.
#[derive(Debug, Default)]
pub struct HookExtractor;

impl HookExtractor {
    /// Create a new hook extractor
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for HookExtractor {
    type Result = HookTokens;

    fn analyze(&self, input: &str) -> AnalysisResult<Self::Result> {
        if input.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        Ok(HookTokens {
            states: identify_states(input),
            effects: identify_effects(input),
        })
    }

    fn name(&self) -> &'static str {
        "HookExtractor"
    }
}
