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

//! Render-loop analysis engine
//!
//! Runs the three stages in order — token extraction, trigger graph
//! construction, cycle detection — and packages the outcome with
//! statistics and metadata. The engine itself adds caching and logging
//! on top of the pure stage functions; it holds no analysis state of
//! its own between calls beyond the result cache.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

use crate::analyzers::cycle::has_cycle;
use crate::analyzers::extraction::{EffectToken, StateToken, identify_effects, identify_states};
use crate::analyzers::trigger_graph::build_graph;
use crate::analyzers::{AnalysisError, AnalysisResult, AnalysisStats};
use crate::config::EngineConfig;

/// Complete result of one render-loop analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderLoopAnalysis {
    /// Extracted state declarations, in source order
    pub states: Vec<StateToken>,
    /// Extracted effect registrations, in source order
    pub effects: Vec<EffectToken>,
    /// Number of trigger edges derived between effects
    pub edge_count: usize,
    /// Whether the trigger graph contains a directed cycle
    pub has_cycle: bool,
    /// Analysis statistics
    pub statistics: AnalysisStats,
    /// Analysis metadata
    pub metadata: HashMap<String, String>,
}

/// Main render-loop analysis engine
pub struct RenderLoopEngine {
    /// Engine configuration
    config: EngineConfig,
    /// Cache for analysis results
    result_cache: HashMap<String, RenderLoopAnalysis>,
    /// Cumulative statistics across analyses
    stats: AnalysisStats,
}

impl RenderLoopEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            result_cache: HashMap::new(),
            stats: AnalysisStats::new(),
        }
    }

    /// Create a new engine with default configuration
    pub fn with_default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Update the engine configuration
    pub fn update_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// Get cumulative analysis statistics
    pub fn statistics(&self) -> &AnalysisStats {
        &self.stats
    }

    /// Clear the result cache
    pub fn clear_cache(&mut self) {
        self.result_cache.clear();
    }

    /// Number of cached results
    pub fn cache_len(&self) -> usize {
        self.result_cache.len()
    }

    /// Reset the cache and cumulative statistics
    pub fn reset(&mut self) {
        self.result_cache.clear();
        self.stats = AnalysisStats::new();
    }

    /// Run the full analysis over one component source text
    pub fn analyze(&mut self, source: &str) -> AnalysisResult<RenderLoopAnalysis> {
        let start_time = Instant::now();

        if source.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        if self.config.enable_caching {
            let cache_key = self.generate_cache_key(source);
            if let Some(cached_result) = self.result_cache.get(&cache_key) {
                if self.config.is_debug() {
                    debug!("using cached analysis result");
                }
                return Ok(cached_result.clone());
            }
        }

        let states = identify_states(source);
        if self.config.is_debug() {
            debug!(states = states.len(), "state extraction completed");
        }

        let effects = identify_effects(source);
        if self.config.is_debug() {
            debug!(effects = effects.len(), "effect extraction completed");
        }

        let graph = build_graph(&effects, &states);
        let edge_count = graph.edge_count();
        if self.config.is_debug() {
            debug!(nodes = graph.node_count(), edges = edge_count, "trigger graph built");
        }

        let has_cycle = has_cycle(&graph);
        if self.config.is_verbose() {
            info!(has_cycle, "render-loop analysis completed");
        }

        let duration = start_time.elapsed();
        let mut statistics = AnalysisStats::new();
        statistics.add_states(states.len());
        statistics.add_effects(effects.len());
        statistics.add_edges(edge_count);
        statistics.set_duration(duration.as_millis() as u64);

        self.stats.add_states(states.len());
        self.stats.add_effects(effects.len());
        self.stats.add_edges(edge_count);
        self.stats.set_duration(duration.as_millis() as u64);

        let mut metadata = HashMap::new();
        metadata.insert("analysis_time".to_string(), format!("{}ms", duration.as_millis()));
        metadata.insert("input_size".to_string(), source.len().to_string());

        let result = RenderLoopAnalysis {
            states,
            effects,
            edge_count,
            has_cycle,
            statistics,
            metadata,
        };

        if self.config.enable_caching {
            let cache_key = self.generate_cache_key(source);
            self.result_cache.insert(cache_key, result.clone());
        }

        Ok(result)
    }

    /// Generate a cache key for the input
    fn generate_cache_key(&self, source: &str) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        source.hash(&mut hasher);
        format!("{:x}", hasher.finish())
    }
}
