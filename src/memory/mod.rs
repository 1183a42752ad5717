//! Bump arena for short-lived, bulk-released allocations.
//!
//! An [`Arena`] hands out zeroed regions of one fixed buffer in increasing
//! order and releases all of them at once on [`Arena::reset`].

pub mod arena;
pub mod stats;

pub use arena::{Arena, ArenaError, DEFAULT_ALIGNMENT, DEFAULT_CAPACITY};
pub use stats::ArenaStats;

use serde::{Deserialize, Serialize};

/// Configuration for arenas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Buffer size in bytes, zero selects [`DEFAULT_CAPACITY`]
    pub default_capacity: usize,
    /// Alignment of the buffer and of untyped allocations
    pub default_alignment: usize,
    /// Enable statistics collection
    pub enable_stats: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            default_alignment: DEFAULT_ALIGNMENT,
            enable_stats: true,
        }
    }
}

impl ArenaConfig {
    /// Configuration for many small scratch values
    pub fn optimized_for_small_allocations() -> Self {
        Self {
            default_capacity: 64 * 1024, // 64KB
            default_alignment: 8,
            enable_stats: true,
        }
    }

    /// Configuration for large vector or matrix batches
    pub fn optimized_for_large_data() -> Self {
        Self {
            default_capacity: 16 * 1024 * 1024, // 16MB
            default_alignment: 64, // Cache line alignment
            enable_stats: true,
        }
    }

    /// Create an arena using this configuration
    pub fn create_arena(&self) -> Result<Arena, ArenaError> {
        Arena::with_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_config_defaults() {
        let config = ArenaConfig::default();
        assert_eq!(config.default_capacity, 4096);
        assert_eq!(config.default_alignment, 16);
        assert!(config.enable_stats);
    }

    #[test]
    fn test_config_arena_creation() {
        let config = ArenaConfig::optimized_for_small_allocations();
        let arena = config.create_arena().unwrap();
        assert_eq!(arena.capacity(), 65536);

        let ptr = ArenaConfig::optimized_for_large_data()
            .create_arena()
            .unwrap()
            .allocate(1)
            .map(|p| p.as_ptr() as usize);
        assert_eq!(ptr.unwrap() % 64, 0);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: ArenaConfig = serde_json::from_str(r#"{"default_capacity": 256}"#).unwrap();
        assert_eq!(config.default_capacity, 256);
        assert_eq!(config.default_alignment, DEFAULT_ALIGNMENT);
    }
}
