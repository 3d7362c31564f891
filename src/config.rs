//! Per-stage tuning knobs, mirroring the small `*Config` structs used
//! throughout the algorithms in this crate: documented defaults, optional
//! `serde` round-tripping and optional `clap::Args` derivation so a host CLI
//! can compose them without this crate depending on `clap` by default.

/// Configuration for [`crate::vfps::voronoi_fps`].
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct VfpsConfig {
    /// Number of seed vertices to sample.
    #[cfg_attr(feature = "clap", clap(long))]
    pub sample_count: usize,

    /// Initial capacity reserved for the internal binary heap, as a multiple
    /// of the vertex count. Purely a pre-allocation hint.
    #[cfg_attr(feature = "clap", clap(long, default_value_t = VfpsConfig::DEFAULT_HEAP_CAPACITY_FACTOR))]
    pub heap_capacity_factor: usize,
}

impl VfpsConfig {
    pub const DEFAULT_HEAP_CAPACITY_FACTOR: usize = 4;

    pub fn new(sample_count: usize) -> Self {
        Self {
            sample_count,
            heap_capacity_factor: Self::DEFAULT_HEAP_CAPACITY_FACTOR,
        }
    }
}

/// Configuration for [`crate::weights::weight_map`].
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct WeightMapConfig {
    /// Maximum accepted out-of-plane projection residual, relative to the
    /// candidate triangle's longest edge, before falling back to the next
    /// triangle in the one-ring walk.
    #[cfg_attr(feature = "clap", clap(long, default_value_t = WeightMapConfig::DEFAULT_RESIDUAL_TOLERANCE))]
    pub residual_tolerance: f64,
}

impl Default for WeightMapConfig {
    fn default() -> Self {
        Self {
            residual_tolerance: Self::DEFAULT_RESIDUAL_TOLERANCE,
        }
    }
}

impl WeightMapConfig {
    pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-3;
}
