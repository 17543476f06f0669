use serde::{Deserialize, Serialize};

/// Limits applied to every request before subdivision starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Deepest subdivision accepted.
    pub max_depth: u32,
    /// Largest vertex count a single run may emit.
    pub max_vertices: u64,
    /// Use the rayon pool when the crate is built with `parallel`.
    pub parallel: bool,
    /// Depth from which the parallel path is taken.
    pub parallel_min_depth: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 12,
            max_vertices: 1 << 24,
            parallel: true,
            parallel_min_depth: 6,
        }
    }
}
