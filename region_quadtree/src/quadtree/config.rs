#[derive(Debug, Clone)]
pub struct Config {
    /// Items each node reserves room for up front. Not a limit: a node keeps
    /// accepting items past this.
    pub node_capacity: usize,
    /// Levels of children below the root. Zero builds a root-only tree.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 16,
            max_depth: 4,
        }
    }
}
