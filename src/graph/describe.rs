//! Human-readable adjacency dump.

use super::WeightedGraph;

impl WeightedGraph {
    /// One `"X is connected to [X -> Y, X -> Z]"` line per node with edges.
    ///
    /// Lines are produced lazily in node insertion order.
    pub fn describe(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.node_count()).filter_map(move |id| {
            let arcs: Vec<String> = self
                .neighbors(id)
                .map(|(_, to, _)| format!("{} -> {}", self.label(id), self.label(to)))
                .collect();
            if arcs.is_empty() {
                None
            } else {
                Some(format!(
                    "{} is connected to [{}]",
                    self.label(id),
                    arcs.join(", ")
                ))
            }
        })
    }
}

impl std::fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.describe() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
