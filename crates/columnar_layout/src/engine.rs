use crate::{NodeSizes, Point};
use std::collections::HashMap;
use std::hash::Hash;

/// A layout engine that can compute positions for graph nodes
///
/// This trait is generic over the graph type `G` so an engine only states the
/// graph capabilities it needs. The columnar engine only enumerates nodes,
/// so it works with anything implementing `IntoNodeIdentifiers`.
///
/// Nodes the engine decides not to move are absent from the returned map; the
/// host is expected to keep their current position.
pub trait LayoutEngine<G> {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Eq + Hash;

    /// Error returned when the engine configuration cannot be applied
    type Error;

    /// Compute node positions for the given graph
    ///
    /// # Errors
    /// Returns an error if the engine is configured with values the layout
    /// cannot interpret
    fn layout<S>(&self, graph: G, sizes: &S) -> Result<HashMap<Self::NodeId, Point>, Self::Error>
    where
        S: NodeSizes<Self::NodeId>;
}
