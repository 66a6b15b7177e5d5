use crate::Vec2;
use std::collections::HashMap;
use std::hash::Hash;

/// Trait for providing the outer size of a node during layout computation
pub trait NodeSizes<N> {
    /// Get the outer width and height of a node
    fn size(&self, node: N) -> Vec2;

    /// Component-wise largest size across the given nodes, zero when empty
    fn max_size<I>(&self, nodes: I) -> Vec2
    where
        I: IntoIterator<Item = N>,
    {
        nodes
            .into_iter()
            .map(|node| self.size(node))
            .fold(Vec2::zero(), Vec2::max)
    }
}

// Blanket implementation for closures
impl<N, F> NodeSizes<N> for F
where
    F: Fn(N) -> Vec2,
{
    fn size(&self, node: N) -> Vec2 {
        self(node)
    }
}

// Unknown nodes have no footprint
impl<N: Eq + Hash + Copy> NodeSizes<N> for HashMap<N, Vec2> {
    fn size(&self, node: N) -> Vec2 {
        self.get(&node).copied().unwrap_or(Vec2::zero())
    }
}

// Every node shares the same size
impl<N> NodeSizes<N> for Vec2 {
    fn size(&self, _node: N) -> Vec2 {
        *self
    }
}
