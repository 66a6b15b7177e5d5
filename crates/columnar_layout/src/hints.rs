use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Which sub-layout a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Packed into a cell of the grid
    Grid,
    /// Spread around the satellite ring
    Ring,
}

/// Per-node placement request returned by the host
///
/// `row` and `column` pin a grid node to a cell; when only one is given the
/// first free cell along the other axis is used. A hint that pins a row or
/// column without naming a placement is a grid hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementHint {
    pub placement: Option<Placement>,
    pub row: Option<usize>,
    pub column: Option<usize>,
}

impl PlacementHint {
    /// Automatically placed grid node
    pub fn grid() -> Self {
        Self {
            placement: Some(Placement::Grid),
            ..Default::default()
        }
    }

    /// Ring node
    pub fn ring() -> Self {
        Self {
            placement: Some(Placement::Ring),
            ..Default::default()
        }
    }

    /// Grid node pinned to an exact cell
    pub fn at(row: usize, column: usize) -> Self {
        Self {
            placement: Some(Placement::Grid),
            row: Some(row),
            column: Some(column),
        }
    }

    /// Grid node pinned to a row, first free column
    pub fn in_row(row: usize) -> Self {
        Self {
            placement: Some(Placement::Grid),
            row: Some(row),
            column: None,
        }
    }

    /// Grid node pinned to a column, first free row
    pub fn in_column(column: usize) -> Self {
        Self {
            placement: Some(Placement::Grid),
            row: None,
            column: Some(column),
        }
    }

    /// Effective placement of the node, if any
    pub fn placement(&self) -> Option<Placement> {
        self.placement.or_else(|| {
            (self.row.is_some() || self.column.is_some()).then_some(Placement::Grid)
        })
    }
}

/// Trait for classifying nodes during layout computation
///
/// `hint` is called exactly once per node and run, in the order the host
/// yields nodes.
pub trait PlacementHints<N> {
    /// Get the placement requested for a node, `None` leaves it untouched
    fn hint(&self, node: N) -> Option<PlacementHint>;

    /// Locked nodes keep their current position
    fn is_locked(&self, _node: N) -> bool {
        false
    }

    /// Attach a lock predicate to these hints
    fn with_locked<L>(self, locked: L) -> WithLocked<Self, L>
    where
        Self: Sized,
        L: Fn(N) -> bool,
    {
        WithLocked {
            hints: self,
            locked,
        }
    }
}

// Blanket implementation for closures
impl<N, F> PlacementHints<N> for F
where
    F: Fn(N) -> Option<PlacementHint>,
{
    fn hint(&self, node: N) -> Option<PlacementHint> {
        self(node)
    }
}

impl<N: Eq + Hash + Copy> PlacementHints<N> for HashMap<N, PlacementHint> {
    fn hint(&self, node: N) -> Option<PlacementHint> {
        self.get(&node).copied()
    }
}

/// Placement hints combined with a lock predicate, see [`PlacementHints::with_locked`]
#[derive(Debug, Clone)]
pub struct WithLocked<P, L> {
    hints: P,
    locked: L,
}

impl<N, P, L> PlacementHints<N> for WithLocked<P, L>
where
    N: Copy,
    P: PlacementHints<N>,
    L: Fn(N) -> bool,
{
    fn hint(&self, node: N) -> Option<PlacementHint> {
        self.hints.hint(node)
    }

    fn is_locked(&self, node: N) -> bool {
        (self.locked)(node) || self.hints.is_locked(node)
    }
}
