mod grid;
mod manual;
mod ring;
mod shape;

use crate::{BoundingBox, LayoutEngine, NodeSizes, Placement, PlacementHints, Point, Vec2};
use petgraph::visit::IntoNodeIdentifiers;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;
use tracing::{debug, trace};

pub use grid::{Cell, CellGrid};
pub use manual::{resolve_pin, Pin};
pub use ring::{Ring, RingPoints, START_ANGLE};
pub use shape::{fit_capacity, solve_grid_shape, GridSpec};

/// Grid dimension named by an override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("rows"),
            Axis::Columns => f.write_str("columns"),
        }
    }
}

/// Errors that can occur during columnar layout computation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ColumnarLayoutError {
    /// A rows or columns override of zero leaves no room for any node
    #[error("{axis} override must be at least 1")]
    ZeroGridDimension { axis: Axis },

    /// The bounding box size is negative or not a number
    #[error("bounding box size {width}x{height} is invalid")]
    InvalidBoundingBox { width: f32, height: f32 },

    /// A bounding box was given without its size or far corner
    #[error("bounding box needs either x2/y2 or w/h")]
    IncompleteBoundingBox,

    /// The forced ring radius is negative or not a number
    #[error("ring radius {0} is invalid")]
    InvalidRadius(f32),
}

/// Configuration for the columnar layout
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnarOptions {
    /// Area to fill, the whole viewport when unset
    pub bounding_box: Option<BoundingBox>,

    /// Force the number of grid rows
    pub rows: Option<usize>,

    /// Force the number of grid columns
    pub columns: Option<usize>,

    /// Grow cells and the ring radius so nodes don't overlap, possibly
    /// spilling out of the bounding box
    pub avoid_overlap: bool,

    /// Force the ring radius
    pub radius: Option<f32>,

    /// Walk the ring counterclockwise
    pub counterclockwise: bool,
}

impl Default for ColumnarOptions {
    fn default() -> Self {
        Self {
            bounding_box: None,
            rows: None,
            columns: None,
            avoid_overlap: true,
            radius: None,
            counterclockwise: false,
        }
    }
}

impl ColumnarOptions {
    /// Check that every value can be used by the layout
    ///
    /// # Errors
    /// Returns the first value the layout cannot interpret
    pub fn validate(&self) -> Result<(), ColumnarLayoutError> {
        if self.rows == Some(0) {
            return Err(ColumnarLayoutError::ZeroGridDimension { axis: Axis::Rows });
        }
        if self.columns == Some(0) {
            return Err(ColumnarLayoutError::ZeroGridDimension {
                axis: Axis::Columns,
            });
        }
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ColumnarLayoutError::InvalidRadius(radius));
            }
        }
        if let Some(bb) = self.bounding_box {
            validate_bounds(&bb)?;
        }
        Ok(())
    }
}

fn validate_bounds(bb: &BoundingBox) -> Result<(), ColumnarLayoutError> {
    let valid = |side: f32| side.is_finite() && side >= 0.0;
    if valid(bb.width) && valid(bb.height) && bb.x1.is_finite() && bb.y1.is_finite() {
        Ok(())
    } else {
        Err(ColumnarLayoutError::InvalidBoundingBox {
            width: bb.width,
            height: bb.height,
        })
    }
}

/// Grid and satellite ring layout
///
/// Nodes hinted as [`Placement::Grid`] fill a grid sized to the bounding
/// box, nodes hinted as [`Placement::Ring`] are spread on a circle around
/// the box center. The grid is shifted down by the ring diameter. Nodes
/// without a hint, and locked nodes, get no position.
#[derive(Debug, Clone)]
pub struct ColumnarLayout<P> {
    pub options: ColumnarOptions,

    /// Size of the host canvas, used when no bounding box is configured
    pub viewport: Vec2,

    hints: P,
}

impl<P> ColumnarLayout<P> {
    /// Create a layout with default options
    pub fn new(viewport: Vec2, hints: P) -> Self {
        Self {
            options: ColumnarOptions::default(),
            viewport,
            hints,
        }
    }

    pub fn with_options(mut self, options: ColumnarOptions) -> Self {
        self.options = options;
        self
    }

    pub fn hints(&self) -> &P {
        &self.hints
    }

    /// Area the layout fills
    pub fn bounding_box(&self) -> BoundingBox {
        self.options
            .bounding_box
            .unwrap_or_else(|| BoundingBox::from_viewport(self.viewport))
    }

    /// Compute positions for `nodes`, visited in iteration order
    ///
    /// The iteration order decides which cell each automatically placed grid
    /// node takes and which angle each ring node gets.
    ///
    /// # Errors
    /// Returns an error if the options or the bounding box are invalid and
    /// at least one node is classified
    pub fn compute_positions<N, I, S>(
        &self,
        nodes: I,
        sizes: &S,
    ) -> Result<HashMap<N, Point>, ColumnarLayoutError>
    where
        N: Copy + Eq + Hash + fmt::Debug,
        I: IntoIterator<Item = N>,
        S: NodeSizes<N>,
        P: PlacementHints<N>,
    {
        let classified = self.classify(nodes);
        let mut positions = HashMap::new();

        // Nothing to solve, so nothing to validate either
        if classified.is_empty() {
            return Ok(positions);
        }

        self.options.validate()?;
        let bounds = self.bounding_box();
        validate_bounds(&bounds)?;

        if bounds.is_degenerate() {
            debug!("Bounding box {bounds:?} has no area, stacking nodes at its origin");
            for node in classified.iter().filter(|n| !n.locked) {
                positions.insert(node.id, bounds.origin());
            }
            return Ok(positions);
        }

        let ring_nodes = || classified.iter().filter(|n| n.placement == Placement::Ring);
        let grid_nodes = || classified.iter().filter(|n| n.placement == Placement::Grid);

        let ring_count = ring_nodes().count();
        let ring = Ring::solve(
            ring_count,
            sizes.max_size(ring_nodes().map(|n| n.id)).max_element(),
            self.options.radius,
            self.options.avoid_overlap,
            &bounds,
        );
        debug!(
            "Ring of {ring_count} nodes around {:?}, radius {}",
            ring.center, ring.radius
        );

        let grid_count = grid_nodes().count();
        let mut grid = (grid_count > 0).then(|| {
            let spec = solve_grid_shape(
                grid_count,
                bounds.size(),
                self.options.rows,
                self.options.columns,
            );
            debug!("Grid of {}x{} for {grid_count} nodes", spec.rows, spec.columns);
            let max_size = sizes.max_size(grid_nodes().map(|n| n.id));
            CellGrid::new(spec, &bounds, self.options.avoid_overlap, max_size)
                .with_vertical_offset(2.0 * ring.radius)
        });

        // Pinned cells are reserved before any automatic placement
        let mut pinned = HashMap::new();
        if let Some(grid) = grid.as_mut() {
            for node in grid_nodes() {
                if let Some(pin) = node.pin {
                    pinned.insert(node.id, resolve_pin(grid, pin));
                }
            }
        }

        let mut ring_points = ring.points(self.options.counterclockwise);
        for node in &classified {
            let position = match node.placement {
                Placement::Ring => {
                    // Locked ring nodes still hold on to their angle
                    let Some(point) = ring_points.next() else {
                        continue;
                    };
                    if node.locked {
                        continue;
                    }
                    point
                }
                Placement::Grid => {
                    if node.locked {
                        continue;
                    }
                    let Some(grid) = grid.as_mut() else {
                        continue;
                    };
                    let cell = match pinned.get(&node.id) {
                        Some(&cell) => cell,
                        None => grid.take_next(),
                    };
                    grid.center(cell)
                }
            };
            trace!("{:?} placed at {position:?}", node.id);
            positions.insert(node.id, position);
        }

        debug!(
            "Placed {} of {} classified nodes",
            positions.len(),
            classified.len()
        );
        Ok(positions)
    }

    /// Ask the host for every node's hint, once, keeping classified nodes
    fn classify<N, I>(&self, nodes: I) -> Vec<Classified<N>>
    where
        N: Copy,
        I: IntoIterator<Item = N>,
        P: PlacementHints<N>,
    {
        nodes
            .into_iter()
            .filter_map(|id| {
                let hint = self.hints.hint(id)?;
                let placement = hint.placement()?;
                let pin = match placement {
                    Placement::Grid => Pin::from_hint(&hint),
                    Placement::Ring => None,
                };
                Some(Classified {
                    id,
                    placement,
                    pin,
                    locked: self.hints.is_locked(id),
                })
            })
            .collect()
    }
}

/// A node the host asked to place
#[derive(Debug, Clone, Copy)]
struct Classified<N> {
    id: N,
    placement: Placement,
    pin: Option<Pin>,
    locked: bool,
}

// Implement LayoutEngine for any graph that can enumerate its nodes
impl<G, P> LayoutEngine<G> for ColumnarLayout<P>
where
    G: IntoNodeIdentifiers,
    G::NodeId: Copy + Eq + Hash + fmt::Debug,
    P: PlacementHints<G::NodeId>,
{
    type NodeId = G::NodeId;
    type Error = ColumnarLayoutError;

    fn layout<S>(&self, graph: G, sizes: &S) -> Result<HashMap<Self::NodeId, Point>, Self::Error>
    where
        S: NodeSizes<Self::NodeId>,
    {
        self.compute_positions(graph.node_identifiers(), sizes)
    }
}
