//! Grid and satellite ring placement for graph nodes
//!
//! This crate computes target positions for graph nodes inside a bounding
//! box. It works with any graph data structure through petgraph's visitor
//! traits, and leaves applying the positions (animated or not) to the host.
//!
//! # Layout Engines
//!
//! - [`ColumnarLayout`]: packs most nodes into a near-square grid and spreads
//!   satellite nodes on a ring around the box center
//!
//! Each node is classified by a [`PlacementHints`] source: a closure or map
//! returning a [`PlacementHint`] per node. Grid hints may pin a node to a row,
//! a column or an exact cell.
//!
//! # Example
//!
//! ```
//! use columnar_layout::{ColumnarLayout, LayoutEngine, PlacementHint, Vec2};
//! use petgraph::graphmap::UnGraphMap;
//!
//! // Create a graph
//! let mut graph = UnGraphMap::<u32, ()>::new();
//! graph.add_edge(0, 1, ());
//! graph.add_edge(0, 2, ());
//! graph.add_edge(0, 3, ());
//!
//! // Node 0 goes on the ring, the others fill the grid
//! let hints = |node: u32| {
//!     Some(if node == 0 {
//!         PlacementHint::ring()
//!     } else {
//!         PlacementHint::grid()
//!     })
//! };
//!
//! // Create a layout engine for an 800x600 canvas
//! let engine = ColumnarLayout::new(Vec2::new(800.0, 600.0), hints);
//!
//! // Provide node sizes
//! let sizes = |_node: u32| Vec2::new(100.0, 50.0);
//!
//! let positions = engine.layout(&graph, &sizes).unwrap();
//! assert_eq!(positions.len(), 4);
//!
//! // A lone ring node sits at the center of the canvas
//! assert_eq!(positions[&0].x, 400.0);
//! assert_eq!(positions[&0].y, 300.0);
//! ```

mod engine;
mod geometry;
mod hints;
mod sizes;

pub mod columnar;

// Re-export core types and traits
pub use engine::LayoutEngine;
pub use geometry::{BoundingBox, BoundingBoxSpec, Point, Vec2};
pub use hints::{Placement, PlacementHint, PlacementHints, WithLocked};
pub use sizes::NodeSizes;

// Re-export petgraph visitor traits for graph abstraction
pub use petgraph::visit::{GraphBase, IntoNodeIdentifiers};

// Re-export columnar layout types
pub use columnar::{Axis, ColumnarLayout, ColumnarLayoutError, ColumnarOptions};
