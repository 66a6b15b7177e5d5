use crate::{BoundingBox, Point};
use std::f32::consts::{PI, TAU};

/// Angle of the first ring node, the top of the circle in screen coordinates
pub const START_ANGLE: f32 = 3.0 * PI / 2.0;

/// Extra room kept between neighbouring ring nodes when avoiding overlap
const SPACING_FACTOR: f32 = 1.75;

/// Circle shared by every ring node of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Point,
    pub radius: f32,
    /// Angle between two consecutive nodes
    pub step: f32,
    pub start_angle: f32,
}

impl Ring {
    /// Solve the ring for `count` nodes centered on `bounds`
    ///
    /// `footprint` is the largest outer width or height among the ring nodes.
    /// Without a `fixed_radius`, the ring keeps its nodes inside `bounds`, or
    /// collapses to the center for a single node. With `avoid_overlap` and
    /// more than one node, the radius grows until neighbours stop touching.
    pub fn solve(
        count: usize,
        footprint: f32,
        fixed_radius: Option<f32>,
        avoid_overlap: bool,
        bounds: &BoundingBox,
    ) -> Self {
        let step = TAU / count.max(1) as f32;

        let mut radius = match fixed_radius {
            Some(radius) => radius,
            None if count <= 1 => 0.0,
            None => (bounds.width.min(bounds.height) / 2.0 - footprint).max(0.0),
        };

        if count > 1 && avoid_overlap {
            radius = radius.max(min_radius(SPACING_FACTOR * footprint, step));
        }

        Self {
            center: bounds.center(),
            radius,
            step,
            start_angle: START_ANGLE,
        }
    }

    /// Point of the ring at `angle`
    pub fn point_at(&self, angle: f32) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Successive node positions, starting at the top
    pub fn points(&self, counterclockwise: bool) -> RingPoints {
        RingPoints {
            ring: *self,
            index: 0,
            delta: if counterclockwise { -self.step } else { self.step },
        }
    }
}

/// Smallest radius at which two points `step` apart are `spacing` away
fn min_radius(spacing: f32, step: f32) -> f32 {
    let dcos = step.cos() - 1.0;
    let dsin = step.sin();
    spacing / (dcos * dcos + dsin * dsin).sqrt()
}

/// Iterator over ring positions, each call consumes one angle
///
/// Angles are derived from the slot index rather than summed, so the last
/// node of a large ring lands where the first one would after a full turn.
#[derive(Debug, Clone)]
pub struct RingPoints {
    ring: Ring,
    index: u32,
    delta: f32,
}

impl Iterator for RingPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let angle = self.ring.start_angle + self.index as f32 * self.delta;
        self.index = self.index.wrapping_add(1);
        Some(self.ring.point_at(angle))
    }
}
