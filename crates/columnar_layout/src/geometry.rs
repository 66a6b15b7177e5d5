use crate::ColumnarLayoutError;
use serde::{Deserialize, Serialize};

/// 2D vector with f32 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a zero vector
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Return the component-wise maximum of two vectors
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Largest of the two components
    pub fn max_element(self) -> f32 {
        self.x.max(self.y)
    }
}

/// 2D point with f32 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned area the layout fills
///
/// Deserializes from either corner form `(x1, y1, x2, y2)` or size form
/// `(x1, y1, w, h)`, see [`BoundingBoxSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BoundingBoxSpec")]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Create a box from its top-left corner and size
    pub fn new(x1: f32, y1: f32, width: f32, height: f32) -> Self {
        Self {
            x1,
            y1,
            width,
            height,
        }
    }

    /// Create a box from two opposite corners
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Box anchored at the origin covering a viewport
    pub fn from_viewport(viewport: Vec2) -> Self {
        Self::new(0.0, 0.0, viewport.x, viewport.y)
    }

    pub fn x2(&self) -> f32 {
        self.x1 + self.width
    }

    pub fn y2(&self) -> f32 {
        self.y1 + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x1 + self.width / 2.0, self.y1 + self.height / 2.0)
    }

    /// True when either dimension is zero
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x1 && point.x <= self.x2() && point.y >= self.y1 && point.y <= self.y2()
    }
}

/// Input form of a [`BoundingBox`]
///
/// The size comes from `w`/`h` when given, from the far corner otherwise.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BoundingBoxSpec {
    pub x1: f32,
    pub y1: f32,
    pub x2: Option<f32>,
    pub y2: Option<f32>,
    #[serde(alias = "width")]
    pub w: Option<f32>,
    #[serde(alias = "height")]
    pub h: Option<f32>,
}

impl TryFrom<BoundingBoxSpec> for BoundingBox {
    type Error = ColumnarLayoutError;

    fn try_from(spec: BoundingBoxSpec) -> Result<Self, Self::Error> {
        let width = spec.w.or(spec.x2.map(|x2| x2 - spec.x1));
        let height = spec.h.or(spec.y2.map(|y2| y2 - spec.y1));
        match (width, height) {
            (Some(width), Some(height)) => Ok(Self::new(spec.x1, spec.y1, width, height)),
            _ => Err(ColumnarLayoutError::IncompleteBoundingBox),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn corners_and_size_describe_the_same_box() {
        let a = BoundingBox::from_corners(10.0, 20.0, 110.0, 70.0);
        let b = BoundingBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(a, b);
        assert_eq!(a.center(), Point::new(60.0, 45.0));
        assert_eq!(a.x2(), 110.0);
        assert_eq!(a.y2(), 70.0);
    }

    #[test]
    fn degenerate_when_either_side_is_zero() {
        assert!(BoundingBox::new(5.0, 5.0, 0.0, 10.0).is_degenerate());
        assert!(BoundingBox::new(5.0, 5.0, 10.0, 0.0).is_degenerate());
        assert!(!BoundingBox::from_viewport(Vec2::new(1.0, 1.0)).is_degenerate());
    }

    #[test]
    fn contains_includes_edges() {
        let bb = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(bb.contains(Point::new(0.0, 100.0)));
        assert!(bb.contains(Point::new(50.0, 50.0)));
        assert!(!bb.contains(Point::new(100.5, 50.0)));
    }

    #[test]
    fn spec_prefers_explicit_size() {
        let spec = BoundingBoxSpec {
            x1: 10.0,
            y1: 10.0,
            x2: Some(50.0),
            h: Some(5.0),
            ..Default::default()
        };
        assert_eq!(
            BoundingBox::try_from(spec),
            Ok(BoundingBox::new(10.0, 10.0, 40.0, 5.0))
        );

        let partial = BoundingBoxSpec {
            w: Some(5.0),
            ..Default::default()
        };
        assert_eq!(
            BoundingBox::try_from(partial),
            Err(ColumnarLayoutError::IncompleteBoundingBox)
        );
    }

    #[test]
    fn distance_is_euclidean() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}
