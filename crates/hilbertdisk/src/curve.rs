//! Hilbert curve generation over a `2^order × 2^order` grid.

use crate::{
    error,
    point::{GridPoint, Point},
};

/// Largest accepted order. At order 15 the grid holds `2^30` cells, the last
/// power of four whose indices still fit a `u32`.
pub const MAX_ORDER: u32 = 15;

/// Decode Hilbert `index` into its cell on a grid of side `side`.
///
/// `side` must be a power of two and `index < side * side`. Refinement works
/// bottom-up: each step takes two bits of the index, rotates or reflects the
/// partial coordinates into the chosen quadrant, then doubles the scale.
pub fn hilbert_point(side: u32, index: u32) -> GridPoint {
    let mut x: u32 = 0;
    let mut y: u32 = 0;
    let mut rest = index;
    let mut scale: u32 = 1;
    while scale < side {
        let rx = 1 & (rest >> 1);
        let ry = 1 & (rest ^ rx);
        if ry == 0 {
            if rx == 1 {
                x = scale - 1 - x;
                y = scale - 1 - y;
            }
            (x, y) = (y, x);
        }
        x += scale * rx;
        y += scale * ry;
        rest >>= 2;
        scale <<= 1;
    }
    GridPoint::new(x, y)
}

/// A 2D Hilbert curve of a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HilbertCurve {
    /// Recursion depth. The grid side is `2^order`.
    pub order: u32,
    /// Grid side length.
    side: u32,
    /// Number of cells, `side²`.
    length: u32,
}

impl HilbertCurve {
    /// Construct the curve for `order`, rejecting orders above [`MAX_ORDER`].
    pub fn from_order(order: u32) -> error::Result<Self> {
        if order > MAX_ORDER {
            return Err(error::Error::InvalidOrder {
                order: i64::from(order),
            });
        }
        let side = 1u32 << order;
        Ok(Self {
            order,
            side,
            length: side * side,
        })
    }

    /// Grid side length, `2^order`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of points on the curve, `4^order`.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Grid cell visited at position `index`.
    pub fn point(&self, index: u32) -> GridPoint {
        debug_assert!(index < self.length, "index out of bounds");
        hilbert_point(self.side, index % self.length)
    }

    /// All grid cells in traversal order.
    pub fn grid_points(&self) -> Vec<GridPoint> {
        (0..self.length).map(|i| hilbert_point(self.side, i)).collect()
    }

    /// All points in traversal order, rescaled into `[-1, 1]²`.
    pub fn normalized_points(&self) -> Vec<Point> {
        normalize(&self.grid_points(), self.side)
    }
}

/// The grid cells of the order-`order` curve, in index order.
pub fn generate(order: u32) -> error::Result<Vec<GridPoint>> {
    Ok(HilbertCurve::from_order(order)?.grid_points())
}

/// Affinely rescale grid cells in `[0, side)²` into `[-1, 1]²`.
///
/// A one-cell grid has no extent to rescale, so its sole cell goes to the
/// origin.
pub fn normalize(points: &[GridPoint], side: u32) -> Vec<Point> {
    if side <= 1 {
        return vec![Point::ORIGIN; points.len().min(1)];
    }
    let span = f64::from(side - 1);
    points
        .iter()
        .map(|p| {
            Point::new(
                2.0 * f64::from(p.x) / span - 1.0,
                2.0 * f64::from(p.y) / span - 1.0,
            )
        })
        .collect()
}

/// Map a normalized point back to the nearest grid cell.
pub fn denormalize(point: Point, side: u32) -> GridPoint {
    if side <= 1 {
        return GridPoint::default();
    }
    let span = f64::from(side - 1);
    let cell = |v: f64| ((v + 1.0) * span / 2.0).round().clamp(0.0, span) as u32;
    GridPoint::new(cell(point.x), cell(point.y))
}
