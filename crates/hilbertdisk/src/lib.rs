//! Hilbert curves re-projected from the unit square onto the unit disk.
//!
//! The crate has two halves. [`curve`] decodes Hilbert indices into grid
//! cells and rescales them into the square `[-1, 1]²`. [`mapping`] holds a
//! closed set of square-to-disk projections that are applied point by point
//! to a normalized curve.
//!
//! # Supported Mappings
//!
//! - Superellipse (Lamé)
//! - Shirley-Chiu concentric
//! - FG-Squircular
//! - Simple Radial
//! - Naïve Polar
//! - Equal-Area Approx
//! - Polynomial (Conformal)

/// Hilbert index decoding and normalization.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Square-to-disk point mappings.
pub mod mapping;
/// Grid and normalized point types.
pub mod point;
/// Name table for the mappings.
pub mod registry;

pub use crate::{curve::HilbertCurve, mapping::Mapping, point::Point};

/// Generate the Hilbert curve of `order`, normalized into `[-1, 1]²`.
///
/// Order zero yields the single point `(0, 0)`. Negative orders, and orders
/// above [`curve::MAX_ORDER`], are rejected with [`error::Error::InvalidOrder`].
pub fn generate_normalized_curve(order: i64) -> error::Result<Vec<Point>> {
    let order = u32::try_from(order).map_err(|_| error::Error::InvalidOrder { order })?;
    Ok(HilbertCurve::from_order(order)?.normalized_points())
}

/// Apply the mapping registered under `name` to every point of a curve.
///
/// Names are matched exactly against [`registry::MAPPING_NAMES`]. An unknown
/// name fails without producing any output.
pub fn apply_mapping(name: &str, points: &[Point]) -> error::Result<Vec<Point>> {
    Ok(registry::lookup(name)?.apply_all(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_order_is_rejected() {
        assert!(matches!(
            generate_normalized_curve(-1),
            Err(error::Error::InvalidOrder { order: -1 })
        ));
    }

    #[test]
    fn order_zero_is_origin() -> error::Result<()> {
        assert_eq!(generate_normalized_curve(0)?, vec![Point::ORIGIN]);
        Ok(())
    }

    #[test]
    fn unknown_mapping_is_rejected() -> error::Result<()> {
        let pts = generate_normalized_curve(1)?;
        match apply_mapping("superellipse", &pts) {
            Err(error::Error::UnknownMapping(name)) => assert_eq!(name, "superellipse"),
            other => panic!("expected UnknownMapping, got {other:?}"),
        }
        Ok(())
    }
}
