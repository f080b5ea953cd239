//! Integration tests for curve generation: size, bijection, continuity and
//! normalization bounds.
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use hilbertdisk::{
        curve::{self, HilbertCurve, denormalize},
        error, generate_normalized_curve,
        point::{GridPoint, Point},
    };

    fn curve_is_bijective(order: u32) -> error::Result<()> {
        let c = HilbertCurve::from_order(order)?;
        let side = c.side();
        let normalized = generate_normalized_curve(i64::from(order))?;
        assert_eq!(normalized.len() as u64, 4u64.pow(order));

        let cells: HashSet<GridPoint> = normalized
            .iter()
            .map(|&p| denormalize(p, side))
            .collect();
        assert_eq!(cells.len(), normalized.len(), "order {order}: repeated cell");
        assert!(
            cells.iter().all(|g| g.x < side && g.y < side),
            "order {order}: cell outside the grid"
        );
        Ok(())
    }

    fn curve_is_continuous(order: u32) -> error::Result<()> {
        let pts = curve::generate(order)?;
        for (off, pair) in pts.windows(2).enumerate() {
            assert_eq!(
                pair[0].chebyshev(&pair[1]),
                1,
                "order {order} is discontinuous at offset {off}: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
            assert_eq!(pair[0].manhattan(&pair[1]), 1);
        }
        Ok(())
    }

    fn corners_are_exact(order: u32) -> error::Result<()> {
        let pts = generate_normalized_curve(i64::from(order))?;
        let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!((min_x, max_x, min_y, max_y), (-1.0, 1.0, -1.0, 1.0));
        Ok(())
    }

    macro_rules! order_tests {
        ($($order:expr),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<bijection_order_ $order>]() -> error::Result<()> {
                        curve_is_bijective($order)
                    }

                    #[test]
                    fn [<continuous_order_ $order>]() -> error::Result<()> {
                        curve_is_continuous($order)
                    }

                    #[test]
                    fn [<corners_order_ $order>]() -> error::Result<()> {
                        corners_are_exact($order)
                    }
                }
            )*
        };
    }

    order_tests! { 1, 2, 3, 4, 5, 6, 7, 8 }

    #[test]
    fn order_zero_is_single_origin() -> error::Result<()> {
        curve_is_bijective(0)?;
        assert_eq!(generate_normalized_curve(0)?, vec![Point::ORIGIN]);
        Ok(())
    }

    #[test]
    fn order_one_scenario() -> error::Result<()> {
        let grid = curve::generate(1)?;
        assert_eq!(
            grid,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(0, 1),
                GridPoint::new(1, 1),
                GridPoint::new(1, 0),
            ]
        );
        assert_eq!(
            generate_normalized_curve(1)?,
            vec![
                Point::new(-1.0, -1.0),
                Point::new(-1.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, -1.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn curve_starts_and_ends_on_bottom_corners() -> error::Result<()> {
        for order in 1..=8 {
            let c = HilbertCurve::from_order(order)?;
            let last = c.side() - 1;
            assert_eq!(c.point(0), GridPoint::new(0, 0));
            let end = c.point(c.length() - 1);
            // Entry and exit are the two corners on the x axis.
            assert_eq!(end, GridPoint::new(last, 0), "order {order}");
        }
        Ok(())
    }

    #[test]
    fn generation_is_deterministic() -> error::Result<()> {
        let a = generate_normalized_curve(6)?;
        let b = generate_normalized_curve(6)?;
        assert!(
            a.iter()
                .zip(&b)
                .all(|(p, q)| p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits())
        );
        Ok(())
    }

    #[test]
    fn invalid_orders() {
        assert!(matches!(
            generate_normalized_curve(-3),
            Err(error::Error::InvalidOrder { order: -3 })
        ));
        assert!(matches!(
            generate_normalized_curve(i64::from(curve::MAX_ORDER) + 1),
            Err(error::Error::InvalidOrder { .. })
        ));
        assert!(generate_normalized_curve(i64::MIN).is_err());
    }
}
