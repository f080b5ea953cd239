//! Square-to-disk mappings applied point by point to a normalized curve.
//!
//! Every mapping is a pure function of a single point and fixes the origin.
//! Inputs that would divide by zero are resolved inside the formula, so no
//! mapping can fail.

use std::{
    f64::consts::FRAC_PI_4,
    fmt,
    ops::{Add, Mul},
    str::FromStr,
};

use crate::{error, point::Point, registry};

/// Coefficient of `z⁵` in the truncated Schwarz-Christoffel series.
pub const POLY_C5: f64 = 0.0731647;
/// Coefficient of `z⁹` in the truncated Schwarz-Christoffel series.
pub const POLY_C9: f64 = 0.00358709;
/// Squareness of the Fernández-Guasti squircle. 1 is a full square.
pub const FG_SQUARENESS: f64 = 1.0;

/// The available square-to-disk mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mapping {
    /// Rescale along rays by the ratio of the L∞ and L4 norms.
    Superellipse,
    /// Shirley-Chiu concentric mapping.
    ShirleyChiu,
    /// Fernández-Guasti squircular mapping.
    FgSquircular,
    /// Divide by the Chebyshev norm.
    SimpleRadial,
    /// Polar round-trip; the identity up to rounding.
    NaivePolar,
    /// Square-root radial compression.
    EqualAreaApprox,
    /// Truncated conformal polynomial.
    Polynomial,
}

impl Mapping {
    /// Every mapping, in display order.
    pub const ALL: [Self; 7] = [
        Self::Superellipse,
        Self::ShirleyChiu,
        Self::FgSquircular,
        Self::SimpleRadial,
        Self::NaivePolar,
        Self::EqualAreaApprox,
        Self::Polynomial,
    ];

    /// Map a single point.
    pub fn apply(self, p: Point) -> Point {
        match self {
            Self::Superellipse => superellipse(p),
            Self::ShirleyChiu => shirley_chiu(p),
            Self::FgSquircular => fg_squircular(p),
            Self::SimpleRadial => simple_radial(p),
            Self::NaivePolar => naive_polar(p),
            Self::EqualAreaApprox => equal_area_approx(p),
            Self::Polynomial => polynomial(p),
        }
    }

    /// Map every point, preserving order and length.
    pub fn apply_all(self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// The registered external name.
    pub fn name(self) -> &'static str {
        registry::entry(self).name
    }

    /// A short description of the mapping.
    pub fn info(self) -> &'static str {
        registry::entry(self).info
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mapping {
    type Err = error::Error;

    fn from_str(s: &str) -> error::Result<Self> {
        registry::lookup(s)
    }
}

/// Lamé mapping: scale so the square's boundary lands on the L4 unit circle.
fn superellipse(p: Point) -> Point {
    let m = p.chebyshev_norm();
    if m == 0.0 {
        return Point::ORIGIN;
    }
    let xb = p.x / m;
    let yb = p.y / m;
    let c = (1.0 / (xb.powi(4) + yb.powi(4))).powf(0.25);
    Point::new(c * p.x, c * p.y)
}

/// Concentric mapping, octant by octant.
///
/// Branch order matters on the diagonals `|a| == |b|` and must stay as is.
fn shirley_chiu(p: Point) -> Point {
    let a = 2.0 * p.x;
    let b = 2.0 * p.y;
    if a == 0.0 && b == 0.0 {
        return Point::ORIGIN;
    }
    // Each guard keeps the divisor away from zero; the zero arms are
    // unreachable once the origin is excluded.
    let ratio = |num: f64, den: f64| if den != 0.0 { num / den } else { 0.0 };
    let (r, phi) = if a > -b {
        if a > b {
            (a, FRAC_PI_4 * ratio(b, a))
        } else {
            (b, FRAC_PI_4 * (2.0 - ratio(a, b)))
        }
    } else if a < b {
        (-a, FRAC_PI_4 * (4.0 + ratio(b, a)))
    } else {
        (-b, FRAC_PI_4 * (6.0 - ratio(a, b)))
    };
    Point::new(0.5 * r * phi.cos(), 0.5 * r * phi.sin())
}

/// Fernández-Guasti squircle. The radicands stay in `[0.5, 1]` on the square.
fn fg_squircular(p: Point) -> Point {
    let k = FG_SQUARENESS * FG_SQUARENESS / 2.0;
    Point::new(
        p.x * (1.0 - k * p.y * p.y).sqrt(),
        p.y * (1.0 - k * p.x * p.x).sqrt(),
    )
}

/// Divide by `max(|x|, |y|)`.
fn simple_radial(p: Point) -> Point {
    let m = p.chebyshev_norm();
    if m == 0.0 {
        return Point::ORIGIN;
    }
    Point::new(p.x / m, p.y / m)
}

/// To polar and straight back.
fn naive_polar(p: Point) -> Point {
    if p.is_origin() {
        return Point::ORIGIN;
    }
    let (r, theta) = to_polar(p);
    from_polar(r, theta)
}

/// Replaces the radius with its square root. This pushes points outward and
/// does not actually preserve area.
fn equal_area_approx(p: Point) -> Point {
    if p.is_origin() {
        return Point::ORIGIN;
    }
    let (r, theta) = to_polar(p);
    from_polar(r.sqrt(), theta)
}

/// `z + c5·z⁵ + c9·z⁹` over the complex plane.
fn polynomial(p: Point) -> Point {
    let z = Complex::from(p);
    let w = z + z.powu(5) * POLY_C5 + z.powu(9) * POLY_C9;
    Point::new(w.re, w.im)
}

/// `(r, θ)` with `θ` from `atan2`.
fn to_polar(p: Point) -> (f64, f64) {
    (p.norm(), p.y.atan2(p.x))
}

/// Cartesian point for `(r, θ)`.
fn from_polar(r: f64, theta: f64) -> Point {
    Point::new(r * theta.cos(), r * theta.sin())
}

/// Minimal complex number for the conformal polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Complex {
    /// Real part.
    re: f64,
    /// Imaginary part.
    im: f64,
}

impl Complex {
    /// Multiplicative identity.
    const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Integer power by repeated squaring.
    fn powu(self, mut n: u32) -> Self {
        let mut acc = Self::ONE;
        let mut base = self;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            n >>= 1;
        }
        acc
    }
}

impl From<Point> for Complex {
    fn from(p: Point) -> Self {
        Self { re: p.x, im: p.y }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}
