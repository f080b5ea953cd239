//! SVG rendering of a curve as a single open polyline.
//!
//! Output has no background element, so it is transparent, and the view box
//! is fitted tightly around the points with both axes sharing one scale.

use hilbertdisk::Point;

/// Stroke and canvas options for an exported curve.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgOptions {
    /// Length of the longer side of the drawing, in user units.
    pub size: u32,
    /// Stroke color as `#rrggbb`.
    pub stroke: String,
    /// Stroke width in user units.
    pub line_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            size: 432,
            stroke: "#0000ff".to_string(),
            line_width: 1.5,
        }
    }
}

/// Axis-aligned bounds of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    /// Smallest x.
    min_x: f64,
    /// Largest x.
    max_x: f64,
    /// Smallest y.
    min_y: f64,
    /// Largest y.
    max_y: f64,
}

impl Bounds {
    /// Bounds of `points`, or `None` when empty.
    fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points.iter().fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Width of the bounds.
    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounds.
    fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Transform from curve space to SVG user space, flipping y.
struct Frame {
    /// Curve bounds.
    bounds: Bounds,
    /// Units per curve unit, shared by both axes.
    scale: f64,
    /// Canvas width.
    width: f64,
    /// Canvas height.
    height: f64,
}

impl Frame {
    /// Fit `bounds` so its longer side spans `size` units.
    fn fit(bounds: Bounds, size: u32) -> Self {
        let size = f64::from(size);
        let extent = bounds.width().max(bounds.height());
        if extent <= 0.0 {
            // A lone point, or a collapsed curve, is centred on a square canvas.
            return Self {
                bounds,
                scale: 0.0,
                width: size,
                height: size,
            };
        }
        let scale = size / extent;
        Self {
            bounds,
            scale,
            width: bounds.width() * scale,
            height: bounds.height() * scale,
        }
    }

    /// Position of `p` on the canvas.
    fn project(&self, p: Point) -> (f64, f64) {
        if self.scale == 0.0 {
            return (self.width / 2.0, self.height / 2.0);
        }
        (
            (p.x - self.bounds.min_x) * self.scale,
            (self.bounds.max_y - p.y) * self.scale,
        )
    }
}

/// Render `points` as an SVG document containing one open `<path>`.
///
/// An empty point list yields an empty drawing.
pub fn render_svg(points: &[Point], opts: &SvgOptions) -> String {
    let Some(bounds) = Bounds::of(points) else {
        return document(f64::from(opts.size), f64::from(opts.size), "");
    };
    let frame = Frame::fit(bounds, opts.size);

    let mut d = String::with_capacity(points.len() * 20);
    for (i, p) in points.iter().enumerate() {
        let (x, y) = frame.project(*p);
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        d.push_str(&format!("{cmd}{x:.3},{y:.3}"));
    }

    let path = format!(
        "  <path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>\n",
        opts.stroke, opts.line_width
    );
    document(frame.width, frame.height, &path)
}

/// Wrap body elements in an `<svg>` root of the given size.
fn document(width: f64, height: f64, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.3}\" height=\"{height:.3}\" viewBox=\"0 0 {width:.3} {height:.3}\">\n\
         {body}</svg>\n"
    )
}

/// File-name stem for a mapping: lower-cased, spaces replaced by `_`.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_one() -> Vec<Point> {
        vec![
            Point::new(-1.0, -1.0),
            Point::new(-1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, -1.0),
        ]
    }

    #[test]
    fn path_is_open_polyline() {
        let svg = render_svg(&order_one(), &SvgOptions::default());
        assert!(svg.contains("d=\"M0.000,432.000 L0.000,0.000 L432.000,0.000 L432.000,432.000\""));
        assert!(svg.contains("fill=\"none\""));
        assert!(!svg.contains('Z'));
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(!svg.contains("<rect"), "background must stay transparent");
    }

    #[test]
    fn view_box_is_tight() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(2.0, 1.0)];
        let opts = SvgOptions {
            size: 100,
            ..SvgOptions::default()
        };
        let svg = render_svg(&pts, &opts);
        assert!(svg.contains("viewBox=\"0 0 100.000 50.000\""), "{svg}");
        assert!(svg.contains("M0.000,50.000 L100.000,0.000"), "{svg}");
    }

    #[test]
    fn single_point_is_centred() {
        let svg = render_svg(&[Point::ORIGIN], &SvgOptions::default());
        assert!(svg.contains("d=\"M216.000,216.000\""), "{svg}");
    }

    #[test]
    fn empty_input() {
        let svg = render_svg(&[], &SvgOptions::default());
        assert!(!svg.contains("<path"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn stroke_options_are_used() {
        let opts = SvgOptions {
            size: 10,
            stroke: "#ff8000".to_string(),
            line_width: 0.5,
        };
        let svg = render_svg(&order_one(), &opts);
        assert!(svg.contains("stroke=\"#ff8000\""));
        assert!(svg.contains("stroke-width=\"0.5\""));
    }

    #[test]
    fn slugs() {
        assert_eq!(slug("Shirley-Chiu"), "shirley-chiu");
        assert_eq!(slug("Superellipse (Lamé)"), "superellipse_(lamé)");
        assert_eq!(slug("Polynomial (Conformal)"), "polynomial_(conformal)");
    }
}
