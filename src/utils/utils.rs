use serde::{Deserialize, Serialize};

/// Single scan point in sensor coordinates. The sensor sits at the origin.
///
/// Serialized as a two element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    /// Distance from the sensor (origin)
    pub fn norm(&self) -> f64 {
        f64::hypot(self.x, self.y)
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(xy: [f64; 2]) -> Self {
        Point::new(xy[0], xy[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from(xy: (f64, f64)) -> Self {
        Point::new(xy.0, xy.1)
    }
}

pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    let x_squared = f64::powi(p1.x - p2.x, 2);
    let y_squared = f64::powi(p1.y - p2.y, 2);
    f64::sqrt(x_squared + y_squared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euclidean_distance() {
        let p1 = Point::new(341.0, 264.0);
        let p2 = Point::new(421.0, 427.0);
        let ans = euclidean_distance(&p1, &p2);
        assert_relative_eq!(181.573676, ans, epsilon = 1e-6);
    }

    #[test]
    fn test_norm() {
        assert_relative_eq!(Point::new(3.0, -4.0).norm(), 5.0);
        assert_eq!(Point::default().norm(), 0.0);
    }

    #[test]
    fn test_point_wire_format() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[1.5,-2.0]");
        let back: Point = serde_json::from_str("[1.5,-2.0]").unwrap();
        assert_eq!(back, p);
    }
}
