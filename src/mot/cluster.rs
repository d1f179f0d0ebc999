use serde::{Deserialize, Serialize};

use crate::mot::mot_errors::{Result, TrackerError};
use crate::utils::{euclidean_distance, Point};

/// Axis-aligned summary of one group of scan points.
///
/// `theta` is always zero: orientation is not modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub theta: f64,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Cluster {
    /// Builds the bounding box of a non-empty set of points.
    ///
    /// Basic usage:
    ///
    /// ```
    /// use obstacle_track::mot::Cluster;
    /// use obstacle_track::utils::Point;
    /// let cluster = Cluster::from_points(vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)]).unwrap();
    /// assert_eq!(cluster.center, Point::new(2.0, 1.0));
    /// assert_eq!(cluster.width, 4.0);
    /// assert_eq!(cluster.height, 2.0);
    /// ```
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        let first = points.first().ok_or(TrackerError::EmptyCluster)?;
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for p in points.iter().skip(1) {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Ok(Cluster {
            center: Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
            width: max_x - min_x,
            height: max_y - min_y,
            theta: 0.0,
            points,
        })
    }
    /// Cluster with known geometry and no member points. Mostly useful for
    /// feeding externally produced boxes straight into the tracker.
    pub fn with_center(center: Point, width: f64, height: f64) -> Self {
        Cluster {
            center,
            width,
            height,
            theta: 0.0,
            points: Vec::new(),
        }
    }
    pub fn distance_to(&self, other: &Cluster) -> f64 {
        euclidean_distance(&self.center, &other.center)
    }
    /// Range from the sensor to the box centre
    pub fn range(&self) -> f64 {
        self.center.norm()
    }
}
