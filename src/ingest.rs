//! Ingestion boundary: raw scan messages as posted by the sensor host.
//!
//! Everything that reaches the tracking core passes through here first, so
//! this is where non-finite samples are dropped and hint arrays are checked.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cluster::Extraction;
use crate::mot::{Cluster, Result, TrackerError};
use crate::utils::Point;

/// Scan message: points plus optional pre-clustered hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanMessage {
    #[serde(default)]
    pub scan_points: Vec<Point>,
    #[serde(default)]
    pub bounding_boxes: Vec<Cluster>,
    /// One label per scan point; negative labels are noise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_labels: Option<Vec<i64>>,
}

/// How the clusters of a frame were obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum Hint {
    /// No hint, run the extractor
    None,
    /// Per-point labels from an upstream clusterer
    Labels(Extraction),
    /// Ready-made boxes that go straight to the tracker
    Boxes(Vec<Cluster>),
}

/// Sanitized input for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFrame {
    pub points: Vec<Point>,
    pub hint: Hint,
}

impl PointFrame {
    /// Frame without hints; non-finite points are dropped.
    pub fn from_points(points: Vec<Point>) -> Self {
        let (points, _) = sanitize(points, None);
        PointFrame {
            points,
            hint: Hint::None,
        }
    }
}

impl ScanMessage {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    /// Validates and sanitizes the message.
    ///
    /// Fails only when `point_labels` does not line up with `scan_points`.
    /// Non-finite points are dropped together with their labels. Boxes are
    /// rebuilt from their own points when they have any, so the geometry
    /// always agrees with the box builder; `theta` is forced to zero.
    pub fn into_point_frame(self) -> Result<PointFrame> {
        let ScanMessage {
            scan_points,
            bounding_boxes,
            point_labels,
        } = self;
        if let Some(labels) = &point_labels {
            if labels.len() != scan_points.len() {
                return Err(TrackerError::BadSize(format!(
                    "point_labels and scan_points must have the same length. Labels: {}. Points: {}",
                    labels.len(),
                    scan_points.len()
                )));
            }
        }
        let (points, labels) = sanitize(scan_points, point_labels);
        let hint = if !bounding_boxes.is_empty() {
            Hint::Boxes(bounding_boxes.into_iter().filter_map(normalize_box).collect())
        } else if let Some(labels) = labels {
            Hint::Labels(Extraction::from_signed_labels(&labels))
        } else {
            Hint::None
        };
        Ok(PointFrame { points, hint })
    }
}

fn sanitize(points: Vec<Point>, labels: Option<Vec<i64>>) -> (Vec<Point>, Option<Vec<i64>>) {
    let total = points.len();
    let (points, labels) = match labels {
        Some(labels) => {
            let (points, labels): (Vec<Point>, Vec<i64>) = points
                .into_iter()
                .zip(labels)
                .filter(|(p, _)| p.is_finite())
                .unzip();
            (points, Some(labels))
        }
        None => (points.into_iter().filter(Point::is_finite).collect(), None),
    };
    if points.len() != total {
        warn!(dropped = total - points.len(), "dropped non-finite scan points");
    }
    (points, labels)
}

fn normalize_box(mut cluster: Cluster) -> Option<Cluster> {
    cluster.points.retain(Point::is_finite);
    if !cluster.points.is_empty() {
        return Cluster::from_points(cluster.points).ok();
    }
    let finite = cluster.center.is_finite() && cluster.width.is_finite() && cluster.height.is_finite();
    if !finite {
        warn!("dropped bounding box hint with non-finite geometry");
        return None;
    }
    cluster.theta = 0.0;
    Some(cluster)
}
