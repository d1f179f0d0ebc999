//! Output frame handed to the broadcast layer.

use serde::{Deserialize, Serialize};

use crate::mot::TrackedCluster;
use crate::utils::Point;

/// One processed tick: raw points, tracked clusters and the alarm radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub points: Vec<Point>,
    pub clusters: Vec<TrackedCluster>,
    pub radius_threshold: f64,
}

impl Frame {
    /// Bundles the parts of a frame. No validation happens here.
    pub fn assemble(points: Vec<Point>, clusters: Vec<TrackedCluster>, radius_threshold: f64) -> Self {
        Frame {
            points,
            clusters,
            radius_threshold,
        }
    }
    /// Clusters whose box centre lies inside the alarm radius
    pub fn within_radius(&self) -> impl Iterator<Item = &TrackedCluster> + '_ {
        self.clusters
            .iter()
            .filter(move |c| c.cluster.range() <= self.radius_threshold)
    }
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
