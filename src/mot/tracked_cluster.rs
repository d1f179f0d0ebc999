use serde::{Deserialize, Serialize};

use crate::mot::{Cluster, TrackId};

/// Tracking fields attached to a cluster that matched the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub id: TrackId,
    /// Previous range minus current range. Positive means the obstacle got nearer.
    pub movement: f64,
    #[serde(rename = "moving_towards_lidar")]
    pub moving_towards: bool,
}

/// Output-facing cluster. `track` is `None` for clusters seen for the first
/// time and is omitted from the serialized form in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedCluster {
    #[serde(flatten)]
    pub cluster: Cluster,
    #[serde(flatten)]
    pub track: Option<TrackInfo>,
}

impl TrackedCluster {
    pub fn untracked(cluster: Cluster) -> Self {
        TrackedCluster {
            cluster,
            track: None,
        }
    }
    pub fn get_id(&self) -> Option<TrackId> {
        self.track.map(|t| t.id)
    }
    pub fn get_movement(&self) -> Option<f64> {
        self.track.map(|t| t.movement)
    }
    pub fn is_moving_towards(&self) -> Option<bool> {
        self.track.map(|t| t.moving_towards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Point;

    #[test]
    fn test_untracked_omits_optional_fields() {
        let c = TrackedCluster::untracked(Cluster::with_center(Point::new(1.0, 2.0), 3.0, 4.0));
        let json = serde_json::to_value(&c).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("movement"));
        assert!(!obj.contains_key("moving_towards_lidar"));
        assert_eq!(obj["center"], serde_json::json!([1.0, 2.0]));
        assert_eq!(obj["theta"], serde_json::json!(0.0));
        assert_eq!(obj["points"], serde_json::json!([]));
    }

    #[test]
    fn test_tracked_fields() {
        let c = TrackedCluster {
            cluster: Cluster::with_center(Point::new(1.0, 2.0), 3.0, 4.0),
            track: Some(TrackInfo {
                id: 7,
                movement: -0.5,
                moving_towards: true,
            }),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], serde_json::json!(7));
        assert_eq!(json["movement"], serde_json::json!(-0.5));
        assert_eq!(json["moving_towards_lidar"], serde_json::json!(true));
        assert_eq!(c.get_id(), Some(7));
        assert_eq!(c.get_movement(), Some(-0.5));
        assert_eq!(c.is_moving_towards(), Some(true));
    }
}
