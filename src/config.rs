//! Configuration types for the detection pipeline.
//!
//! Defaults reproduce the reference tuning: DBSCAN with `eps = 0.3` and
//! `min_samples = 10` on standardized coordinates, a 200 unit association
//! gate, a 4 entry movement history and a 2000 mm alarm radius.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mot::{Result, TrackerError};

// ---------------------------------------------------------------------------
// Clustering
// ---------------------------------------------------------------------------

/// DBSCAN parameters, expressed in standardized (unit variance) space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Neighbourhood radius
    pub eps: f64,
    /// Minimum neighbourhood size for a core point, the point itself included
    pub min_samples: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            eps: 0.3,
            min_samples: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Frame-to-frame association parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Largest centre displacement still accepted as the same obstacle
    pub max_distance: f64,
    /// Number of movement samples kept per track
    pub history_len: usize,
    /// How many negative samples flag a track as moving towards the sensor
    pub approach_threshold: usize,
    /// Ticks a dropped id keeps its history before eviction
    pub max_no_match: usize,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            max_distance: 200.0,
            history_len: 4,
            approach_threshold: 4,
            max_no_match: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub clustering: ClusteringConfig,
    pub tracking: TrackingConfig,
    /// Alarm radius forwarded verbatim in every output frame
    pub radius_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            clustering: ClusteringConfig::default(),
            tracking: TrackingConfig::default(),
            radius_threshold: 2000.0,
        }
    }
}

impl DetectorConfig {
    /// Parses and validates a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: DetectorConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
    pub fn validate(&self) -> Result<()> {
        let c = &self.clustering;
        if !(c.eps.is_finite() && c.eps > 0.0) {
            return Err(TrackerError::Config(format!("eps must be positive, got {}", c.eps)));
        }
        if c.min_samples == 0 {
            return Err(TrackerError::Config("min_samples must be at least 1".to_string()));
        }
        let t = &self.tracking;
        if !(t.max_distance.is_finite() && t.max_distance >= 0.0) {
            return Err(TrackerError::Config(format!(
                "max_distance must be a non-negative number, got {}",
                t.max_distance
            )));
        }
        if t.history_len == 0 {
            return Err(TrackerError::Config("history_len must be at least 1".to_string()));
        }
        if !self.radius_threshold.is_finite() {
            return Err(TrackerError::Config(format!(
                "radius_threshold must be finite, got {}",
                self.radius_threshold
            )));
        }
        Ok(())
    }
}
