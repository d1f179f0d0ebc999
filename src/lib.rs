//! # obstacle-track
//!
//! Turns raw 2-D lidar scans into a handful of persistently identified
//! obstacles, frame by frame.
//!
//! ## Modules
//!
//! - [`cluster`]: per-frame standardization and DBSCAN clustering
//! - [`mot`]: bounding boxes, greedy association and the tracking state
//! - [`frame`]: the output frame and its JSON form
//! - [`ingest`]: scan messages, sanitization and clustering hints
//! - [`pipeline`]: a tracking session wiring everything together
//! - [`config`]: tuning knobs with the reference defaults
//! - [`simulation`]: synthetic scans
//!
//! ## Quick Start
//!
//! ```rust
//! use obstacle_track::pipeline::ObstacleDetector;
//! use obstacle_track::simulation::SimulatedScan;
//!
//! let mut detector = ObstacleDetector::default();
//! let mut scans = SimulatedScan::seeded(1);
//! for _ in 0..3 {
//!     let frame = detector.process(scans.next_frame());
//!     let json = frame.to_json().unwrap();
//!     assert!(json.contains("radius_threshold"));
//! }
//! ```

pub mod cluster;
pub mod config;
pub mod frame;
pub mod ingest;
pub mod mot;
pub mod pipeline;
pub mod simulation;
pub mod utils;

pub use config::DetectorConfig;
pub use frame::Frame;
pub use mot::{Cluster, ObstacleTracker, TrackState, TrackedCluster, TrackerError};
pub use pipeline::{ObstacleDetector, SharedDetector};
pub use utils::Point;
