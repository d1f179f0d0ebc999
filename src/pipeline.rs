//! Per-session detection pipeline.
//!
//! Wires clustering, box building, tracking and frame assembly together
//! around a single [`TrackState`].

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug_span;

use crate::cluster::ClusterExtractor;
use crate::config::DetectorConfig;
use crate::frame::Frame;
use crate::ingest::{Hint, PointFrame, ScanMessage};
use crate::mot::{Cluster, ObstacleTracker, Result, TrackState};
use crate::utils::Point;

/// One tracking session over one sensor stream.
///
/// Ticks must arrive in order; use [`SharedDetector`] when several producers
/// feed the same session.
#[derive(Debug, Clone)]
pub struct ObstacleDetector {
    extractor: ClusterExtractor,
    tracker: ObstacleTracker,
    state: TrackState,
    radius_threshold: f64,
}

impl Default for ObstacleDetector {
    fn default() -> Self {
        ObstacleDetector::new(&DetectorConfig::default())
    }
}

impl ObstacleDetector {
    /// Basic usage:
    ///
    /// ```
    /// use obstacle_track::config::DetectorConfig;
    /// use obstacle_track::pipeline::ObstacleDetector;
    /// let mut detector = ObstacleDetector::new(&DetectorConfig::default());
    /// let frame = detector.process(Vec::new());
    /// assert!(frame.clusters.is_empty());
    /// ```
    pub fn new(cfg: &DetectorConfig) -> Self {
        ObstacleDetector {
            extractor: ClusterExtractor::from_config(&cfg.clustering),
            tracker: ObstacleTracker::from_config(&cfg.tracking),
            state: TrackState::new(),
            radius_threshold: cfg.radius_threshold,
        }
    }
    pub fn state(&self) -> &TrackState {
        &self.state
    }
    pub fn tracker(&self) -> &ObstacleTracker {
        &self.tracker
    }
    /// Full tick over raw points: cluster, box, track, assemble.
    pub fn process(&mut self, points: Vec<Point>) -> Frame {
        self.process_frame(PointFrame::from_points(points))
    }
    /// Tick over a sanitized frame, honouring its hint.
    pub fn process_frame(&mut self, frame: PointFrame) -> Frame {
        let span = debug_span!(
            "tick",
            session = %self.state.get_session_id(),
            tick = self.state.get_tick()
        );
        let _enter = span.enter();
        let PointFrame { points, hint } = frame;
        let clusters = match hint {
            Hint::Boxes(boxes) => boxes,
            Hint::Labels(extraction) => extraction.build_clusters(&points),
            Hint::None => self.extractor.extract(&points).build_clusters(&points),
        };
        self.track(points, clusters)
    }
    /// Tick over an ingestion message. Fails only when the message is malformed;
    /// tracking state is untouched in that case.
    pub fn process_message(&mut self, msg: ScanMessage) -> Result<Frame> {
        let frame = msg.into_point_frame()?;
        Ok(self.process_frame(frame))
    }
    /// Tick over externally built clusters, skipping extraction.
    pub fn process_clusters(&mut self, points: Vec<Point>, clusters: Vec<Cluster>) -> Frame {
        self.process_frame(PointFrame {
            points,
            hint: Hint::Boxes(clusters),
        })
    }
    fn track(&mut self, points: Vec<Point>, clusters: Vec<Cluster>) -> Frame {
        let tracked = self.tracker.update(&mut self.state, clusters);
        Frame::assemble(points, tracked, self.radius_threshold)
    }
}

/// Cloneable handle that serializes ticks from many producers.
///
/// Every tick holds the lock from clustering until the frame is assembled.
#[derive(Debug, Clone, Default)]
pub struct SharedDetector {
    inner: Arc<Mutex<ObstacleDetector>>,
}

impl SharedDetector {
    pub fn new(detector: ObstacleDetector) -> Self {
        SharedDetector {
            inner: Arc::new(Mutex::new(detector)),
        }
    }
    pub fn process(&self, points: Vec<Point>) -> Frame {
        self.inner.lock().process(points)
    }
    pub fn process_message(&self, msg: ScanMessage) -> Result<Frame> {
        // Validate before taking the lock
        let frame = msg.into_point_frame()?;
        Ok(self.inner.lock().process_frame(frame))
    }
    /// Number of ticks processed by the session
    pub fn ticks(&self) -> u64 {
        self.inner.lock().state().get_tick()
    }
}
