use std::fmt;

use tracing::{debug, trace};

use crate::config::TrackingConfig;
use crate::mot::track_state::TickCommit;
use crate::mot::{
    match_clusters, Cluster, MovementHistory, TrackId, TrackInfo, TrackState, TrackedCluster,
};

/// Nearest-centre obstacle tracker.
///
/// The tracker itself is stateless configuration; everything that has to
/// survive between frames lives in a [`TrackState`] passed to [`update`].
///
/// [`update`]: ObstacleTracker::update
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleTracker {
    // Max centre displacement between frames. Default 200.0
    max_distance: f64,
    // Movement samples kept per track. Default 4
    history_len: usize,
    // Negative samples needed to report "moving towards". Default 4
    approach_threshold: usize,
    // Ticks a lost id keeps its history. Default 0
    max_no_match: usize,
}

impl Default for ObstacleTracker {
    /// Creates default instance of ObstacleTracker
    ///
    /// Basic usage:
    ///
    /// ```
    /// use obstacle_track::mot::ObstacleTracker;
    /// let tracker = ObstacleTracker::default();
    /// ```
    fn default() -> Self {
        ObstacleTracker::from_config(&TrackingConfig::default())
    }
}

impl ObstacleTracker {
    /// Creates new instance of ObstacleTracker
    ///
    /// Basic usage:
    ///
    /// ```
    /// use obstacle_track::mot::ObstacleTracker;
    /// let max_distance = 150.0;
    /// let history_len = 4;
    /// let approach_threshold = 3;
    /// let max_no_match = 0;
    /// let tracker = ObstacleTracker::new(max_distance, history_len, approach_threshold, max_no_match);
    /// ```
    pub fn new(
        max_distance: f64,
        history_len: usize,
        approach_threshold: usize,
        max_no_match: usize,
    ) -> Self {
        ObstacleTracker {
            max_distance,
            history_len,
            approach_threshold,
            max_no_match,
        }
    }
    pub fn from_config(cfg: &TrackingConfig) -> Self {
        ObstacleTracker::new(
            cfg.max_distance,
            cfg.history_len,
            cfg.approach_threshold,
            cfg.max_no_match,
        )
    }
    pub fn get_max_distance(&self) -> f64 {
        self.max_distance
    }
    /// Approach rule: enough negative movement samples in the window.
    ///
    /// Note that a positive movement means the obstacle got nearer, so a
    /// steadily approaching obstacle does not satisfy this rule. The rule is
    /// kept as is for compatibility with existing consumers.
    pub fn is_moving_towards(&self, history: &MovementHistory) -> bool {
        history.count_negative() >= self.approach_threshold
    }
    /// Associates the current frame's clusters with the previous frame and
    /// advances `state` by one tick.
    ///
    /// Returns one entry per input cluster, in input order. Clusters that
    /// matched a previous one carry an id, their movement and the approach
    /// flag. Nothing in `state` changes until all of that has been computed,
    /// then the whole tick is committed at once.
    pub fn update(&self, state: &mut TrackState, current: Vec<Cluster>) -> Vec<TrackedCluster> {
        let previous = state.previous_clusters();
        let matching = match_clusters(&current, previous, self.max_distance);

        let mut next_id: TrackId = state.peek_next_id();
        let mut slot_ids: Vec<Option<TrackId>> = vec![None; current.len()];
        let mut tracks: Vec<Option<TrackInfo>> = vec![None; current.len()];
        let mut histories = Vec::with_capacity(matching.matches.len());

        for &(prev_idx, curr_idx) in &matching.matches {
            let prev_cluster = &previous[prev_idx];
            let curr_cluster = &current[curr_idx];
            let id = match state.slot_id(prev_idx) {
                Some(id) => id,
                None => {
                    let id = next_id;
                    next_id += 1;
                    id
                }
            };
            slot_ids[curr_idx] = Some(id);

            let movement = prev_cluster.range() - curr_cluster.range();
            let mut history = state
                .history(id)
                .cloned()
                .unwrap_or_else(|| MovementHistory::new(self.history_len));
            history.push(movement);
            let moving_towards = self.is_moving_towards(&history);
            trace!(id, prev_idx, curr_idx, movement, moving_towards, "cluster matched");

            tracks[curr_idx] = Some(TrackInfo {
                id,
                movement,
                moving_towards,
            });
            histories.push((id, history));
        }
        debug!(
            matched = matching.matches.len(),
            new = matching.unmatched_current.len(),
            lost = matching.unmatched_previous.len(),
            "tracker update"
        );

        let tracked = current
            .iter()
            .cloned()
            .zip(tracks)
            .map(|(cluster, track)| TrackedCluster { cluster, track })
            .collect();

        state.commit(TickCommit {
            clusters: current,
            slot_ids,
            next_id,
            histories,
            max_no_match: self.max_no_match,
        });
        tracked
    }
}

impl fmt::Display for ObstacleTracker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Maximum distance: {}\n\tHistory length: {}\n\tApproach threshold: {}\n\tMaximum no match: {}",
            self.max_distance, self.history_len, self.approach_threshold, self.max_no_match
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::mot::test_data::{
        boxes_at, get_approaching_data, get_crossing_data, get_receding_data, get_stationary_data,
    };
    use crate::mot::{ObstacleTracker, TrackState};

    #[test]
    fn test_stationary_cluster() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        let mut outputs = Vec::new();
        for frame in get_stationary_data() {
            outputs.push(tracker.update(&mut state, boxes_at(&frame)));
        }
        assert!(outputs[0][0].track.is_none());
        for out in &outputs[1..] {
            let track = out[0].track.unwrap();
            assert_eq!(track.id, 1);
            assert_relative_eq!(track.movement, 0.0);
            // Zero is not negative: the approach rule never fires here
            assert!(!track.moving_towards);
        }
        assert_eq!(state.history(1).unwrap().len(), 4);
    }

    #[test]
    fn test_approaching_cluster() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        let mut movements = Vec::new();
        let mut flags = Vec::new();
        for frame in get_approaching_data() {
            for c in tracker.update(&mut state, boxes_at(&frame)) {
                if let Some(track) = c.track {
                    movements.push(track.movement);
                    flags.push(track.moving_towards);
                }
            }
        }
        assert_eq!(movements.len(), 4);
        for m in movements {
            assert_relative_eq!(m, 2.0);
        }
        // Positive movements never count towards the approach rule
        assert!(flags.iter().all(|f| !f));
    }

    #[test]
    fn test_receding_cluster_sets_flag() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        let mut flags = Vec::new();
        for frame in get_receding_data() {
            let out = tracker.update(&mut state, boxes_at(&frame));
            flags.push(out[0].is_moving_towards());
        }
        assert_eq!(flags, vec![None, Some(false), Some(false), Some(false), Some(true)]);
    }

    #[test]
    fn test_new_cluster_has_no_track() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        let out = tracker.update(&mut state, boxes_at(&[(10.0, 0.0)]));
        assert_eq!(out.len(), 1);
        assert!(out[0].track.is_none());
        assert_eq!(state.get_tick(), 1);
        assert_eq!(state.previous_clusters().len(), 1);
        assert_eq!(state.slot_id(0), None);
    }

    #[test]
    fn test_distance_gate() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        let frames = get_crossing_data();
        tracker.update(&mut state, boxes_at(&frames[0]));
        let out = tracker.update(&mut state, boxes_at(&frames[1]));
        assert_eq!(out[0].get_id(), Some(1));
        assert_relative_eq!(out[0].get_movement().unwrap(), -150.0);
        assert!(out[1].track.is_none());
    }

    #[test]
    fn test_ids_follow_tracks() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        tracker.update(&mut state, boxes_at(&[(0.0, 0.0), (1000.0, 0.0)]));
        let out = tracker.update(&mut state, boxes_at(&[(1005.0, 0.0), (5.0, 0.0)]));
        // Ids are handed out in current-cluster order on first match
        assert_eq!(out[0].get_id(), Some(1));
        assert_eq!(out[1].get_id(), Some(2));
        let out = tracker.update(&mut state, boxes_at(&[(10.0, 0.0), (1010.0, 0.0)]));
        assert_eq!(out[0].get_id(), Some(2));
        assert_eq!(out[1].get_id(), Some(1));
    }

    #[test]
    fn test_lost_track_gets_new_id() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        tracker.update(&mut state, boxes_at(&[(0.0, 0.0)]));
        tracker.update(&mut state, boxes_at(&[(1.0, 0.0)]));
        assert!(state.history(1).is_some());
        // Gap frame: track 1 is gone and its history is evicted
        tracker.update(&mut state, Vec::new());
        assert!(state.history(1).is_none());
        tracker.update(&mut state, boxes_at(&[(2.0, 0.0)]));
        let out = tracker.update(&mut state, boxes_at(&[(3.0, 0.0)]));
        assert_eq!(out[0].get_id(), Some(2));
    }

    #[test]
    fn test_eviction_grace_period() {
        let tracker = ObstacleTracker::new(200.0, 4, 4, 2);
        let mut state = TrackState::new();
        tracker.update(&mut state, boxes_at(&[(0.0, 0.0)]));
        tracker.update(&mut state, boxes_at(&[(1.0, 0.0)]));
        tracker.update(&mut state, Vec::new());
        tracker.update(&mut state, Vec::new());
        assert!(state.history(1).is_some());
        tracker.update(&mut state, Vec::new());
        assert!(state.history(1).is_none());
    }

    #[test]
    fn test_empty_frames() {
        let tracker = ObstacleTracker::default();
        let mut state = TrackState::new();
        assert!(tracker.update(&mut state, Vec::new()).is_empty());
        assert!(tracker.update(&mut state, Vec::new()).is_empty());
        assert_eq!(state.get_tick(), 2);
        assert_eq!(state.peek_next_id(), 1);
    }

    #[test]
    fn test_display() {
        let txt = format!("{}", ObstacleTracker::default());
        assert!(txt.contains("Maximum distance: 200"));
    }
}
