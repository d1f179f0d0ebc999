use std::collections::{HashMap, HashSet, VecDeque};

use uuid::Uuid;

use crate::mot::Cluster;

/// Persistent obstacle identity. Always strictly positive.
pub type TrackId = u64;

/// Bounded FIFO of signed range changes for one track.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementHistory {
    values: VecDeque<f64>,
    max_len: usize,
    no_match_times: usize,
}

impl MovementHistory {
    pub fn new(max_len: usize) -> Self {
        MovementHistory {
            values: VecDeque::with_capacity(max_len + 1),
            max_len,
            no_match_times: 0,
        }
    }
    /// Appends a value and drops the oldest ones beyond `max_len`
    pub fn push(&mut self, movement: f64) {
        self.values.push_back(movement);
        while self.values.len() > self.max_len {
            self.values.pop_front();
        }
    }
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn get_max_len(&self) -> usize {
        self.max_len
    }
    /// Number of entries strictly below zero
    pub fn count_negative(&self) -> usize {
        self.values.iter().filter(|v| **v < 0.0).count()
    }
    pub fn get_no_match_times(&self) -> usize {
        self.no_match_times
    }
    pub fn inc_no_match(&mut self) {
        self.no_match_times += 1
    }
    pub fn reset_no_match(&mut self) {
        self.no_match_times = 0
    }
}

/// Everything a tick decided, applied in one go by [`TrackState::commit`].
#[derive(Debug)]
pub(crate) struct TickCommit {
    pub clusters: Vec<Cluster>,
    pub slot_ids: Vec<Option<TrackId>>,
    pub next_id: TrackId,
    pub histories: Vec<(TrackId, MovementHistory)>,
    pub max_no_match: usize,
}

/// Tracking context carried from one frame to the next.
///
/// Only [`crate::mot::ObstacleTracker::update`] changes it. Each session
/// (sensor stream) owns its own state.
#[derive(Debug, Clone)]
pub struct TrackState {
    session_id: Uuid,
    tick: u64,
    previous_clusters: Vec<Cluster>,
    // Slot table: persistent id of previous_clusters[i], if it has one
    slot_ids: Vec<Option<TrackId>>,
    next_id: TrackId,
    histories: HashMap<TrackId, MovementHistory>,
}

impl Default for TrackState {
    fn default() -> Self {
        TrackState::new()
    }
}

impl TrackState {
    pub fn new() -> Self {
        TrackState {
            session_id: Uuid::new_v4(),
            tick: 0,
            previous_clusters: Vec::new(),
            slot_ids: Vec::new(),
            next_id: 1,
            histories: HashMap::new(),
        }
    }
    pub fn get_session_id(&self) -> Uuid {
        self.session_id
    }
    /// Number of frames processed so far
    pub fn get_tick(&self) -> u64 {
        self.tick
    }
    pub fn previous_clusters(&self) -> &[Cluster] {
        &self.previous_clusters
    }
    /// Persistent id bound to the previous frame's cluster at `slot`
    pub fn slot_id(&self, slot: usize) -> Option<TrackId> {
        self.slot_ids.get(slot).copied().flatten()
    }
    /// The id the next new track will receive
    pub fn peek_next_id(&self) -> TrackId {
        self.next_id
    }
    pub fn history(&self, id: TrackId) -> Option<&MovementHistory> {
        self.histories.get(&id)
    }
    /// Number of ids that still have a movement history stored
    pub fn tracked_ids(&self) -> usize {
        self.histories.len()
    }
    pub(crate) fn commit(&mut self, update: TickCommit) {
        let TickCommit {
            clusters,
            slot_ids,
            next_id,
            histories,
            max_no_match,
        } = update;
        let mut live = HashSet::with_capacity(histories.len());
        for (id, mut history) in histories {
            history.reset_no_match();
            live.insert(id);
            self.histories.insert(id, history);
        }
        // Ids that were not carried into this frame can never be matched again
        self.histories.retain(|id, history| {
            if !live.contains(id) {
                history.inc_no_match();
            }
            history.get_no_match_times() <= max_no_match
        });
        self.previous_clusters = clusters;
        self.slot_ids = slot_ids;
        self.next_id = next_id;
        self.tick += 1;
    }
}
