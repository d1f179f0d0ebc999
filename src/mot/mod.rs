//! Export contents of `mot` folder
mod cluster;
mod matching;
mod mot_errors;
mod obstacle_tracker;
mod track_state;
mod tracked_cluster;

#[cfg(test)]
mod test_data;

pub use self::{
    cluster::*,
    matching::*,
    mot_errors::*,
    obstacle_tracker::*,
    track_state::{MovementHistory, TrackId, TrackState},
    tracked_cluster::*,
};
