use std::collections::HashSet;

use crate::mot::Cluster;

/// Outcome of associating current clusters with the previous frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matching {
    /// Pairs of (previous index, current index) in current-cluster order
    pub matches: Vec<(usize, usize)>,
    /// Previous clusters nobody claimed, ascending
    pub unmatched_previous: Vec<usize>,
    /// Current clusters without a partner, ascending
    pub unmatched_current: Vec<usize>,
}

/// Greedy nearest-centre association.
///
/// Current clusters are visited in order. Each one takes the closest previous
/// cluster that is still free, provided the centre distance does not exceed
/// `max_distance`. Ties go to the lowest previous index. A previous cluster
/// taken by an earlier current cluster is never reconsidered, so the result is
/// order dependent and not globally optimal.
pub fn match_clusters(current: &[Cluster], previous: &[Cluster], max_distance: f64) -> Matching {
    let mut matches = Vec::new();
    let mut taken: HashSet<usize> = HashSet::new();
    let mut unmatched_current = Vec::new();
    for (i, current_cluster) in current.iter().enumerate() {
        let mut best_distance = f64::INFINITY;
        let mut best_prev_idx = None;
        for (j, previous_cluster) in previous.iter().enumerate() {
            // Skip already matched previous clusters
            if taken.contains(&j) {
                continue;
            }
            let dist = current_cluster.distance_to(previous_cluster);
            if dist < best_distance && dist <= max_distance {
                best_distance = dist;
                best_prev_idx = Some(j);
            }
        }
        match best_prev_idx {
            Some(j) => {
                matches.push((j, i));
                taken.insert(j);
            }
            None => unmatched_current.push(i),
        }
    }
    let unmatched_previous = (0..previous.len()).filter(|j| !taken.contains(j)).collect();
    Matching {
        matches,
        unmatched_previous,
        unmatched_current,
    }
}
