//! Fixture frames (box centres per tick) shared by the tracker tests.

use crate::mot::Cluster;
use crate::utils::Point;

pub fn boxes_at(centers: &[(f64, f64)]) -> Vec<Cluster> {
    centers
        .iter()
        .map(|&(x, y)| Cluster::with_center(Point::new(x, y), 0.5, 0.5))
        .collect()
}

pub fn get_stationary_data() -> Vec<Vec<(f64, f64)>> {
    vec![vec![(10.0, 0.0)]; 5]
}

pub fn get_approaching_data() -> Vec<Vec<(f64, f64)>> {
    vec![
        vec![(10.0, 0.0)],
        vec![(8.0, 0.0)],
        vec![(6.0, 0.0)],
        vec![(4.0, 0.0)],
        vec![(2.0, 0.0)],
    ]
}

pub fn get_receding_data() -> Vec<Vec<(f64, f64)>> {
    get_approaching_data().into_iter().rev().collect()
}

pub fn get_crossing_data() -> Vec<Vec<(f64, f64)>> {
    vec![vec![(0.0, 0.0)], vec![(150.0, 0.0), (500.0, 0.0)]]
}
