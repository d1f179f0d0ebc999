//! Density-based clustering (DBSCAN) over 2-D feature vectors.
//!
//! Neighbourhood queries go through a uniform hash grid with cell size `eps`,
//! so only the 3x3 block of cells around a point has to be scanned.

use std::collections::HashMap;

/// DBSCAN with Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dbscan {
    eps: f64,
    min_samples: usize,
}

impl Dbscan {
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Dbscan { eps, min_samples }
    }
    pub fn get_eps(&self) -> f64 {
        self.eps
    }
    pub fn get_min_samples(&self) -> usize {
        self.min_samples
    }
    /// Labels every sample. `None` marks noise.
    ///
    /// A sample is a core sample when at least `min_samples` samples (itself
    /// included) lie within `eps`. Samples are scanned by index and labels are
    /// handed out in discovery order starting at 0, so the output only depends
    /// on the input order. A border sample reachable from several clusters
    /// joins the one discovered first.
    pub fn fit_predict(&self, data: &[[f64; 2]]) -> Vec<Option<usize>> {
        let n = data.len();
        let mut labels: Vec<Option<usize>> = vec![None; n];
        if n == 0 || !(self.eps > 0.0) {
            return labels;
        }
        let neighborhoods = self.neighborhoods(data);
        let is_core: Vec<bool> = neighborhoods
            .iter()
            .map(|nb| nb.len() >= self.min_samples)
            .collect();

        let mut next_label = 0;
        let mut stack: Vec<usize> = Vec::new();
        for start in 0..n {
            if labels[start].is_some() || !is_core[start] {
                continue;
            }
            stack.push(start);
            while let Some(i) = stack.pop() {
                if labels[i].is_some() {
                    continue;
                }
                labels[i] = Some(next_label);
                if is_core[i] {
                    stack.extend(neighborhoods[i].iter().filter(|&&v| labels[v].is_none()));
                }
            }
            next_label += 1;
        }
        labels
    }
    /// Indices within `eps` of each sample, ascending, the sample itself included.
    fn neighborhoods(&self, data: &[[f64; 2]]) -> Vec<Vec<usize>> {
        let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (idx, v) in data.iter().enumerate() {
            if let Some(key) = self.cell_key(v) {
                grid.entry(key).or_default().push(idx);
            }
        }
        let eps_sq = self.eps * self.eps;
        data.iter()
            .map(|v| {
                let Some((cx, cy)) = self.cell_key(v) else {
                    return Vec::new();
                };
                let mut found = Vec::new();
                for dx in -1..=1_i64 {
                    for dy in -1..=1_i64 {
                        let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                        if let Some(members) = grid.get(&key) {
                            found.extend(members.iter().copied().filter(|&j| {
                                let w = &data[j];
                                (v[0] - w[0]).powi(2) + (v[1] - w[1]).powi(2) <= eps_sq
                            }));
                        }
                    }
                }
                found.sort_unstable();
                found.dedup();
                found
            })
            .collect()
    }
    /// Grid cell of a sample, `None` for non-finite samples.
    fn cell_key(&self, v: &[f64; 2]) -> Option<(i64, i64)> {
        if !(v[0].is_finite() && v[1].is_finite()) {
            return None;
        }
        Some((
            (v[0] / self.eps).floor() as i64,
            (v[1] / self.eps).floor() as i64,
        ))
    }
}
