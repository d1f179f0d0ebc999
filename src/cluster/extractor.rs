use itertools::Itertools;
use tracing::trace;

use crate::cluster::{Dbscan, StandardScaler};
use crate::config::ClusteringConfig;
use crate::mot::Cluster;
use crate::utils::Point;

/// Partition of one frame's points into clusters and noise, by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Member indices per cluster, clusters in ascending label order
    pub clusters: Vec<Vec<usize>>,
    /// Indices that belong to no cluster
    pub noise: Vec<usize>,
}

impl Extraction {
    /// Groups point indices by label. `None` labels are noise.
    ///
    /// Clusters come out sorted by label value and members keep point order,
    /// independent of hashing.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        let mut noise = Vec::new();
        let mut labelled = Vec::new();
        for (idx, label) in labels.into_iter().enumerate() {
            match label {
                Some(label) => labelled.push((label, idx)),
                None => noise.push(idx),
            }
        }
        let clusters = labelled
            .into_iter()
            .into_group_map()
            .into_iter()
            .sorted_by_key(|(label, _)| *label)
            .map(|(_, members)| members)
            .collect();
        Extraction { clusters, noise }
    }
    /// Signed labels as produced by upstream clusterers: negative means noise.
    pub fn from_signed_labels(labels: &[i64]) -> Self {
        Self::from_labels(labels.iter().map(|&l| usize::try_from(l).ok()))
    }
    /// Bounding boxes of every cluster, in cluster order.
    pub fn build_clusters(&self, points: &[Point]) -> Vec<Cluster> {
        self.clusters
            .iter()
            .filter_map(|members| {
                let pts: Vec<Point> = members.iter().filter_map(|&i| points.get(i).copied()).collect();
                Cluster::from_points(pts).ok()
            })
            .collect()
    }
}

/// Standardizes a frame and runs DBSCAN on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterExtractor {
    dbscan: Dbscan,
}

impl Default for ClusterExtractor {
    fn default() -> Self {
        ClusterExtractor::from_config(&ClusteringConfig::default())
    }
}

impl ClusterExtractor {
    pub fn new(eps: f64, min_samples: usize) -> Self {
        ClusterExtractor {
            dbscan: Dbscan::new(eps, min_samples),
        }
    }
    pub fn from_config(cfg: &ClusteringConfig) -> Self {
        ClusterExtractor::new(cfg.eps, cfg.min_samples)
    }
    /// Basic usage:
    ///
    /// ```
    /// use obstacle_track::cluster::ClusterExtractor;
    /// use obstacle_track::utils::Point;
    /// let extractor = ClusterExtractor::default();
    /// let extraction = extractor.extract(&[Point::new(1.0, 1.0)]);
    /// assert!(extraction.clusters.is_empty());
    /// assert_eq!(extraction.noise, vec![0]);
    /// ```
    pub fn extract(&self, points: &[Point]) -> Extraction {
        if points.is_empty() {
            return Extraction::default();
        }
        let scaled = StandardScaler::fit_transform(points);
        let extraction = Extraction::from_labels(self.dbscan.fit_predict(&scaled));
        trace!(
            points = points.len(),
            clusters = extraction.clusters.len(),
            noise = extraction.noise.len(),
            "clusters extracted"
        );
        extraction
    }
}
