//! Spatial clustering of raw scan points.
//!
//! A frame is standardized on its own statistics, clustered with DBSCAN and
//! returned as index groups in a fixed order.

mod dbscan;
mod extractor;
mod scaler;

pub use self::{dbscan::Dbscan, extractor::*, scaler::StandardScaler};
