//! Per-frame feature standardization.

use crate::utils::Point;

/// Scales below this are treated as zero variance.
const MIN_SCALE: f64 = 10.0 * f64::EPSILON;

/// Zero-mean, unit-variance scaling of the two coordinate axes.
///
/// Statistics come from one frame only and are never carried over. Non-finite
/// coordinates are ignored while fitting so that a single bad sample does not
/// shift every other point. An axis without spread is centred but not scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    mean: [f64; 2],
    scale: [f64; 2],
}

impl Default for StandardScaler {
    fn default() -> Self {
        StandardScaler {
            mean: [0.0; 2],
            scale: [1.0; 2],
        }
    }
}

impl StandardScaler {
    pub fn fit(points: &[Point]) -> Self {
        let xs: Vec<f64> = points.iter().map(|p| p.x).filter(|v| v.is_finite()).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).filter(|v| v.is_finite()).collect();
        let (mean_x, scale_x) = axis_stats(&xs);
        let (mean_y, scale_y) = axis_stats(&ys);
        StandardScaler {
            mean: [mean_x, mean_y],
            scale: [scale_x, scale_y],
        }
    }
    pub fn transform(&self, points: &[Point]) -> Vec<[f64; 2]> {
        points
            .iter()
            .map(|p| {
                [
                    (p.x - self.mean[0]) / self.scale[0],
                    (p.y - self.mean[1]) / self.scale[1],
                ]
            })
            .collect()
    }
    pub fn fit_transform(points: &[Point]) -> Vec<[f64; 2]> {
        Self::fit(points).transform(points)
    }
    pub fn get_mean(&self) -> [f64; 2] {
        self.mean
    }
    pub fn get_scale(&self) -> [f64; 2] {
        self.scale
    }
}

/// Mean and population standard deviation, falling back to scale 1.
fn axis_stats(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let scale = var.sqrt();
    if scale.is_finite() && scale >= MIN_SCALE {
        (mean, scale)
    } else {
        (mean, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_variance() {
        let pts = vec![
            Point::new(1.0, 10.0),
            Point::new(2.0, 20.0),
            Point::new(3.0, 30.0),
            Point::new(4.0, 40.0),
        ];
        let scaled = StandardScaler::fit_transform(&pts);
        for axis in 0..2 {
            let mean = scaled.iter().map(|v| v[axis]).sum::<f64>() / 4.0;
            let var = scaled.iter().map(|v| (v[axis] - mean).powi(2)).sum::<f64>() / 4.0;
            assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
            assert_relative_eq!(var, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_variance_axis_is_centred_only() {
        let pts = vec![Point::new(5.0, 1.0), Point::new(5.0, 3.0)];
        let scaler = StandardScaler::fit(&pts);
        assert_eq!(scaler.get_scale()[0], 1.0);
        let scaled = scaler.transform(&pts);
        assert_eq!(scaled[0][0], 0.0);
        assert_eq!(scaled[1][0], 0.0);
        assert_relative_eq!(scaled[0][1], -1.0);
        assert_relative_eq!(scaled[1][1], 1.0);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(StandardScaler::fit_transform(&[]).is_empty());
        let scaled = StandardScaler::fit_transform(&[Point::new(7.0, -2.0)]);
        assert_eq!(scaled, vec![[0.0, 0.0]]);
    }

    #[test]
    fn test_nan_does_not_poison_frame() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 1.0),
            Point::new(2.0, 2.0),
        ];
        let scaler = StandardScaler::fit(&pts);
        assert_relative_eq!(scaler.get_mean()[0], 1.0);
        let scaled = scaler.transform(&pts);
        assert!(scaled[0][0].is_finite());
        assert!(scaled[1][0].is_nan());
        assert!(scaled[2][0].is_finite());
    }
}
