//! Statistics for the distribution and trend charts.

use crate::loader::{GroupedValue, ScatterPoint};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Group values by their label, keeping only groups with enough samples
///
/// **Public** - used by the ridgeline command
///
/// # Returns
/// Groups in label order, each with its samples in input order
pub fn filter_groups(values: &[GroupedValue], min_count: usize) -> BTreeMap<String, Vec<f64>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for v in values {
        groups.entry(v.group.clone()).or_default().push(v.value);
    }

    let before = groups.len();
    groups.retain(|group, samples| {
        let keep = samples.len() >= min_count;
        if !keep {
            debug!(
                "Dropping group '{}' ({} < {} samples)",
                group,
                samples.len(),
                min_count
            );
        }
        keep
    });

    if groups.len() < before {
        warn!(
            "{} of {} groups have fewer than {} samples and were dropped",
            before - groups.len(),
            before,
            min_count
        );
    }

    groups
}

/// Split scatter points by category, in category order
pub fn split_by_category(points: &[ScatterPoint]) -> BTreeMap<String, Vec<(f64, f64)>> {
    let mut out: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
    for p in points {
        out.entry(p.category.clone()).or_default().push((p.x, p.y));
    }
    out
}

/// Evenly spaced grid of `n` points covering `[min, max]`
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            (0..n).map(|i| min + step * i as f64).collect()
        }
    }
}

/// Scott's rule bandwidth: sigma * n^(-1/5)
///
/// Degenerate samples (fewer than two points or zero spread) get a
/// small bandwidth relative to their magnitude so a spike is still drawn.
pub fn scott_bandwidth(samples: &[f64]) -> f64 {
    let n = samples.len();
    let fallback = 1e-3 * samples.first().map_or(1.0, |v| v.abs().max(1.0));
    if n < 2 {
        return fallback;
    }

    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let sigma = var.sqrt();

    if sigma > 0.0 {
        sigma * (n as f64).powf(-0.2)
    } else {
        fallback
    }
}

/// Gaussian kernel density estimate evaluated on `grid`
pub fn gaussian_kde(samples: &[f64], grid: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return vec![0.0; grid.len()];
    }

    let h = scott_bandwidth(samples);
    let norm = 1.0 / (samples.len() as f64 * h * (2.0 * PI).sqrt());

    grid.iter()
        .map(|&x| {
            let sum: f64 = samples
                .iter()
                .map(|&s| {
                    let u = (x - s) / h;
                    (-0.5 * u * u).exp()
                })
                .sum();
            sum * norm
        })
        .collect()
}

/// Least-squares line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares fit
///
/// Returns `None` for fewer than two points or when all x are equal.
pub fn linear_fit(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), &(x, y)| {
        let dx = x - mean_x;
        (sxy + dx * (y - mean_y), sxx + dx * dx)
    });

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gv(group: &str, value: f64) -> GroupedValue {
        GroupedValue {
            group: group.to_string(),
            value,
        }
    }

    #[test]
    fn test_filter_groups_min_count() {
        let mut values: Vec<GroupedValue> = (0..5).map(|i| gv("Europe", i as f64)).collect();
        values.push(gv("Oceania", 7.3));

        let groups = filter_groups(&values, 5);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["Europe"].len(), 5);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_kde_integrates_to_one() {
        let samples = vec![4.5, 5.0, 5.2, 5.9, 6.1, 7.0];
        let grid = linspace(0.0, 12.0, 1201);
        let density = gaussian_kde(&samples, &grid);

        let step = grid[1] - grid[0];
        let area: f64 = density.iter().sum::<f64>() * step;

        assert!((area - 1.0).abs() < 1e-3, "area = {}", area);
    }

    #[test]
    fn test_kde_degenerate_sample_is_finite() {
        let density = gaussian_kde(&[3.0, 3.0, 3.0], &[2.9, 3.0, 3.1]);
        assert!(density.iter().all(|d| d.is_finite()));
        assert!(density[1] > density[0]);
    }

    #[test]
    fn test_linear_fit_exact_line() {
        let points = vec![(1.0, 3.0), (2.0, 5.0), (4.0, 9.0)];
        let fit = linear_fit(&points).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_fit_degenerate() {
        assert!(linear_fit(&[(1.0, 1.0)]).is_none());
        assert!(linear_fit(&[(2.0, 1.0), (2.0, 3.0)]).is_none());
    }

    #[test]
    fn test_split_by_category() {
        let points = vec![
            ScatterPoint { x: 1.0, y: 2.0, category: "Male".into() },
            ScatterPoint { x: 3.0, y: 4.0, category: "Female".into() },
            ScatterPoint { x: 5.0, y: 6.0, category: "Male".into() },
        ];
        let split = split_by_category(&points);

        let keys: Vec<&String> = split.keys().collect();
        assert_eq!(keys, vec!["Female", "Male"]);
        assert_eq!(split["Male"], vec![(1.0, 2.0), (5.0, 6.0)]);
    }
}
