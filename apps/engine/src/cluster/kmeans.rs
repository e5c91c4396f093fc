//! Lloyd's-algorithm k-means with deterministic seeding.
//!
//! Initialization is k-means++-shaped but fully deterministic: the first
//! centroid is picked from the seed, the rest by farthest-point selection.
//! Multiple restarts vary the seed and keep the lowest-inertia fit, so a
//! fixed seed always reproduces the same clustering.

/// K-means configuration. Fitting is pure; the result carries the state.
#[derive(Debug, Clone)]
pub struct KMeans {
    n_clusters: usize,
    max_iter: usize,
    tol: f64,
    seed: u64,
    n_init: usize,
}

/// A completed clustering: per-row labels plus final centroids.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    pub labels: Vec<usize>,
    pub centroids: Vec<Vec<f64>>,
    pub inertia: f64,
    pub n_iter: usize,
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 300,
            tol: 1e-6,
            seed: 42,
            n_init: 10,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    /// Runs `n_init` restarts of Lloyd's algorithm and keeps the fit with the
    /// lowest within-cluster sum of squares.
    pub fn fit(&self, rows: &[Vec<f64>]) -> Result<KMeansFit, &'static str> {
        if rows.is_empty() {
            return Err("cannot cluster zero samples");
        }
        if rows.len() < self.n_clusters {
            return Err("need at least as many samples as clusters");
        }

        let mut best: Option<KMeansFit> = None;
        for restart in 0..self.n_init {
            let fit = self.fit_once(rows, self.seed.wrapping_add(restart as u64));
            let better = best
                .as_ref()
                .map(|b| fit.inertia < b.inertia)
                .unwrap_or(true);
            if better {
                best = Some(fit);
            }
        }

        // n_init >= 1, so a fit always exists.
        best.ok_or("no clustering fit produced")
    }

    fn fit_once(&self, rows: &[Vec<f64>], seed: u64) -> KMeansFit {
        let mut centroids = self.init_centroids(rows, seed);
        let mut labels = vec![0usize; rows.len()];
        let mut n_iter = 0;

        for iter in 0..self.max_iter {
            n_iter = iter + 1;
            labels = assign_labels(rows, &centroids);
            let updated = update_centroids(rows, &labels, &centroids);
            let converged = max_centroid_shift(&centroids, &updated) <= self.tol;
            centroids = updated;
            if converged {
                break;
            }
        }

        let inertia = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| squared_distance(&rows[i], &centroids[label]))
            .sum();

        KMeansFit {
            labels,
            centroids,
            inertia,
            n_iter,
        }
    }

    /// Deterministic k-means++-style init: seed picks the first centroid,
    /// farthest-point selection picks the rest.
    fn init_centroids(&self, rows: &[Vec<f64>], seed: u64) -> Vec<Vec<f64>> {
        let first = (seed as usize) % rows.len();
        let mut centroids = vec![rows[first].clone()];

        while centroids.len() < self.n_clusters {
            let mut farthest = 0;
            let mut farthest_dist = -1.0;
            for (i, row) in rows.iter().enumerate() {
                let nearest = centroids
                    .iter()
                    .map(|c| squared_distance(row, c))
                    .fold(f64::INFINITY, f64::min);
                if nearest > farthest_dist {
                    farthest_dist = nearest;
                    farthest = i;
                }
            }
            centroids.push(rows[farthest].clone());
        }

        centroids
    }
}

fn assign_labels(rows: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<usize> {
    rows.iter()
        .map(|row| {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (k, centroid) in centroids.iter().enumerate() {
                let dist = squared_distance(row, centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best = k;
                }
            }
            best
        })
        .collect()
}

/// Mean of each cluster's members. Empty clusters keep their old centroid.
fn update_centroids(rows: &[Vec<f64>], labels: &[usize], old: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n_features = rows[0].len();
    let mut sums = vec![vec![0.0; n_features]; old.len()];
    let mut counts = vec![0usize; old.len()];

    for (row, &label) in rows.iter().zip(labels) {
        counts[label] += 1;
        for (j, value) in row.iter().enumerate() {
            sums[label][j] += value;
        }
    }

    sums.into_iter()
        .zip(counts)
        .zip(old)
        .map(|((sum, count), previous)| {
            if count == 0 {
                previous.clone()
            } else {
                sum.into_iter().map(|v| v / count as f64).collect()
            }
        })
        .collect()
}

fn max_centroid_shift(old: &[Vec<f64>], new: &[Vec<f64>]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| squared_distance(a, b))
        .fold(0.0, f64::max)
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
