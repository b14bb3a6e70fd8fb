use crate::error::{SimError, SimResult};
use fastrand::Rng;
use std::fmt::Display;
use tracing::debug;

/// Allowed drift between the table total and 1.0.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Checks each probability is within [0, 1] and that the total is 1.0.
/// Returns the total.
pub fn validate_table<K, I>(entries: I) -> SimResult<f64>
where
    K: Display,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut sum = 0.0;
    for (label, p) in entries {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(SimError::InvalidProbability {
                label: label.to_string(),
                value: p,
            });
        }
        sum += p;
    }
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(SimError::TableSum { sum });
    }
    Ok(sum)
}

/// Result of `Lottery::draw`: one label for a single draw, a sequence otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw<K> {
    Single(K),
    Many(Vec<K>),
}

impl<K> Draw<K> {
    pub fn into_vec(self) -> Vec<K> {
        match self {
            Draw::Single(k) => vec![k],
            Draw::Many(v) => v,
        }
    }
}

/// Weighted lottery over a fixed set of labels.
///
/// The table is validated once at construction and never changes. Draws take
/// the generator by reference so the lottery itself carries no state between
/// calls.
#[derive(Debug, Clone)]
pub struct Lottery<K> {
    labels: Vec<K>,
    probs: Vec<f64>,
    // Upper boundary of each label's slice of [0, 1).
    cumulative: Vec<f64>,
    // Index that absorbs uniforms past the final boundary.
    last_live: usize,
}

impl<K: Copy + PartialEq + Display> Lottery<K> {
    pub fn new<I>(entries: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let (labels, probs): (Vec<K>, Vec<f64>) = entries.into_iter().unzip();
        if labels.is_empty() {
            return Err(SimError::EmptyTable);
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(SimError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
        }

        let sum = validate_table(labels.iter().zip(&probs).map(|(k, &p)| (k, p)))?;

        let mut acc = 0.0;
        let cumulative: Vec<f64> = probs
            .iter()
            .map(|p| {
                acc += p;
                acc
            })
            .collect();

        // sum is ~1.0 so at least one entry is positive
        let last_live = probs.iter().rposition(|&p| p > 0.0).unwrap_or(0);

        debug!("Lottery built: {} labels, total {:.12}", labels.len(), sum);

        Ok(Self {
            labels,
            probs,
            cumulative,
            last_live,
        })
    }

    /// Equal weight on every label.
    pub fn uniform(labels: &[K]) -> SimResult<Self> {
        let p = 1.0 / labels.len().max(1) as f64;
        Self::new(labels.iter().map(|&k| (k, p)))
    }
}

impl<K: Copy> Lottery<K> {
    #[inline(always)]
    pub fn draw_one(&self, rng: &mut Rng) -> K {
        let u = rng.f64();
        let idx = self.cumulative.partition_point(|&c| c <= u);
        if idx >= self.labels.len() {
            return self.labels[self.last_live];
        }
        self.labels[idx]
    }

    pub fn draw_many(&self, times: usize, rng: &mut Rng) -> Vec<K> {
        (0..times).map(|_| self.draw_one(rng)).collect()
    }

    pub fn draw(&self, times: usize, rng: &mut Rng) -> Draw<K> {
        if times == 1 {
            Draw::Single(self.draw_one(rng))
        } else {
            Draw::Many(self.draw_many(times, rng))
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.labels.iter().copied().zip(self.probs.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: Copy + PartialEq> Lottery<K> {
    pub fn probability(&self, label: K) -> f64 {
        self.labels
            .iter()
            .position(|&k| k == label)
            .map(|i| self.probs[i])
            .unwrap_or(0.0)
    }
}
