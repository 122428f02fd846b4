use std::fmt;

#[allow(unused_imports)]
use crate::Rbt;

/// Depth calculates minimum, maximum, average and percentile of leaf
/// depths in the [`Rbt`] tree. A leaf is every position where a
/// descent reaches the sentinel.
#[derive(Clone, Debug, Default)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: Vec<u64>, // histogram, indexed by depth.
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        if depth >= self.depths.len() {
            self.depths.resize(depth + 1, 0);
        }
        self.depths[depth] += 1;
    }

    /// Return number of leaves sampled in [`Rbt`] instance.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth of leaf in [`Rbt`] instance.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth of leaf in [`Rbt`] instance.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth of leaves in [`Rbt`] instance.
    pub fn mean(&self) -> usize {
        if self.samples == 0 {
            0
        } else {
            self.total / self.samples
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth), where depth is the smallest depth covering
    /// that percentile of leaves. Returned percentiles from 90, 91 .. 99
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        if self.samples == 0 {
            return percentiles;
        }
        let samples = self.samples as u64;
        let (mut acc, mut iter) = (0_u64, self.depths.iter().enumerate());
        let mut depth = 0;
        for perc in 90_u8..100 {
            while acc * 100 < u64::from(perc) * samples {
                match iter.next() {
                    Some((d, n)) => {
                        acc += *n;
                        depth = d;
                    }
                    None => break,
                }
            }
            percentiles.push((perc, depth));
        }
        percentiles
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(p, d)| format!("{}:{}", p, d))
            .collect();
        write!(
            f,
            "depth (min, mean, max): ({}, {}, {}) percentiles: [{}]",
            self.min,
            self.mean(),
            self.max,
            ps.join(", ")
        )
    }
}
