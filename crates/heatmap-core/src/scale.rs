// File: crates/heatmap-core/src/scale.rs
// Summary: Band, linear, and threshold scale transforms for the heatmap.

/// Discrete scale placing `len` contiguous zero-padding bands across a range.
///
/// With `round` set, the band step is floored to whole pixels and the
/// leftover space is split evenly at both ends.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    start: f64,
    step: f64,
    len: usize,
}

impl BandScale {
    pub fn new(len: usize, r0: f64, r1: f64, round: bool) -> Self {
        let n = len.max(1);
        let mut step = (r1 - r0) / n as f64;
        let mut start = r0;
        if round {
            step = step.floor();
            start = (r0 + ((r1 - r0) - step * n as f64) / 2.0).round();
        }
        Self { start, step, len: n }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pixel offset of the leading edge of band `index`.
    #[inline]
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Width of every band.
    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    /// Index of the band containing `px`, if any.
    pub fn index_at(&self, px: f64) -> Option<usize> {
        if self.step <= 0.0 {
            return None;
        }
        let rel = (px - self.start) / self.step;
        if rel < 0.0 {
            return None;
        }
        let index = rel.floor() as usize;
        (index < self.len).then_some(index)
    }
}

/// Continuous linear mapping from a value domain to a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        let mut s = Self { d0, d1, r0, r1 };
        if (s.d1 - s.d0).abs() < 1e-12 {
            s.d1 = s.d0 + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}

/// Maps a continuous value to a bucket index via sorted breakpoints.
#[derive(Clone, Debug)]
pub struct ThresholdScale {
    breakpoints: Vec<f64>,
}

impl ThresholdScale {
    pub fn new(breakpoints: Vec<f64>) -> Self {
        Self { breakpoints }
    }

    /// Scale over `count` equal-width buckets spanning [min, max].
    pub fn equal_width(min: f64, max: f64, count: usize) -> Self {
        Self::new(threshold_breakpoints(min, max, count))
    }

    /// Bucket count (one more than the breakpoint count).
    pub fn buckets(&self) -> usize {
        self.breakpoints.len() + 1
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Bucket index for `v`. A value sitting on a breakpoint belongs to the
    /// upper bucket; values outside the domain land in the end buckets.
    #[inline]
    pub fn index_of(&self, v: f64) -> usize {
        self.breakpoints.partition_point(|b| v >= *b)
    }

    /// Value extent of bucket `i`; `None` marks an unbounded outer edge.
    pub fn extent_of(&self, i: usize) -> (Option<f64>, Option<f64>) {
        let lo = if i == 0 {
            None
        } else {
            self.breakpoints.get(i - 1).copied()
        };
        (lo, self.breakpoints.get(i).copied())
    }
}

/// Interior boundaries of `count` equal-width segments over [min, max].
///
/// Returns `count - 1` values; the outermost edges are not included.
pub fn threshold_breakpoints(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return Vec::new();
    }
    let step = (max - min) / count as f64;
    (1..count).map(|i| min + step * i as f64).collect()
}
