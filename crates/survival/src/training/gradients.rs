//! Gradient storage.

/// A (gradient, hessian) pair for one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradsTuple {
    pub grad: f64,
    pub hess: f64,
}

/// Per-sample gradient and hessian buffer.
///
/// Reused across iterations; objectives overwrite it in place.
#[derive(Debug, Clone)]
pub struct Gradients {
    pairs: Vec<GradsTuple>,
}

impl Gradients {
    pub fn new(n_samples: usize) -> Self {
        Self {
            pairs: vec![GradsTuple::default(); n_samples],
        }
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn pairs(&self) -> &[GradsTuple] {
        &self.pairs
    }

    #[inline]
    pub fn pairs_mut(&mut self) -> &mut [GradsTuple] {
        &mut self.pairs
    }

    #[inline]
    pub fn set(&mut self, sample: usize, grad: f64, hess: f64) {
        self.pairs[sample] = GradsTuple { grad, hess };
    }

    /// Sum of gradients and hessians over all samples.
    pub fn sum(&self) -> (f64, f64) {
        self.pairs
            .iter()
            .fold((0.0, 0.0), |(g, h), p| (g + p.grad, h + p.hess))
    }
}
