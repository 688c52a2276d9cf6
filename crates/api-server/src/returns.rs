use rand::Rng;

/// Source of per-holding period returns for the tax report
pub trait ReturnSource: Send + Sync {
    fn next_return(&self) -> f64;
}

/// Simulated returns drawn uniformly from `[low, high)`
#[derive(Debug, Clone, Copy)]
pub struct UniformReturns {
    pub low: f64,
    pub high: f64,
}

impl Default for UniformReturns {
    fn default() -> Self {
        Self {
            low: -0.1,
            high: 0.1,
        }
    }
}

impl ReturnSource for UniformReturns {
    fn next_return(&self) -> f64 {
        rand::thread_rng().gen_range(self.low..self.high)
    }
}
