pub(crate) const INVALID_NODE: usize = usize::MAX;

/// Edge weights are rounded to this many decimals of a kilometer.
pub(crate) const WEIGHT_DECIMALS: u32 = 2;

pub(crate) const DEFAULT_HEAP_CAPACITY: usize = 1024;

/// Largest difference between a road weight and its unrounded length, in km.
pub(crate) const WEIGHT_ROUNDING_ERROR_KM: f64 = 0.005;

/// Relative margin absorbing float error in heuristic estimates.
pub(crate) const HEURISTIC_TOLERANCE: f64 = 1e-7;
