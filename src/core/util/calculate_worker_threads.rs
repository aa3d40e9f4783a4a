use std::num::NonZeroUsize;

/// Number of rayon workers for a frame pool.
///
/// Uses the requested count when given, otherwise the available hardware
/// parallelism, falling back to one.
#[must_use]
pub fn calculate_worker_threads(requested: Option<NonZeroUsize>) -> usize {
    requested
        .or_else(|| std::thread::available_parallelism().ok())
        .map_or(1, NonZeroUsize::get)
}
