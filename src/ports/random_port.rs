//! Uniform random source port.

/// Capability to draw a uniform value in `[0, 1)`.
///
/// Implementations must be deterministic for a given seed so that a season
/// run can be replayed.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}
