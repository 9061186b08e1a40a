/// Event emitted once per Newton iteration.
///
/// The event is emitted after the new estimate has been appended to the
/// history and before the convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Estimate the update started from.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Derivative value at `x`.
    pub derivative: f64,

    /// New estimate produced by this iteration.
    pub next: f64,
}

impl Event {
    /// Returns the Newton step, `next - x`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next - self.x
    }
}
