/// A numeric evaluator for a function of one real variable.
///
/// Implementations follow IEEE-754 semantics: exact zeros, infinities, and
/// NaNs are returned as computed rather than reported as errors.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot evaluate the function.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}
