/// Actions an observer can take during Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the solve with [`Error::StoppedByObserver`].
    ///
    /// [`Error::StoppedByObserver`]: super::Error::StoppedByObserver
    StopEarly,
}
