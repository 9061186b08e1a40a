use std::ops::Deref;

/// The history of estimates produced by a Newton solve.
///
/// The first entry is always the initial guess, followed by one estimate per
/// completed iteration in the order they were computed. The history is never
/// empty and only the solver can extend it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize), serde(transparent))]
pub struct Iterates(Vec<f64>);

impl Iterates {
    /// Starts a history at the initial guess.
    pub(super) fn new(x0: f64) -> Self {
        Self(vec![x0])
    }

    /// Appends a new estimate.
    pub(super) fn push(&mut self, x: f64) {
        self.0.push(x);
    }

    /// Returns the initial guess.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.0[0]
    }

    /// Returns the most recent estimate.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Returns the root estimate, which is the most recent entry.
    #[must_use]
    pub fn root(&self) -> f64 {
        self.last()
    }

    /// Returns the number of estimates, including the initial guess.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a history holds at least the initial guess.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.0.len() - 1
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Iterates {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Iterates {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl IntoIterator for Iterates {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Iterates {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Iterates> for Vec<f64> {
    fn from(iterates: Iterates) -> Self {
        iterates.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn keeps_insertion_order() {
        let mut iterates = Iterates::new(3.0);
        assert_eq!(iterates.first(), 3.0);
        assert_eq!(iterates.last(), 3.0);
        assert_eq!(iterates.iters(), 0);

        iterates.push(2.5);
        iterates.push(2.1);

        assert_eq!(iterates.as_slice(), &[3.0, 2.5, 2.1]);
        assert_eq!(iterates.first(), 3.0);
        assert_eq!(iterates.root(), 2.1);
        assert_eq!(iterates.len(), 3);
        assert_eq!(iterates.iters(), 2);
        assert!(!iterates.is_empty());

        let collected: Vec<f64> = (&iterates).into_iter().copied().collect();
        assert_eq!(collected, iterates.clone().into_vec());
        assert_eq!(Vec::from(iterates), vec![3.0, 2.5, 2.1]);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn derefs_to_slice() {
        let mut iterates = Iterates::new(1.0);
        iterates.push(0.5);

        assert_eq!(iterates.iter().sum::<f64>(), 1.5);
        assert_eq!(iterates[1], 0.5);
    }
}
