//! # Snapshots
//!
//! A [`Snapshot`] is what consumers see of a store: an immutable, cheaply cloneable view of the
//! state as it was at one publish, tagged with the revision that produced it.

use std::ops::Deref;
use std::sync::Arc;

/// Immutable view of a published state.
///
/// Two snapshots with different revisions were produced by different publishes, even if their
/// states compare equal. Consumers use the revision the way a UI uses a new object reference:
/// to decide whether to refresh.
#[derive(Debug)]
pub struct Snapshot<S> {
    revision: u64,
    state: Arc<S>,
}

impl<S> Snapshot<S> {
    pub(crate) fn new(revision: u64, state: Arc<S>) -> Self {
        Self { revision, state }
    }

    /// Number of publishes that happened before this snapshot was taken (0 for a fresh store).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shared handle to the state.
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }
}

impl<S: Default> Default for Snapshot<S> {
    fn default() -> Self {
        Self::new(0, Arc::new(S::default()))
    }
}

// Manual impl: `S` itself does not need to be `Clone`.
impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            revision: self.revision,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> Deref for Snapshot<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_revision_zero() {
        let snapshot = Snapshot::<Vec<u32>>::default();
        assert_eq!(snapshot.revision(), 0);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_clone_shares_state() {
        let snapshot = Snapshot::new(3, Arc::new(vec![1, 2, 3]));
        let copy = snapshot.clone();
        assert_eq!(copy.revision(), 3);
        assert!(Arc::ptr_eq(&snapshot.state(), &copy.state()));
    }
}
