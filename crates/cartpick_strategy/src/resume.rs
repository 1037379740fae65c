//! Manual-pick synchronization.
//!
//! The `ask` strategy loads a result page and then hands control to a human,
//! who picks in the underlying surface. [`ManualResume`] is the one blocking
//! point where the engine waits for them to finish.

use cartpick_foundation::Query;

/// Blocks until a manual pick for `query` is finished.
///
/// There is no timeout and no cancellation; implementations may block
/// indefinitely. Waiting never fails.
pub trait ManualResume {
    /// Waits for the resume signal.
    fn wait_for_resume(&mut self, query: &Query);
}

impl<F: FnMut(&Query)> ManualResume for F {
    fn wait_for_resume(&mut self, query: &Query) {
        self(query);
    }
}

/// Resumes at once. Used for batch runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateResume;

impl ManualResume for ImmediateResume {
    fn wait_for_resume(&mut self, query: &Query) {
        tracing::debug!(query = %query, "manual pick skipped");
    }
}
