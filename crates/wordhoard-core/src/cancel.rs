// Cooperative cancellation for CPU-bound search loops.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::SearchError;

/// A deadline plus a shared cancellation flag.
///
/// Search loops call [`CancelToken::check`] at every outer iteration and
/// unwind with the returned error. Clones share the same flag, so cancelling
/// one cancels all of them. [`CancelToken::child`] creates a token that also
/// observes this one but can be cancelled on its own.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    deadline: Option<Instant>,
    flag: Arc<AtomicBool>,
    /// Flags of every token this one was derived from.
    ancestors: Vec<Arc<AtomicBool>>,
}

impl CancelToken {
    /// A token that never expires unless cancelled explicitly.
    pub fn none() -> Self {
        Self::default()
    }

    /// A token that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    /// A token that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => Self::with_deadline(deadline),
            None => Self::none(),
        }
    }

    /// Derive a token sharing this deadline and observing this token's
    /// cancellation, with a flag of its own.
    pub fn child(&self) -> Self {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(Arc::clone(&self.flag));
        Self {
            deadline: self.deadline,
            flag: Arc::new(AtomicBool::new(false)),
            ancestors,
        }
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this token and every clone of it.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if this token or any ancestor has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self.ancestors.iter().any(|f| f.load(Ordering::Relaxed))
    }

    /// Returns an error if the search should stop.
    ///
    /// Explicit cancellation is reported before an expired deadline.
    #[inline]
    pub fn check(&self) -> Result<(), SearchError> {
        if self.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(SearchError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_token_passes() {
        assert_eq!(CancelToken::none().check(), Ok(()));
    }

    #[test]
    fn expired_deadline_fails() {
        let token = CancelToken::with_deadline(Instant::now());
        assert_eq!(token.check(), Err(SearchError::DeadlineExceeded));
    }

    #[test]
    fn generous_timeout_passes() {
        let token = CancelToken::with_timeout(Duration::from_secs(3600));
        assert_eq!(token.check(), Ok(()));
    }

    #[test]
    fn huge_timeout_does_not_overflow() {
        let token = CancelToken::with_timeout(Duration::MAX);
        assert_eq!(token.check(), Ok(()));
    }

    #[test]
    fn cancel_reaches_clones() {
        let token = CancelToken::none();
        let clone = token.clone();
        token.cancel();
        assert_eq!(clone.check(), Err(SearchError::Cancelled));
    }

    #[test]
    fn cancellation_wins_over_deadline() {
        let token = CancelToken::with_deadline(Instant::now());
        token.cancel();
        assert_eq!(token.check(), Err(SearchError::Cancelled));
    }

    #[test]
    fn child_observes_parent_but_not_vice_versa() {
        let parent = CancelToken::none();
        let child = parent.child();
        child.cancel();
        assert_eq!(parent.check(), Ok(()));
        assert_eq!(child.check(), Err(SearchError::Cancelled));

        let other = parent.child();
        parent.cancel();
        assert_eq!(other.check(), Err(SearchError::Cancelled));
    }

    #[test]
    fn child_inherits_deadline() {
        let parent = CancelToken::with_deadline(Instant::now());
        assert_eq!(parent.child().check(), Err(SearchError::DeadlineExceeded));
    }
}
