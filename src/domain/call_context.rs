//! Deadline and cancellation signal passed through every use case and
//! repository call.
//!
//! A [`CallContext`] pairs a [`CancellationToken`] with an optional deadline.
//! Use cases derive a bounded child with [`CallContext::with_timeout`] and run
//! the repository operation through [`CallContext::run`], which resolves to
//! [`ProductError::Timeout`] or [`ProductError::Cancelled`] as soon as either
//! signal fires.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::errors::ProductError;

/// Default ceiling applied by the use cases when none is configured.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A root context with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that is cancelled whenever `token` is.
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Derives a child whose deadline is at most `timeout` from now.
    ///
    /// A deadline already set on `self` wins if it is earlier. Cancelling the
    /// parent cancels the child; cancelling the child leaves the parent alone.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(existing) if existing < candidate => existing,
            _ => candidate,
        };

        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Fails if the context is already cancelled or past its deadline.
    ///
    /// Backends call this before touching storage.
    pub fn check(&self) -> Result<(), ProductError> {
        if self.token.is_cancelled() {
            return Err(ProductError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(ProductError::Timeout);
        }
        Ok(())
    }

    /// Starts `op` and drives it until it completes, the token is cancelled,
    /// or the deadline passes, whichever happens first.
    ///
    /// `op` is not called at all if the context has already fired. Its future
    /// is dropped when a signal wins.
    pub async fn run<T, F, Fut>(&self, op: F) -> Result<T, ProductError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ProductError>>,
    {
        self.check()?;
        let fut = op();

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ProductError::Cancelled),
            _ = expired => Err(ProductError::Timeout),
            result = fut => result,
        }
    }
}
