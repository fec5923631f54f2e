use crate::utils::error::{ExtError, Result};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Timeout and cancellation wrappers for any `Send` future.
pub trait TaskExt: Future + Send + Sized {
    /// Resolves to the future's output, or a timeout error once `timeout` has elapsed.
    /// The inner future is dropped on timeout.
    fn with_timeout(self, timeout: Duration) -> impl Future<Output = Result<Self::Output>> + Send;

    /// Resolves to the future's output, or a cancelled error as soon as `token` fires.
    /// A token that is already cancelled wins over a ready future.
    fn with_cancellation(
        self,
        token: CancellationToken,
    ) -> impl Future<Output = Result<Self::Output>> + Send;
}

impl<F> TaskExt for F
where
    F: Future + Send,
    F::Output: Send,
{
    fn with_timeout(self, timeout: Duration) -> impl Future<Output = Result<F::Output>> + Send {
        async move {
            match tokio::time::timeout(timeout, self).await {
                Ok(output) => Ok(output),
                Err(_) => {
                    tracing::warn!("Task timed out after {:?}", timeout);
                    Err(ExtError::TimeoutError { elapsed: timeout })
                }
            }
        }
    }

    fn with_cancellation(
        self,
        token: CancellationToken,
    ) -> impl Future<Output = Result<F::Output>> + Send {
        async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!("Task cancelled");
                    Err(ExtError::CancelledError)
                }
                output = self => Ok(output),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_with_timeout_completes() {
        let value = async { 42 }.with_timeout(Duration::from_secs(1)).await;
        assert_eq!(assert_ok!(value), 42);
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let slow = tokio::time::sleep(Duration::from_secs(5));
        let result = slow.with_timeout(Duration::from_millis(10)).await;
        match assert_err!(result) {
            ExtError::TimeoutError { elapsed } => assert_eq!(elapsed, Duration::from_millis(10)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_cancellation_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let result = tokio_test::block_on(async { "done" }.with_cancellation(token));
        assert!(matches!(result, Err(ExtError::CancelledError)));
    }

    #[test]
    fn test_with_cancellation_not_cancelled() {
        let token = CancellationToken::new();
        let result = tokio_test::block_on(async { "done" }.with_cancellation(token));
        assert_eq!(assert_ok!(result), "done");
    }

    #[tokio::test]
    async fn test_with_cancellation_from_another_task() {
        let token = CancellationToken::new();
        let child = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            child.cancel();
        });
        let result = std::future::pending::<()>().with_cancellation(token).await;
        assert!(matches!(result, Err(ExtError::CancelledError)));
    }
}
