use std::future::Future;

use error_stack::Report;
use kernel::interface::timeout::OperationTimeout;
use kernel::KernelError;

/// Runs `future` under `timeout`. On elapse the future is dropped, releasing whatever it held.
pub(crate) async fn bounded<T, F>(
    timeout: &OperationTimeout,
    operation: &'static str,
    future: F,
) -> error_stack::Result<T, KernelError>
where
    F: Future<Output = error_stack::Result<T, KernelError>>,
{
    let limit = *timeout.as_ref();
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(elapsed) => {
            tracing::warn!(operation, ?limit, "store operation timed out");
            Err(Report::new(elapsed)
                .change_context(KernelError::Timeout)
                .attach_printable(format!("{operation} exceeded {limit:?}")))
        }
    }
}
