//! Optional Timeout for Backend Calls
//!
//! The backend call has no deadline unless one is configured
//! (`llm.timeout_secs`). When set, the call is wrapped here and an expired
//! deadline becomes `TopicError::Timeout`.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::ai::timeout::with_timeout;
//!
//! let result = with_timeout(
//!     Some(Duration::from_secs(60)),
//!     async { client.generate(&prompt).await },
//!     "generate answer"
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::types::{Result, TopicError};

/// Execute an async operation with an optional timeout
///
/// `None` waits for the operation however long it takes.
///
/// # Arguments
///
/// * `timeout` - Maximum duration to wait, if any
/// * `future` - The async operation to execute
/// * `operation_name` - Description of the operation (for error messages)
pub async fn with_timeout<T, F>(
    timeout: Option<Duration>,
    future: F,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let Some(timeout) = timeout else {
        return future.await;
    };

    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(TopicError::timeout(operation_name, timeout)),
    }
}
