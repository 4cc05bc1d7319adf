//! Fail-open helper for optional enhancement calls
//!
//! Enhancement is advisory: a failed model call must never stop a document
//! build. Each call site wraps its request in [`fail_open`] and supplies the
//! value to use when it yields `None`.
//!
//! DO NOT use fail-open for document generation or export; those errors
//! belong to the caller.

use std::future::Future;
use tracing::warn;

use crate::Result;

/// Execute an operation whose failure should be logged and swallowed
///
/// Logs the error via `tracing::warn!` on failure and returns `None`.
/// No retries are attempted: a single failure yields `None` immediately.
///
/// # Usage
///
/// ```no_run
/// use pitch_core::fail_open::fail_open;
/// use pitch_core::Result;
///
/// async fn ask_model() -> Result<String> {
///     Ok("struggle with manual reporting".to_string())
/// }
///
/// async fn example() {
///     let problem = fail_open("infer_problem", || ask_model())
///         .await
///         .unwrap_or_else(|| "struggle with this problem without any solution".to_string());
/// }
/// ```
pub async fn fail_open<F, Fut, T>(operation_name: &str, f: F) -> Option<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match f().await {
        Ok(val) => Some(val),
        Err(e) => {
            warn!("{} failed, using fallback: {}", operation_name, e);
            None
        }
    }
}
