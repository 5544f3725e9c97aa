//! User load with lifecycle logging.
//!
//! Wraps the directory lookup with start/outcome/completion reporting.
//! The completion line is registered as a drop guard, so it runs exactly
//! once on every exit path before the result or error reaches the
//! caller.

use crate::report::Reporter;
use crate::users::{self, LookupError};
use crate::models::User;

/// Load a user, reporting the full lifecycle.
///
/// Logs a start line, delegates to [`users::find_user`], logs the
/// outcome, and always logs the completion line. Failures are re-raised
/// unchanged after being reported.
pub async fn load_user(id: u32, report: &Reporter) -> Result<User, LookupError> {
    report.info("Starting data load...");
    let _completed = report.completion_guard("Data load finished");

    match users::find_user(id).await {
        Ok(user) => {
            report.success(&format!("Data loaded: {user}"));
            Ok(user)
        }
        Err(err) => {
            report.error(&format!("failed to load data: {err}"));
            Err(err)
        }
    }
}
