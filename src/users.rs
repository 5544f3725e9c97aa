//! Delayed lookup against the fixed user directory.
//!
//! Simulates a remote data source: the directory is an immutable
//! in-memory table and every lookup waits a fixed, non-blocking delay
//! before delivering exactly one outcome.

use thiserror::Error;
use tokio::time::sleep;

use crate::constants::USER_LOOKUP_DELAY;
use crate::models::User;

/// The fixed directory: (id, name, email).
const USERS: &[(u32, &str, &str)] = &[
    (1, "João", "joao@email.com"),
    (2, "Maria", "maria@email.com"),
    (3, "Pedro", "pedro@email.com"),
];

/// Errors from the user lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("user {0} not found")]
    NotFound(u32),
}

/// Look up a user by id after the simulated latency.
///
/// Succeeds with the matching record, or fails with
/// [`LookupError::NotFound`] for an id outside the directory. No
/// retries, no cancellation.
pub async fn find_user(id: u32) -> Result<User, LookupError> {
    sleep(USER_LOOKUP_DELAY).await;

    USERS
        .iter()
        .find(|(user_id, _, _)| *user_id == id)
        .map(|&(user_id, name, email)| User {
            id: user_id,
            name: name.to_string(),
            email: email.to_string(),
        })
        .ok_or(LookupError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn known_ids_resolve_to_exact_records() {
        let expected = [
            (1, "João", "joao@email.com"),
            (2, "Maria", "maria@email.com"),
            (3, "Pedro", "pedro@email.com"),
        ];
        for (id, name, email) in expected {
            let user = find_user(id).await.unwrap();
            assert_eq!(
                user,
                User {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                },
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_id_fails_with_not_found() {
        assert_eq!(find_user(99).await, Err(LookupError::NotFound(99)));
        assert_eq!(find_user(0).await, Err(LookupError::NotFound(0)));
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(LookupError::NotFound(42).to_string(), "user 42 not found");
    }
}
