//! The waitlist submission flow: validate, insert, map the result to
//! one of the UI outcomes. The flow never touches the DOM; the modal
//! component owns presentation.

use crate::utils::validation::is_valid_email;
use crate::waitlist::store::{SignupRequest, WaitlistStore};

/// How long the success message stays up before the form resets and
/// the modal closes.
pub const SUCCESS_RESET_DELAY_MS: u32 = 3_000;

/// Shown when the store fails without a usable message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Terminal state of a single submission attempt. Every variant leaves
/// the page usable; nothing here is fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// The email failed the client-side gate; the store was never
    /// contacted.
    InvalidEmail,
    Joined,
    AlreadyJoined,
    Failed(String),
}

/// Runs one submission attempt end to end. The store is only reached
/// once the email passes validation, and at most once per call.
pub async fn submit<S: WaitlistStore>(store: &S, signup: &SignupRequest) -> SignupOutcome {
    if !is_valid_email(&signup.email) {
        return SignupOutcome::InvalidEmail;
    }

    match store.insert(signup).await {
        Ok(records) => {
            log::info!("waitlist signup stored ({} row(s) returned)", records.len());
            SignupOutcome::Joined
        }
        Err(err) if err.is_unique_violation() => SignupOutcome::AlreadyJoined,
        Err(err) => {
            log::error!("waitlist insert failed: {err}");
            let message = if err.message.trim().is_empty() {
                GENERIC_ERROR_MESSAGE.to_string()
            } else {
                err.message
            };
            SignupOutcome::Failed(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::waitlist::store::{StoreError, WaitlistRecord, UNIQUE_VIOLATION_CODE};

    struct MockStore {
        calls: Cell<usize>,
        result: RefCell<Option<Result<Vec<WaitlistRecord>, StoreError>>>,
    }

    impl MockStore {
        fn returning(result: Result<Vec<WaitlistRecord>, StoreError>) -> Self {
            Self {
                calls: Cell::new(0),
                result: RefCell::new(Some(result)),
            }
        }
    }

    #[async_trait(?Send)]
    impl WaitlistStore for MockStore {
        async fn insert(
            &self,
            _signup: &SignupRequest,
        ) -> Result<Vec<WaitlistRecord>, StoreError> {
            self.calls.set(self.calls.get() + 1);
            self.result
                .borrow_mut()
                .take()
                .expect("store called more than once")
        }
    }

    fn signup(email: &str) -> SignupRequest {
        SignupRequest::new("Amina", email, "", "", None, "test-agent".to_string())
    }

    fn inserted_row() -> WaitlistRecord {
        WaitlistRecord {
            id: Some(1),
            email: "amina@example.com".to_string(),
            referral_code: Some("AMIN-7GQ2".to_string()),
        }
    }

    #[test]
    fn invalid_email_never_reaches_the_store() {
        let store = MockStore::returning(Ok(vec![inserted_row()]));
        let outcome = block_on(submit(&store, &signup("not-an-email")));
        assert_eq!(outcome, SignupOutcome::InvalidEmail);
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn successful_insert_joins() {
        let store = MockStore::returning(Ok(vec![inserted_row()]));
        let outcome = block_on(submit(&store, &signup("amina@example.com")));
        assert_eq!(outcome, SignupOutcome::Joined);
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn unique_violation_maps_to_already_joined() {
        let store = MockStore::returning(Err(StoreError {
            code: Some(UNIQUE_VIOLATION_CODE.to_string()),
            message: "duplicate key value violates unique constraint \"waitlist_email_key\""
                .to_string(),
        }));
        let outcome = block_on(submit(&store, &signup("amina@example.com")));
        assert_eq!(outcome, SignupOutcome::AlreadyJoined);
    }

    #[test]
    fn other_errors_surface_the_store_message() {
        let store = MockStore::returning(Err(StoreError {
            code: Some("42501".to_string()),
            message: "permission denied for table waitlist".to_string(),
        }));
        let outcome = block_on(submit(&store, &signup("amina@example.com")));
        assert_eq!(
            outcome,
            SignupOutcome::Failed("permission denied for table waitlist".to_string())
        );
    }

    #[test]
    fn blank_error_messages_fall_back_to_the_generic_text() {
        let store = MockStore::returning(Err(StoreError::transport("")));
        let outcome = block_on(submit(&store, &signup("amina@example.com")));
        assert_eq!(
            outcome,
            SignupOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string())
        );
    }
}
