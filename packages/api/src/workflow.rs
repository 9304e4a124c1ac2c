//! # Registration and listing workflows
//!
//! The two places transport errors end up. Both log the failure and carry on:
//!
//! - [`submit_registration`] keeps the draft for a retry when the create call
//!   fails.
//! - [`fetch_users`] treats a failed listing as an empty one.

use model::{NewUser, UserRecord};

use crate::{ApiError, UserGateway};

/// Result of one press of the submit button.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The draft is invalid or a submission is already in flight; nothing was sent.
    Blocked,
    /// The user was created and the form reset.
    Created(UserRecord),
    /// The request failed; the draft is kept.
    Failed,
}

/// Create `user`, logging a failure.
pub async fn create_user_logged<G: UserGateway>(
    gateway: &G,
    user: &NewUser,
) -> Result<UserRecord, ApiError> {
    match gateway.create_user(user).await {
        Ok(record) => {
            tracing::info!("Created user {}", record.id);
            Ok(record)
        }
        Err(e) => {
            tracing::error!("Submission error: {}", e);
            Err(e)
        }
    }
}

/// Run one submission against `gateway`.
///
/// `begin` and `finish` reach the form wherever it lives (a plain
/// [`model::RegistrationForm`], or one inside a UI signal) and are expected to
/// call its `begin_submit` / `finish_submit`. Neither is held across the
/// request. `on_success` runs once, after `finish`, when the user was created.
pub async fn submit_registration<G: UserGateway>(
    gateway: &G,
    begin: impl FnOnce() -> Option<NewUser>,
    finish: impl FnOnce(&Result<UserRecord, ApiError>),
    on_success: impl FnOnce(),
) -> SubmitOutcome {
    let Some(user) = begin() else {
        return SubmitOutcome::Blocked;
    };
    let result = create_user_logged(gateway, &user).await;
    finish(&result);
    match result {
        Ok(record) => {
            on_success();
            SubmitOutcome::Created(record)
        }
        Err(_) => SubmitOutcome::Failed,
    }
}

/// Fetch every user. A failure is logged and yields an empty list.
pub async fn fetch_users<G: UserGateway>(gateway: &G) -> Vec<UserRecord> {
    match gateway.list_users().await {
        Ok(users) => {
            tracing::debug!("Fetched {} users", users.len());
            users
        }
        Err(e) => {
            tracing::error!("Error fetching users: {}", e);
            Vec::new()
        }
    }
}
