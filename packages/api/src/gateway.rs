use model::{NewUser, UserRecord};

use crate::ApiError;

/// Access to the remote user collection.
///
/// Futures are not required to be `Send`; on the web they run on the
/// browser's single thread.
pub trait UserGateway {
    /// Fetch the full collection, in the order the server returns it.
    fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<UserRecord>, ApiError>>;

    /// Create one user and return the stored record.
    fn create_user(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<UserRecord, ApiError>>;
}
