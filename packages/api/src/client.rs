//! HTTP implementation of [`UserGateway`].

use model::{NewUser, UserRecord};
use reqwest::{Client, Response};

use crate::{ApiError, UserGateway};

/// The users resource. Both operations target this path.
pub const USERS_URL: &str = "http://localhost:3001/users";

/// `reqwest`-backed gateway to [`USERS_URL`].
#[derive(Clone, Debug, Default)]
pub struct UsersClient {
    http: Client,
}

impl UsersClient {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

impl UserGateway for UsersClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let response = self.http.get(USERS_URL).send().await?;
        let users = check_status(response)?.json().await?;
        Ok(users)
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ApiError> {
        let response = self.http.post(USERS_URL).json(user).send().await?;
        let record = check_status(response)?.json().await?;
        Ok(record)
    }
}
