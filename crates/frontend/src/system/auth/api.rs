use contracts::shared::api::ApiError;
use contracts::system::auth::{LoginPayload, LoginRequest};

use crate::shared::api::{api_url, post};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginPayload, ApiError> {
    let request = LoginRequest { username, password };
    post::<_, LoginPayload>(&api_url("/auth/login"), &request)
        .await?
        .into_data()
}
