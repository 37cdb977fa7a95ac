use serde::{Deserialize, Serialize};

use super::permissions::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `data` of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub access_token: String,
    pub user: UserInfo,
}

/// Signed-in user as kept in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_payload() {
        let raw = json!({
            "accessToken": "t0k3n",
            "user": { "id": "u1", "username": "admin", "role": "SUPER_ADMIN" }
        });
        let payload: LoginPayload = serde_json::from_value(raw).unwrap();
        assert_eq!(payload.access_token, "t0k3n");
        assert_eq!(payload.user.role, Role::new("SUPER_ADMIN"));
        assert_eq!(payload.user.display_name(), "admin");
    }
}
