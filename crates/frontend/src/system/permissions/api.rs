use contracts::shared::api::ApiError;
use contracts::system::permissions::{Module, PermissionPayload, PermissionSet, Role};

use crate::shared::api::{get, list_url};
use crate::shared::config::app_config;

/// Allowed actions of `role` on `module`; unknown action codes are ignored.
pub async fn fetch_permissions(role: &Role, module: Module) -> Result<PermissionSet, ApiError> {
    let path = format!("/roles/{}/actions", urlencoding::encode(role.as_str()));
    let url = list_url(
        &app_config().api_base,
        &path,
        &[("module".to_string(), module.as_str().to_string())],
    );
    let payload = get::<PermissionPayload>(&url).await?.into_data()?;
    Ok(payload.into_set())
}
