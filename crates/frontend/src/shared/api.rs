//! REST client for the platform API.
//!
//! Every call goes through `{api_base}/{path}` with the session token as a
//! bearer header and decodes the `{success, data, message}` envelope.

use contracts::domain::common::{Entity, RecordId};
use contracts::shared::api::{ApiError, ApiResponse, ListPayload};
use contracts::shared::list::{ListQuery, ListResult};
use contracts::system::permissions::Module;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::app_config;
use crate::system::auth::storage;

/// Page size used to populate reference selects.
const REFERENCE_LIMIT: usize = 100;

pub fn api_url(path: &str) -> String {
    join_url(&app_config().api_base, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `{base}/{path}?k=v&…` with every value percent-encoded.
pub fn list_url(base: &str, path: &str, pairs: &[(String, String)]) -> String {
    let url = join_url(base, path);
    if pairs.is_empty() {
        return url;
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

pub fn item_path(path: &str, id: &str) -> String {
    format!("{}/{}", path, urlencoding::encode(id))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Interprets a raw response. Non-2xx answers may still carry an envelope
/// with a message; an empty 2xx body counts as a bare acknowledgement.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiResponse<T>, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthenticated);
    }
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message);
        return Err(ApiError::Http { status, message });
    }
    if body.trim().is_empty() {
        return Ok(ApiResponse {
            success: true,
            data: None,
            message: None,
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_envelope(status, &body)
}

async fn send<T: DeserializeOwned>(request: Result<Request, gloo_net::Error>) -> Result<ApiResponse<T>, ApiError> {
    let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
    let response = request.send().await.map_err(|e| {
        log::warn!("request failed: {}", e);
        ApiError::Transport(e.to_string())
    })?;
    read_envelope(response).await
}

pub async fn get<T: DeserializeOwned>(url: &str) -> Result<ApiResponse<T>, ApiError> {
    log::debug!("GET {}", url);
    send(with_auth(Request::get(url)).build()).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<ApiResponse<T>, ApiError> {
    log::debug!("POST {}", url);
    send(with_auth(Request::post(url)).json(body)).await
}

pub async fn patch<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<ApiResponse<T>, ApiError> {
    log::debug!("PATCH {}", url);
    send(with_auth(Request::patch(url)).json(body)).await
}

pub async fn delete_request(url: &str) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    log::debug!("DELETE {}", url);
    send(with_auth(Request::delete(url)).build()).await
}

// ============================================================================
// Entity operations
// ============================================================================

pub async fn fetch_list<E: Entity>(query: &ListQuery<E::Filter>) -> Result<ListResult<E>, ApiError> {
    let url = list_url(&app_config().api_base, E::api_path(), &query.query_pairs());
    let payload: ListPayload<E> = get(&url).await?.into_data()?;
    Ok(payload.into_result(query.page, query.page_size))
}

pub async fn create<E: Entity>(body: &E::Form) -> Result<Option<E>, ApiError> {
    post(&api_url(E::api_path()), body).await?.into_ack()
}

pub async fn update<E: Entity>(id: &E::Id, body: &E::Form) -> Result<Option<E>, ApiError> {
    patch(&api_url(&item_path(E::api_path(), id.as_str())), body)
        .await?
        .into_ack()
}

pub async fn delete<E: Entity>(id: &E::Id) -> Result<(), ApiError> {
    delete_request(&api_url(&item_path(E::api_path(), id.as_str())))
        .await?
        .into_ack()
        .map(|_| ())
}

/// `(id, label)` pairs of the first page of another module's records.
pub async fn fetch_reference_options(module: Module) -> Result<Vec<(String, String)>, ApiError> {
    let pairs = vec![
        ("page".to_string(), "1".to_string()),
        ("limit".to_string(), REFERENCE_LIMIT.to_string()),
    ];
    let url = list_url(&app_config().api_base, module.as_str(), &pairs);
    let payload: ListPayload<serde_json::Value> = get(&url).await?.into_data()?;
    Ok(payload.data.iter().filter_map(reference_option).collect())
}

/// Picks the display label of an arbitrary record.
pub(crate) fn reference_option(record: &serde_json::Value) -> Option<(String, String)> {
    let id = match record.get("id")? {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let field = |key: &str| {
        record
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let label = field("name")
        .or_else(|| field("fullName"))
        .or_else(|| match (field("firstName"), field("lastName")) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (first, last) => first.or(last),
        })
        .unwrap_or_else(|| id.clone());
    Some((id, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api::GENERIC_FAILURE;
    use serde_json::json;

    #[test]
    fn test_list_url_encodes_values() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("search".to_string(), "a&b c".to_string()),
        ];
        assert_eq!(
            list_url("http://h:3000/api/", "/organizations", &pairs),
            "http://h:3000/api/organizations?page=2&search=a%26b%20c"
        );
        assert_eq!(
            list_url("http://h:3000/api", "audit-logs", &[]),
            "http://h:3000/api/audit-logs"
        );
        assert_eq!(item_path("students", "a/b"), "students/a%2Fb");
    }

    #[test]
    fn test_http_error_keeps_backend_message() {
        let err = decode_envelope::<serde_json::Value>(
            409,
            r#"{"success": false, "message": "Duplicate code"}"#,
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "Duplicate code");

        let err = decode_envelope::<serde_json::Value>(502, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 502, message: None });
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_unauthorized_and_empty_bodies() {
        assert_eq!(
            decode_envelope::<serde_json::Value>(401, "").unwrap_err(),
            ApiError::Unauthenticated
        );
        let ack = decode_envelope::<serde_json::Value>(204, "").unwrap();
        assert!(ack.success);
        assert!(matches!(
            decode_envelope::<serde_json::Value>(200, "{oops"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_reference_labels() {
        assert_eq!(
            reference_option(&json!({"id": "o1", "name": "Acme"})),
            Some(("o1".to_string(), "Acme".to_string()))
        );
        assert_eq!(
            reference_option(&json!({"id": 7, "firstName": "Ada", "lastName": "Lovelace"})),
            Some(("7".to_string(), "Ada Lovelace".to_string()))
        );
        assert_eq!(
            reference_option(&json!({"id": "x", "name": "  "})),
            Some(("x".to_string(), "x".to_string()))
        );
        assert_eq!(reference_option(&json!({"name": "no id"})), None);
    }
}
