//! User endpoint operations.
//!
//! Covers the full user lifecycle against the `users` collection: create,
//! fetch, update, delete. Social and geo location data is fetched
//! asynchronously by the service, so a secondary `get_user` call may be
//! required to see it after a create.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::http::{Method, Transport};

/// Fields accepted when creating or updating a user.
///
/// Unset fields are omitted from the request body entirely. The service
/// requires `user_id` or `email` to identify the record, but presence is not
/// checked locally; the service is the sole validator.
///
/// - `user_id`: a unique string identifier for the user
/// - `email`: the user's email address
/// - `name`: the user's full name
/// - `created_at`: UNIX timestamp of when the user was created
/// - `custom_data`: key/value pairs of any other data to store
/// - `last_seen_ip`: last ip address the user visited the application from
///   (used for updating location data)
/// - `last_seen_user_agent`: the user agent the user last visited with
/// - `last_impression_at`: UNIX timestamp of the user's last visit
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_impression_at: Option<i64>,
}

/// Identifies an existing user by email or `user_id`.
///
/// Both keys are always sent, the unset one as JSON `null`; that is the wire
/// contract for lookups and deletes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserIdentity {
    pub email: Option<String>,
    pub user_id: Option<String>,
}

/// Creates a user. Returns the stored record as the service reports it.
///
/// # Errors
///
/// Propagates any [`Error`] from the transport.
pub async fn create_user(transport: &Transport, params: &UserParams) -> Result<Value, Error> {
    let url = format!("{}users", transport.config().endpoint());
    transport
        .call(Method::POST, &url, &serde_json::to_value(params)?)
        .await
}

/// Fetches the user identified by email or `user_id`.
///
/// # Errors
///
/// Propagates any [`Error`] from the transport.
pub async fn get_user(transport: &Transport, identity: &UserIdentity) -> Result<Value, Error> {
    let url = format!("{}users", transport.config().endpoint());
    transport
        .call(Method::GET, &url, &serde_json::to_value(identity)?)
        .await
}

/// Updates a user with whichever fields are set in `params`.
///
/// # Errors
///
/// Propagates any [`Error`] from the transport.
pub async fn update_user(transport: &Transport, params: &UserParams) -> Result<Value, Error> {
    let url = format!("{}users", transport.config().endpoint());
    transport
        .call(Method::PUT, &url, &serde_json::to_value(params)?)
        .await
}

/// Deletes the user identified by email or `user_id`.
///
/// # Errors
///
/// Propagates any [`Error`] from the transport.
pub async fn delete_user(transport: &Transport, identity: &UserIdentity) -> Result<Value, Error> {
    let url = format!("{}users", transport.config().endpoint());
    transport
        .call(Method::DELETE, &url, &serde_json::to_value(identity)?)
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_user_params_are_omitted_from_the_body() {
        let params = UserParams {
            user_id: Some("7902".to_string()),
            name: Some("Somebody".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, json!({"user_id": "7902", "name": "Somebody"}));
    }

    #[test]
    fn custom_data_nests_as_a_json_object() {
        let mut custom_data = Map::new();
        custom_data.insert("app_name".to_string(), json!("Genesis"));
        let params = UserParams {
            user_id: Some("7902".to_string()),
            created_at: Some(1_270_000_000),
            custom_data: Some(custom_data),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "user_id": "7902",
                "created_at": 1_270_000_000,
                "custom_data": {"app_name": "Genesis"},
            })
        );
    }

    #[test]
    fn identity_always_serializes_both_keys() {
        let identity = UserIdentity {
            user_id: Some("7902".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&identity).unwrap();
        assert_eq!(body, json!({"email": null, "user_id": "7902"}));
    }
}
