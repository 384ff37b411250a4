//! Company endpoint operations: create and update against the `companies`
//! collection.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::http::{Method, Transport};

/// Fields accepted when creating or updating a company.
///
/// Unset fields are omitted from the request body. `id` identifies the
/// company; `last_impression_at` is the UNIX timestamp of the last visit by
/// any user belonging to it. Presence of required fields is not checked
/// locally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_impression_at: Option<i64>,
}

/// Creates a company.
///
/// # Errors
///
/// Propagates any [`Error`] from the transport.
pub async fn create_company(
    transport: &Transport,
    params: &CompanyParams,
) -> Result<Value, Error> {
    let url = format!("{}companies", transport.config().endpoint());
    transport
        .call(Method::POST, &url, &serde_json::to_value(params)?)
        .await
}

/// Updates a company with whichever fields are set in `params`.
///
/// # Errors
///
/// Propagates any [`Error`] from the transport.
pub async fn update_company(
    transport: &Transport,
    params: &CompanyParams,
) -> Result<Value, Error> {
    let url = format!("{}companies", transport.config().endpoint());
    transport
        .call(Method::PUT, &url, &serde_json::to_value(params)?)
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_company_params_are_omitted_from_the_body() {
        let params = CompanyParams {
            id: Some("7902".to_string()),
            name: Some("Oursky".to_string()),
            plan: Some("Starter".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({"id": "7902", "name": "Oursky", "plan": "Starter"})
        );
    }

    #[test]
    fn spending_serializes_as_a_number() {
        let params = CompanyParams {
            id: Some("7902".to_string()),
            spending: Some(99.5),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, json!({"id": "7902", "spending": 99.5}));
    }
}
