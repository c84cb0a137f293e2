/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Header carrying the short-lived API key
pub const API_KEY_HEADER: &str = "X-Soracom-API-Key";
/// Header carrying the short-lived API token
pub const TOKEN_HEADER: &str = "X-Soracom-Token";

/// Body of the `/v1/auth` call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest<'a> {
    /// Authentication key ID
    pub auth_key_id: &'a str,
    /// Authentication key secret
    pub auth_key: &'a str,
}

/// Response of the `/v1/auth` call
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Short-lived API key
    pub api_key: String,
    /// Short-lived API token
    pub token: String,
    /// Operator owning the credentials
    #[serde(default)]
    pub operator_id: Option<String>,
}

/// Header set attached to exactly one API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Value of `X-Soracom-API-Key`
    pub api_key: String,
    /// Value of `X-Soracom-Token`
    pub token: String,
}

impl AuthHeaders {
    /// Returns the headers as name/value pairs, JSON accept and content type included
    #[must_use]
    pub fn as_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            (API_KEY_HEADER, self.api_key.as_str()),
            (TOKEN_HEADER, self.token.as_str()),
            ("Accept", "application/json"),
            ("Content-Type", "application/json"),
        ]
    }
}

impl From<AuthResponse> for AuthHeaders {
    fn from(response: AuthResponse) -> Self {
        Self {
            api_key: response.api_key,
            token: response.token,
        }
    }
}
