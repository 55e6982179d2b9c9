use serde::{Deserialize, Serialize};
use stk_store::models::{Page, Role, User};

/// Login form payload.
///
/// Credentials are not verified anywhere - the tracker is a mock and any
/// password is accepted. A blank name falls back to the canned placeholder
/// for the role.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Selected login type
    pub role: Role,
    /// Display name; blank falls back to the role placeholder
    #[serde(default)]
    pub name: String,
    /// Email address
    pub email: String,
    /// Ignored beyond being present on the form
    #[serde(default)]
    pub password: String,
    /// Academic year (1-4); students only, defaults to 1
    pub year: Option<u8>,
}

/// Identity and current page of a session; returned by login and `/auth/me`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: User,
    pub page: Page,
}

/// Page-change request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateRequest {
    pub page: Page,
}

/// Page-change result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub page: Page,
}
