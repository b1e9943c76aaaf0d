use crate::models::user_info::UserInfo;

/// Outcome of a login call. A refused login is a value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Authentication {
    pub success: bool,
    pub message: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserInfo>,
}
