use serde::Deserialize;

/// A user as returned by the user service. Timestamps are kept as the server formats them.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub role_description: Option<String>,
    pub active: Option<bool>,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
}

impl UserInfo {
    /// "First Last" when both names are known, the username otherwise.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first_name), Some(last_name)) => format!("{first_name} {last_name}"),
            _ => self.username.clone().unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub current_page: Option<u32>,
    pub total_pages: Option<u32>,
    pub total_elements: Option<u64>,
    pub page_size: Option<u32>,
    pub has_next: Option<bool>,
    pub has_previous: Option<bool>,
}

/// One page of a LIST result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPage {
    pub users: Vec<UserInfo>,
    pub page_info: Option<PageInfo>,
}
