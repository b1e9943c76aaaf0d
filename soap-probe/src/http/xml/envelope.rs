use crate::models::user_info::{PageInfo, UserInfo};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SoapEnvelope {
    #[serde(rename = "Body")]
    pub soap_body: SoapBody,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct SoapBody {
    #[serde(rename = "Fault")]
    pub fault: Option<SoapFault>,
    #[serde(rename = "userResponse")]
    pub user_response: Option<UserResponse>,
    #[serde(rename = "loginResponse")]
    pub login_response: Option<LoginResponse>,
    #[serde(rename = "logoutResponse")]
    pub logout_response: Option<LogoutResponse>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct SoapFault {
    #[serde(rename = "faultcode")]
    pub fault_code: String,
    #[serde(rename = "faultstring")]
    pub fault_string: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UserResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error_code: Option<String>,
    pub user: Option<UserInfo>,
    pub users: Vec<UserInfo>,
    pub page_info: Option<PageInfo>,
    pub stats: Option<OperationStats>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct OperationStats {
    pub operation: Option<String>,
    pub execution_time_ms: Option<u64>,
    pub affected_records: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub access_token_expires_at: Option<String>,
    pub refresh_token_expires_at: Option<String>,
    pub user_info: Option<UserInfo>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct LogoutResponse {
    pub success: bool,
    pub message: Option<String>,
    pub tokens_revoked: u32,
    pub logout_timestamp: Option<String>,
}

pub(crate) fn parse(xml: &str) -> Result<SoapBody, quick_xml::DeError> {
    let envelope: SoapEnvelope = quick_xml::de::from_str(xml)?;
    Ok(envelope.soap_body)
}

impl SoapBody {
    /// Multi-line human summary of whatever the body carries.
    pub(crate) fn summary(&self) -> Option<String> {
        if let Some(fault) = &self.fault {
            return Some(format!(
                "SOAP fault {}: {}",
                fault.fault_code, fault.fault_string
            ));
        }

        if let Some(response) = &self.user_response {
            let mut summary = format!(
                "success={} message={}",
                response.success,
                response.message.as_deref().unwrap_or_default()
            );

            if let Some(error_code) = &response.error_code {
                summary.push_str(&format!(" errorCode={error_code}"));
            }

            if let Some(user) = &response.user {
                summary.push_str(&format!("\n  {}", describe_user(user)));
            }

            for user in &response.users {
                summary.push_str(&format!("\n  {}", describe_user(user)));
            }

            if let Some(page_info) = &response.page_info {
                summary.push_str(&format!(
                    "\n  page {}/{} ({} utilisateurs)",
                    page_info.current_page.unwrap_or_default(),
                    page_info.total_pages.unwrap_or_default(),
                    page_info.total_elements.unwrap_or_default()
                ));
            }

            if let Some(stats) = &response.stats {
                summary.push_str(&format!(
                    "\n  {} en {}ms, {} enregistrement(s)",
                    stats.operation.as_deref().unwrap_or_default(),
                    stats.execution_time_ms.unwrap_or_default(),
                    stats.affected_records.unwrap_or_default()
                ));
            }

            return Some(summary);
        }

        if let Some(response) = &self.login_response {
            let mut summary = format!(
                "success={} message={} token={}",
                response.success,
                response.message.as_deref().unwrap_or_default(),
                if response.access_token.is_some() { "OUI" } else { "NON" }
            );

            if let Some(expires_at) = &response.access_token_expires_at {
                summary.push_str(&format!(" expire={expires_at}"));
            }

            if let Some(refresh_expires_at) = &response.refresh_token_expires_at {
                summary.push_str(&format!(" refreshExpire={refresh_expires_at}"));
            }

            if let Some(user) = &response.user_info {
                summary.push_str(&format!("\n  {}", describe_user(user)));
            }

            return Some(summary);
        }

        self.logout_response.as_ref().map(|response| {
            format!(
                "success={} message={} tokensRevoked={} at={}",
                response.success,
                response.message.as_deref().unwrap_or_default(),
                response.tokens_revoked,
                response.logout_timestamp.as_deref().unwrap_or_default()
            )
        })
    }
}

fn describe_user(user: &UserInfo) -> String {
    format!(
        "{} <{}> {} [{}]",
        user.username.as_deref().unwrap_or_default(),
        user.email.as_deref().unwrap_or_default(),
        user.role.as_deref().unwrap_or_default(),
        if user.active.unwrap_or_default() { "Actif" } else { "Inactif" }
    )
}
