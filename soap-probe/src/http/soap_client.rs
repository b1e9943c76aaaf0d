use crate::errors::probe_error::ProbeError;
use crate::http::xml::envelope::{self, SoapBody, UserResponse};
use crate::models::authentication::Authentication;
use crate::models::pagination::Pagination;
use crate::models::user_data::{NewUser, UserChanges};
use crate::models::user_info::{UserInfo, UserPage};
use crate::soap_call::SoapCall;
use log::{debug, trace};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;

/// Raw outcome of one SOAP exchange. Any HTTP status is a reply, not an error.
#[derive(Debug, Clone)]
pub struct SoapReply {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

/// HTTP client for one SOAP endpoint.
pub struct SoapClient {
    client: reqwest::Client,
    url: String,
}

impl SoapClient {
    /// Builds the underlying HTTP client. Without a timeout, requests wait until
    /// the transport resolves.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(ProbeError::ClientBuild)?,
            url: url.into(),
        })
    }

    pub async fn post(
        &self,
        soap_action: &'static str,
        envelope: String,
    ) -> Result<SoapReply, ProbeError> {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/xml; charset=utf-8"),
        );
        headers.insert("SOAPAction", HeaderValue::from_static(soap_action));

        trace!("C: {envelope}");
        let response = self
            .client
            .post(&self.url)
            .headers(headers)
            .body(envelope)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        trace!("S: {status} {body}");

        Ok(SoapReply {
            status,
            headers,
            body,
        })
    }

    pub async fn call(&self, call: &SoapCall, auth_token: &str) -> Result<SoapReply, ProbeError> {
        debug!("Sending {} to {}", call.soap_action(), self.url);
        self.post(call.soap_action(), call.envelope(auth_token)).await
    }

    async fn decoded(&self, call: &SoapCall, auth_token: &str) -> Result<SoapBody, ProbeError> {
        let reply = self.call(call, auth_token).await?;
        let body = envelope::parse(&reply.body);

        if let Ok(SoapBody {
            fault: Some(fault), ..
        }) = &body
        {
            return Err(ProbeError::Fault {
                code: fault.fault_code.clone(),
                message: fault.fault_string.clone(),
            });
        }

        if reply.status != StatusCode::OK.as_u16() {
            return Err(ProbeError::HttpStatus {
                status: reply.status,
                body: reply.body,
            });
        }

        Ok(body?)
    }

    async fn user_operation(
        &self,
        call: &SoapCall,
        auth_token: &str,
    ) -> Result<UserResponse, ProbeError> {
        let response = self
            .decoded(call, auth_token)
            .await?
            .user_response
            .ok_or(ProbeError::MissingElement("userResponse"))?;

        if !response.success {
            return Err(ProbeError::Rejected {
                message: response.message.unwrap_or_default(),
                error_code: response.error_code,
            });
        }

        Ok(response)
    }

    pub async fn list_users(
        &self,
        auth_token: &str,
        pagination: &Pagination,
    ) -> Result<UserPage, ProbeError> {
        let response = self
            .user_operation(&SoapCall::ListUsers(pagination.clone()), auth_token)
            .await?;

        Ok(UserPage {
            users: response.users,
            page_info: response.page_info,
        })
    }

    pub async fn add_user(&self, auth_token: &str, user: &NewUser) -> Result<UserInfo, ProbeError> {
        self.user_operation(&SoapCall::AddUser(user.clone()), auth_token)
            .await?
            .user
            .ok_or(ProbeError::MissingElement("user"))
    }

    pub async fn update_user(
        &self,
        auth_token: &str,
        user_id: &str,
        changes: &UserChanges,
    ) -> Result<UserInfo, ProbeError> {
        let call = SoapCall::UpdateUser {
            user_id: user_id.to_string(),
            changes: changes.clone(),
        };

        self.user_operation(&call, auth_token)
            .await?
            .user
            .ok_or(ProbeError::MissingElement("user"))
    }

    /// An UPDATE carrying only the new password.
    pub async fn change_password(
        &self,
        auth_token: &str,
        user_id: &str,
        password: &str,
    ) -> Result<UserInfo, ProbeError> {
        self.update_user(auth_token, user_id, &UserChanges::password(password))
            .await
    }

    /// The server deactivates the user rather than removing it.
    pub async fn delete_user(&self, auth_token: &str, user_id: &str) -> Result<(), ProbeError> {
        let call = SoapCall::DeleteUser {
            user_id: user_id.to_string(),
        };

        self.user_operation(&call, auth_token).await?;
        Ok(())
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Authentication, ProbeError> {
        let call = SoapCall::Login {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .decoded(&call, "")
            .await?
            .login_response
            .ok_or(ProbeError::MissingElement("loginResponse"))?;

        let access_token = response
            .access_token
            .filter(|token| !token.trim().is_empty());

        if response.success && access_token.is_none() {
            return Err(ProbeError::MissingAccessToken);
        }

        Ok(Authentication {
            success: response.success,
            message: response.message.unwrap_or_default(),
            access_token,
            refresh_token: response.refresh_token,
            user: response.user_info,
        })
    }

    /// Returns how many tokens the server revoked.
    pub async fn logout(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
        global: bool,
    ) -> Result<u32, ProbeError> {
        let call = SoapCall::Logout {
            refresh_token: refresh_token.map(str::to_string),
            global,
        };

        let response = self
            .decoded(&call, access_token)
            .await?
            .logout_response
            .ok_or(ProbeError::MissingElement("logoutResponse"))?;

        if !response.success {
            return Err(ProbeError::Rejected {
                message: response.message.unwrap_or_default(),
                error_code: None,
            });
        }

        Ok(response.tokens_revoked)
    }
}
