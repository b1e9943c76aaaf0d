use crate::envelope::{Element, soap_envelope};
use crate::models::pagination::Pagination;
use crate::models::user_data::{NewUser, UserChanges};

pub const SOAP_ACTION_USERS: &str = "http://newsplatform.com/soap/users/manageUsers";
pub const SOAP_ACTION_LOGIN: &str = "http://newsplatform.com/soap/auth/login";
pub const SOAP_ACTION_LOGOUT: &str = "http://newsplatform.com/soap/auth/logout";

/// An operation of the news platform SOAP services.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapCall {
    ListUsers(Pagination),
    AddUser(NewUser),
    UpdateUser {
        user_id: String,
        changes: UserChanges,
    },
    DeleteUser {
        user_id: String,
    },
    Login {
        username: String,
        password: String,
    },
    Logout {
        refresh_token: Option<String>,
        global: bool,
    },
}

impl Default for SoapCall {
    fn default() -> Self {
        SoapCall::ListUsers(Pagination::default())
    }
}

impl SoapCall {
    /// Banner printed before the probe sends this call.
    pub fn title(&self) -> &'static str {
        match self {
            SoapCall::ListUsers(_) => "=== TEST REQUÊTE SOAP LISTE UTILISATEURS ===",
            SoapCall::AddUser(_) => "=== TEST REQUÊTE SOAP AJOUT UTILISATEUR ===",
            SoapCall::UpdateUser { .. } => "=== TEST REQUÊTE SOAP MODIFICATION UTILISATEUR ===",
            SoapCall::DeleteUser { .. } => "=== TEST REQUÊTE SOAP SUPPRESSION UTILISATEUR ===",
            SoapCall::Login { .. } => "=== TEST REQUÊTE SOAP AUTHENTIFICATION ===",
            SoapCall::Logout { .. } => "=== TEST REQUÊTE SOAP DÉCONNEXION ===",
        }
    }

    pub fn soap_action(&self) -> &'static str {
        match self {
            SoapCall::Login { .. } => SOAP_ACTION_LOGIN,
            SoapCall::Logout { .. } => SOAP_ACTION_LOGOUT,
            _ => SOAP_ACTION_USERS,
        }
    }

    /// Renders the request body. `auth_token` is the access token for user operations
    /// and logout; login does not use it.
    pub fn envelope(&self, auth_token: &str) -> String {
        let payload = match self {
            SoapCall::ListUsers(pagination) => user_request(
                "LIST",
                auth_token,
                vec![Element::Parent(
                    "pagination",
                    vec![
                        Element::text("page", pagination.page),
                        Element::text("size", pagination.size),
                        Element::text("sortBy", &pagination.sort_by),
                        Element::text("sortDir", pagination.sort_dir),
                    ],
                )],
            ),

            SoapCall::AddUser(user) => user_request(
                "ADD",
                auth_token,
                vec![Element::Parent(
                    "userData",
                    vec![
                        Element::text("username", &user.username),
                        Element::text("email", &user.email),
                        Element::text("password", &user.password),
                        Element::text("firstName", &user.first_name),
                        Element::text("lastName", &user.last_name),
                        Element::text("role", &user.role),
                        Element::text("active", true),
                    ],
                )],
            ),

            SoapCall::UpdateUser { user_id, changes } => user_request(
                "UPDATE",
                auth_token,
                vec![
                    Element::text("userId", user_id),
                    Element::Parent("userData", changed_fields(changes)),
                ],
            ),

            SoapCall::DeleteUser { user_id } => {
                user_request("DELETE", auth_token, vec![Element::text("userId", user_id)])
            }

            SoapCall::Login { username, password } => Element::Parent(
                "loginRequest",
                vec![
                    Element::text("username", username),
                    Element::text("password", password),
                    Element::text("clientIp", "127.0.0.1"),
                    Element::text(
                        "userAgent",
                        concat!("soap-probe/", env!("CARGO_PKG_VERSION")),
                    ),
                ],
            ),

            SoapCall::Logout {
                refresh_token,
                global,
            } => {
                let mut children = vec![Element::text("accessToken", auth_token)];
                if let Some(refresh_token) = refresh_token {
                    children.push(Element::text("refreshToken", refresh_token));
                }
                children.push(Element::text("globalLogout", global));

                Element::Parent("logoutRequest", children)
            }
        };

        soap_envelope(&payload)
    }
}

fn user_request(operation: &'static str, auth_token: &str, mut rest: Vec<Element>) -> Element {
    let mut children = vec![
        Element::text("operation", operation),
        Element::text("authToken", auth_token),
    ];
    children.append(&mut rest);

    Element::Parent("userRequest", children)
}

fn changed_fields(changes: &UserChanges) -> Vec<Element> {
    let mut fields = Vec::new();
    let optional = [
        ("email", &changes.email),
        ("firstName", &changes.first_name),
        ("lastName", &changes.last_name),
        ("role", &changes.role),
    ];

    for (name, value) in optional {
        if let Some(value) = value.as_deref().filter(|value| !value.trim().is_empty()) {
            fields.push(Element::text(name, value));
        }
    }

    fields.push(Element::text("active", changes.active));
    if let Some(password) = changes
        .password
        .as_deref()
        .filter(|password| !password.trim().is_empty())
    {
        fields.push(Element::text("password", password));
    }

    fields
}
