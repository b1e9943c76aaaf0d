/// A user to create. Always sent as active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// `VISITEUR`, `EDITEUR` or `ADMINISTRATEUR`.
    pub role: String,
}

/// Changes to an existing user. Blank or missing fields are left untouched by the server,
/// except [active][UserChanges::active] which is always sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub active: bool,
    pub password: Option<String>,
}

impl Default for UserChanges {
    fn default() -> Self {
        Self {
            email: None,
            first_name: None,
            last_name: None,
            role: None,
            active: true,
            password: None,
        }
    }
}

impl UserChanges {
    pub fn password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..Self::default()
        }
    }
}
