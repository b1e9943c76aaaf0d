use axum::http::StatusCode;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "Admin123!";
pub const ACCESS_TOKEN: &str = "mock-access-token";
pub const REFRESH_TOKEN: &str = "mock-refresh-token";

const SOAP_ACTION_USERS: &str = "http://newsplatform.com/soap/users/manageUsers";
const SOAP_ACTION_LOGIN: &str = "http://newsplatform.com/soap/auth/login";
const SOAP_ACTION_LOGOUT: &str = "http://newsplatform.com/soap/auth/logout";

/// Reply of the imitated news platform to one request.
pub fn newsplatform(soap_action: Option<&str>, body: &str) -> (StatusCode, String) {
    match soap_action {
        Some(SOAP_ACTION_USERS) => (StatusCode::OK, manage_users(body)),
        Some(SOAP_ACTION_LOGIN) => (StatusCode::OK, login(body)),
        Some(SOAP_ACTION_LOGOUT) => (StatusCode::OK, logout(body)),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            fault("SOAP-ENV:Server", "No endpoint mapping found"),
        ),
    }
}

/// Text of the first `<name>` element, prefix-free names only.
fn element_text<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");

    let start = body.find(&open)? + open.len();
    let end = start + body[start..].find(&close)?;
    Some(&body[start..end])
}

fn envelope(payload: &str) -> String {
    format!(
        "<SOAP-ENV:Envelope xmlns:SOAP-ENV=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <SOAP-ENV:Header/><SOAP-ENV:Body>{payload}</SOAP-ENV:Body></SOAP-ENV:Envelope>"
    )
}

pub fn fault(code: &str, message: &str) -> String {
    envelope(&format!(
        "<SOAP-ENV:Fault><faultcode>{code}</faultcode>\
         <faultstring>{message}</faultstring></SOAP-ENV:Fault>"
    ))
}

fn user_response(content: &str) -> String {
    envelope(&format!(
        "<ns2:userResponse xmlns:ns2=\"http://newsplatform.com/soap/users\">{content}</ns2:userResponse>"
    ))
}

fn failure(message: &str, error_code: &str) -> String {
    user_response(&format!(
        "<ns2:success>false</ns2:success><ns2:message>{message}</ns2:message>\
         <ns2:errorCode>{error_code}</ns2:errorCode>"
    ))
}

#[allow(clippy::too_many_arguments)]
fn user(
    element: &str,
    id: &str,
    username: &str,
    email: &str,
    first: &str,
    last: &str,
    role: &str,
    active: bool,
) -> String {
    format!(
        "<ns2:{element}><ns2:id>{id}</ns2:id><ns2:username>{username}</ns2:username>\
         <ns2:email>{email}</ns2:email><ns2:firstName>{first}</ns2:firstName>\
         <ns2:lastName>{last}</ns2:lastName><ns2:role>{role}</ns2:role>\
         <ns2:active>{active}</ns2:active><ns2:createdAt>2025-07-01T09:00:00</ns2:createdAt>\
         </ns2:{element}>"
    )
}

fn stats(operation: &str, affected_records: usize) -> String {
    format!(
        "<ns2:stats><ns2:timestamp>2025-07-13T18:30:15</ns2:timestamp>\
         <ns2:operation>{operation}</ns2:operation><ns2:executionTimeMs>3</ns2:executionTimeMs>\
         <ns2:affectedRecords>{affected_records}</ns2:affectedRecords></ns2:stats>"
    )
}

fn manage_users(body: &str) -> String {
    if element_text(body, "authToken") != Some(ACCESS_TOKEN) {
        return failure("Jeton d'authentification invalide", "AUTH_INVALID");
    }

    let operation = element_text(body, "operation").unwrap_or_default();
    match operation {
        "LIST" => {
            let page = element_text(body, "page").unwrap_or("0");
            let size = element_text(body, "size").unwrap_or("10");
            let admin = user(
                "users",
                "1",
                "admin",
                "admin@newsplatform.local",
                "Admin",
                "Principal",
                "ADMINISTRATEUR",
                true,
            );
            let editor = user(
                "users",
                "2",
                "editeur",
                "editeur@newsplatform.local",
                "Eddie",
                "Teur",
                "EDITEUR",
                false,
            );

            user_response(&format!(
                "<ns2:success>true</ns2:success><ns2:message>2 utilisateurs trouvés</ns2:message>{}{}\
                 <ns2:pageInfo><ns2:currentPage>{page}</ns2:currentPage><ns2:totalPages>1</ns2:totalPages>\
                 <ns2:totalElements>2</ns2:totalElements><ns2:pageSize>{size}</ns2:pageSize>\
                 <ns2:hasNext>false</ns2:hasNext><ns2:hasPrevious>false</ns2:hasPrevious></ns2:pageInfo>{}",
                admin,
                editor,
                stats("LIST", 2)
            ))
        }

        "ADD" => {
            let text = |name| element_text(body, name).unwrap_or_default();
            let created = user(
                "user",
                "3",
                text("username"),
                text("email"),
                text("firstName"),
                text("lastName"),
                text("role"),
                true,
            );

            user_response(&format!(
                "<ns2:success>true</ns2:success><ns2:message>Utilisateur créé avec succès</ns2:message>{}{}",
                created,
                stats("ADD", 1)
            ))
        }

        "UPDATE" => {
            let Some(user_id) = element_text(body, "userId") else {
                return failure("ID utilisateur requis", "MISSING_ID");
            };

            let email = element_text(body, "email").unwrap_or("editeur@newsplatform.local");
            let role = element_text(body, "role").unwrap_or("EDITEUR");
            let active = element_text(body, "active") != Some("false");

            user_response(&format!(
                "<ns2:success>true</ns2:success><ns2:message>Utilisateur modifié avec succès</ns2:message>{}{}",
                user("user", user_id, "editeur", email, "Eddie", "Teur", role, active),
                stats("UPDATE", 1)
            ))
        }

        "DELETE" => match element_text(body, "userId") {
            Some(user_id) if !user_id.trim().is_empty() => user_response(&format!(
                "<ns2:success>true</ns2:success><ns2:message>Utilisateur désactivé avec succès</ns2:message>{}",
                stats("DELETE", 1)
            )),
            _ => failure("ID utilisateur invalide", "INVALID_ID"),
        },

        other => failure(&format!("Opération non supportée: {other}"), "INVALID_OPERATION"),
    }
}

fn login(body: &str) -> String {
    let authenticated = element_text(body, "username") == Some(ADMIN_USERNAME)
        && element_text(body, "password") == Some(ADMIN_PASSWORD);

    let content = if authenticated {
        format!(
            "<ns2:success>true</ns2:success><ns2:message>Authentification réussie</ns2:message>\
             <ns2:accessToken>{ACCESS_TOKEN}</ns2:accessToken><ns2:refreshToken>{REFRESH_TOKEN}</ns2:refreshToken>\
             <ns2:accessTokenExpiresAt>2025-07-14T18:30:15</ns2:accessTokenExpiresAt>\
             <ns2:userInfo><ns2:username>{ADMIN_USERNAME}</ns2:username><ns2:email>admin@newsplatform.local</ns2:email>\
             <ns2:role>ADMINISTRATEUR</ns2:role><ns2:roleDescription>CRUD Utilisateurs + gestion jetons</ns2:roleDescription>\
             </ns2:userInfo>"
        )
    } else {
        "<ns2:success>false</ns2:success><ns2:message>Identifiants invalides</ns2:message>".to_string()
    };

    envelope(&format!(
        "<ns2:loginResponse xmlns:ns2=\"http://newsplatform.com/soap/auth\">{content}</ns2:loginResponse>"
    ))
}

fn logout(body: &str) -> String {
    let content = if element_text(body, "accessToken") == Some(ACCESS_TOKEN) {
        let tokens_revoked = if element_text(body, "globalLogout") == Some("true") {
            2
        } else {
            1
        };
        format!(
            "<ns2:success>true</ns2:success><ns2:message>Déconnexion réussie</ns2:message>\
             <ns2:tokensRevoked>{tokens_revoked}</ns2:tokensRevoked>\
             <ns2:logoutTimestamp>2025-07-13T18:45:00</ns2:logoutTimestamp>"
        )
    } else {
        "<ns2:success>false</ns2:success><ns2:message>Jeton invalide</ns2:message>\
         <ns2:tokensRevoked>0</ns2:tokensRevoked>"
            .to_string()
    };

    envelope(&format!(
        "<ns2:logoutResponse xmlns:ns2=\"http://newsplatform.com/soap/auth\">{content}</ns2:logoutResponse>"
    ))
}
