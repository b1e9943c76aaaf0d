use crate::support::start;
use mock_server::MockSoap;
use mock_server::replies::{ACCESS_TOKEN, fault};
use soap_probe::models::pagination::Pagination;
use soap_probe::models::user_data::{NewUser, UserChanges};
use soap_probe::{ProbeError, SoapClient};

async fn client(mock: &MockSoap) -> SoapClient {
    let url = start(mock).await;
    SoapClient::new(url, None).unwrap()
}

#[tokio::test]
async fn list_users() {
    let mock = MockSoap::newsplatform();
    let client = client(&mock).await;

    let page = client
        .list_users(ACCESS_TOKEN, &Pagination::default())
        .await
        .unwrap();

    assert_eq!(page.users.len(), 2);
    assert_eq!(page.users[0].username.as_deref(), Some("admin"));
    assert_eq!(page.users[0].full_name(), "Admin Principal");
    assert_eq!(page.users[1].active, Some(false));

    let page_info = page.page_info.unwrap();
    assert_eq!(page_info.total_elements, Some(2));
    assert_eq!(page_info.page_size, Some(100));
    assert_eq!(page_info.has_next, Some(false));
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let mock = MockSoap::newsplatform();
    let client = client(&mock).await;

    let result = client
        .list_users("expired-token", &Pagination::default())
        .await;

    match result {
        Err(ProbeError::Rejected { error_code, .. }) => {
            assert_eq!(error_code.as_deref(), Some("AUTH_INVALID"))
        }
        other => panic!("Expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn add_user() {
    let mock = MockSoap::newsplatform();
    let client = client(&mock).await;

    let user = client
        .add_user(
            ACCESS_TOKEN,
            &NewUser {
                username: "jdoe".to_string(),
                email: "jdoe@example.com".to_string(),
                password: "Secret123!".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                role: "VISITEUR".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(user.id.as_deref(), Some("3"));
    assert_eq!(user.username.as_deref(), Some("jdoe"));
    assert_eq!(user.role.as_deref(), Some("VISITEUR"));
    assert_eq!(user.active, Some(true));

    let body = &mock.requests()[0].body;
    assert!(body.contains("<operation>ADD</operation>"));
    assert!(body.contains("<active>true</active>"));
}

#[tokio::test]
async fn update_user() {
    let mock = MockSoap::newsplatform();
    let client = client(&mock).await;

    let user = client
        .update_user(
            ACCESS_TOKEN,
            "42",
            &UserChanges {
                email: Some("new@newsplatform.local".to_string()),
                active: false,
                ..UserChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(user.id.as_deref(), Some("42"));
    assert_eq!(user.email.as_deref(), Some("new@newsplatform.local"));
    assert_eq!(user.active, Some(false));
}

#[tokio::test]
async fn change_password_sends_only_the_password() {
    let mock = MockSoap::newsplatform();
    let client = client(&mock).await;

    client
        .change_password(ACCESS_TOKEN, "42", "N3wPassword!")
        .await
        .unwrap();

    let body = &mock.requests()[0].body;
    assert!(body.contains("<password>N3wPassword!</password>"));
    assert!(body.contains("<active>true</active>"));
    assert!(!body.contains("<email>"));
}

#[tokio::test]
async fn delete_user() {
    let mock = MockSoap::newsplatform();
    let client = client(&mock).await;

    client.delete_user(ACCESS_TOKEN, "42").await.unwrap();

    let result = client.delete_user(ACCESS_TOKEN, " ").await;
    assert!(matches!(
        result,
        Err(ProbeError::Rejected { error_code: Some(code), .. }) if code == "INVALID_ID"
    ));
}

#[tokio::test]
async fn http_error_status() {
    let mock = MockSoap::fixed(500, "");
    let client = client(&mock).await;

    let result = client.list_users(ACCESS_TOKEN, &Pagination::default()).await;
    assert!(matches!(result, Err(ProbeError::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn soap_fault() {
    let mock = MockSoap::fixed(500, fault("SOAP-ENV:Client", "Invalid request"));
    let client = client(&mock).await;

    let result = client.delete_user(ACCESS_TOKEN, "42").await;
    match result {
        Err(ProbeError::Fault { code, message }) => {
            assert_eq!(code, "SOAP-ENV:Client");
            assert_eq!(message, "Invalid request");
        }
        other => panic!("Expected a fault, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body() {
    let mock = MockSoap::fixed(200, "definitely not xml");
    let client = client(&mock).await;

    let result = client.list_users(ACCESS_TOKEN, &Pagination::default()).await;
    assert!(matches!(result, Err(ProbeError::Decode(_))));
}
