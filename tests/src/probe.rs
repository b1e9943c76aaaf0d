use crate::support::{start, unreachable_url};
use mock_server::MockSoap;
use mock_server::replies::ACCESS_TOKEN;
use soap_probe::config::EXAMPLE_AUTH_TOKEN;
use soap_probe::soap_call::SOAP_ACTION_USERS;
use soap_probe::{Probe, ProbeConfig, SoapCall};
use std::time::Duration;
use tokio::net::TcpListener;

const EXPECTED_LIST_ENVELOPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Header/>
    <soap:Body>
        <userRequest>
            <operation>LIST</operation>
            <authToken>{AUTH_TOKEN}</authToken>
            <pagination>
                <page>0</page>
                <size>100</size>
                <sortBy>username</sortBy>
                <sortDir>ASC</sortDir>
            </pagination>
        </userRequest>
    </soap:Body>
</soap:Envelope>"#;

async fn run_probe(probe: &Probe, call: &SoapCall) -> String {
    let mut console = Vec::new();
    probe.run(call, &mut console).await.unwrap();
    String::from_utf8(console).unwrap()
}

#[tokio::test]
async fn prints_status_and_body_of_a_200() {
    let mock = MockSoap::fixed(200, "<soap:Envelope>OK</soap:Envelope>");
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url.as_str(), EXAMPLE_AUTH_TOKEN));

    let console = run_probe(&probe, &SoapCall::default()).await;
    let envelope = EXPECTED_LIST_ENVELOPE.replace("{AUTH_TOKEN}", EXAMPLE_AUTH_TOKEN);

    assert!(console.starts_with(&format!(
        "=== TEST REQUÊTE SOAP LISTE UTILISATEURS ===\nURL: {url}\nRequest:\n{envelope}\n\nStatus Code: 200\nHeaders: "
    )));
    assert!(console.ends_with("Response:\n<soap:Envelope>OK</soap:Envelope>\n"));
    assert!(!console.contains("Erreur: "));
}

#[tokio::test]
async fn response_text_is_printed_verbatim() {
    let body = "  first line\r\n\tsecond line\n\n<x>  spaced  </x>";
    let mock = MockSoap::fixed(200, body);
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url, "token"));

    let console = run_probe(&probe, &SoapCall::default()).await;
    assert!(console.ends_with(&format!("Response:\n{body}\n")));
}

#[tokio::test]
async fn headers_line_lists_response_headers() {
    let mock = MockSoap::fixed(200, "ok");
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url, "token"));

    let console = run_probe(&probe, &SoapCall::default()).await;
    let headers = console
        .lines()
        .find(|line| line.starts_with("Headers: "))
        .unwrap();

    assert!(headers.contains(r#""content-type": "text/xml;charset=utf-8""#));
}

#[tokio::test]
async fn sends_the_template_with_the_two_headers() {
    let mock = MockSoap::fixed(200, "ok");
    let url = start(&mock).await;
    let token = "eyJhbGciOiJIUzUxMiJ9.e30.c2lnbmF0dXJl";
    let probe = Probe::new(ProbeConfig::new(url, token));

    run_probe(&probe, &SoapCall::default()).await;
    let requests = mock.requests();

    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body,
        EXPECTED_LIST_ENVELOPE.replace("{AUTH_TOKEN}", token)
    );
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("text/xml; charset=utf-8")
    );
    assert_eq!(requests[0].soap_action.as_deref(), Some(SOAP_ACTION_USERS));
}

#[tokio::test]
async fn token_content_does_not_touch_other_fields() {
    let mock = MockSoap::fixed(200, "ok");
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url, "a<b&c"));

    run_probe(&probe, &SoapCall::default()).await;
    let body = &mock.requests()[0].body;

    assert!(body.contains("<authToken>a&lt;b&amp;c</authToken>"));
    assert_eq!(
        body.replace("a&lt;b&amp;c", "{AUTH_TOKEN}"),
        EXPECTED_LIST_ENVELOPE
    );
}

#[tokio::test]
async fn unreachable_server_prints_an_error_line() {
    let url = unreachable_url().await;
    let probe = Probe::new(ProbeConfig::new(url, "token"));

    let console = run_probe(&probe, &SoapCall::default()).await;
    let last_line = console.lines().last().unwrap();

    assert!(last_line.starts_with("Erreur: "));
    assert!(last_line.to_lowercase().contains("connect"));
    assert!(!console.contains("Status Code:"));
    assert!(!console.contains("Headers:"));
    assert!(!console.contains("Response:"));
}

#[tokio::test]
async fn silent_server_times_out_into_an_error_line() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/soap", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        std::future::pending::<()>().await;
    });

    let config = ProbeConfig::new(url, "token").with_timeout(Duration::from_millis(200));
    let console = run_probe(&Probe::new(config), &SoapCall::default()).await;
    let last_line = console.lines().last().unwrap();

    assert!(last_line.starts_with("Erreur: "));
    assert!(last_line.contains("timed out"));
    assert!(!console.contains("Status Code:"));
}

#[tokio::test]
async fn server_error_is_not_a_probe_error() {
    let mock = MockSoap::fixed(500, "");
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url, "token"));

    let console = run_probe(&probe, &SoapCall::default()).await;

    assert!(console.contains("\nStatus Code: 500\n"));
    assert!(console.ends_with("Response:\n\n"));
    assert!(!console.contains("Erreur: "));
}

#[tokio::test]
async fn decode_summarises_the_user_list() {
    let mock = MockSoap::newsplatform();
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url, ACCESS_TOKEN)).decode(true);

    let console = run_probe(&probe, &SoapCall::default()).await;

    assert!(console.contains("\nStatus Code: 200\n"));
    assert!(console.contains("Décodé: success=true"));
    assert!(console.contains("admin <admin@newsplatform.local> ADMINISTRATEUR [Actif]"));
    assert!(console.contains("editeur <editeur@newsplatform.local> EDITEUR [Inactif]"));
}

#[tokio::test]
async fn decode_failure_keeps_the_raw_output() {
    let mock = MockSoap::fixed(500, "");
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url, "token")).decode(true);

    let console = run_probe(&probe, &SoapCall::default()).await;

    assert!(console.contains("\nStatus Code: 500\n"));
    assert!(console.contains("Décodage impossible: "));
    assert!(!console.contains("Erreur: "));
}

#[tokio::test]
async fn login_probe_uses_the_auth_action() {
    let mock = MockSoap::newsplatform();
    let url = start(&mock).await;
    let probe = Probe::new(ProbeConfig::new(url, "unused"));
    let call = SoapCall::Login {
        username: "admin".to_string(),
        password: "Admin123!".to_string(),
    };

    let console = run_probe(&probe, &call).await;
    let request = &mock.requests()[0];

    assert!(console.starts_with("=== TEST REQUÊTE SOAP AUTHENTIFICATION ===\n"));
    assert!(console.contains("<ns2:accessToken>mock-access-token</ns2:accessToken>"));
    assert_eq!(
        request.soap_action.as_deref(),
        Some("http://newsplatform.com/soap/auth/login")
    );
    assert!(request.body.contains("<username>admin</username>"));
}
