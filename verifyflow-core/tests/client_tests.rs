// verifyflow-core/tests/client_tests.rs
use mockito::{Matcher, Server};

use verifyflow_core::{AuditClient, HttpAuditClient, Severity, TransportError, Upload};

const REPORT_JSON: &str = r#"{
    "profile": "vkr_ru",
    "format": "docx",
    "pages": 3,
    "summary": {"critical": 1, "warning": 0, "info": 0, "total": 1},
    "issues": [
        {"severity": "critical", "type": "formal", "rule": "StudentFIO.Missing",
         "message": "ФИО студента не найдено", "location": "title_page", "evidence": "—"}
    ]
}"#;

fn upload() -> Upload {
    Upload::new("thesis.docx", b"PK\x03\x04 fake docx".to_vec(), &["docx".to_string()]).unwrap()
}

#[test]
fn check_posts_multipart_file_and_parses_report() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/check")
        .match_query(Matcher::UrlEncoded("profile".into(), "vkr_ru".into()))
        .match_body(Matcher::Regex(r#"name="file"; filename="thesis.docx""#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REPORT_JSON)
        .create();

    let client = HttpAuditClient::new(&server.url()).unwrap();
    let report = client.check(&upload(), "vkr_ru").unwrap();

    mock.assert();
    assert_eq!(report.pages, Some(3));
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].severity, Severity::Critical);
    assert_eq!(report.issues[0].kind.as_deref(), Some("formal"));
}

#[test]
fn non_success_body_is_kept_verbatim() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/check")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body("Поддерживаются только .docx и .pdf")
        .create();

    let client = HttpAuditClient::new(&server.url()).unwrap();
    let err = client.check(&upload(), "vkr_ru").unwrap_err();

    mock.assert();
    match &err {
        TransportError::Status { status, body } => {
            assert_eq!(*status, 400);
            assert_eq!(body, "Поддерживаются только .docx и .pdf");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.display_message(), "Поддерживаются только .docx и .pdf");
}

#[test]
fn unparseable_body_is_a_decode_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/check")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>proxy error</html>")
        .create();

    let client = HttpAuditClient::new(&server.url()).unwrap();
    let err = client.check(&upload(), "vkr_ru").unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[test]
fn health_reads_ok_flag() {
    let mut server = Server::new();
    let mock = server.mock("GET", "/api/health").with_status(200).with_body(r#"{"ok": true}"#).create();

    let client = HttpAuditClient::new(&format!("{}/", server.url())).unwrap();
    assert!(client.health().unwrap());
    mock.assert();
}

#[test]
fn unreachable_service_is_a_request_error() {
    // Port 9 (discard) is closed on test machines.
    let client = HttpAuditClient::new("http://127.0.0.1:9").unwrap();
    let err = client.health().unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
}
