use protocol_vendor::{StatusPolicy, VendorConfig, VendorError, run};
use protocol_vendor_http::HttpFetcher;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROTOCOL_DIR: &str = "/gopls/v0.11.0/gopls/internal/lsp/protocol";

fn config_for(server: &MockServer, dir: &std::path::Path) -> VendorConfig {
    VendorConfig {
        remote_base_url: format!("{}/", server.uri()),
        target_dir: dir.to_owned(),
        ..VendorConfig::default()
    }
}

async fn serve(server: &MockServer, file: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{PROTOCOL_DIR}/{file}")))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn vendors_protocol_files_over_http() {
    let server = MockServer::start().await;
    serve(&server, "tsdocument_changes.go", ResponseTemplate::new(200).set_body_string("X")).await;
    serve(&server, "tsprotocol.go", ResponseTemplate::new(200).set_body_string("Y")).await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("generated_protocol.go"), "OLD").unwrap();

    let fetcher = HttpFetcher::new().unwrap();
    let report = run(&fetcher, &config_for(&server, dir.path())).await.unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("generated_protocol_document_changes.go")).unwrap(),
        "X"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("generated_protocol.go")).unwrap(),
        "Y"
    );
}

#[tokio::test]
async fn not_found_stops_run_under_strict_policy() {
    let server = MockServer::start().await;
    serve(&server, "tsdocument_changes.go", ResponseTemplate::new(404)).await;
    Mock::given(method("GET"))
        .and(path(format!("{PROTOCOL_DIR}/tsprotocol.go")))
        .respond_with(ResponseTemplate::new(200).set_body_string("Y"))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetcher::new().unwrap();
    let result = run(&fetcher, &config_for(&server, dir.path())).await;

    match result {
        Err(VendorError::Transport { message, .. }) => assert_eq!(message, "HTTP 404"),
        other => panic!("expected Transport, got {other:?}"),
    }
    assert!(!dir.path().join("generated_protocol_document_changes.go").exists());
    assert!(!dir.path().join("generated_protocol.go").exists());
}

#[tokio::test]
async fn permissive_policy_writes_error_bodies() {
    let server = MockServer::start().await;
    serve(
        &server,
        "tsdocument_changes.go",
        ResponseTemplate::new(404).set_body_string("404: Not Found"),
    )
    .await;
    serve(&server, "tsprotocol.go", ResponseTemplate::new(200).set_body_string("Y")).await;

    let dir = tempfile::tempdir().unwrap();
    let config = VendorConfig {
        status_policy: StatusPolicy::Permissive,
        ..config_for(&server, dir.path())
    };
    let fetcher = HttpFetcher::new().unwrap();
    let report = run(&fetcher, &config).await.unwrap();

    assert_eq!(report.written[0].status, 404);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("generated_protocol_document_changes.go")).unwrap(),
        "404: Not Found"
    );
}
