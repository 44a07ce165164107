#![allow(clippy::unwrap_used)]
// Integration tests for `ControllerSession` using wiremock.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portreset_api::{ControllerSession, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ControllerSession) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let session = ControllerSession::new(base_url, Duration::from_secs(5)).unwrap();
    (server, session)
}

fn secret(s: &str) -> secrecy::SecretString {
    s.to_string().into()
}

// ── Login ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("origin", server.uri().as_str()))
        .and(body_json(json!({"username": "admin", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    session.login("admin", &secret("pw")).await.unwrap();
}

#[tokio::test]
async fn test_login_failure_keeps_upstream_body() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"meta": {"msg": "api.err.LoginRequired"}})),
        )
        .mount(&server)
        .await;

    let result = session.login("admin", &secret("wrong")).await;

    match result {
        Err(Error::Status { status, ref body }) => {
            assert_eq!(status.as_u16(), 401);
            assert!(
                body.contains("api.err.LoginRequired"),
                "expected upstream body to survive, got: {body}"
            );
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

// ── Session cookie ──────────────────────────────────────────────────

#[tokio::test]
async fn test_login_cookie_rides_on_later_requests() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "unifises=abc123; Path=/")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .and(header("cookie", "unifises=abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"name": "default"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    session.login("admin", &secret("pw")).await.unwrap();
    let sites = session.list_sites().await.unwrap();
    assert_eq!(sites.len(), 1);
}

// ── Sites ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sites() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"name": "default", "desc": "Default", "_id": "abc"},
                {"name": "remote", "role": "admin"}
            ]
        })))
        .mount(&server)
        .await;

    let sites = session.list_sites().await.unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].name, "default");
    assert_eq!(sites[0].desc.as_deref(), Some("Default"));
    assert_eq!(sites[1].name, "remote");
}

#[tokio::test]
async fn test_list_sites_schema_error() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/self/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = session.list_sites().await;
    assert!(
        matches!(result, Err(Error::Schema { .. })),
        "expected Schema error, got: {result:?}"
    );
}

// ── Clients ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_clients() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/sta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "mac": "aa:bb:cc:dd:ee:ff",
                    "is_wired": true,
                    "sw_mac": "11:22:33:44:55:66",
                    "sw_port": 7,
                    "hostname": "printer"
                },
                {
                    "mac": "de:ad:be:ef:00:01",
                    "is_wired": false,
                    "essid": "corp"
                }
            ]
        })))
        .mount(&server)
        .await;

    let clients = session.list_clients("default").await.unwrap();

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].mac, "aa:bb:cc:dd:ee:ff");
    assert!(clients[0].is_wired);
    assert_eq!(clients[0].sw_mac.as_deref(), Some("11:22:33:44:55:66"));
    assert_eq!(clients[0].sw_port, Some(7));
    assert!(!clients[1].is_wired);
    assert_eq!(clients[1].sw_mac, None);
    assert_eq!(clients[1].sw_port, None);
}

#[tokio::test]
async fn test_list_clients_upstream_error() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/sta"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = session.list_clients("default").await;
    match result {
        Err(Error::Status { status, ref body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

// ── Power-cycle command ─────────────────────────────────────────────

#[tokio::test]
async fn test_power_cycle_port_body() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/cmd/devmgr"))
        .and(header("origin", server.uri().as_str()))
        .and(body_json(json!({
            "mac": "11:22:33:44:55:66",
            "port_idx": 7,
            "cmd": "power-cycle"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    session
        .power_cycle_port("default", "11:22:33:44:55:66", 7)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_transport_error_reaching_controller() {
    // Unroutable port: nothing listens here.
    let base_url = Url::parse("http://127.0.0.1:1").unwrap();
    let session = ControllerSession::new(base_url, Duration::from_secs(1)).unwrap();

    let result = session.list_sites().await;
    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}
