//! Integration tests for the `sunco` CLI binary.
//!
//! Argument parsing, help output, completions, and config errors run without a
//! server; the integration commands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `sunco` binary with env isolation.
///
/// Clears all `SUNCO_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn sunco_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("sunco");
    cmd.env("HOME", "/tmp/sunco-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/sunco-cli-test-nonexistent")
        .env_remove("SUNCO_CONFIG")
        .env_remove("SUNCO_PROFILE")
        .env_remove("SUNCO_BASE_URL")
        .env_remove("SUNCO_APP_ID")
        .env_remove("SUNCO_KEY_ID")
        .env_remove("SUNCO_SECRET")
        .env_remove("SUNCO_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

/// `sunco_cmd` pointed at a mock server with full credentials.
fn sunco_against(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = sunco_cmd();
    cmd.env("SUNCO_BASE_URL", server.uri())
        .env("SUNCO_APP_ID", "app_1")
        .env("SUNCO_KEY_ID", "key_1")
        .env("SUNCO_SECRET", "secret_1");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = sunco_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    sunco_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("integrations")
            .and(predicate::str::contains("config"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    sunco_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sunco"));
}

#[test]
fn test_completions_bash() {
    sunco_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_create_requires_name_and_target() {
    sunco_cmd()
        .args(["integrations", "create", "--name", "Bot"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--target"));
}

// ── Configuration ───────────────────────────────────────────────────

#[test]
fn test_missing_credentials_exit_code() {
    sunco_cmd()
        .args(["--app-id", "app_1", "integrations", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No API credentials"));
}

#[test]
fn test_missing_app_id_is_usage_error() {
    sunco_cmd()
        .args(["integrations", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("app_id"));
}

#[test]
fn test_unknown_profile() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[profiles.staging]\napp_id = \"a\"\n").unwrap();

    sunco_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--profile", "prod", "integrations", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Profile 'prod' not found"));
}

#[test]
fn test_config_show_redacts_secret() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        r#"
default_profile = "prod"

[profiles.prod]
base_url = "https://api.eu-1.smooch.io/"
app_id = "app_prod"
key_id = "key_prod"
secret = "do-not-print"
"#,
    )
    .unwrap();

    sunco_cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("app_prod")
                .and(predicate::str::contains("https://api.eu-1.smooch.io/"))
                .and(predicate::str::contains("do-not-print").not()),
        );
}

#[test]
fn test_config_path_honours_flag() {
    sunco_cmd()
        .args(["--config", "/tmp/elsewhere/sunco.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/elsewhere/sunco.toml"));
}

// ── Integration commands ────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/apps/app_1/integrations"))
        .and(query_param("filter[types]", "custom"))
        .and(basic_auth("key_1", "secret_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "integrations": [
                { "id": "i1", "status": "active", "displayName": "First", "webhooks": [] },
                { "id": "i2", "status": "active", "displayName": "Second", "webhooks": [] }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = sunco_against(&server)
        .args(["-o", "json-compact", "integrations", "list"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed[0]["displayName"], "First");
    assert_eq!(listed[1]["id"], "i2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_sends_webhook_flags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/apps/app_1/integrations"))
        .and(basic_auth("key_1", "secret_1"))
        .and(body_json(json!({
            "type": "custom",
            "displayName": "My Bot",
            "webhooks": [{
                "target": "https://hook.example.com",
                "triggers": ["conversation:message", "conversation:read"],
                "includeFullUser": true,
                "includeFullSource": false
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "integration": { "id": "abc", "status": "active", "displayName": "My Bot" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    sunco_against(&server)
        .args([
            "-o",
            "plain",
            "integrations",
            "create",
            "--name",
            "My Bot",
            "--target",
            "https://hook.example.com",
            "--trigger",
            "conversation:message",
            "--trigger",
            "conversation:read",
            "--include-full-user",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("abc\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_requires_yes_when_not_interactive() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    sunco_against(&server)
        .args(["integrations", "delete", "i1"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes_ignores_server_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/apps/app_1/integrations/i1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    sunco_against(&server)
        .args(["--yes", "integrations", "delete", "i1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Delete sent"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    sunco_against(&server)
        .args(["integrations", "get", "i1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unexpected response"));
}

#[test]
fn test_connection_refused_exit_code() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    sunco_cmd()
        .args([
            "--base-url",
            &format!("http://127.0.0.1:{port}/"),
            "--app-id",
            "a",
            "--key-id",
            "k",
            "--secret",
            "s",
            "integrations",
            "list",
        ])
        .assert()
        .code(7);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dot_segment_id_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    sunco_against(&server)
        .args(["--yes", "integrations", "delete", "../other"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for id"));
}
