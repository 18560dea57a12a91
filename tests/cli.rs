//
//  nosto-sdk
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;

fn nosto() -> Command {
    let mut cmd = Command::cargo_bin("nosto").unwrap();
    cmd.env_remove("NOSTO_ACCOUNT")
        .env_remove("NOSTO_ACTIVE_DOMAIN")
        .env_remove("NOSTO_CONFIG")
        .env_remove("NOSTO_API_BASE_URL")
        .env_remove("NOSTO_OAUTH_BASE_URL")
        .env_remove("NOSTO_WEB_HOOK_BASE_URL");
    cmd
}

#[test]
fn help_lists_commands() {
    nosto()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("marketing-permission"))
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("oauth"));
}

#[test]
fn marketing_permission_requires_state() {
    nosto()
        .args(["marketing-permission", "a@b.com"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_token_fails_with_config_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[accounts.acme.tokens]\nsso = \"s\"\n").unwrap();

    nosto()
        .arg("--config")
        .arg(&config)
        .args(["--account", "acme", "marketing-permission", "a@b.com", "--grant"])
        .env("NOSTO_API_BASE_URL", "http://127.0.0.1:9")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no API token of kind 'email'"));
}

#[test]
fn account_set_token_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    nosto()
        .arg("--config")
        .arg(&config)
        .args(["--account", "acme", "account", "set-token", "products", "p-token"])
        .assert()
        .success();

    nosto()
        .arg("--config")
        .arg(&config)
        .args(["account", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"acme\""))
        .stdout(predicate::str::contains("products"));
}

#[test]
fn oauth_url_uses_configured_client() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[oauth]\nclient_id = \"cid\"\nclient_secret = \"sec\"\nredirect_url = \"https://shop.example/cb\"\n",
    )
    .unwrap();

    nosto()
        .arg("--config")
        .arg(&config)
        .args(["oauth", "url"])
        .env_remove("NOSTO_OAUTH_BASE_URL")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "https://my.nosto.com/oauth?client_id=cid&",
        ));
}

fn config_with_tokens(dir: &tempfile::TempDir, tokens: &str) -> std::path::PathBuf {
    let config = dir.path().join("config.toml");
    std::fs::write(&config, format!("[accounts.acme.tokens]\n{tokens}")).unwrap();
    config
}

#[test]
fn unauthorized_response_exits_with_auth_code() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/customers/set-marketing-permission/a@b.com/true")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type": "unauthorized", "message": "Bad token"}"#)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let config = config_with_tokens(&dir, "email = \"e\"\n");

    nosto()
        .arg("--config")
        .arg(&config)
        .args(["--account", "acme", "marketing-permission", "a@b.com", "--grant"])
        .env("NOSTO_API_BASE_URL", server.url())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Bad token"));
    mock.assert();
}

#[test]
fn unreachable_host_exits_with_transport_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_tokens(&dir, "email = \"e\"\n");

    nosto()
        .arg("--config")
        .arg(&config)
        .args(["--account", "acme", "marketing-permission", "a@b.com", "--revoke"])
        .env("NOSTO_API_BASE_URL", "http://127.0.0.1:9")
        .assert()
        .failure()
        .code(32);
}

#[test]
fn order_with_empty_customer_id_is_unmatched() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/visits/order/unmatched/acme")
        .with_status(200)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let config = config_with_tokens(&dir, "");
    let order = dir.path().join("order.json");
    std::fs::write(
        &order,
        r#"{"order_number": "1002", "created_at": "2024-05-01T12:00:00Z", "purchased_items": []}"#,
    )
    .unwrap();

    nosto()
        .arg("--config")
        .arg(&config)
        .args(["--account", "acme", "order"])
        .arg(&order)
        .args(["--customer-id", ""])
        .env("NOSTO_WEB_HOOK_BASE_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirmed order 1002 (unmatched)"));
    mock.assert();
}
