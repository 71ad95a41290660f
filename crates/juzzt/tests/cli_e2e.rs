#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::thread;
use tempfile::TempDir;
use tiny_http::{Response, Server};

fn juzzt_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("juzzt"));
    cmd.arg("--data")
        .arg(data.path())
        .env_remove("JUZZT_LOG")
        .env_remove("JUZZT_PASSWORD");
    cmd
}

#[test]
fn test_empty_cart() {
    let data = TempDir::new().unwrap();
    juzzt_cmd(&data)
        .args(["cart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty"));
}

#[test]
fn test_cart_from_existing_file() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("cart"),
        r#"[{"id":1,"title":"Kind of Blue","artist":"Miles Davis","price":30.0,"quantity":2}]"#,
    )
    .unwrap();

    juzzt_cmd(&data)
        .args(["cart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind of Blue"))
        .stdout(predicate::str::contains("2 items · total $60.00"));
}

#[test]
fn test_corrupted_cart_file_shows_empty_cart() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("cart"), "[{\"id\": 1,").unwrap();

    juzzt_cmd(&data)
        .args(["cart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty"));
}

#[test]
fn test_cart_clear_persists() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("cart"),
        r#"[{"id":1,"title":"Kind of Blue","price":30.0,"quantity":1}]"#,
    )
    .unwrap();

    juzzt_cmd(&data)
        .args(["cart", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart has been cleared"));

    assert_eq!(fs::read_to_string(data.path().join("cart")).unwrap(), "[]");
}

#[test]
fn test_cart_qty_and_remove() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("cart"),
        r#"[{"id":4,"title":"Mingus Ah Um","price":20.0,"quantity":1}]"#,
    )
    .unwrap();

    juzzt_cmd(&data)
        .args(["cart", "qty", "4", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity of \"Mingus Ah Um\" set to 3"))
        .stdout(predicate::str::contains("3 items · total $60.00"));

    juzzt_cmd(&data)
        .args(["cart", "qty", "4", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity must be at least 1"));

    juzzt_cmd(&data)
        .args(["cart", "remove", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"Mingus Ah Um\" from cart"));
}

#[test]
fn test_cart_json_output() {
    let data = TempDir::new().unwrap();
    let output = juzzt_cmd(&data)
        .args(["cart", "clear", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["notifications"][0]["kind"], "cleared");
    assert_eq!(value["cart"], serde_json::json!([]));
}

#[test]
fn test_logout_without_session() {
    let data = TempDir::new().unwrap();
    juzzt_cmd(&data)
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_profile_requires_login() {
    let data = TempDir::new().unwrap();
    juzzt_cmd(&data)
        .args(["profile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Not logged in"));
}

#[test]
fn test_unreachable_server_reports_network_error() {
    let data = TempDir::new().unwrap();
    // Nothing listens on the discard port
    fs::write(
        data.path().join("juzzt.toml"),
        "api_url = \"http://127.0.0.1:9\"\ntimeout_secs = 2\n",
    )
    .unwrap();
    juzzt_cmd(&data)
        .args(["records"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Network error"));
}

#[test]
fn test_config_set_then_get() {
    let data = TempDir::new().unwrap();
    juzzt_cmd(&data)
        .args(["config", "set", "page_size", "6"])
        .assert()
        .success();

    assert!(data.path().join("juzzt.toml").exists());

    juzzt_cmd(&data)
        .args(["config", "get", "page_size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6"));
}

/// Serves a fixed catalog of `count` records on an ephemeral port.
fn serve_catalog(count: u32) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let body = serde_json::to_string(
        &(1..=count)
            .map(|i| serde_json::json!({"id": i, "title": format!("Record {}", i), "price": 10.0}))
            .collect::<Vec<_>>(),
    )
    .unwrap();
    thread::spawn(move || {
        for request in server.incoming_requests() {
            let _ = request.respond(Response::from_string(body.clone()));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

#[test]
fn test_config_page_size_applies_to_records() {
    let data = TempDir::new().unwrap();
    let api_url = serve_catalog(10);
    fs::write(
        data.path().join("juzzt.toml"),
        format!("api_url = \"{}\"\n", api_url),
    )
    .unwrap();

    juzzt_cmd(&data)
        .args(["config", "set", "page_size", "4"])
        .assert()
        .success();

    juzzt_cmd(&data)
        .args(["records"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3 · 10 records"))
        .stdout(predicate::str::contains("More on page 2"));

    juzzt_cmd(&data)
        .args(["records", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 9"))
        .stdout(predicate::str::contains("Record 10"))
        .stdout(predicate::str::contains("Record 8").not());
}

#[test]
fn test_config_without_action_shows_merged_settings() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("juzzt.toml"), "page_size = 5\n").unwrap();

    juzzt_cmd(&data)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size = 5"))
        .stdout(predicate::str::contains("sale_threshold = 20.0"));
}

#[test]
fn test_invalid_sort_is_rejected() {
    let data = TempDir::new().unwrap();
    juzzt_cmd(&data)
        .args(["records", "--sort", "cheapest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort"));
}
