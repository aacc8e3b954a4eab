use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_config(temp: &PathBuf) -> PathBuf {
    let path = temp.join("config.yaml");
    let contents = "email: admin@komora.me\ntoken: test-token\npreferences: {}\n";
    fs::write(&path, contents).expect("failed to write config");
    path
}

const MEMBERS_BODY: &str = r#"[
    {
        "id": 1,
        "name": "Ana",
        "surname": "Perić",
        "speciality": "Orthodontics",
        "email": "ana@example.me",
        "phone": "123456789",
        "city_id": 2,
        "city": { "id": 2, "name": "Podgorica" },
        "licenses": [
            { "id": 10, "license_number": "L-10", "type": "permanent" }
        ]
    },
    {
        "id": 2,
        "name": "Marko",
        "surname": "Vuković",
        "speciality": "Surgery",
        "email": "marko@example.me",
        "phone": "987654321",
        "city_id": 3,
        "city": { "id": 3, "name": "Nikšić" },
        "licenses": []
    }
]"#;

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .env_remove("KOMORA_CONFIG")
        .env_remove("KOMORA_FORMAT")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("admin@komora.me"));
    assert!(stdout.contains("logged in"));

    Ok(())
}

#[test]
fn version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("komora version"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn member_list_renders_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let _members = server
        .mock("GET", "/member")
        .with_status(200)
        .with_body(MEMBERS_BODY)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("list")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Perić"));
    assert!(stdout.contains("Vuković"));
    assert!(stdout.contains("Podgorica"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn member_list_search_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let _members = server
        .mock("GET", "/member")
        .with_status(200)
        .with_body(MEMBERS_BODY)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("list")
        .arg("--search")
        .arg("PERIĆ")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Perić"));
    assert!(!stdout.contains("Vuković"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn member_list_search_without_match_prints_empty_notice()
-> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let _members = server
        .mock("GET", "/member")
        .with_status(200)
        .with_body(MEMBERS_BODY)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("list")
        .arg("--search")
        .arg("zzz-no-such-member")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("No results found."));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn member_list_json_includes_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let _members = server
        .mock("GET", "/member")
        .with_status(200)
        .with_body(MEMBERS_BODY)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("list")
        .arg("--format")
        .arg("json")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("\"data\""));
    assert!(stdout.contains("\"meta\""));
    assert!(stdout.contains("\"timestamp\""));
    assert!(stdout.contains("Perić"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn congress_paid_hits_payment_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let payment = server
        .mock("PUT", "/payment/7/1")
        .with_status(200)
        .with_body("{}")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("congress")
        .arg("paid")
        .arg("7")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .success();

    payment.assert();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("paid"));

    Ok(())
}

/// `finance update` must resolve the current entry through the
/// single-entry endpoint, never by scanning the full list.
#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn finance_update_resolves_entry_without_listing() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let entry_body = r#"{
        "id": 9,
        "member_id": 7,
        "date": "2026-01-15",
        "duguje": 100.0,
        "potrazuje": 0.0,
        "description": "Annual fee"
    }"#;

    let list = server
        .mock("GET", "/finances")
        .expect(0)
        .with_status(200)
        .with_body("[]")
        .create();
    let get = server
        .mock("GET", "/finances/9")
        .with_status(200)
        .with_body(entry_body)
        .create();
    let put = server
        .mock("PUT", "/finances/9")
        .with_status(200)
        .with_body(entry_body)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("finance")
        .arg("update")
        .arg("9")
        .arg("--potrazuje")
        .arg("50")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated ledger entry 9"));

    list.assert();
    get.assert();
    put.assert();

    Ok(())
}

/// Canceling the delete confirmation must issue no DELETE call.
#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn canceled_delete_issues_no_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let delete = server
        .mock("DELETE", "/member/1")
        .expect(0)
        .with_status(200)
        .with_body("{}")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    // No --yes and no terminal to answer the prompt on, so the
    // command cancels.
    Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("delete")
        .arg("1")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .success()
        .stdout(predicate::str::contains("Canceled, nothing deleted"));

    delete.assert();

    Ok(())
}

// ============================================================================
// Error Scenario Tests
// ============================================================================

/// A missing config file should point the user at `komora login`.
#[test]
fn missing_config_shows_login_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let nonexistent_config = temp.path().join("does-not-exist.yaml");

    Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("list")
        .arg("--config")
        .arg(&nonexistent_config)
        .env_remove("KOMORA_CONFIG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("komora login"));

    Ok(())
}

/// A 401 response must drop the stored token so the next command re-prompts.
#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn unauthorized_clears_stored_token() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let _members = server
        .mock("GET", "/member")
        .with_status(401)
        .with_body(r#"{"error": "Unauthenticated"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("list")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.contains("komora login"),
        "Expected error to mention 'komora login', got: {}",
        stderr
    );

    let saved = fs::read_to_string(&config_path)?;
    assert!(
        !saved.contains("test-token"),
        "Expected stored token to be cleared, got: {}",
        saved
    );

    Ok(())
}

/// Validation failures must be raised before any request leaves the client.
#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn invalid_email_fails_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_host = server.url();

    let create = server
        .mock("POST", "/member")
        .expect(0)
        .with_status(200)
        .with_body("{}")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("create")
        .arg("--name")
        .arg("Ana")
        .arg("--surname")
        .arg("Perić")
        .arg("--sex")
        .arg("F")
        .arg("--date-of-birth")
        .arg("1990-05-01")
        .arg("--speciality")
        .arg("Orthodontics")
        .arg("--city")
        .arg("2")
        .arg("--email")
        .arg("not-an-email")
        .arg("--phone")
        .arg("123456789")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", &api_host)
        .assert()
        .failure();

    create.assert();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.contains("email"),
        "Expected error to mention the email field, got: {}",
        stderr
    );

    Ok(())
}

/// Network connection errors should surface a clear message.
#[test]
fn connection_error_shows_network_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf());

    // Point to a port that nothing is listening on
    let assert = Command::new(assert_cmd::cargo::cargo_bin!("komora"))
        .arg("--no-cache")
        .arg("member")
        .arg("list")
        .arg("--config")
        .arg(&config_path)
        .env("KOMORA_API_HOST", "http://127.0.0.1:59999")
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.to_lowercase().contains("network")
            || stderr.to_lowercase().contains("connect")
            || stderr.to_lowercase().contains("error"),
        "Expected error to mention network/connection issue, got: {}",
        stderr
    );

    Ok(())
}
