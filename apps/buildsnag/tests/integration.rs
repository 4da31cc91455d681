//! Integration tests for the buildsnag CLI

use httpmock::prelude::*;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const RELEASE_ARGS: [&str; 6] = [
    "--api-key",
    "122",
    "--app-version",
    "132135467",
    "--release-stage",
    "production",
];

/// Config file pointing the CLI at `endpoint`
fn config_for(endpoint: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[network]\nendpoint = \"{endpoint}\"\ntimeout = 5").unwrap();
    file
}

fn buildsnag(config: &NamedTempFile, args: &[&str]) -> Output {
    buildsnag_with_env(config, &[], args)
}

fn buildsnag_with_env(config: &NamedTempFile, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_buildsnag"));
    for var in [
        "BUGSNAG_API_KEY",
        "BUGSNAG_APP_VERSION",
        "BUGSNAG_RELEASE_STAGE",
        "BUGSNAG_BUILDER_NAME",
        "BUILDSNAG_ENDPOINT",
        "BUILDSNAG_OUTPUT",
        "BUILDSNAG_COLOR",
        "BUILDSNAG_TIMEOUT",
        "BUILDSNAG_CONNECT_TIMEOUT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.envs(envs.iter().copied());
    cmd.arg("--config")
        .arg(config.path())
        .args(args)
        .output()
        .expect("Failed to execute buildsnag")
}

#[test]
fn test_cli_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_buildsnag"))
        .arg("--version")
        .output()
        .expect("Failed to execute buildsnag");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("buildsnag"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_buildsnag"))
        .arg("--help")
        .output()
        .expect("Failed to execute buildsnag");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Report application builds to Bugsnag"));
    assert!(stdout.contains("--api-key"));
    assert!(stdout.contains("--check"));
}

#[test]
fn test_reports_build() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "apiKey": "122",
                "appVersion": "132135467",
                "releaseStage": "production",
                "builderName": "Jenkins"
            }));
        then.status(200);
    });
    let config = config_for(&server.url("/"));

    let mut args = RELEASE_ARGS.to_vec();
    args.extend(["--builder-name", "Jenkins", "--json"]);
    let output = buildsnag(&config, &args);

    mock.assert();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["changed"], true);
    assert_eq!(json["outcome"], "reported");
    assert_eq!(json["status"], 200);
}

#[test]
fn test_api_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(500).body("oops");
    });
    let config = config_for(&server.url("/"));

    let mut args = RELEASE_ARGS.to_vec();
    args.push("--json");
    let output = buildsnag(&config, &args);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"failed": true, "msg": "unable to call API"})
    );
}

#[test]
fn test_check_mode_makes_no_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });
    let config = config_for(&server.url("/"));

    let mut args = RELEASE_ARGS.to_vec();
    args.push("--check");
    let output = buildsnag(&config, &args);

    mock.assert_hits(0);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("changed:"));
    assert!(stdout.contains("check mode"));
}

#[test]
fn test_missing_api_key_is_usage_error() {
    let config = config_for("http://127.0.0.1:9/");
    let output = buildsnag(
        &config,
        &["--app-version", "1.0", "--release-stage", "production"],
    );

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required parameter: api_key"));
}

#[test]
fn test_lone_revision_is_usage_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });
    let config = config_for(&server.url("/"));

    let mut args = RELEASE_ARGS.to_vec();
    args.extend(["--source-control-revision", "123qwe213"]);
    let output = buildsnag(&config, &args);

    mock.assert_hits(0);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("source_control_repository"));
}

#[test]
fn test_api_key_never_printed() {
    let config = config_for("http://127.0.0.1:9/");
    let output = buildsnag(
        &config,
        &[
            "--api-key",
            "do-not-leak-me",
            "--app-version",
            "1.0",
            "--release-stage",
            "production",
            "--check",
        ],
    );

    assert!(output.status.success());
    let all = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!all.contains("do-not-leak-me"));
}

#[test]
fn test_env_endpoint_overrides_bad_file_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200);
    });
    let config = config_for("not a url");
    let endpoint = server.url("/");

    let output = buildsnag_with_env(
        &config,
        &[("BUILDSNAG_ENDPOINT", endpoint.as_str())],
        &RELEASE_ARGS,
    );

    mock.assert();
    assert!(output.status.success());
}

#[test]
fn test_json_output_from_env_keeps_stderr_clean() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(500);
    });
    let config = config_for(&server.url("/"));

    let output = buildsnag_with_env(&config, &[("BUILDSNAG_OUTPUT", "json")], &RELEASE_ARGS);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"failed": true, "msg": "unable to call API"})
    );
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}
