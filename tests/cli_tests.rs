use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn crmql_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crmql"));
    cmd.current_dir(dir.path()).env_remove("CRMQL_BACKEND_URL");
    cmd
}

fn start_backend(runtime: &tokio::runtime::Runtime) -> MockServer {
    runtime.block_on(MockServer::start())
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crmql"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Customer"))
        .stdout(predicate::str::contains("type Company"))
        .stdout(predicate::str::contains("editCustomer"));
}

#[test]
fn test_schema_ignores_backend_settings() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".crmql.toml"),
        "[backend]\nbase_url = \"not a url\"\n",
    )
    .unwrap();

    crmql_cmd(&temp_dir)
        .args(["--backend-url", "ftp://x", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type RootQueryType"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .args(["--config", "missing.toml", "query", "{ customers { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_invalid_backend_url_fails() {
    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .args(["--backend-url", "ftp://nowhere", "query", "{ customers { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend URL"));
}

#[test]
fn test_config_file_selects_backend() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let backend = start_backend(&runtime);
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/companies/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "id": "1", "name": "Acme" }])),
            )
            .expect(1)
            .mount(&backend),
    );

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".crmql.toml"),
        format!("[backend]\nbase_url = \"{}\"\n", backend.uri()),
    )
    .unwrap();

    crmql_cmd(&temp_dir)
        .args(["query", "{ companies { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}

// =============================================================================
// Query and Mutate
// =============================================================================

#[test]
fn test_query_with_variables() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let backend = start_backend(&runtime);
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/customers/2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": "2", "name": "Ada", "age": 36 })),
            )
            .expect(1)
            .mount(&backend),
    );

    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .args(["--backend-url", &backend.uri()])
        .args([
            "query",
            "query ($id: String!) { customer(id: $id) { name age } }",
            "--variables",
            r#"{ "id": "2" }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ada\""))
        .stdout(predicate::str::contains("\"age\": 36"));
}

#[test]
fn test_mutate_wraps_body() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let backend = start_backend(&runtime);
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/customers"))
            .and(body_json(json!({
                "name": "Harry White",
                "email": "harry@gmail.com",
                "age": 34
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "5",
                "name": "Harry White",
                "email": "harry@gmail.com",
                "age": 34
            })))
            .expect(1)
            .mount(&backend),
    );

    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .env("CRMQL_BACKEND_URL", backend.uri())
        .args([
            "mutate",
            r#"addCustomer(name: "Harry White", email: "harry@gmail.com", age: 34) { id }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"5\""));
}

#[test]
fn test_backend_error_is_reported_in_response() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let backend = start_backend(&runtime);
    runtime.block_on(
        Mock::given(method("DELETE"))
            .and(path("/customers/4"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&backend),
    );

    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .args(["--backend-url", &backend.uri()])
        .args(["mutate", r#"deleteCustomer(id: "4") { id }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleteCustomer\": null"))
        .stdout(predicate::str::contains("404"));
}

#[test]
fn test_invalid_variables_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    crmql_cmd(&temp_dir)
        .args(["query", "{ customers { id } }", "--variables", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --variables JSON"));
}
