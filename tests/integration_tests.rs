//! Integration tests covering the full generation pipeline
//!
//! Tests the end-to-end flow: YAML values files (local and remote) →
//! merged JSON Schema bytes → output file.

use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;
use valschema::cli::{Cli, Runner};
use valschema::{Config, Generator, SchemaRoot};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_values(dir: &Path, name: &str, content: &str) -> String {
    let file = dir.join(name);
    std::fs::write(&file, content).unwrap();
    file.to_string_lossy().to_string()
}

// ============================================================================
// Local Inputs
// ============================================================================

#[tokio::test]
async fn test_generate_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_values(
        dir.path(),
        "values.yaml",
        "nameOverride: app\nimage:\n  repository: nginx\n  pullPolicy: IfNotPresent\n",
    );
    let overlay = write_values(
        dir.path(),
        "values-prod.yaml",
        "replicas: 3\nimage:\n  tag: stable\n",
    );

    let config = Config::new(vec![base, overlay])
        .with_indent(2)
        .with_schema_root(SchemaRoot {
            title: Some("Values".to_string()),
            ..SchemaRoot::default()
        })
        .with_additional_properties(false);

    let bytes = Generator::new(config).generate().await.unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let expected = concat!(
        "{\n",
        "  \"$schema\": \"https://json-schema.org/draft/2020-12/schema\",\n",
        "  \"title\": \"Values\",\n",
        "  \"type\": \"object\",\n",
        "  \"properties\": {\n",
        "    \"nameOverride\": {\n",
        "      \"type\": \"string\"\n",
        "    },\n",
        "    \"image\": {\n",
        "      \"type\": \"object\",\n",
        "      \"properties\": {\n",
        "        \"repository\": {\n",
        "          \"type\": \"string\"\n",
        "        },\n",
        "        \"pullPolicy\": {\n",
        "          \"type\": \"string\"\n",
        "        },\n",
        "        \"tag\": {\n",
        "          \"type\": \"string\"\n",
        "        }\n",
        "      },\n",
        "      \"required\": [\n",
        "        \"repository\",\n",
        "        \"pullPolicy\",\n",
        "        \"tag\"\n",
        "      ],\n",
        "      \"additionalProperties\": false\n",
        "    },\n",
        "    \"replicas\": {\n",
        "      \"type\": \"integer\"\n",
        "    }\n",
        "  },\n",
        "  \"required\": [\n",
        "    \"nameOverride\",\n",
        "    \"image\",\n",
        "    \"replicas\"\n",
        "  ],\n",
        "  \"additionalProperties\": false\n",
        "}\n",
    );
    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_generate_draft_7_url() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_values(dir.path(), "values.yaml", "name: app\n");

    let bytes = Generator::new(Config::new(vec![input]).with_draft(7))
        .generate()
        .await
        .unwrap();
    let schema: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        schema["$schema"],
        serde_json::json!("http://json-schema.org/draft-07/schema#")
    );
}

// ============================================================================
// Remote Inputs
// ============================================================================

#[tokio::test]
async fn test_generate_with_remote_input() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/values.yaml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("service:\n  port: 8080\n"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let local = write_values(dir.path(), "values.yaml", "name: app\n");
    let remote = format!("{}/values.yaml", mock_server.uri());

    let bytes = Generator::new(Config::new(vec![local, remote]))
        .generate()
        .await
        .unwrap();
    let schema: Value = serde_json::from_slice(&bytes).unwrap();

    let keys: Vec<_> = schema["properties"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, ["name", "service"]);
    assert_eq!(
        schema["properties"]["service"]["properties"]["port"]["type"],
        serde_json::json!("integer")
    );
}

#[tokio::test]
async fn test_generate_remote_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.yaml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let remote = format!("{}/missing.yaml", mock_server.uri());
    let err = Generator::new(Config::new(vec![remote.clone()]))
        .generate()
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains(&remote));
}

// ============================================================================
// Runner
// ============================================================================

fn cli_for(inputs: Vec<String>, output: &Path) -> Cli {
    Cli {
        input: inputs,
        output: output.to_path_buf(),
        draft: 2020,
        indent: 4,
        title: None,
        description: None,
        id: None,
        root_additional_properties: None,
        additional_properties: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_runner_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_values(dir.path(), "values.yaml", "name: app\n");
    let output = dir.path().join("values.schema.json");

    Runner::new(cli_for(vec![input], &output)).run().await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.ends_with('\n'));

    let schema: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(schema["required"], serde_json::json!(["name"]));
}

#[tokio::test]
async fn test_runner_odd_indent_produces_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_values(dir.path(), "values.yaml", "name: app\n");
    let output = dir.path().join("values.schema.json");

    let mut cli = cli_for(vec![input], &output);
    cli.indent = 3;

    let err = Runner::new(cli).run().await.unwrap_err();
    assert!(err.is_config());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_runner_empty_input_list() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("values.schema.json");

    let err = Runner::new(cli_for(Vec::new(), &output)).run().await.unwrap_err();
    assert!(err.is_config());
    assert!(!output.exists());
}
