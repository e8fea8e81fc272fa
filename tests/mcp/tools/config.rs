use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use transaudit::mcp::{
    TransauditMcpServer,
    types::{AuditParams, GetConfigParams},
};

use crate::{McpTestFixture, TOOL_MODULE_DIR, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TransauditMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["locale"], "en");
    assert_eq!(json_result["config"]["modulesRoot"], "modules_v4");
    assert_eq!(json_result["config"]["modulePrefix"], "myartjaub_");
    assert_eq!(
        json_result["config"]["toolModule"],
        "_myartjaub_translationtool_"
    );
    assert!(json_result["config"]["catalogs"].is_array());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "locale": "fr",
            "firstPartyVendors": ["jon48", "acme"]
        }))
        .unwrap();

    let server = TransauditMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["locale"], "fr");
    assert_eq!(json_result["config"]["firstPartyVendors"], json!(["jon48", "acme"]));
    assert_eq!(json_result["config"]["modulesRoot"], "modules_v4");
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "locale": 42 })).unwrap();

    let server = TransauditMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("Failed to load config"));
}

// ============================================================================
// source_paths tests
// ============================================================================

#[tokio::test]
async fn test_source_paths_lists_modules() {
    let fixture = McpTestFixture::with_tool_view("").unwrap();
    fixture
        .write_file("modules_v4/myartjaub_sosa/resources/views/a.phtml", "")
        .unwrap();
    fixture
        .write_file("modules_v4/other_module/resources/views/b.phtml", "")
        .unwrap();

    let server = TransauditMcpServer::new();
    let params = Parameters(AuditParams {
        project_root_path: fixture.root(),
        locale: None,
    });

    let result = server.source_paths(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let domains: Vec<&str> = json_result["domains"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["domain"].as_str().unwrap())
        .collect();
    assert_eq!(domains, vec!["_myartjaub_sosa_", "_myartjaub_translationtool_"]);

    let tool_dirs = &json_result["domains"][1]["directories"];
    let expected = fixture.root_path().join(TOOL_MODULE_DIR).join("resources");
    assert_eq!(tool_dirs[0], expected.to_string_lossy().to_string());
    assert!(json_result["degraded"].is_string());
}

#[tokio::test]
async fn test_source_paths_without_tool_module() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TransauditMcpServer::new();
    let params = Parameters(AuditParams {
        project_root_path: fixture.root(),
        locale: None,
    });

    let err = server.source_paths(params).await.unwrap_err();
    assert!(
        err.message
            .contains("The attached module could not be found: _myartjaub_translationtool_")
    );
}
