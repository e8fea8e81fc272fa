use rmcp::handler::server::wrapper::Parameters;
use transaudit::mcp::{
    TransauditMcpServer,
    types::{AuditParams, PaginatedAuditParams},
};

use crate::{
    McpTestFixture, TOOL_MODULE_DIR, assert_pagination, extract_tool_result_json,
    fixture_with_missing,
};

fn paginated(
    fixture: &McpTestFixture,
    offset: Option<u32>,
    limit: Option<u32>,
) -> PaginatedAuditParams {
    PaginatedAuditParams {
        project_root_path: fixture.root(),
        locale: None,
        limit,
        offset,
    }
}

// ============================================================================
// translation_overview tests
// ============================================================================

#[tokio::test]
async fn test_overview_counts() {
    let fixture = McpTestFixture::with_tool_view(
        "<?= I18N::translate('Hello') ?>\n<?= I18N::translate('Bye') ?>\n",
    )
    .unwrap();
    fixture
        .write_catalog("fr", "msgid \"Hello\"\nmsgstr \"Bonjour\"\n")
        .unwrap();
    fixture
        .write_file(
            &format!("{}/resources/lang/fr/messages.php", TOOL_MODULE_DIR),
            "<?php return ['Hello' => 'Bonjour', 'Gone' => 'Parti'];",
        )
        .unwrap();

    let server = TransauditMcpServer::new();
    let params = Parameters(AuditParams {
        project_root_path: fixture.root(),
        locale: Some("fr".to_string()),
    });

    let result = server.translation_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["title"], "Translations status");
    assert_eq!(json_result["language"], "français");
    assert_eq!(json_result["languageTag"], "fr");
    assert_eq!(json_result["stats"]["nbTranslations"], 1);
    assert_eq!(json_result["stats"]["nbTranslationsFound"], 2);
    assert_eq!(json_result["stats"]["nbMajTranslations"], 2);
    assert_eq!(json_result["missingCount"], 1);
    assert_eq!(json_result["unusedCount"], 1);
    assert_eq!(json_result["filesScanned"], 1);
    assert_eq!(json_result["skippedFiles"], 0);
    assert!(json_result.get("unreadableCatalogs").is_none());
}

#[tokio::test]
async fn test_overview_lists_unreadable_catalog() {
    let fixture = McpTestFixture::with_tool_view("<?= I18N::translate('Hello') ?>\n").unwrap();
    fixture
        .write_catalog("fr", "msgid \"Hello\"\nmsgstr \"Bonjour\n")
        .unwrap();

    let server = TransauditMcpServer::new();
    let params = Parameters(AuditParams {
        project_root_path: fixture.root(),
        locale: Some("fr".to_string()),
    });

    let result = server.translation_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["stats"]["nbTranslations"], 0);
    assert_eq!(json_result["missingCount"], 1);
    assert_eq!(
        json_result["unreadableCatalogs"][0]["path"],
        "resources/lang/fr/messages.po"
    );
}

#[tokio::test]
async fn test_overview_without_tool_module() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TransauditMcpServer::new();
    let params = Parameters(AuditParams {
        project_root_path: fixture.root(),
        locale: None,
    });

    let err = server.translation_overview(params).await.unwrap_err();
    assert!(err.message.contains("Audit failed"));
}

// ============================================================================
// missing_translations tests
// ============================================================================

#[tokio::test]
async fn test_missing_translations_items() {
    let fixture = McpTestFixture::with_tool_view(
        "<?php\n// I18N: Menu entry\necho I18N::translateContext('menu', 'File');\n\
         echo I18N::plural('%s row', '%s rows', $n);\n",
    )
    .unwrap();

    let server = TransauditMcpServer::new();
    let result = server
        .missing_translations(Parameters(paginated(&fixture, None, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_pagination(&json_result, 0, 50, false);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["domain"], "_myartjaub_translationtool_");
    assert_eq!(items[0]["original"], "File");
    assert_eq!(items[0]["context"], "menu");
    assert_eq!(items[0]["comments"][0], "I18N: Menu entry");
    assert_eq!(
        items[0]["references"][0],
        format!("{}/resources/views/page.phtml:3", TOOL_MODULE_DIR)
    );
    assert_eq!(items[1]["original"], "%s row");
    assert_eq!(items[1]["plural"], "%s rows");
    assert!(items[1].get("context").is_none());
}

#[tokio::test]
async fn test_missing_translations_pagination() {
    let fixture = fixture_with_missing(5).unwrap();
    let server = TransauditMcpServer::new();

    let result = server
        .missing_translations(Parameters(paginated(&fixture, Some(1), Some(2))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 5);
    assert_pagination(&json_result, 1, 2, true);
    let originals: Vec<&str> = json_result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["original"].as_str().unwrap())
        .collect();
    assert_eq!(originals, vec!["Message 1", "Message 2"]);

    let result = server
        .missing_translations(Parameters(paginated(&fixture, Some(4), Some(2))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_pagination(&json_result, 4, 2, false);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_translations_limit_is_capped() {
    let fixture = fixture_with_missing(3).unwrap();
    let server = TransauditMcpServer::new();

    let result = server
        .missing_translations(Parameters(paginated(&fixture, None, Some(1000))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 3);
}

// ============================================================================
// unused_translations tests
// ============================================================================

#[tokio::test]
async fn test_unused_translations() {
    let fixture = McpTestFixture::with_tool_view("<?= I18N::translate('Hello') ?>").unwrap();
    fixture
        .write_file(
            &format!("{}/resources/lang/en/messages.php", TOOL_MODULE_DIR),
            "<?php return [\n    'Hello' => 'Hello',\n    'menu' . \"\\x04\" . 'File' => 'File',\n];",
        )
        .unwrap();

    let server = TransauditMcpServer::new();
    let result = server
        .unused_translations(Parameters(paginated(&fixture, None, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["moduleName"], "_myartjaub_translationtool_");
    assert_eq!(item["messageId"], "menu\u{4}File");
    assert_eq!(item["original"], "File");
    assert_eq!(item["context"], "menu");
}
