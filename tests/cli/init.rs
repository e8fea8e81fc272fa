use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["locale"], "en");
    assert_eq!(parsed["modulesRoot"], "modules_v4");
    assert_eq!(parsed["toolModule"], "_myartjaub_translationtool_");
    assert_eq!(parsed["firstPartyVendors"][0], "jon48");
    assert_eq!(
        parsed["catalogs"][0],
        "resources/lang/{locale}/messages.po"
    );

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Created .transauditrc.json\n");
    assert!(test.root().join(".transauditrc.json").exists());

    let content = test.read_file(".transauditrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".transauditrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "error: .transauditrc.json already exists\n");
    assert_eq!(test.read_file(".transauditrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_tool_view("<?= I18N::translate('Hello') ?>")?;
    test.command().arg("init").output()?;
    test.write_catalog("en", "msgid \"Hello\"\nmsgstr \"Hello\"\n")?;

    let output = run(&mut test.status_command())?;

    assert_eq!(
        output.code,
        Some(0),
        "Status should work with initialized config. stderr: {}",
        output.stderr
    );

    Ok(())
}
