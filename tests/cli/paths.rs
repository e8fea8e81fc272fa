use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, TOOL_MODULE_DIR, run};

#[test]
fn test_paths_lists_domains_and_catalogs() -> Result<()> {
    let test = CliTest::with_tool_view("<?= I18N::translate('Hello') ?>")?;
    test.write_catalog("en", "")?;

    let output = run(&mut test.paths_command())?;

    assert_eq!(output.code, Some(0));
    let resources = test.root().join(TOOL_MODULE_DIR).join("resources");
    assert!(output.stdout.starts_with("_myartjaub_translationtool_\n"));
    assert!(
        output
            .stdout
            .contains(&format!("    {}\n", resources.display()))
    );
    assert!(output.stdout.contains("Catalogs (en)"));
    assert!(output.stdout.contains("✓ ./resources/lang/en/messages.po"));
    assert!(output.stderr.contains("No composer.json file could be loaded"));

    Ok(())
}

#[test]
fn test_paths_marks_missing_catalogs() -> Result<()> {
    let test = CliTest::with_tool_view("")?;

    let output = run(test.paths_command().args(["--locale", "de", "lib"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\nlib\n"));
    assert!(output.stdout.contains("  ! ./lib\n"));
    assert!(output.stdout.contains("Catalogs (de)"));
    assert!(output.stdout.contains("✘ ./resources/lang/de/messages.po"));

    Ok(())
}

#[test]
fn test_paths_requires_tool_module() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.paths_command())?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .contains("The attached module could not be found")
    );

    Ok(())
}
