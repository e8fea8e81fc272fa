use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, TOOL_MODULE_DIR, run};

const VIEW: &str = "<h1><?= I18N::translate('Hello') ?></h1>\n<p><?= I18N::translate('Bye') ?></p>\n";

#[test]
fn test_missing_translation_text_report() -> Result<()> {
    let test = CliTest::with_tool_view(VIEW)?;
    test.write_catalog("en", "msgid \"Hello\"\nmsgstr \"Hello\"\n")?;

    let output = run(&mut test.status_command())?;

    assert_eq!(output.code, Some(1));
    insta::assert_snapshot!(output.stdout, @r#"
    Translations status: English (en)

    error: "Bye"  missing-translation
      --> modules_v4/myartjaub_translationtool/resources/views/page.phtml:2
       = domain: _myartjaub_translationtool_

    ✘ 1 problems (1 error, 0 warnings)
    Translations: 1 loaded, 2 found in source code, 0 in modules
    "#);
    assert!(
        output
            .stderr
            .contains("No composer.json file could be loaded, some translations may be missing.")
    );
    assert!(
        output
            .stderr
            .contains("This is expected when not running from a development instance.")
    );

    Ok(())
}

#[test]
fn test_fully_translated_project() -> Result<()> {
    let test = CliTest::with_tool_view(VIEW)?;
    test.write_catalog(
        "en",
        "msgid \"Hello\"\nmsgstr \"Hello\"\n\nmsgid \"Bye\"\nmsgstr \"Bye\"\n",
    )?;

    let output = run(&mut test.status_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Checked 1 source file - no issues found")
    );

    Ok(())
}

#[test]
fn test_unused_module_translation_is_a_warning() -> Result<()> {
    let test = CliTest::with_tool_view("<?= I18N::translate('Hello') ?>")?;
    test.write_catalog("en", "msgid \"Hello\"\nmsgstr \"Hello\"\n")?;
    test.write_file(
        &format!("{}/resources/lang/en/messages.php", TOOL_MODULE_DIR),
        "<?php\nreturn [\n    'Hello' => 'Hello',\n    'Obsolete' => 'Obsolete',\n];\n",
    )?;

    let output = run(&mut test.status_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Obsolete\"  unused-translation"));
    assert!(output.stdout.contains("--> module _myartjaub_translationtool_"));
    assert!(output.stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_compare_loaded_reports_unloaded_module_strings() -> Result<()> {
    let test = CliTest::with_tool_view("<?= I18N::translate('Hello') ?>")?;
    test.write_catalog("en", "msgid \"Obsolete\"\nmsgstr \"Obsolete\"\n")?;
    test.write_file(
        &format!("{}/resources/lang/en/messages.php", TOOL_MODULE_DIR),
        "<?php\nreturn [\n    'Hello' => 'Hello',\n    'Obsolete' => 'Obsolete',\n];\n",
    )?;

    let output = run(test
        .status_command()
        .args(["--format", "json", "--compare-loaded"]))?;

    let json: Value = serde_json::from_str(&output.stdout)?;
    let unused = json["nonUsedTranslations"].as_array().unwrap();
    assert_eq!(unused.len(), 1);
    assert_eq!(unused[0]["messageId"], "Hello");

    Ok(())
}

#[test]
fn test_broken_host_catalog_is_skipped() -> Result<()> {
    let test = CliTest::with_tool_view(VIEW)?;
    test.write_file(
        ".transauditrc.json",
        r#"{ "catalogs": ["lang/good-{locale}.po", "lang/extra-{locale}.po"] }"#,
    )?;
    test.write_file("lang/good-fr.po", "msgid \"Hello\"\nmsgstr \"Bonjour\"\n")?;
    test.write_file("lang/extra-fr.po", "msgid \"Bye\"\nmsgstr \"Au revoir\n")?;

    let output = run(test
        .status_command()
        .args(["--format", "json", "--locale", "fr"]))?;

    assert_eq!(output.code, Some(1), "stderr: {}", output.stderr);
    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["translationsStats"]["nbTranslations"], 1);
    assert_eq!(json["missingTranslations"][0]["translation"]["original"], "Bye");
    assert_eq!(json["unreadableCatalogs"][0]["path"], "lang/extra-fr.po");
    assert!(output.stderr.contains("warning: skipping catalog lang/extra-fr.po"));

    Ok(())
}

#[test]
fn test_missing_tool_module_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        "modules_v4/myartjaub_sosa/resources/views/a.phtml",
        "<?= I18N::translate('Hello') ?>",
    )?;

    let output = run(&mut test.status_command())?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert_eq!(
        output.stderr,
        "Error: The attached module could not be found: _myartjaub_translationtool_\n"
    );

    Ok(())
}

#[test]
fn test_tsv_format() -> Result<()> {
    let test = CliTest::with_tool_view(
        "<?php\necho I18N::translateContext('menu', 'File');\necho I18N::plural('%s row', '%s rows', $n);\n",
    )?;

    let output = run(test.status_command().args(["--format", "tsv"]))?;

    assert_eq!(output.code, Some(1));
    let path = format!("{}/resources/views/page.phtml", TOOL_MODULE_DIR);
    assert_eq!(
        output.stdout,
        format!(
            "kind\tdomain\tcontext\toriginal\tplural\treferences\n\
             missing\t_myartjaub_translationtool_\tmenu\tFile\t\t{path}:2\n\
             missing\t_myartjaub_translationtool_\t\t%s row\t%s rows\t{path}:3\n\
             stats\tnbTranslations=0\tnbTranslationsFound=2\tnbMajTranslations=0\t\t\n"
        )
    );

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_tool_view(VIEW)?;
    test.write_catalog("fr", "msgid \"Hello\"\nmsgstr \"Bonjour\"\n")?;

    let output = run(test
        .status_command()
        .args(["--format", "json", "--locale", "fr"]))?;

    assert_eq!(output.code, Some(1));
    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["title"], "Translations status");
    assert_eq!(json["language"], "français");
    assert_eq!(json["languageTag"], "fr");
    assert_eq!(json["translationsStats"]["nbTranslations"], 1);
    assert_eq!(json["translationsStats"]["nbTranslationsFound"], 2);
    assert_eq!(json["translationsStats"]["nbMajTranslations"], 0);
    assert_eq!(
        json["missingTranslations"][0]["headers"]["domain"],
        "_myartjaub_translationtool_"
    );
    assert_eq!(json["missingTranslations"][0]["translation"]["original"], "Bye");
    assert_eq!(json["nonUsedTranslations"], Value::Array(vec![]));
    assert!(json["degraded"].is_string());
    assert_eq!(json["skippedFiles"], 0);

    Ok(())
}

#[test]
fn test_composer_packages_are_scanned() -> Result<()> {
    let test = CliTest::with_tool_view("<?= I18N::translate('Hello') ?>")?;
    test.write_file("composer.json", "{}")?;
    test.write_file(
        "vendor/composer/installed.json",
        r#"{
            "packages": [
                {
                    "name": "jon48/webtrees-lib",
                    "install-path": "../jon48/webtrees-lib",
                    "autoload": { "psr-4": { "MyArtJaub\\Webtrees\\": "src/Webtrees/" } }
                },
                {
                    "name": "acme/other",
                    "install-path": "../acme/other",
                    "autoload": { "psr-4": { "Acme\\": "src/" } }
                }
            ]
        }"#,
    )?;
    test.write_file(
        "vendor/jon48/webtrees-lib/src/Webtrees/Sosa.php",
        "<?php\n// I18N: Number of generations\nreturn I18N::translate('Generations');\n",
    )?;
    test.write_file(
        "vendor/acme/other/src/Other.php",
        "<?php I18N::translate('Third party');",
    )?;

    let output = run(test.status_command().args(["--format", "json"]))?;

    let json: Value = serde_json::from_str(&output.stdout)?;
    assert!(json.get("degraded").is_none());
    let missing = json["missingTranslations"].as_array().unwrap();
    let originals: Vec<_> = missing
        .iter()
        .map(|m| m["translation"]["original"].as_str().unwrap())
        .collect();
    assert_eq!(originals, vec!["Hello", "Generations"]);
    assert_eq!(missing[1]["headers"]["domain"], "jon48/webtrees-lib");
    assert_eq!(
        missing[1]["translation"]["references"][0]["filePath"],
        "vendor/jon48/webtrees-lib/src/Webtrees/Sosa.php"
    );
    assert_eq!(
        missing[1]["translation"]["comments"][0],
        "I18N: Number of generations"
    );
    assert_eq!(json["sourceCodePaths"].as_array().unwrap().len(), 2);

    Ok(())
}

#[test]
fn test_extra_paths_and_skipped_files() -> Result<()> {
    let test = CliTest::with_tool_view("")?;
    test.write_file("app/Page.php", "<?php I18N::translate('Page');")?;
    test.write_file("app/Broken.php", "<?php I18N::translate('Broken);")?;

    let output = run(test.status_command().args(["--format", "json", "app"]))?;

    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["missingTranslations"][0]["headers"]["domain"], "app");
    assert_eq!(json["skippedFiles"], 1);
    assert!(output.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_verbose_shows_skipped_file_details() -> Result<()> {
    let test = CliTest::with_tool_view("<?php I18N::translate('Broken);")?;

    let output = run(test.status_command().arg("-v"))?;

    assert!(output.stderr.contains("page.phtml"));
    assert!(output.stderr.contains("syntax error"));
    assert!(!output.stderr.contains("could not be parsed (use"));

    Ok(())
}

#[test]
fn test_config_file_is_honored() -> Result<()> {
    let test = CliTest::with_file(
        "plugins/maj_tool/assets/page.php",
        "<?php I18N::translate('Hello');",
    )?;
    test.write_file(
        ".transauditrc.json",
        r#"{
            "modulesRoot": "plugins",
            "modulePrefix": "maj_",
            "resourcesDir": "assets",
            "toolModule": "_maj_tool_",
            "catalogs": ["lang/{locale}.json"]
        }"#,
    )?;
    test.write_file("lang/en.json", r#"{ "Hello": "Hello" }"#)?;

    let output = run(&mut test.status_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Translations: 1 loaded, 1 found"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".transauditrc.json", r#"{ "ignores": ["[bad"] }"#)?;

    let output = run(&mut test.status_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: "));
    assert!(output.stderr.contains("ignores"));

    Ok(())
}
