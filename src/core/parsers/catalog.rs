use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{
    data::Translations,
    key::{CatalogKey, PLURAL_SEPARATOR},
    parsers::{mo::parse_mo, php_array::parse_php_array, po::parse_po},
};

/// On-disk translation catalog formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    PhpArray,
    Json,
    Po,
    Mo,
    Csv,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "php" => Some(Self::PhpArray),
            "json" => Some(Self::Json),
            "po" => Some(Self::Po),
            "mo" => Some(Self::Mo),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Read a catalog file of any supported format.
pub fn read_catalog(path: &Path) -> Result<Translations> {
    let Some(format) = CatalogFormat::from_path(path) else {
        bail!("Unsupported catalog format: {}", path.display());
    };
    let bytes = fs::read(path).with_context(|| format!("Failed to read catalog: {:?}", path))?;
    let parsed = match format {
        CatalogFormat::Mo => parse_mo(&bytes),
        text_format => {
            let content = String::from_utf8(bytes)
                .with_context(|| format!("Catalog is not valid UTF-8: {:?}", path))?;
            match text_format {
                CatalogFormat::PhpArray => parse_php_array(&content),
                CatalogFormat::Json => parse_json(&content),
                CatalogFormat::Po => parse_po(&content),
                _ => Ok(parse_csv(&content)),
            }
        }
    };
    parsed.with_context(|| format!("Failed to parse catalog: {:?}", path))
}

/// Parse a flat JSON object of `id -> text`.
///
/// An array of strings is treated as plural forms. Non-string values are skipped.
pub fn parse_json(content: &str) -> Result<Translations> {
    let json: Value = serde_json::from_str(content)?;
    let Value::Object(map) = json else {
        bail!("expected a JSON object at the top level");
    };

    let mut translations = Translations::new();
    for (id, value) in map {
        if id.is_empty() {
            continue;
        }
        let text = match value {
            Value::String(s) => s,
            Value::Array(forms) if forms.iter().all(Value::is_string) => forms
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(&PLURAL_SEPARATOR.to_string()),
            _ => continue,
        };
        translations.insert(CatalogKey::from_raw(id), text);
    }
    Ok(translations)
}

/// Parse a semicolon-separated `id;text` file.
///
/// Fields may be double-quoted (`""` escapes a quote, quoted fields may span
/// lines). Records with fewer than two fields or an empty id are skipped.
pub fn parse_csv(content: &str) -> Translations {
    let mut translations = Translations::new();
    for record in csv_records(content) {
        if let [id, text, ..] = record.as_slice()
            && !id.is_empty()
        {
            translations.insert(CatalogKey::from_raw(id.clone()), text.clone());
        }
    }
    translations
}

fn csv_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' if in_quotes => in_quotes = false,
            '"' if field.is_empty() => in_quotes = true,
            ';' if !in_quotes => record.push(std::mem::take(&mut field)),
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            c => field.push(c),
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}
