//! Reader for PHP translation files of the form `<?php return [ 'id' => 'text', ... ];`.

use anyhow::{Context, Result, bail};
use tree_sitter::Node;

use crate::core::{
    data::Translations,
    key::CatalogKey,
    parsers::php::{PhpSource, code_children},
};

/// Parse the array returned by a PHP translation file.
///
/// Both `[...]` and `array(...)` literals are accepted. Keys and values must be
/// constant strings (concatenation of literals is allowed); other elements are
/// skipped.
pub fn parse_php_array(source: &str) -> Result<Translations> {
    let php = PhpSource::parse(source)?;

    let statement = code_children(php.root())
        .into_iter()
        .find(|node| node.kind() == "return_statement")
        .context("no return statement found")?;
    let array = match code_children(statement).as_slice() {
        [value] if value.kind() == "array_creation_expression" => *value,
        _ => bail!("the returned value is not an array literal"),
    };

    let mut translations = Translations::new();
    for element in code_children(array) {
        if let Some((id, text)) = key_value(&php, element)
            && !id.is_empty()
        {
            translations.insert(CatalogKey::from_raw(id), text);
        }
    }
    Ok(translations)
}

/// `'id' => 'text'`, when both sides are constant strings.
fn key_value(php: &PhpSource, element: Node<'_>) -> Option<(String, String)> {
    if element.kind() != "array_element_initializer" {
        return None;
    }
    match code_children(element).as_slice() {
        [key, value] => Some((php.constant_string(*key)?, php.constant_string(*value)?)),
        _ => None,
    }
}
