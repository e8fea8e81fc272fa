//! Reader for gettext `.po` files.

use anyhow::{Result, bail};

use crate::core::{
    data::Translations,
    key::{CatalogKey, PLURAL_SEPARATOR},
};

#[derive(Debug, Default)]
struct PoEntry {
    context: Option<String>,
    id: Option<String>,
    plural: Option<String>,
    strs: Vec<String>,
}

impl PoEntry {
    fn is_started(&self) -> bool {
        self.context.is_some() || self.id.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Context,
    Id,
    Plural,
    Str(usize),
}

/// Parse a `.po` file into translations keyed with [`CatalogKey::new`].
///
/// The header entry, obsolete (`#~`) entries and entries whose `msgstr` is
/// empty are skipped. Plural forms are joined with the plural separator.
pub fn parse_po(source: &str) -> Result<Translations> {
    let mut translations = Translations::new();
    let mut entry = PoEntry::default();
    let mut field: Option<Field> = None;

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            finish_entry(&mut translations, std::mem::take(&mut entry));
            field = None;
            continue;
        }
        if line.starts_with('#') {
            if entry.is_started() {
                finish_entry(&mut translations, std::mem::take(&mut entry));
            }
            field = None;
            continue;
        }
        if line.starts_with('"') {
            let Some(current) = field else {
                bail!("line {}: string continuation without a keyword", line_number);
            };
            let value = unquote(line, line_number)?;
            field_mut(&mut entry, current).push_str(&value);
            continue;
        }

        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let value = unquote(rest.trim(), line_number)?;
        let next_field = match keyword {
            "msgctxt" => Field::Context,
            "msgid" => Field::Id,
            "msgid_plural" => Field::Plural,
            "msgstr" => Field::Str(0),
            _ => match keyword
                .strip_prefix("msgstr[")
                .and_then(|s| s.strip_suffix(']'))
                .and_then(|n| n.parse::<usize>().ok())
            {
                Some(n) => Field::Str(n),
                None => bail!("line {}: unknown keyword '{}'", line_number, keyword),
            },
        };

        // A new msgctxt, or a msgid not preceded by its msgctxt, starts a new entry.
        let starts_new = match next_field {
            Field::Context => entry.is_started(),
            Field::Id => entry.id.is_some(),
            _ => false,
        };
        if starts_new {
            finish_entry(&mut translations, std::mem::take(&mut entry));
        }

        *field_mut(&mut entry, next_field) = value;
        field = Some(next_field);
    }
    finish_entry(&mut translations, entry);

    Ok(translations)
}

fn field_mut(entry: &mut PoEntry, field: Field) -> &mut String {
    match field {
        Field::Context => entry.context.get_or_insert_with(String::new),
        Field::Id => entry.id.get_or_insert_with(String::new),
        Field::Plural => entry.plural.get_or_insert_with(String::new),
        Field::Str(n) => {
            if entry.strs.len() <= n {
                entry.strs.resize(n + 1, String::new());
            }
            &mut entry.strs[n]
        }
    }
}

fn finish_entry(translations: &mut Translations, entry: PoEntry) {
    let Some(id) = entry.id else {
        return;
    };
    // Header
    if id.is_empty() && entry.context.is_none() {
        return;
    }
    if entry.strs.iter().all(String::is_empty) {
        return;
    }
    let key = CatalogKey::new(&id, entry.plural.as_deref(), entry.context.as_deref());
    let separator = PLURAL_SEPARATOR.to_string();
    translations.insert(key, entry.strs.join(&separator));
}

fn unquote(text: &str, line_number: usize) -> Result<String> {
    let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        bail!("line {}: expected a quoted string", line_number);
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Ok(out)
}
