//! Reader for compiled gettext `.mo` files.

use anyhow::{Context, Result, bail};

use crate::core::{data::Translations, key::CatalogKey};

const MAGIC: u32 = 0x9504_12de;
const MAGIC_SWAPPED: u32 = 0xde12_0495;

/// Parse a `.mo` file. Message ids already carry the context and plural
/// separators, so they are used as raw keys. The header entry is skipped.
pub fn parse_mo(bytes: &[u8]) -> Result<Translations> {
    let big_endian = match read_u32(bytes, 0, false)? {
        MAGIC => false,
        MAGIC_SWAPPED => true,
        _ => bail!("not a gettext .mo file (bad magic number)"),
    };
    let count = read_u32(bytes, 8, big_endian)? as usize;
    let originals = read_u32(bytes, 12, big_endian)? as usize;
    let translated = read_u32(bytes, 16, big_endian)? as usize;

    let mut translations = Translations::new();
    for i in 0..count {
        let id = read_string(bytes, originals + i * 8, big_endian)?;
        if id.is_empty() {
            continue;
        }
        let text = read_string(bytes, translated + i * 8, big_endian)?;
        translations.insert(CatalogKey::from_raw(id), text);
    }
    Ok(translations)
}

fn read_u32(bytes: &[u8], offset: usize, big_endian: bool) -> Result<u32> {
    let chunk: [u8; 4] = bytes
        .get(offset..offset + 4)
        .and_then(|s| s.try_into().ok())
        .context("truncated .mo file")?;
    Ok(if big_endian {
        u32::from_be_bytes(chunk)
    } else {
        u32::from_le_bytes(chunk)
    })
}

/// Read the string described by the (length, offset) descriptor at `descriptor`.
fn read_string(bytes: &[u8], descriptor: usize, big_endian: bool) -> Result<String> {
    let length = read_u32(bytes, descriptor, big_endian)? as usize;
    let offset = read_u32(bytes, descriptor + 4, big_endian)? as usize;
    let raw = bytes
        .get(offset..offset + length)
        .context("string table entry out of bounds in .mo file")?;
    Ok(String::from_utf8_lossy(raw).into_owned())
}
