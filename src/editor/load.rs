//! Población del registro canónico a partir de un documento existente.

use chrono::{DateTime, FixedOffset};
use lopdf::{Dictionary, Document};

use crate::dates;
use crate::error::EditorError;
use crate::keywords;
use crate::record::{KeywordEdit, MetadataRecord, PdfVersion};

use super::utils::{deref_dictionary, object_to_text};

/// Extrae la metadata editable actual de los bytes de un documento.
///
/// Las anomalías de campo degradan a "ausente": un diccionario Info que no
/// existe o una fecha malformada nunca impiden cargar el resto.
pub fn load_metadata(bytes: &[u8]) -> Result<MetadataRecord, EditorError> {
    let doc = Document::load_mem(bytes).map_err(|error| {
        EditorError::protected(format!("no se pudo cargar el documento: {error}"))
    })?;
    if doc.trailer.has(b"Encrypt") {
        return Err(EditorError::protected("el documento está cifrado"));
    }

    Ok(populate_record(&doc))
}

pub(crate) fn populate_record(doc: &Document) -> MetadataRecord {
    let mut record = MetadataRecord {
        target_version: PdfVersion::parse(&doc.version).unwrap_or_default(),
        ..MetadataRecord::default()
    };

    let Some(info) = info_dictionary(doc) else {
        return record;
    };

    record.title = text_field(doc, info, b"Title");
    record.author = text_field(doc, info, b"Author");
    record.subject = text_field(doc, info, b"Subject");
    record.creator = text_field(doc, info, b"Creator");
    record.producer = text_field(doc, info, b"Producer");

    let keywords_text = text_field(doc, info, b"Keywords");
    if !keywords_text.is_empty() {
        record.keywords = KeywordEdit::Replace(keywords::split(&keywords_text));
    }

    record.created_at = date_field(doc, info, b"CreationDate");
    record.modified_at = date_field(doc, info, b"ModDate");
    record
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    deref_dictionary(doc, info)
}

fn text_field(doc: &Document, dict: &Dictionary, key: &[u8]) -> String {
    dict.get(key)
        .ok()
        .and_then(|obj| object_to_text(doc, obj))
        .unwrap_or_default()
}

fn date_field(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<DateTime<FixedOffset>> {
    let raw = text_field(doc, dict, key);
    if raw.is_empty() {
        return None;
    }

    let parsed = dates::parse_native(&raw);
    if parsed.is_none() {
        log::warn!(
            "fecha malformada en {}: se ignora {raw:?}",
            String::from_utf8_lossy(key)
        );
    }
    parsed
}
