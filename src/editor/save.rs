//! Orquestación del guardado: un registro canónico se propaga a los tres
//! almacenes de metadata y la salida declara exactamente la versión pedida.

use chrono::{DateTime, FixedOffset, Local};
use lopdf::xref::XrefType;
use lopdf::{Document, Object, ObjectId, SaveOptions};

use crate::dates;
use crate::error::EditorError;
use crate::keywords;
use crate::record::{KeywordEdit, MetadataRecord};
use crate::version;

use super::constants::{DEFAULT_CREATOR, DEFAULT_PRODUCER};
use super::sanitize::strip_integrity_artifacts;
use super::utils::{encode_text_string, ensure_info_dictionary, object_to_text};
use super::xmp::patch_xmp_packet;

/// Aplica el registro de edición sobre los bytes de un documento y devuelve
/// el documento re-serializado. Los bytes de entrada no se mutan nunca; un
/// guardado fallido deja el original disponible tal cual.
pub fn save_metadata(bytes: &[u8], record: &MetadataRecord) -> Result<Vec<u8>, EditorError> {
    let doc = Document::load_mem(bytes).map_err(|error| {
        EditorError::protected(format!("no se pudo cargar el documento: {error}"))
    })?;
    save_document(doc, record)
}

/// Pasos del guardado sobre un grafo ya cargado. El grafo queda en propiedad
/// exclusiva de esta operación y se consume al serializar; ningún lector
/// puede observar un estado intermedio.
pub(crate) fn save_document(
    mut doc: Document,
    record: &MetadataRecord,
) -> Result<Vec<u8>, EditorError> {
    let (created, modified) = resolve_dates(record);

    strip_integrity_artifacts(&mut doc)?;

    let info_id = ensure_info_dictionary(&mut doc);
    let prior = FieldSnapshot::take(&doc, info_id);

    let resolved = ResolvedFields {
        title: resolve_field(&record.title, &prior.title, ""),
        author: resolve_field(&record.author, &prior.author, ""),
        subject: resolve_field(&record.subject, &prior.subject, ""),
        creator: resolve_field(&record.creator, &prior.creator, DEFAULT_CREATOR),
        producer: resolve_field(&record.producer, &prior.producer, DEFAULT_PRODUCER),
    };

    write_info_dates(&mut doc, info_id, &created, &modified)?;

    patch_xmp_packet(
        &mut doc,
        &dates::format_packet(&created),
        &dates::format_packet(&modified),
        &resolved.producer,
    );

    write_text_fields(&mut doc, info_id, &resolved, &record.keywords)?;

    let allow_object_streams = version::object_streams_allowed(record.target_version);
    doc.version = record.target_version.as_str().to_string();

    // El camino clásico del serializador hereda el tipo de xref del documento
    // de origen; por debajo de 1.5 la tabla tiene que ser la numérica aunque
    // la entrada viniera con un stream de referencias cruzadas.
    if !allow_object_streams {
        doc.reference_table.cross_reference_type = XrefType::CrossReferenceTable;
    }

    let options = SaveOptions::builder()
        .use_object_streams(allow_object_streams)
        .use_xref_streams(allow_object_streams)
        .build();

    let mut output = Vec::new();
    doc.save_with_options(&mut output, options)
        .map_err(|error| EditorError::serialization(error.to_string()))?;

    Ok(version::patch_header(output, record.target_version))
}

/// Valor del usuario si lo hay; si no, el valor previo del documento; si no,
/// el valor por defecto del campo.
fn resolve_field(supplied: &str, prior: &str, default: &str) -> String {
    if !supplied.is_empty() {
        supplied.to_string()
    } else if !prior.is_empty() {
        prior.to_string()
    } else {
        default.to_string()
    }
}

/// Fecha de creación: la del usuario o la hora actual. Fecha de modificación:
/// la del usuario o un reflejo exacto de la de creación.
fn resolve_dates(record: &MetadataRecord) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let created = record
        .created_at
        .unwrap_or_else(|| Local::now().fixed_offset());
    let modified = record.modified_at.unwrap_or(created);
    (created, modified)
}

struct FieldSnapshot {
    title: String,
    author: String,
    subject: String,
    creator: String,
    producer: String,
}

impl FieldSnapshot {
    /// Captura los valores previos del Info antes de sobrescribirlos; la
    /// precedencia "valor previo" se resuelve contra esta copia.
    fn take(doc: &Document, info_id: ObjectId) -> FieldSnapshot {
        let field = |key: &[u8]| -> String {
            doc.get_dictionary(info_id)
                .ok()
                .and_then(|info| info.get(key).ok())
                .and_then(|obj| object_to_text(doc, obj))
                .unwrap_or_default()
        };

        FieldSnapshot {
            title: field(b"Title"),
            author: field(b"Author"),
            subject: field(b"Subject"),
            creator: field(b"Creator"),
            producer: field(b"Producer"),
        }
    }
}

struct ResolvedFields {
    title: String,
    author: String,
    subject: String,
    creator: String,
    producer: String,
}

fn write_info_dates(
    doc: &mut Document,
    info_id: ObjectId,
    created: &DateTime<FixedOffset>,
    modified: &DateTime<FixedOffset>,
) -> Result<(), EditorError> {
    let info = info_dict_mut(doc, info_id)?;
    info.set(
        "CreationDate",
        Object::string_literal(dates::format_native(created)),
    );
    info.set(
        "ModDate",
        Object::string_literal(dates::format_native(modified)),
    );
    Ok(())
}

fn write_text_fields(
    doc: &mut Document,
    info_id: ObjectId,
    resolved: &ResolvedFields,
    keywords: &KeywordEdit,
) -> Result<(), EditorError> {
    let info = info_dict_mut(doc, info_id)?;

    set_or_remove(info, "Title", &resolved.title);
    set_or_remove(info, "Author", &resolved.author);
    set_or_remove(info, "Subject", &resolved.subject);
    set_or_remove(info, "Creator", &resolved.creator);
    set_or_remove(info, "Producer", &resolved.producer);

    match keywords {
        KeywordEdit::Unset => {}
        KeywordEdit::Clear => {
            info.remove(b"Keywords");
        }
        KeywordEdit::Replace(tokens) => {
            info.set("Keywords", encode_text_string(&keywords::join(tokens)));
        }
    }

    Ok(())
}

fn info_dict_mut(doc: &mut Document, info_id: ObjectId) -> Result<&mut lopdf::Dictionary, EditorError> {
    doc.get_object_mut(info_id)
        .and_then(|obj| obj.as_dict_mut())
        .map_err(|error| {
            EditorError::serialization(format!("el diccionario Info no es accesible: {error}"))
        })
}

/// Un valor resuelto vacío deja la clave ausente en lugar de escribir una
/// cadena vacía.
fn set_or_remove(info: &mut lopdf::Dictionary, key: &str, value: &str) {
    if value.is_empty() {
        info.remove(key.as_bytes());
    } else {
        info.set(key, encode_text_string(value));
    }
}
