//! Parche dirigido del paquete XMP, sin un análisis XML completo.
//!
//! Solo se tocan campos acotados y opcionales: el contenido textual del
//! primer `CreateDate`, `ModifyDate` y `Producer` que existan (nunca se
//! insertan campos nuevos) y todo atributo `rdf:about`, que se vacía para que
//! el paquete no siga apuntando al identificador del documento original.

use lopdf::{Dictionary, Document, Object, Stream};

use super::constants::{XMP_STREAM_SUBTYPE, XMP_STREAM_TYPE};
use super::utils::catalog_id;

/// Sincroniza el paquete XMP del catálogo con las fechas y el productor
/// resueltos. De mejor esfuerzo: sin clave `Metadata` no hay nada que hacer,
/// y un paquete ilegible se trata como ausente sin abortar el guardado.
pub fn patch_xmp_packet(doc: &mut Document, create_date: &str, modify_date: &str, producer: &str) {
    let Some(stream_id) = metadata_stream_id(doc) else {
        return;
    };

    let Some((packet, type_name, subtype)) = readable_packet(doc, stream_id) else {
        log::warn!("paquete XMP ilegible: se omite la sincronización XMP");
        return;
    };

    let patched = patch_packet_text(&packet, create_date, modify_date, producer);

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(type_name));
    dict.set("Subtype", Object::Name(subtype));
    let stream = Stream::new(dict, patched.into_bytes()).with_compression(false);

    // Sustitución en el mismo id: la referencia del catálogo sigue valiendo
    // y el stream anterior no sobrevive en el grafo.
    if let Ok(object) = doc.get_object_mut(stream_id) {
        *object = Object::Stream(stream);
    }
}

fn metadata_stream_id(doc: &Document) -> Option<lopdf::ObjectId> {
    let catalog = doc.get_dictionary(catalog_id(doc)?).ok()?;
    catalog.get(b"Metadata").ok()?.as_reference().ok()
}

fn readable_packet(doc: &Document, stream_id: lopdf::ObjectId) -> Option<(String, Vec<u8>, Vec<u8>)> {
    let stream = doc.get_object(stream_id).ok()?.as_stream().ok()?;
    let content = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());
    let packet = String::from_utf8(content).ok()?;

    let type_name = name_or_default(&stream.dict, b"Type", XMP_STREAM_TYPE);
    let subtype = name_or_default(&stream.dict, b"Subtype", XMP_STREAM_SUBTYPE);
    Some((packet, type_name, subtype))
}

fn name_or_default(dict: &Dictionary, key: &[u8], default: &[u8]) -> Vec<u8> {
    dict.get(key)
        .ok()
        .and_then(|obj| obj.as_name().ok())
        .unwrap_or(default)
        .to_vec()
}

/// Aplica las tres sustituciones sobre el texto crudo del paquete.
pub(crate) fn patch_packet_text(
    packet: &str,
    create_date: &str,
    modify_date: &str,
    producer: &str,
) -> String {
    let mut patched = replace_element_text(packet, "CreateDate", create_date);
    patched = replace_element_text(&patched, "ModifyDate", modify_date);
    patched = replace_element_text(&patched, "Producer", producer);
    blank_rdf_about(&patched)
}

/// Sustituye el contenido textual del primer elemento cuyo nombre local
/// coincide, con o sin prefijo de espacio de nombres. Si no existe, el
/// paquete vuelve sin cambios: los campos solo se actualizan, no se insertan.
fn replace_element_text(packet: &str, local_name: &str, new_value: &str) -> String {
    let Some((content_start, content_end)) = element_text_span(packet, local_name) else {
        return packet.to_string();
    };

    let mut result = String::with_capacity(packet.len() + new_value.len());
    result.push_str(&packet[..content_start]);
    result.push_str(new_value);
    result.push_str(&packet[content_end..]);
    result
}

fn element_text_span(packet: &str, local_name: &str) -> Option<(usize, usize)> {
    let mut search_from = 0;
    while let Some(relative) = packet[search_from..].find('<') {
        let open_start = search_from + relative;
        search_from = open_start + 1;

        let rest = &packet[open_start + 1..];
        let Some(name_end) = rest.find(|c: char| c == '>' || c == '/' || c.is_whitespace()) else {
            return None;
        };

        let qualified = &rest[..name_end];
        if qualified.is_empty() || local_name_of(qualified) != local_name {
            continue;
        }

        let Some(tag_close) = rest.find('>') else {
            return None;
        };
        // Un elemento auto-cerrado no tiene contenido textual que sustituir.
        if rest[..tag_close].ends_with('/') {
            continue;
        }

        let content_start = open_start + 1 + tag_close + 1;
        let closing = format!("</{qualified}>");
        let Some(close_relative) = packet[content_start..].find(&closing) else {
            continue;
        };
        return Some((content_start, content_start + close_relative));
    }
    None
}

fn local_name_of(qualified: &str) -> &str {
    qualified.rsplit(':').next().unwrap_or(qualified)
}

/// Vacía todo atributo `rdf:about="..."` del paquete.
fn blank_rdf_about(packet: &str) -> String {
    const NEEDLE: &str = "rdf:about=\"";

    let mut result = String::with_capacity(packet.len());
    let mut rest = packet;
    while let Some(found) = rest.find(NEEDLE) {
        let value_start = found + NEEDLE.len();
        let Some(value_len) = rest[value_start..].find('"') else {
            break;
        };
        result.push_str(&rest[..value_start]);
        result.push('"');
        rest = &rest[value_start + value_len + 1..];
    }
    result.push_str(rest);
    result
}
