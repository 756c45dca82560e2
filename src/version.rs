//! Aplicación de la versión declarada sobre la salida serializada.
//!
//! Los serializadores de propósito general suelen aceptar solo un conjunto
//! restringido de versiones o imponer la suya propia. Sobrescribir los bytes
//! de cabecera es la única garantía de que la primera línea declare
//! exactamente la versión pedida, sea cual sea el serializador.

use crate::record::PdfVersion;

/// Los object streams (empaquetado compacto de objetos indirectos) solo son
/// estructuralmente legales a partir de PDF 1.5.
pub fn object_streams_allowed(version: PdfVersion) -> bool {
    version >= PdfVersion::V1_5
}

/// Sobrescribe los primeros bytes del buffer con la línea `%PDF-x.y`.
///
/// Nunca cambia la longitud del buffer: los lectores reconocen la versión
/// declarada exclusivamente en la primera línea y son indiferentes a lo que
/// el serializador haya anotado en el resto del cuerpo.
pub fn patch_header(mut bytes: Vec<u8>, version: PdfVersion) -> Vec<u8> {
    let header = format!("%PDF-{}\n", version.as_str());
    let limit = header.len().min(bytes.len());
    bytes[..limit].copy_from_slice(&header.as_bytes()[..limit]);
    bytes
}
