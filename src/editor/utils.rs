//! Utilidades compartidas para recorrer el grafo y codificar texto PDF.

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};

/// Resuelve un objeto hasta su diccionario, siguiendo una referencia si hace
/// falta.
pub fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Devuelve el id del catálogo (la raíz del documento), si el trailer lo
/// referencia.
pub fn catalog_id(doc: &Document) -> Option<ObjectId> {
    doc.trailer.get(b"Root").ok()?.as_reference().ok()
}

/// Extrae el texto de un objeto cadena, siguiendo referencias.
pub fn object_to_text(doc: &Document, obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Reference(reference) => doc
            .get_object(*reference)
            .ok()
            .and_then(|inner| object_to_text(doc, inner)),
        _ => None,
    }
}

/// Decodifica una cadena de texto PDF: UTF-16BE cuando trae BOM, texto de un
/// byte en caso contrario.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units).trim().to_string()
    } else {
        String::from_utf8_lossy(bytes).trim().to_string()
    }
}

/// Codifica texto como cadena PDF: literal si es ASCII puro, UTF-16BE con
/// BOM en caso contrario.
pub fn encode_text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Devuelve el id del diccionario Info, creándolo si el trailer no referencia
/// uno utilizable.
pub fn ensure_info_dictionary(doc: &mut Document) -> ObjectId {
    if let Ok(info) = doc.trailer.get(b"Info")
        && let Ok(id) = info.as_reference()
        && doc
            .get_object(id)
            .map(|object| object.as_dict().is_ok())
            .unwrap_or(false)
    {
        return id;
    }

    // Un Info escrito directamente en el trailer migra a objeto indirecto
    // con sus entradas intactas; sus valores previos siguen contando.
    let seed = match doc.trailer.get(b"Info") {
        Ok(Object::Dictionary(dict)) => dict.clone(),
        _ => Dictionary::new(),
    };
    let id = doc.add_object(Object::Dictionary(seed));
    doc.trailer.set("Info", Object::Reference(id));
    id
}
