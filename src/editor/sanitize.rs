//! Comprobación de protección y retirada de artefactos de integridad.

use lopdf::{Dictionary, Document};

use crate::error::EditorError;

use super::constants::STALE_CATALOG_KEYS;
use super::utils::{catalog_id, deref_dictionary};

/// Retira los artefactos ligados a los bytes originales del documento: los
/// marcadores de permisos digitales, la raíz de formularios interactivos y
/// el par identificador del trailer. Tras la edición dejarían de describir
/// el contenido real.
///
/// Si el documento está cifrado o firmado, falla antes de tocar nada:
/// despojarlo de protección en silencio no es una edición legítima.
pub fn strip_integrity_artifacts(doc: &mut Document) -> Result<(), EditorError> {
    // Cualquier entrada `Encrypt` del trailer cuenta como cifrado, sea una
    // referencia o un diccionario directo.
    if doc.trailer.has(b"Encrypt") {
        return Err(EditorError::protected("el documento está cifrado"));
    }
    if is_signed(doc) {
        return Err(EditorError::protected(
            "el documento contiene firmas digitales",
        ));
    }

    if let Some(root_id) = catalog_id(doc)
        && let Ok(catalog) = doc.get_object_mut(root_id).and_then(|obj| obj.as_dict_mut())
    {
        for key in STALE_CATALOG_KEYS {
            catalog.remove(key);
        }
    }
    doc.trailer.remove(b"ID");

    Ok(())
}

/// Un documento cuenta como firmado cuando su `AcroForm` declara firmas
/// (`SigFlags` con el bit 1) o su entrada `Perms` lleva una firma de
/// certificación `DocMDP`. El resto de rastros de `Perms`/`AcroForm` son
/// artefactos caducos y se pueden retirar.
fn is_signed(doc: &Document) -> bool {
    let Some(root_id) = catalog_id(doc) else {
        return false;
    };
    let Ok(catalog) = doc.get_dictionary(root_id) else {
        return false;
    };

    if let Ok(perms) = catalog.get(b"Perms")
        && let Some(perms) = deref_dictionary(doc, perms)
        && perms.has(b"DocMDP")
    {
        return true;
    }

    if let Ok(form) = catalog.get(b"AcroForm")
        && let Some(form) = deref_dictionary(doc, form)
        && let Some(flags) = signature_flags(form)
    {
        return flags & 1 != 0;
    }

    false
}

fn signature_flags(form: &Dictionary) -> Option<i64> {
    form.get(b"SigFlags").ok()?.as_i64().ok()
}
