//! Clases de error del motor de edición.
//!
//! Solo las condiciones fatales para el documento llegan al llamador. Las
//! anomalías a nivel de campo (fechas malformadas, paquete XMP ilegible) se
//! degradan localmente a "ausente" y se reportan por el log de diagnóstico.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    /// El documento no se pudo cargar, está cifrado o contiene firmas
    /// digitales. Se rechaza antes de mutar nada: retirar protección en
    /// silencio produciría un documento cuya identidad declarada ya no
    /// corresponde a sus bytes.
    #[error("documento protegido o malformado: {reason}")]
    ProtectedOrMalformed { reason: String },

    /// El serializador externo rechazó el grafo de objetos. Fatal para este
    /// intento de guardado; los bytes originales quedan intactos.
    #[error("no se pudo serializar el documento editado: {reason}")]
    Serialization { reason: String },
}

impl EditorError {
    pub(crate) fn protected(reason: impl Into<String>) -> Self {
        EditorError::ProtectedOrMalformed {
            reason: reason.into(),
        }
    }

    pub(crate) fn serialization(reason: impl Into<String>) -> Self {
        EditorError::Serialization {
            reason: reason.into(),
        }
    }
}
