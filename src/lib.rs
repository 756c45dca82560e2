//! Motor de PdfLens para editar la metadata descriptiva y temporal de un
//! documento PDF existente y forzar la versión declarada en su primera línea.
//!
//! Un PDF guarda la misma metadata hasta en tres almacenes con codificaciones
//! distintas: el diccionario Info clásico, el paquete XMP en XML y algunas
//! duplicaciones a nivel de catálogo. Este motor los mantiene consistentes a
//! partir de un único [`MetadataRecord`] canónico y garantiza que la primera
//! línea del resultado declare exactamente la versión pedida, sea cual sea la
//! estrategia interna del serializador.
//!
//! La interfaz pública se reduce a dos operaciones sobre bytes:
//! [`load_metadata`] puebla el registro desde un documento y [`save_metadata`]
//! lo consume para producir el documento re-serializado. La interfaz de
//! usuario, el selector de archivos y cualquier transporte quedan fuera del
//! motor.

pub mod dates;
mod editor;
pub mod error;
pub mod keywords;
pub mod record;
pub mod version;

pub use editor::{load_metadata, save_metadata};
pub use error::EditorError;
pub use record::{KeywordEdit, MetadataRecord, PdfVersion};
