//! Sincronización de la metadata redundante de un documento PDF.
//!
//! Un mismo dato puede vivir en el diccionario Info, en el paquete XMP y en
//! el catálogo, cada uno con su propia codificación. El sincronizador parte
//! de un único registro canónico y lo propaga a los tres almacenes en un solo
//! guardado, de modo que nunca deriven entre sí.

mod constants;
mod load;
mod sanitize;
mod save;
mod utils;
mod xmp;

pub use load::load_metadata;
pub use save::save_metadata;
