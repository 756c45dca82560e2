//! Valores compartidos del sincronizador de metadata.

/// Creador por defecto cuando ni el usuario ni el documento aportan uno.
pub const DEFAULT_CREATOR: &str = "PdfLens";

/// Productor por defecto cuando ni el usuario ni el documento aportan uno.
pub const DEFAULT_PRODUCER: &str = "pdflens";

/// Claves del catálogo ligadas a los bytes originales del documento; tras
/// una edición dejan de corresponder al contenido real y se retiran.
pub const STALE_CATALOG_KEYS: [&[u8]; 2] = [b"Perms", b"AcroForm"];

/// Marcadores por defecto del stream de metadata XMP.
pub const XMP_STREAM_TYPE: &[u8] = b"Metadata";
pub const XMP_STREAM_SUBTYPE: &[u8] = b"XML";
