//! Modelo canónico de la metadata editable de un documento PDF.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Edición solicitada sobre la secuencia de palabras clave del documento.
///
/// El tri-estado evita la ambigüedad clásica de la cadena vacía: conservar
/// lo que ya hay, vaciar la entrada y sustituirla son intenciones distintas.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum KeywordEdit {
    /// Conservar la secuencia que el documento ya tiene.
    Unset,
    /// Eliminar la entrada de palabras clave del documento.
    Clear,
    /// Sustituir la secuencia completa por estos tokens, en este orden y
    /// con los duplicados que traigan.
    Replace(Vec<String>),
}

impl Default for KeywordEdit {
    fn default() -> Self {
        KeywordEdit::Unset
    }
}

/// Versiones declarables en la primera línea del archivo (`%PDF-x.y`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PdfVersion {
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V1_6,
    V1_7,
}

impl PdfVersion {
    pub const ALL: [PdfVersion; 8] = [
        PdfVersion::V1_0,
        PdfVersion::V1_1,
        PdfVersion::V1_2,
        PdfVersion::V1_3,
        PdfVersion::V1_4,
        PdfVersion::V1_5,
        PdfVersion::V1_6,
        PdfVersion::V1_7,
    ];

    /// Forma textual tal como aparece tras `%PDF-`.
    pub fn as_str(self) -> &'static str {
        match self {
            PdfVersion::V1_0 => "1.0",
            PdfVersion::V1_1 => "1.1",
            PdfVersion::V1_2 => "1.2",
            PdfVersion::V1_3 => "1.3",
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_5 => "1.5",
            PdfVersion::V1_6 => "1.6",
            PdfVersion::V1_7 => "1.7",
        }
    }

    /// Interpreta la forma textual; `None` si no es una versión del conjunto.
    pub fn parse(text: &str) -> Option<PdfVersion> {
        PdfVersion::ALL
            .into_iter()
            .find(|version| version.as_str() == text.trim())
    }
}

impl Default for PdfVersion {
    fn default() -> Self {
        PdfVersion::V1_4
    }
}

impl std::fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forma canónica en memoria sobre la que opera el motor.
///
/// Se construye una vez por carga, la muta solo el usuario y la consume
/// exactamente un guardado. En los campos de texto, la cadena vacía significa
/// "conservar el valor existente, o el valor por defecto si no hay ninguno".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub creator: String,
    pub producer: String,
    pub keywords: KeywordEdit,
    /// Ausente = usar la hora actual al guardar.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Ausente = reflejar `created_at` al guardar.
    pub modified_at: Option<DateTime<FixedOffset>>,
    pub target_version: PdfVersion,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn version_parse_round_trip() {
        for version in PdfVersion::ALL {
            assert_eq!(PdfVersion::parse(version.as_str()), Some(version));
        }
        assert_eq!(PdfVersion::parse("2.0"), None);
        assert_eq!(PdfVersion::parse(""), None);
    }

    #[test]
    fn version_ordering_follows_feature_sets() {
        assert!(PdfVersion::V1_4 < PdfVersion::V1_5);
        assert!(PdfVersion::V1_7 > PdfVersion::V1_0);
    }

    #[test]
    fn record_serializes_as_json() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let record = MetadataRecord {
            title: "Informe".to_string(),
            keywords: KeywordEdit::Replace(vec!["alpha".to_string(), "beta".to_string()]),
            created_at: offset.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).single(),
            target_version: PdfVersion::V1_6,
            ..MetadataRecord::default()
        };

        let json = serde_json::to_string(&record).expect("el registro debería serializarse");
        let parsed: MetadataRecord =
            serde_json::from_str(&json).expect("el registro debería deserializarse");

        assert_eq!(parsed.title, "Informe");
        assert_eq!(parsed.keywords, record.keywords);
        assert_eq!(parsed.created_at, record.created_at);
        assert_eq!(parsed.target_version, PdfVersion::V1_6);
    }
}
