//! Códec de fechas entre las tres representaciones del ecosistema PDF.
//!
//! El diccionario Info usa `D:YYYYMMDDHHmmSS±HH'mm'` con desfase horario
//! explícito; el paquete XMP usa ISO-8601 normalizado a UTC con sufijo `Z`.
//! Ambas codificaciones de un mismo guardado deben denotar el mismo instante,
//! aunque no muestren el mismo desfase.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Interpreta una fecha del diccionario Info.
///
/// Devuelve `None` ante cualquier grupo malformado en lugar de fallar: una
/// fecha ilegible nunca debe abortar la carga del resto del documento. Solo
/// se acepta la forma completa con signo obligatorio; las comillas del
/// desfase se descartan antes de validar.
pub fn parse_native(text: &str) -> Option<DateTime<FixedOffset>> {
    let rest = text.strip_prefix("D:")?;
    let clean: String = rest.chars().filter(|c| *c != '\'').collect();

    // 14 dígitos de fecha y hora, un signo y 4 dígitos de desfase.
    if clean.len() != 19 || !clean.is_ascii() {
        return None;
    }

    let year = digit_group(&clean, 0, 4)?;
    let month = digit_group(&clean, 4, 6)?;
    let day = digit_group(&clean, 6, 8)?;
    let hour = digit_group(&clean, 8, 10)?;
    let minute = digit_group(&clean, 10, 12)?;
    let second = digit_group(&clean, 12, 14)?;

    let sign = match clean.as_bytes()[14] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let offset_hours = digit_group(&clean, 15, 17)?;
    let offset_minutes = digit_group(&clean, 17, 19)?;

    let offset_seconds = sign * (offset_hours as i32 * 3600 + offset_minutes as i32 * 60);
    let offset = FixedOffset::east_opt(offset_seconds)?;

    offset
        .with_ymd_and_hms(year as i32, month, day, hour, minute, second)
        .single()
}

/// Codifica un instante para el diccionario Info, conservando su desfase.
pub fn format_native(moment: &DateTime<FixedOffset>) -> String {
    let offset_minutes = moment.offset().local_minus_utc() / 60;
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let magnitude = offset_minutes.abs();

    format!(
        "D:{}{}{:02}'{:02}'",
        moment.format("%Y%m%d%H%M%S"),
        sign,
        magnitude / 60,
        magnitude % 60,
    )
}

/// Codifica un instante para el paquete XMP: UTC con sufijo `Z` literal y
/// precisión de segundos, sin fracciones.
pub fn format_packet(moment: &DateTime<FixedOffset>) -> String {
    moment
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

fn digit_group(text: &str, start: usize, end: usize) -> Option<u32> {
    let group = &text[start..end];
    if !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}
