//! pt-BR formatting helpers for proposal presentation: currency, dates,
//! and document/phone masks.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;

/// Placeholder rendered for absent values.
pub const PLACEHOLDER: &str = "—";

fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.naive_local());
    }
    // Date-only fields (e.g. birth dates) arrive without a time component.
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Format a monetary value as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_currency_brl(value: Option<f64>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_owned();
    };
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Format a date as `dd/mm/yy`.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_instant)
        .map(|instant| instant.format("%d/%m/%y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}

/// Format a date-time as `dd/mm/yy hh:mm`.
pub fn format_date_time(value: Option<&str>) -> String {
    value
        .and_then(parse_instant)
        .map(|instant| instant.format("%d/%m/%y %H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}

/// Format a chat message timestamp as `hh:mm`.
///
/// An unparsable timestamp renders as an empty string; the message itself
/// still appears in the list.
pub fn format_message_time(raw: &str) -> String {
    parse_instant(raw)
        .map(|instant| instant.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Mask a CPF as `000.000.000-00`, left-padding short inputs with zeros.
pub fn mask_cpf(cpf: Option<&str>) -> String {
    let Some(cpf) = cpf else {
        return PLACEHOLDER.to_owned();
    };
    if cpf.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    let digits: String = cpf.chars().filter(char::is_ascii_digit).collect();
    let padded = format!("{digits:0>11}");
    let last11 = &padded[padded.len() - 11..];
    format!(
        "{}.{}.{}-{}",
        &last11[0..3],
        &last11[3..6],
        &last11[6..9],
        &last11[9..11]
    )
}

/// Mask a Brazilian phone number as `(00) 00000-0000` (mobile) or
/// `(00) 0000-0000` (landline). Other digit counts pass through unchanged.
pub fn mask_phone(phone: Option<&str>) -> String {
    let Some(phone) = phone else {
        return PLACEHOLDER.to_owned();
    };
    if phone.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[0..2], &digits[2..7], &digits[7..11]),
        10 => format!("({}) {}-{}", &digits[0..2], &digits[2..6], &digits[6..10]),
        _ => phone.to_owned(),
    }
}
