//! Date and number formatting shared by reports and dashboards

use chrono::{NaiveDate, NaiveDateTime};

/// `YYYYMMDD`, used in export file names
pub fn file_date_stamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d").to_string()
}

/// `YYYYMMDD_HHmm`, used in text report file names
pub fn file_minute_stamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d_%H%M").to_string()
}

/// `dd/MM/yyyy`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `HH:mm:ss`
pub fn display_time(at: NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}

/// `dd/MM/yyyy HH:mm`
pub fn display_date_time(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// Currency with two decimals
///
/// ```
/// use visulab_core::shared::format::format_money;
/// assert_eq!(format_money(6600.5), "R$ 6600.50");
/// ```
pub fn format_money(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

/// Longest numeric prefix after leading whitespace, as `parseFloat` reads it
///
/// Non-finite results (`"Infinity"`, overflow) are treated as unparsable.
///
/// ```
/// use visulab_core::shared::format::parse_leading_float;
/// assert_eq!(parse_leading_float(" 1.5abc"), Some(1.5));
/// assert_eq!(parse_leading_float("1,5"), Some(1.0));
/// assert_eq!(parse_leading_float("abc"), None);
/// ```
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 3)
            .unwrap()
    }

    #[test]
    fn test_file_stamps() {
        assert_eq!(file_date_stamp(at()), "20240305");
        assert_eq!(file_minute_stamp(at()), "20240305_0907");
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(display_date(at().date()), "05/03/2024");
        assert_eq!(display_time(at()), "09:07:03");
        assert_eq!(display_date_time(at()), "05/03/2024 09:07");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "R$ 0.00");
        assert_eq!(format_money(4500.0), "R$ 4500.00");
    }
}
