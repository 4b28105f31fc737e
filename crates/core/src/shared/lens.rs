//! Normalization of sphere/cylinder lens powers typed on the shortage form
//!
//! Both fields accept free text. On blur the text is parsed with the same
//! leading-number rule browsers use for `parseFloat` (`"1.5abc"` reads as
//! `1.5`, `"1,5"` reads as `1`), rescaled when it looks like hundredths
//! typed without a separator (`"225"` means `2.25`), and then either
//! canonicalized or rejected.
//!
//! The two fields fail differently: an unparsable sphere is ignored and
//! leaves the field untouched, while an unparsable or off-grid cylinder is
//! reported so the form can flag it.

use thiserror::Error;

use super::format::parse_leading_float;

/// Quarter-diopter steps per diopter
const STEPS_PER_DIOPTER: f64 = 4.0;

/// Magnitude from which an input without a decimal point is read as hundredths
const HUNDREDTHS_THRESHOLD: f64 = 25.0;

/// Why a cylinder entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LensInputError {
    #[error("value is not a number")]
    Unparsable,

    #[error("value is not a multiple of 0.25")]
    OffGrid,
}

/// Canonical sphere power, or `None` when the field should stay as typed
///
/// ```
/// use visulab_core::shared::lens::normalize_sphere;
/// assert_eq!(normalize_sphere("1.1").as_deref(), Some("+1.00"));
/// assert_eq!(normalize_sphere("200").as_deref(), Some("+2.00"));
/// assert_eq!(normalize_sphere("abc"), None);
/// ```
pub fn normalize_sphere(raw: &str) -> Option<String> {
    let value = parse_power(raw)?;
    let quantized = js_round(value * STEPS_PER_DIOPTER) / STEPS_PER_DIOPTER;

    // -0.0 compares equal to zero and also gets the plus sign
    if quantized == 0.0 {
        Some("+0.00".to_string())
    } else if quantized > 0.0 {
        Some(format!("+{:.2}", quantized))
    } else {
        Some(format!("{:.2}", quantized))
    }
}

/// Canonical cylinder power (always written negative)
///
/// ```
/// use visulab_core::shared::lens::{normalize_cylinder, LensInputError};
/// assert_eq!(normalize_cylinder("0").unwrap(), "-0.00");
/// assert_eq!(normalize_cylinder("75").unwrap(), "-0.75");
/// assert_eq!(normalize_cylinder("-1.1"), Err(LensInputError::OffGrid));
/// ```
pub fn normalize_cylinder(raw: &str) -> Result<String, LensInputError> {
    let value = parse_power(raw).ok_or(LensInputError::Unparsable)?;
    let magnitude = value.abs();

    if (magnitude * 100.0) % 25.0 != 0.0 {
        return Err(LensInputError::OffGrid);
    }

    Ok(format!("-{:.2}", magnitude))
}

/// Parse the leading number and apply the hundredths heuristic
fn parse_power(raw: &str) -> Option<f64> {
    let value = parse_leading_float(raw)?;
    if value.abs() >= HUNDREDTHS_THRESHOLD && !raw.contains('.') {
        Some(value / 100.0)
    } else {
        Some(value)
    }
}

/// `Math.round`: halves go toward positive infinity
fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
