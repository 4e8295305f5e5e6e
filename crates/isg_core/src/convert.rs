//! Converters from console text to typed values.
//!
//! None of these fail: text outside the expected shape yields `None` (or
//! `false` for icon states).

use crate::Table;

/// Substring of the icon path the console uses for "on" states.
pub const ICON_ON_MARKER: &str = "ste-symbol_an-";

const KILO_WATT_HOURS: &str = "KWh";
const MEGA_WATT_HOURS: &str = "MWh";

/// `"23,3°C"` → `23.3`.
pub fn temperature(text: &str) -> Option<f64> {
    parse_decimal(&text.replace("°C", ""))
}

/// `"53,3%"` → `53.3`.
pub fn percentage(text: &str) -> Option<f64> {
    parse_decimal(&text.replace('%', ""))
}

pub fn number(text: &str) -> Option<f64> {
    parse_decimal(text)
}

/// Energy normalized to kWh: `"24,249MWh"` → `24249.0`, `"5KWh"` → `5.0`.
///
/// The unit is matched case-sensitively; text without `KWh` or `MWh` is not
/// an energy value.
pub fn energy(text: &str) -> Option<f64> {
    let is_kwh = text.contains(KILO_WATT_HOURS);
    let is_mwh = text.contains(MEGA_WATT_HOURS);
    if !(is_kwh || is_mwh) {
        return None;
    }

    let stripped = text.replace(MEGA_WATT_HOURS, "").replace(KILO_WATT_HOURS, "");
    let value = parse_decimal(&stripped)?;
    Some(if is_mwh { value * 1000.0 } else { value })
}

/// State of the icon next to `label` in `table`.
///
/// Rows whose icon is missing, or has no source, are skipped; the first row
/// with an icon source decides. Nothing found is "off".
pub fn icon_state(table: &Table, label: &str) -> bool {
    table
        .labelled_rows()
        .filter(|row| row.label() == Some(label))
        .find_map(|row| {
            let src = row.cells[1].icon.as_ref()?.src.as_deref()?;
            (!src.is_empty()).then_some(src)
        })
        .is_some_and(|src| src.contains(ICON_ON_MARKER))
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.replace(',', ".")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::parse_decimal;

    #[test]
    fn decimal_comma_and_point_are_equivalent() {
        assert_eq!(parse_decimal("1,5"), Some(1.5));
        assert_eq!(parse_decimal(" 1.5 "), Some(1.5));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("1,2,3"), None);
    }
}
