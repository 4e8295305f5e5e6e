use isg_core::{energy, icon_state, number, percentage, temperature, Cell, Row, Table};

#[test]
fn temperature_accepts_decimal_comma() {
    assert_eq!(temperature("23,3°C"), Some(23.3));
    assert_eq!(temperature("-5,1°C"), Some(-5.1));
    assert_eq!(temperature("21.0°C"), Some(21.0));
}

#[test]
fn temperature_rejects_garbage() {
    assert_eq!(temperature("garbage"), None);
    assert_eq!(temperature("°C"), None);
    assert_eq!(temperature(""), None);
}

#[test]
fn percentage_strips_sign() {
    assert_eq!(percentage("53,3%"), Some(53.3));
    assert_eq!(percentage("n/a %"), None);
}

#[test]
fn number_only_normalizes_decimal_separator() {
    assert_eq!(number("1234"), Some(1234.0));
    assert_eq!(number("12,5"), Some(12.5));
    assert_eq!(number("12 starts"), None);
}

#[test]
fn energy_normalizes_to_kwh() {
    assert_eq!(energy("24,249MWh"), Some(24249.0));
    assert_eq!(energy("5KWh"), Some(5.0));
    assert_eq!(energy("12,5 KWh"), Some(12.5));
}

#[test]
fn energy_unit_is_case_sensitive_and_required() {
    assert_eq!(energy("5kWh"), None);
    assert_eq!(energy("5"), None);
    assert_eq!(energy("xyzKWh"), None);
}

fn status_table(icon_src: Option<&str>) -> Table {
    Table::new(vec![
        Row::new(vec![Cell::header("HEAT PUMP STATUS")]),
        Row::new(vec![
            Cell::data("COMPRESSOR"),
            Cell::data("").with_icon(icon_src),
        ]),
    ])
}

#[test]
fn icon_state_on_when_source_has_marker() {
    let table = status_table(Some("/img/ste-symbol_an-1.png"));
    assert!(icon_state(&table, "COMPRESSOR"));
}

#[test]
fn icon_state_off_for_other_icon_or_missing_pieces() {
    assert!(!icon_state(&status_table(Some("/img/ste-symbol_aus-1.png")), "COMPRESSOR"));
    assert!(!icon_state(&status_table(None), "COMPRESSOR"));
    assert!(!icon_state(&status_table(Some("")), "COMPRESSOR"));
    assert!(!icon_state(&status_table(Some("ste-symbol_an-")), "DEFROST"));

    let no_icon = Table::new(vec![Row::of_texts(&["COMPRESSOR", "on"])]);
    assert!(!icon_state(&no_icon, "COMPRESSOR"));
}

#[test]
fn icon_state_skips_rows_without_icon() {
    let table = Table::new(vec![
        Row::of_texts(&["COMPRESSOR", "-"]),
        Row::new(vec![
            Cell::data("COMPRESSOR"),
            Cell::data("").with_icon(Some("ste-symbol_an-2.png")),
        ]),
    ]);
    assert!(icon_state(&table, "COMPRESSOR"));
}
