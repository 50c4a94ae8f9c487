use chrono::{TimeZone, Utc};
use plotprep_rs::core::{
    CellValue, ColumnKind, ColumnType, coerce_cell, coerce_cell_loose, process_rows,
    process_rows_loose,
};

#[test]
fn numeric_empty_string_becomes_null() {
    assert_eq!(
        coerce_cell(ColumnKind::Numeric, &CellValue::Text(String::new())),
        CellValue::Null
    );
}

#[test]
fn numeric_strings_parse_to_numbers() {
    assert_eq!(
        coerce_cell(ColumnKind::Numeric, &CellValue::from("3.14")),
        CellValue::Number(3.14)
    );
    assert_eq!(
        coerce_cell(ColumnKind::Numeric, &CellValue::from(" -42 ")),
        CellValue::Number(-42.0)
    );
}

#[test]
fn numeric_parse_failure_retains_the_raw_value() {
    assert_eq!(
        coerce_cell(ColumnKind::Numeric, &CellValue::from("abc")),
        CellValue::from("abc")
    );
}

#[test]
fn null_cells_short_circuit_every_kind() {
    for kind in [
        ColumnKind::Numeric,
        ColumnKind::String,
        ColumnKind::Date,
        ColumnKind::Boolean,
    ] {
        assert_eq!(coerce_cell(kind, &CellValue::Null), CellValue::Null);
    }
}

#[test]
fn boolean_truthy_tokens_coerce_to_true() {
    for raw in [
        CellValue::from("YES"),
        CellValue::from("y"),
        CellValue::from("1"),
        CellValue::from(" True "),
        CellValue::Bool(true),
        CellValue::Number(2.0),
        CellValue::Number(-1.0),
    ] {
        assert_eq!(
            coerce_cell(ColumnKind::Boolean, &raw),
            CellValue::Bool(true),
            "raw: {raw:?}"
        );
    }
}

#[test]
fn boolean_falsy_tokens_coerce_to_false() {
    for raw in [
        CellValue::from("no"),
        CellValue::from("0"),
        CellValue::from("N"),
        CellValue::Bool(false),
        CellValue::Number(0.0),
    ] {
        assert_eq!(
            coerce_cell(ColumnKind::Boolean, &raw),
            CellValue::Bool(false),
            "raw: {raw:?}"
        );
    }
}

#[test]
fn boolean_unknown_tokens_coerce_to_null() {
    assert_eq!(
        coerce_cell(ColumnKind::Boolean, &CellValue::from("maybe")),
        CellValue::Null
    );
    let stamp = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    assert_eq!(
        coerce_cell(ColumnKind::Boolean, &CellValue::Date(stamp)),
        CellValue::Null
    );
}

#[test]
fn date_cells_pass_through_and_strings_parse() {
    let stamp = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    assert_eq!(
        coerce_cell(ColumnKind::Date, &CellValue::Date(stamp)),
        CellValue::Date(stamp)
    );
    assert_eq!(
        coerce_cell(ColumnKind::Date, &CellValue::from("2024-03-05")),
        CellValue::Date(stamp)
    );
}

#[test]
fn unparseable_date_strings_are_retained() {
    assert_eq!(
        coerce_cell(ColumnKind::Date, &CellValue::from("not a date")),
        CellValue::from("not a date")
    );
}

#[test]
fn non_string_cells_pass_through_a_date_column_unchanged() {
    assert_eq!(
        coerce_cell(ColumnKind::Date, &CellValue::Number(7.0)),
        CellValue::Number(7.0)
    );
    assert_eq!(
        coerce_cell(ColumnKind::Date, &CellValue::Bool(true)),
        CellValue::Bool(true)
    );
}

#[test]
fn string_columns_stringify_other_kinds() {
    assert_eq!(
        coerce_cell(ColumnKind::String, &CellValue::Number(3.0)),
        CellValue::from("3")
    );
    assert_eq!(
        coerce_cell(ColumnKind::String, &CellValue::Number(3.14)),
        CellValue::from("3.14")
    );
    assert_eq!(
        coerce_cell(ColumnKind::String, &CellValue::Bool(true)),
        CellValue::from("true")
    );
}

#[test]
fn process_rows_pads_short_rows_with_null() {
    let columns = vec![
        ColumnType::new("a", ColumnKind::Numeric),
        ColumnType::new("b", ColumnKind::Numeric),
    ];
    let rows = vec![vec![CellValue::from("1.5")]];

    let processed = process_rows(&columns, &rows);
    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0]["a"], CellValue::Number(1.5));
    assert_eq!(processed[0]["b"], CellValue::Null);
}

#[test]
fn process_rows_preserves_column_order() {
    let columns = vec![
        ColumnType::new("z_last", ColumnKind::Numeric),
        ColumnType::new("a_first", ColumnKind::Numeric),
    ];
    let rows = vec![vec![CellValue::Number(1.0), CellValue::Number(2.0)]];

    let processed = process_rows(&columns, &rows);
    let keys: Vec<&str> = processed[0].keys().map(String::as_str).collect();
    assert_eq!(keys, ["z_last", "a_first"]);
}

#[test]
fn loose_coercion_prefers_numbers_over_dates() {
    // A bare year is numeric under the tagless path even though it would
    // stay text under a string-tagged column.
    assert_eq!(
        coerce_cell_loose(&CellValue::from("2024")),
        CellValue::Number(2024.0)
    );
    assert_eq!(
        coerce_cell(ColumnKind::String, &CellValue::from("2024")),
        CellValue::from("2024")
    );
}

#[test]
fn loose_coercion_falls_back_to_dates_then_text() {
    let stamp = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    assert_eq!(
        coerce_cell_loose(&CellValue::from("2024-03-05")),
        CellValue::Date(stamp)
    );
    assert_eq!(
        coerce_cell_loose(&CellValue::from("plain text")),
        CellValue::from("plain text")
    );
}

#[test]
fn loose_coercion_never_touches_booleans() {
    assert_eq!(
        coerce_cell_loose(&CellValue::Bool(true)),
        CellValue::Bool(true)
    );
    assert_eq!(
        coerce_cell_loose(&CellValue::Bool(false)),
        CellValue::Bool(false)
    );
}

#[test]
fn process_rows_loose_keys_by_header() {
    let headers = vec!["year".to_owned(), "value".to_owned()];
    let rows = vec![vec![CellValue::from("2024"), CellValue::from("12.5")]];

    let processed = process_rows_loose(&headers, &rows);
    assert_eq!(processed[0]["year"], CellValue::Number(2024.0));
    assert_eq!(processed[0]["value"], CellValue::Number(12.5));
}
